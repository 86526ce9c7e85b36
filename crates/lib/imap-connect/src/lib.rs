//! Encrypted IMAP connection establishment.

/// The effective data stream type we use.
pub type Stream = tokio_rustls::client::TlsStream<tokio::net::TcpStream>;

/// The effective client type we use.
pub type Client = async_imap::Client<Stream>;

/// How to secure the IMAP connection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TlsMode {
    /// Implicit TLS (usually port 993).
    Implicit,

    /// Start with plaintext and upgrade using STARTTLS (usually port 143).
    StartTls,
}

/// IMAP connect params.
#[derive(Debug, Clone, PartialEq)]
pub struct Params<'a> {
    /// Hostname or IP address of the IMAP server.
    pub host: &'a str,

    /// IMAP port.
    pub port: u16,

    /// TLS mode.
    pub tls_mode: TlsMode,

    /// TLS server name (SNI).
    pub tls_server_name: &'a str,
}

/// Errors returned while connecting to an IMAP server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// TCP connection error.
    #[error("TCP connection error: {0}")]
    TcpConnect(#[source] std::io::Error),

    /// Failed to load system root certificates.
    #[error("failed to load system root certificates: {0}")]
    RootCerts(#[source] rustls_native_certs::Error),

    /// Invalid DNS name for TLS verification.
    #[error("invalid DNS name: {0}")]
    InvalidDnsName(String),

    /// TLS handshake or I/O error.
    #[error("TLS I/O error: {0}")]
    Tls(#[source] std::io::Error),

    /// I/O error while reading the IMAP server's response.
    #[error("IMAP I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// IMAP protocol error.
    #[error("IMAP error: {0}")]
    Imap(#[from] async_imap::error::Error),

    /// The server did not send the expected greeting.
    #[error("IMAP server sent no greeting")]
    MissingGreeting,
}

/// Connect to an IMAP server over an encrypted channel and produce
/// an IMAP client.
pub async fn connect(params: Params<'_>) -> Result<Client, Error> {
    let Params {
        host,
        port,
        tls_mode,
        tls_server_name,
    } = params;

    tracing::debug!(
        imap_host = %host,
        imap_port = port,
        imap_tls_mode = ?tls_mode,
        tls_server_name = %tls_server_name,
        "connecting to an IMAP server"
    );

    let tcp_stream = tokio::net::TcpStream::connect((host, port))
        .await
        .map_err(Error::TcpConnect)?;
    let tls_connector = connector()?;

    let client = match tls_mode {
        TlsMode::Implicit => {
            let stream = tls_handshake(&tls_connector, tls_server_name, tcp_stream).await?;
            let mut client = async_imap::Client::new(stream);
            client
                .read_response()
                .await
                .map_err(Error::Io)?
                .ok_or(Error::MissingGreeting)?;
            client
        }
        TlsMode::StartTls => {
            let mut client = async_imap::Client::new(tcp_stream);
            client
                .read_response()
                .await
                .map_err(Error::Io)?
                .ok_or(Error::MissingGreeting)?;
            client.run_command_and_check_ok("STARTTLS", None).await?;
            let tcp_stream = client.into_inner();
            let stream = tls_handshake(&tls_connector, tls_server_name, tcp_stream).await?;
            async_imap::Client::new(stream)
        }
    };

    Ok(client)
}

/// Build a rustls connector configured with system root certificates.
fn connector() -> Result<tokio_rustls::TlsConnector, Error> {
    let mut root_store = rustls::RootCertStore::empty();
    let rustls_native_certs::CertificateResult { certs, errors, .. } =
        rustls_native_certs::load_native_certs();
    if let Some(err) = errors.into_iter().next() {
        return Err(Error::RootCerts(err));
    }
    let _ = root_store.add_parsable_certificates(certs);
    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();
    Ok(tokio_rustls::TlsConnector::from(std::sync::Arc::new(
        config,
    )))
}

/// Establish a TLS session over an existing TCP stream.
async fn tls_handshake(
    connector: &tokio_rustls::TlsConnector,
    server_name: &str,
    stream: tokio::net::TcpStream,
) -> Result<Stream, Error> {
    let server_name = rustls::pki_types::ServerName::try_from(server_name.to_string())
        .map_err(|_| Error::InvalidDnsName(server_name.to_string()))?;
    let tls_stream = connector
        .connect(server_name, stream)
        .await
        .map_err(Error::Tls)?;
    Ok(tls_stream)
}
