//! IMAP session bringup from configuration.

/// Default IMAP port for the given TLS mode.
fn default_port(mode: imap_connect::TlsMode) -> u16 {
    match mode {
        imap_connect::TlsMode::Implicit => 993,
        imap_connect::TlsMode::StartTls => 143,
    }
}

/// Convert config TLS mode to connection TLS mode.
fn map_tls_mode(mode: config_core::TlsMode) -> imap_connect::TlsMode {
    match mode {
        config_core::TlsMode::Implicit => imap_connect::TlsMode::Implicit,
        config_core::TlsMode::StartTls => imap_connect::TlsMode::StartTls,
    }
}

/// Connect and authenticate based on configured server settings.
pub async fn establish(
    config: &config_core::Config,
) -> Result<imap_session::Session, imap_session::Error> {
    let tls_mode = map_tls_mode(config.server.tls.mode);
    let port = config
        .server
        .port
        .unwrap_or_else(|| default_port(tls_mode));
    let tls_server_name = config
        .server
        .tls
        .server_name
        .as_deref()
        .unwrap_or(&config.server.host);

    tracing::info!(
        imap_host = %config.server.host,
        imap_port = port,
        imap_tls_mode = ?tls_mode,
        "establishing IMAP session"
    );

    imap_session::establish(imap_session::Params {
        connect: imap_connect::Params {
            host: &config.server.host,
            port,
            tls_mode,
            tls_server_name,
        },
        auth: imap_session::auth::Params {
            username: &config.credentials.username,
            password: &config.credentials.password,
        },
    })
    .await
}
