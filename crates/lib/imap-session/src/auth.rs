//! Authentication.

/// An auth error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Login failed.
    #[error("login: {0}")]
    Login(#[source] async_imap::error::Error),
}

/// Auth params.
#[derive(Debug, Clone, PartialEq)]
pub struct Params<'a> {
    /// Username for IMAP authentication.
    ///
    /// Typically an email address.
    pub username: &'a str,

    /// Password for IMAP authentication.
    pub password: &'a str,
}

/// Authenticate the client to obtain a session.
pub(crate) async fn execute(
    client: imap_connect::Client,
    auth: Params<'_>,
) -> Result<crate::Session, Error> {
    let Params { username, password } = auth;

    client
        .login(username, password)
        .await
        .map_err(|(err, _client)| err)
        .map_err(Error::Login)
}
