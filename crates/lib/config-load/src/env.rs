//! Environment-variable fallback configuration.

use config_core::{Config, Credentials, ServerConfig};

/// Environment variable naming the IMAP server host.
pub const SERVER_VAR: &str = "MAILCOUNT_SERVER";

/// Environment variable naming the IMAP username.
pub const USERNAME_VAR: &str = "MAILCOUNT_USER";

/// Environment variable naming the IMAP password.
pub const PASSWORD_VAR: &str = "MAILCOUNT_PASSWORD";

/// Errors returned while assembling configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// A required environment variable is not set.
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

/// Assemble a minimal configuration from environment variables.
///
/// Covers the no-config-file case: one server with default TLS and port,
/// INBOX as the only mailbox, default daemon settings.
pub fn from_env() -> Result<Config, EnvError> {
    from_env_with(|name| std::env::var(name).ok())
}

/// Same as [`from_env`], but with a custom variable lookup.
pub fn from_env_with<F>(lookup: F) -> Result<Config, EnvError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let var = |name| lookup(name).ok_or(EnvError::Missing(name));

    Ok(Config {
        server: ServerConfig {
            host: var(SERVER_VAR)?,
            port: None,
            tls: Default::default(),
        },
        credentials: Credentials {
            username: var(USERNAME_VAR)?,
            password: var(PASSWORD_VAR)?,
        },
        mailboxes: vec!["INBOX".to_string()],
        daemon: Default::default(),
    })
}
