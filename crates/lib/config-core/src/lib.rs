//! Shared configuration types for mailcount.

use std::path::PathBuf;

/// Default path of the new-mail flag file.
pub const DEFAULT_FLAG_FILE: &str = "/tmp/new_mail";

/// Default seconds between daemon poll passes.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// The IMAP server to poll.
    pub server: ServerConfig,

    /// Authentication settings.
    pub credentials: Credentials,

    /// Mailboxes to poll, in report order.
    pub mailboxes: Vec<String>,

    /// Daemon mode settings.
    #[serde(default)]
    pub daemon: DaemonConfig,
}

/// The polled IMAP server.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Hostname or IP address of the IMAP server.
    pub host: String,

    /// Optional port override.
    pub port: Option<u16>,

    /// TLS settings.
    #[serde(default)]
    pub tls: TlsConfig,
}

/// TLS configuration for the server.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TlsConfig {
    /// TLS mode.
    #[serde(default)]
    pub mode: TlsMode,

    /// Optional override for the TLS server name (SNI).
    pub server_name: Option<String>,
}

/// Supported TLS modes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsMode {
    /// Implicit TLS (usually port 993).
    #[default]
    Implicit,

    /// STARTTLS upgrade (usually port 143).
    #[serde(rename = "starttls", alias = "start_tls")]
    StartTls,
}

/// Login credentials for IMAP authentication.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Credentials {
    /// Username for IMAP authentication.
    pub username: String,

    /// Password for IMAP authentication.
    pub password: String,
}

/// Daemon mode settings.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct DaemonConfig {
    /// Path of the new-mail flag file.
    pub flag_file: PathBuf,

    /// Seconds to wait between poll passes.
    pub poll_interval_secs: u64,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            flag_file: PathBuf::from(DEFAULT_FLAG_FILE),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}
