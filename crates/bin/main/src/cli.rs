//! Command line interface.

use std::path::PathBuf;

/// Poll IMAP mailboxes for unread mail.
#[derive(Debug, clap::Parser)]
#[command(name = "mailcount", version)]
pub struct Args {
    /// Run as a daemon, maintaining the new-mail flag file.
    #[arg(short = 'd', long)]
    pub daemon: bool,

    /// Path to the configuration file.
    #[arg(short = 'c', long, env = "MAILCOUNT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Surplus arguments, tolerated with a warning.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,
}

impl Args {
    /// Warn about surplus arguments without refusing to run.
    pub fn warn_on_extra_args(&self) {
        if !self.extra.is_empty() {
            println!("too many arguments; usage: mailcount [-d] [-c PATH]");
        }
    }
}
