//! Daemon mode: poll forever and maintain the flag file.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Detach from the controlling terminal.
///
/// Forks, moves to `/`, and points stdio at `/dev/null`.
pub fn detach() -> Result<(), daemonize::Error> {
    daemonize::Daemonize::new().working_directory("/").start()
}

/// Poll on the configured interval, publishing the new-mail flag after
/// every pass.
///
/// The shutdown token is observed between passes only, so a pass and its
/// flag-file publish always complete as a unit. Any error is fatal.
pub async fn run(
    config: &config_core::Config,
    shutdown: CancellationToken,
) -> color_eyre::eyre::Result<()> {
    let mut session = crate::server::establish(config).await?;

    flag_file::ensure(&config.daemon.flag_file).await?;
    let interval = Duration::from_secs(config.daemon.poll_interval_secs);

    loop {
        let outcome = mailbox_poll::run(&mut session, &config.mailboxes).await?;
        flag_file::publish(&config.daemon.flag_file, outcome.new_mail).await?;

        tracing::debug!(new_mail = outcome.new_mail, "poll pass published");

        tokio::select! {
            () = shutdown.cancelled() => return Ok(()),
            () = tokio::time::sleep(interval) => {}
        }
    }
}
