//! One-shot mode: poll once and print the report.

/// Run one poll pass, print the new-mail flag and the per-mailbox
/// report, then log out.
pub async fn run(config: &config_core::Config) -> color_eyre::eyre::Result<()> {
    let mut session = crate::server::establish(config).await?;

    let outcome = mailbox_poll::run(&mut session, &config.mailboxes).await?;

    println!("new mail: {}\n", u8::from(outcome.new_mail));
    print!("{}", status_report::render(&outcome.statuses));

    session.logout().await?;

    Ok(())
}
