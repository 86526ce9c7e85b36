//! Docker-backed IMAP integration tests.

use std::error::Error;

use mailbox_status::StatusSource as _;

const IMAP_USER: &str = "test";
const IMAP_PASSWORD: &str = "secret";

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn status_poll_roundtrip() -> Result<(), Box<dyn Error + Send + Sync>> {
    imap_integration::require_integration_tests_enabled()?;

    let container = imap_integration::start_greenmail(IMAP_USER, IMAP_PASSWORD).await?;

    let host = container.get_host().await?;
    let host_port = container
        .get_host_port_ipv4(imap_integration::IMAP_PORT)
        .await?;

    let mut session = imap_integration::connect_with_retry(
        &host.to_string(),
        host_port,
        IMAP_USER,
        IMAP_PASSWORD,
    )
    .await?;

    let mailboxes = vec!["INBOX".to_string()];

    let before = mailbox_poll::run(&mut session, &mailboxes).await?;
    assert_eq!(before.statuses.len(), 1);
    assert_eq!(before.statuses[0].name, "INBOX");

    session
        .append(
            "INBOX",
            None,
            None,
            b"Subject: Integration Test\r\n\r\nHello from tests.\r\n",
        )
        .await?;
    session.noop().await?;

    let after = mailbox_poll::run(&mut session, &mailboxes).await?;
    let before_counters = before.statuses[0].counters;
    let after_counters = after.statuses[0].counters;

    assert_eq!(after_counters.total, before_counters.total + 1);
    assert!(after_counters.unseen >= 1);
    assert!(after.new_mail);

    let report = status_report::render(&after.statuses);
    assert!(report.starts_with(&format!("INBOX - messages: {}\n", after_counters.total)));

    // Unchanged server state reports identical counters.
    let repeat = session.query("INBOX").await?;
    assert_eq!(repeat, after_counters);

    session.logout().await?;

    Ok(())
}
