//! Tests for report rendering.

use mailbox_poll::MailboxStatus;
use mailbox_status::MailboxCounters;

fn status(name: &str, total: u32, recent: u32, unseen: u32) -> MailboxStatus {
    MailboxStatus {
        name: name.to_string(),
        counters: MailboxCounters {
            total,
            recent,
            unseen,
        },
    }
}

#[test]
fn test_single_mailbox_block() {
    let report = status_report::render(&[status("INBOX", 10, 2, 3)]);

    assert_eq!(
        report,
        "INBOX - messages: 10\nINBOX - recent: 2\nINBOX - unseen: 3\n\n"
    );
}

#[test]
fn test_two_mailboxes_in_input_order() {
    let report = status_report::render(&[
        status("INBOX", 10, 2, 3),
        status("Sent", 5, 0, 0),
    ]);

    assert_eq!(
        report,
        "INBOX - messages: 10\n\
         INBOX - recent: 2\n\
         INBOX - unseen: 3\n\
         \n\
         Sent - messages: 5\n\
         Sent - recent: 0\n\
         Sent - unseen: 0\n\
         \n"
    );
}

#[test]
fn test_block_shape_per_mailbox() {
    let statuses = vec![
        status("a", 1, 1, 1),
        status("b", 2, 2, 2),
        status("c", 3, 3, 3),
    ];

    let report = status_report::render(&statuses);

    // N blocks of four lines each (3 data lines + 1 blank).
    let lines: Vec<&str> = report.split('\n').collect();
    assert_eq!(lines.len(), statuses.len() * 4 + 1);
    for (i, status) in statuses.iter().enumerate() {
        assert!(lines[i * 4].starts_with(&format!("{} - messages: ", status.name)));
        assert!(lines[i * 4 + 1].starts_with(&format!("{} - recent: ", status.name)));
        assert!(lines[i * 4 + 2].starts_with(&format!("{} - unseen: ", status.name)));
        assert_eq!(lines[i * 4 + 3], "");
    }
}

#[test]
fn test_empty_input_renders_nothing() {
    assert_eq!(status_report::render(&[]), "");
}
