//! Plain-text rendering of poll results.

use std::fmt::Write as _;

use mailbox_poll::MailboxStatus;

/// Render the per-mailbox report.
///
/// Each mailbox becomes a block of exactly three lines followed by one
/// blank line:
///
/// ```text
/// INBOX - messages: 10
/// INBOX - recent: 2
/// INBOX - unseen: 3
/// ```
///
/// Pure function of its input; printing is the caller's concern.
pub fn render(statuses: &[MailboxStatus]) -> String {
    let mut out = String::new();

    for status in statuses {
        let MailboxStatus { name, counters } = status;

        let _ = writeln!(out, "{name} - messages: {}", counters.total);
        let _ = writeln!(out, "{name} - recent: {}", counters.recent);
        let _ = writeln!(out, "{name} - unseen: {}", counters.unseen);
        out.push('\n');
    }

    out
}
