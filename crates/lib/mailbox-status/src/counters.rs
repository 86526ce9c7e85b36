//! Mailbox counter data.

/// Counters describing one mailbox at query time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MailboxCounters {
    /// Total messages in the mailbox.
    pub total: u32,

    /// Messages the server considers newly arrived.
    pub recent: u32,

    /// Messages not yet marked read.
    pub unseen: u32,
}

impl MailboxCounters {
    /// Whether this mailbox has unseen mail.
    pub fn has_unseen(&self) -> bool {
        self.unseen > 0
    }
}
