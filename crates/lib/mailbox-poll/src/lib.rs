//! A single poll pass over an ordered mailbox list.

use mailbox_status::{MailboxCounters, StatusSource};

/// One mailbox's result within a poll pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxStatus {
    /// The mailbox name, as configured.
    pub name: String,

    /// The counters reported for this pass.
    pub counters: MailboxCounters,
}

/// The outcome of one complete poll pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome {
    /// Whether any mailbox in this pass reported unseen mail.
    pub new_mail: bool,

    /// Per-mailbox results, in list order.
    pub statuses: Vec<MailboxStatus>,
}

/// Run one poll pass: query every mailbox in list order and OR-reduce
/// the unseen indicators into the new-mail flag.
///
/// Every mailbox is queried even after unseen mail is found, so the
/// results stay complete. A failing query aborts the pass.
pub async fn run<S>(source: &mut S, mailboxes: &[String]) -> Result<PollOutcome, S::Error>
where
    S: StatusSource,
{
    let mut new_mail = false;
    let mut statuses = Vec::with_capacity(mailboxes.len());

    for name in mailboxes {
        let counters = source.query(name).await?;
        new_mail |= counters.has_unseen();

        tracing::debug!(
            mailbox = %name,
            total = counters.total,
            recent = counters.recent,
            unseen = counters.unseen,
            "mailbox status"
        );

        statuses.push(MailboxStatus {
            name: name.clone(),
            counters,
        });
    }

    Ok(PollOutcome { new_mail, statuses })
}
