//! Mailbox counter query.

/// The STATUS data items we request for every mailbox.
const STATUS_ITEMS: &str = "(MESSAGES RECENT UNSEEN)";

/// Errors returned while querying mailbox counters.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// IMAP protocol error.
    ///
    /// Also covers a server NO for a mailbox that does not exist.
    #[error("IMAP error: {0}")]
    Imap(#[from] async_imap::error::Error),
}

/// Something that can answer a STATUS query for a named mailbox.
pub trait StatusSource {
    /// An error the query may fail with.
    type Error;

    /// Query the current counters for the mailbox.
    fn query(
        &mut self,
        mailbox: &str,
    ) -> impl std::future::Future<Output = Result<crate::MailboxCounters, Self::Error>> + Send;
}

impl<S> StatusSource for async_imap::Session<S>
where
    S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + std::fmt::Debug,
{
    type Error = QueryError;

    /// Issue a STATUS query without selecting the mailbox.
    ///
    /// The response attributes are matched by kind, not position, and the
    /// returned value is fully consumed here; an absent UNSEEN attribute
    /// reads as zero.
    async fn query(&mut self, mailbox: &str) -> Result<crate::MailboxCounters, QueryError> {
        let status = self.status(mailbox, STATUS_ITEMS).await?;
        Ok(crate::MailboxCounters {
            total: status.exists,
            recent: status.recent,
            unseen: status.unseen.unwrap_or(0),
        })
    }
}
