//! Mailbox STATUS queries.

mod counters;
mod source;

pub use counters::*;
pub use source::*;
