//! Questions, choices, and the vote workflow.

mod error;
pub mod store;
mod vote;

pub use error::PollError;
pub use store::{DbStore, PollStore};
pub use vote::{parse_choice_id, record_vote, VoteOutcome, NO_CHOICE_MESSAGE};
