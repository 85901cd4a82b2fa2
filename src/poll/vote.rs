use super::{PollError, PollStore};
use crate::orm::{choices, questions};

/// Shown on the detail page when a vote names no usable choice.
pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

/// How a single vote submission ended.
#[derive(Debug)]
pub enum VoteOutcome {
    /// One vote was added. The caller should redirect to the results page.
    Recorded { question_id: i32 },
    /// Nothing was changed. The caller should show the form again.
    Rejected {
        question: questions::Model,
        choices: Vec<choices::Model>,
        message: &'static str,
    },
}

/// Interpret the raw `choice` form field as a choice id.
pub fn parse_choice_id(submitted: Option<&str>) -> Option<i32> {
    submitted?.trim().parse().ok()
}

/// Validate a submitted choice against a question and count the vote.
///
/// Unknown questions fail with [`PollError::NotFound`]. A missing, malformed
/// or foreign choice id leaves every counter untouched and yields
/// [`VoteOutcome::Rejected`].
pub async fn record_vote(
    store: &dyn PollStore,
    question_id: i32,
    submitted: Option<&str>,
) -> Result<VoteOutcome, PollError> {
    let question = store.get_by_id(question_id).await?;

    if let Some(choice_id) = parse_choice_id(submitted) {
        if store.increment_votes(question.id, choice_id).await? {
            log::info!(
                "Recorded vote for choice {} on question {}",
                choice_id,
                question.id
            );
            return Ok(VoteOutcome::Recorded {
                question_id: question.id,
            });
        }
    }

    log::debug!(
        "Rejected vote on question {}: submitted choice {:?}",
        question.id,
        submitted
    );
    let choices = store.choices_for(question.id).await?;
    Ok(VoteOutcome::Rejected {
        question,
        choices,
        message: NO_CHOICE_MESSAGE,
    })
}
