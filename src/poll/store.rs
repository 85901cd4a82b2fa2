//! Storage interface for questions and choices.
//!
//! Handlers and the vote workflow only ever see `dyn PollStore`; the
//! connection handle lives inside the implementation.

use super::PollError;
use crate::orm::{choices, questions};
use async_trait::async_trait;
use sea_orm::{entity::*, query::*, sea_query::Expr, DatabaseConnection};

#[async_trait]
pub trait PollStore: Send + Sync {
    /// The `limit` most recently published questions, newest first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<questions::Model>, PollError>;

    /// Fetch one question, or [`PollError::NotFound`].
    async fn get_by_id(&self, id: i32) -> Result<questions::Model, PollError>;

    /// All choices owned by a question, in creation order.
    async fn choices_for(&self, question_id: i32) -> Result<Vec<choices::Model>, PollError>;

    /// Add one vote to `choice_id`, but only if it belongs to `question_id`.
    ///
    /// The increment is applied against the stored value in a single
    /// statement. Returns whether a choice was updated.
    async fn increment_votes(&self, question_id: i32, choice_id: i32) -> Result<bool, PollError>;
}

/// [`PollStore`] backed by a SeaORM connection.
#[derive(Clone, Debug)]
pub struct DbStore {
    db: DatabaseConnection,
}

impl DbStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PollStore for DbStore {
    async fn list_recent(&self, limit: u64) -> Result<Vec<questions::Model>, PollError> {
        let questions = questions::Entity::find()
            .order_by_desc(questions::Column::PubDate)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(questions)
    }

    async fn get_by_id(&self, id: i32) -> Result<questions::Model, PollError> {
        questions::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                log::debug!("Question {} not found", id);
                PollError::NotFound(id)
            })
    }

    async fn choices_for(&self, question_id: i32) -> Result<Vec<choices::Model>, PollError> {
        let choices = choices::Entity::find()
            .filter(choices::Column::QuestionId.eq(question_id))
            .order_by_asc(choices::Column::Id)
            .all(&self.db)
            .await?;
        Ok(choices)
    }

    async fn increment_votes(&self, question_id: i32, choice_id: i32) -> Result<bool, PollError> {
        let result = choices::Entity::update_many()
            .col_expr(
                choices::Column::Votes,
                Expr::col(choices::Column::Votes).add(1),
            )
            .filter(choices::Column::Id.eq(choice_id))
            .filter(choices::Column::QuestionId.eq(question_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }
}
