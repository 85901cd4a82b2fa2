//! Test fixtures for creating test data
#![allow(dead_code)]

use chrono::{Duration, NaiveDateTime, Utc};
use polls::orm::{choices, questions};
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};

/// Create a question published `offset` relative to now (negative is past).
pub async fn create_question(
    db: &DatabaseConnection,
    question_text: &str,
    offset: Duration,
) -> Result<questions::Model, DbErr> {
    create_question_at(db, question_text, Utc::now().naive_utc() + offset).await
}

pub async fn create_question_at(
    db: &DatabaseConnection,
    question_text: &str,
    pub_date: NaiveDateTime,
) -> Result<questions::Model, DbErr> {
    questions::ActiveModel {
        question_text: Set(question_text.to_string()),
        pub_date: Set(pub_date),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Create a choice with zero votes.
pub async fn create_choice(
    db: &DatabaseConnection,
    question_id: i32,
    choice_text: &str,
) -> Result<choices::Model, DbErr> {
    choices::ActiveModel {
        question_id: Set(question_id),
        choice_text: Set(choice_text.to_string()),
        votes: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Current vote count of a choice.
pub async fn votes_of(db: &DatabaseConnection, choice_id: i32) -> Result<i32, DbErr> {
    let choice = choices::Entity::find_by_id(choice_id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::Custom(format!("Choice {} not found", choice_id)))?;
    Ok(choice.votes)
}
