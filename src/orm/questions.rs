//! SeaORM Entity for questions table

use chrono::Duration;
use sea_orm::entity::prelude::*;
use std::fmt;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(Some(200))")]
    pub question_text: String,
    pub pub_date: DateTime,
}

impl Model {
    /// True when `pub_date` is no older than one day before `now`.
    ///
    /// Questions dated in the future also count as recent.
    pub fn was_published_recently(&self, now: DateTime) -> bool {
        self.pub_date >= now - Duration::days(1)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question_text)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::choices::Entity")]
    Choices,
}

impl Related<super::choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
