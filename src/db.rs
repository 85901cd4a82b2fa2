//! Store connection and schema bootstrap.

use crate::orm::{choices, questions};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

/// Open a connection pool to `url`.
pub async fn connect(url: &str, max_connections: u32) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    options.max_connections(max_connections);
    Database::connect(options).await
}

/// Create the `questions` and `choices` tables if they are missing.
///
/// Parent first: `choices.question_id` references `questions.id` with
/// `ON DELETE CASCADE`.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut questions = schema.create_table_from_entity(questions::Entity);
    questions.if_not_exists();
    db.execute(backend.build(&questions)).await?;

    let mut choices = schema.create_table_from_entity(choices::Entity);
    choices.if_not_exists();
    db.execute(backend.build(&choices)).await?;

    log::debug!("Poll schema ready on {:?}", backend);
    Ok(())
}
