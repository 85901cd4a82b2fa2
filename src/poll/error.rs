use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::{Display, From};
use sea_orm::DbErr;

/// Failures that end a poll request.
///
/// A rejected vote is not an error; see [`super::VoteOutcome::Rejected`].
#[derive(Debug, Display, From)]
pub enum PollError {
    /// No question carries the requested id.
    #[display(fmt = "Question {} does not exist.", _0)]
    #[from(ignore)]
    NotFound(i32),
    /// The store failed; never retried here.
    #[display(fmt = "Database error: {}", _0)]
    Database(DbErr),
}

impl std::error::Error for PollError {}

impl ResponseError for PollError {
    fn status_code(&self) -> StatusCode {
        match self {
            PollError::NotFound(_) => StatusCode::NOT_FOUND,
            PollError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            PollError::NotFound(_) => HttpResponse::NotFound().body(self.to_string()),
            PollError::Database(err) => {
                log::error!("Poll store failure: {}", err);
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}
