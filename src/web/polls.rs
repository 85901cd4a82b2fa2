//! Poll pages: listing, detail form, results, and voting.

use crate::app_config::AppConfig;
use crate::orm::{choices, questions};
use crate::poll::{record_vote, PollStore, VoteOutcome};
use actix_web::{get, post, web, Error, HttpResponse, Responder};
use askama_actix::{Template, TemplateToResponse};
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_root)
        .service(view_index)
        .service(view_detail)
        .service(view_results)
        .service(vote);
}

type Store = web::Data<Arc<dyn PollStore>>;

pub fn results_url(question_id: i32) -> String {
    format!("/polls/{}/results/", question_id)
}

#[derive(Template)]
#[template(path = "polls/index.html")]
pub struct IndexTemplate<'a> {
    pub site_name: &'a str,
    pub latest_question_list: &'a [questions::Model],
    pub now: NaiveDateTime,
}

#[derive(Template)]
#[template(path = "polls/detail.html")]
pub struct DetailTemplate<'a> {
    pub site_name: &'a str,
    pub question: &'a questions::Model,
    pub choices: &'a [choices::Model],
    pub error_message: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "polls/results.html")]
pub struct ResultsTemplate<'a> {
    pub site_name: &'a str,
    pub question: &'a questions::Model,
    pub choices: &'a [choices::Model],
}

#[derive(Deserialize)]
pub struct VoteFormData {
    pub choice: Option<String>,
}

#[get("/")]
pub async fn view_root() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/polls/"))
        .finish()
}

#[get("/polls/")]
pub async fn view_index(
    store: Store,
    config: web::Data<AppConfig>,
) -> Result<impl Responder, Error> {
    let questions = store.list_recent(config.polls.latest_limit).await?;

    Ok(IndexTemplate {
        site_name: &config.site.name,
        latest_question_list: &questions,
        now: Utc::now().naive_utc(),
    }
    .to_response())
}

#[get("/polls/{question_id}/")]
pub async fn view_detail(
    store: Store,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
) -> Result<impl Responder, Error> {
    let question = store.get_by_id(path.into_inner()).await?;
    let choices = store.choices_for(question.id).await?;

    Ok(DetailTemplate {
        site_name: &config.site.name,
        question: &question,
        choices: &choices,
        error_message: None,
    }
    .to_response())
}

#[get("/polls/{question_id}/results/")]
pub async fn view_results(
    store: Store,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
) -> Result<impl Responder, Error> {
    let question = store.get_by_id(path.into_inner()).await?;
    let choices = store.choices_for(question.id).await?;

    Ok(ResultsTemplate {
        site_name: &config.site.name,
        question: &question,
        choices: &choices,
    }
    .to_response())
}

/// An undecodable body counts as no choice at all.
#[post("/polls/{question_id}/vote/")]
pub async fn vote(
    store: Store,
    config: web::Data<AppConfig>,
    path: web::Path<i32>,
    form: Option<web::Form<VoteFormData>>,
) -> Result<HttpResponse, Error> {
    let submitted = form.as_ref().and_then(|form| form.choice.as_deref());

    match record_vote(store.get_ref().as_ref(), path.into_inner(), submitted).await? {
        // Redirect so a reload cannot submit the vote twice
        VoteOutcome::Recorded { question_id } => Ok(HttpResponse::Found()
            .append_header(("Location", results_url(question_id)))
            .finish()),
        VoteOutcome::Rejected {
            question,
            choices,
            message,
        } => Ok(DetailTemplate {
            site_name: &config.site.name,
            question: &question,
            choices: &choices,
            error_message: Some(message),
        }
        .to_response()),
    }
}
