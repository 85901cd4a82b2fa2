use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlerResponse;
use askama_actix::{Template, TemplateToResponse};

#[derive(Template)]
#[template(path = "error/404.html")]
struct NotFoundTemplate;

/// Replace any 404 body with the generic "not found" page.
pub fn render_404<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, _) = res.into_parts();
    let mut response = NotFoundTemplate.to_response();
    *response.status_mut() = StatusCode::NOT_FOUND;

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}
