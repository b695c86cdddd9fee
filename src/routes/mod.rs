use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

pub mod main;
pub mod promotions;

/// Media type required for request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
}

/// Register every route of the service.
///
/// The promotion routes live under `/api` and are also mounted at the root
/// for clients of the older un-prefixed API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index)
        .service(main::health)
        .service(web::scope("/api").configure(promotion_routes))
        .configure(promotion_routes);
}

fn promotion_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(promotions::list_promotions)
        .service(promotions::create_promotion)
        .service(promotions::read_promotion)
        .service(promotions::update_promotion)
        .service(promotions::delete_promotion)
        .service(promotions::activate_promotion)
        .service(promotions::deactivate_promotion);
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        status: status.as_u16(),
        error: status.canonical_reason().unwrap_or_default().to_string(),
        message: message.into(),
    })
}

/// Reject requests whose body is not declared as `application/json`.
pub fn check_content_type(req: &HttpRequest) -> Result<(), HttpResponse> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    let Some(content_type) = content_type else {
        log::error!("No Content-Type specified");
        return Err(unsupported_media_type());
    };

    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if essence.eq_ignore_ascii_case(JSON_CONTENT_TYPE) {
        return Ok(());
    }

    log::error!("Invalid Content-Type: {content_type}");
    Err(unsupported_media_type())
}

fn unsupported_media_type() -> HttpResponse {
    error_response(
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        format!("Content-Type must be {JSON_CONTENT_TYPE}"),
    )
}
