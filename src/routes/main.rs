use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

pub const SERVICE_NAME: &str = "Promotion REST API Service";
pub const SERVICE_VERSION: &str = "1.0";

#[get("/")]
/// Service banner.
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "name": SERVICE_NAME,
        "version": SERVICE_VERSION,
    }))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "OK" }))
}
