use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};

use crate::repository::DieselRepository;
use crate::routes::{check_content_type, error_response};
use crate::services::ServiceError;
use crate::services::promotions::{self as promotion_service, PromotionsQuery};

fn not_found(promotion_id: i32) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        format!("Promotion with id '{promotion_id}' was not found."),
    )
}

fn internal_error() -> HttpResponse {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred while processing the request.",
    )
}

/// Absolute URL of a promotion under the prefix the request came in on.
fn resource_location(req: &HttpRequest, promotion_id: i32) -> String {
    let info = req.connection_info();
    format!(
        "{}://{}{}/{}",
        info.scheme(),
        info.host(),
        req.path().trim_end_matches('/'),
        promotion_id
    )
}

#[get("/promotions")]
/// Return promotions, optionally filtered by `name`, `products_type` or `date`.
pub async fn list_promotions(
    params: web::Query<PromotionsQuery>,
    repo: web::Data<DieselRepository>,
) -> HttpResponse {
    match promotion_service::list_promotions(repo.get_ref(), params.into_inner()) {
        Ok(promotions) => HttpResponse::Ok().json(promotions),
        Err(ServiceError::Form(message)) => error_response(StatusCode::BAD_REQUEST, message),
        Err(err) => {
            log::error!("Failed to list promotions: {err}");
            internal_error()
        }
    }
}

#[post("/promotions")]
/// Create a promotion from a JSON body and point `Location` at it.
pub async fn create_promotion(
    req: HttpRequest,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> HttpResponse {
    if let Err(response) = check_content_type(&req) {
        return response;
    }
    match promotion_service::create_promotion(repo.get_ref(), &body) {
        Ok(promotion) => HttpResponse::Created()
            .insert_header((header::LOCATION, resource_location(&req, promotion.id)))
            .json(promotion),
        Err(ServiceError::Form(message)) => error_response(StatusCode::BAD_REQUEST, message),
        Err(err) => {
            log::error!("Failed to create promotion: {err}");
            internal_error()
        }
    }
}

#[get("/promotions/{promotion_id}")]
pub async fn read_promotion(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> HttpResponse {
    let promotion_id = path.into_inner();

    match promotion_service::get_promotion(repo.get_ref(), promotion_id) {
        Ok(promotion) => HttpResponse::Ok().json(promotion),
        Err(ServiceError::NotFound) => not_found(promotion_id),
        Err(err) => {
            log::error!("Failed to read promotion {promotion_id}: {err}");
            internal_error()
        }
    }
}

#[put("/promotions/{promotion_id}")]
pub async fn update_promotion(
    req: HttpRequest,
    path: web::Path<i32>,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
) -> HttpResponse {
    let promotion_id = path.into_inner();

    if let Err(response) = check_content_type(&req) {
        return response;
    }
    match promotion_service::update_promotion(repo.get_ref(), promotion_id, &body) {
        Ok(promotion) => HttpResponse::Ok().json(promotion),
        Err(ServiceError::NotFound) => not_found(promotion_id),
        Err(ServiceError::Form(message)) => error_response(StatusCode::BAD_REQUEST, message),
        Err(err) => {
            log::error!("Failed to update promotion {promotion_id}: {err}");
            internal_error()
        }
    }
}

#[delete("/promotions/{promotion_id}")]
/// Delete a promotion. Unknown ids also answer `204 No Content`.
pub async fn delete_promotion(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> HttpResponse {
    let promotion_id = path.into_inner();

    match promotion_service::remove_promotion(repo.get_ref(), promotion_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => {
            log::error!("Failed to delete promotion {promotion_id}: {err}");
            internal_error()
        }
    }
}

#[put("/promotions/{promotion_id}/activate")]
pub async fn activate_promotion(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> HttpResponse {
    let promotion_id = path.into_inner();

    match promotion_service::activate_promotion(repo.get_ref(), promotion_id) {
        Ok(promotion) => HttpResponse::Ok().json(promotion),
        Err(ServiceError::NotFound) => not_found(promotion_id),
        Err(err) => {
            log::error!("Failed to activate promotion {promotion_id}: {err}");
            internal_error()
        }
    }
}

#[put("/promotions/{promotion_id}/deactivate")]
pub async fn deactivate_promotion(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> HttpResponse {
    let promotion_id = path.into_inner();

    match promotion_service::deactivate_promotion(repo.get_ref(), promotion_id) {
        Ok(promotion) => HttpResponse::Ok().json(promotion),
        Err(ServiceError::NotFound) => not_found(promotion_id),
        Err(err) => {
            log::error!("Failed to deactivate promotion {promotion_id}: {err}");
            internal_error()
        }
    }
}
