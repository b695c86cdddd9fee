use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::domain::promotion::{Promotion, PromotionListQuery};
use crate::forms::promotions::PromotionForm;
use crate::repository::{PromotionReader, PromotionWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the promotions collection.
#[derive(Debug, Default, Deserialize)]
pub struct PromotionsQuery {
    /// Exact match on the promotion name. Takes precedence over the other filters.
    pub name: Option<String>,
    /// Exact match on the product category.
    pub products_type: Option<String>,
    /// `YYYY-MM-DD` day that must fall inside the validity window.
    pub date: Option<String>,
}

/// Creates a promotion from a raw JSON request body.
pub fn create_promotion<R>(repo: &R, body: &[u8]) -> ServiceResult<Promotion>
where
    R: PromotionWriter + ?Sized,
{
    let new_promotion = PromotionForm::from_slice(body)
        .and_then(PromotionForm::into_new_promotion)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    log::info!("Creating promotion {}", new_promotion.name);

    new_promotion
        .validate_for_create()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let promotion = repo
        .create_promotion(&new_promotion)
        .map_err(ServiceError::from)?;

    log::info!("Promotion with ID [{}] created", promotion.id);
    Ok(promotion)
}

/// Fetches a single promotion.
pub fn get_promotion<R>(repo: &R, promotion_id: i32) -> ServiceResult<Promotion>
where
    R: PromotionReader + ?Sized,
{
    log::info!("Processing lookup for id {promotion_id}");

    repo.get_promotion_by_id(promotion_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Overwrites every field of an existing promotion except its id and activation flag.
///
/// The lookup happens before the body is parsed, so an unknown id wins over a
/// malformed body. The create-time invariants are not re-checked.
pub fn update_promotion<R>(repo: &R, promotion_id: i32, body: &[u8]) -> ServiceResult<Promotion>
where
    R: PromotionReader + PromotionWriter + ?Sized,
{
    let existing = get_promotion(repo, promotion_id)?;

    let update = PromotionForm::from_slice(body)
        .map_err(|err| ServiceError::Form(err.to_string()))?
        .into_update_promotion(Utc::now().naive_utc());

    log::info!("Saving promotion {} (id {})", update.name, existing.id);

    repo.update_promotion(existing.id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a promotion. Deleting an unknown id succeeds.
pub fn remove_promotion<R>(repo: &R, promotion_id: i32) -> ServiceResult<()>
where
    R: PromotionWriter + ?Sized,
{
    let deleted = repo
        .delete_promotion(promotion_id)
        .map_err(ServiceError::from)?;

    if deleted {
        log::info!("Promotion with ID [{promotion_id}] deleted");
    } else {
        log::info!("Promotion with ID [{promotion_id}] was already absent");
    }

    Ok(())
}

/// Lists promotions, applying at most one filter: `name`, then
/// `products_type`, then `date`.
pub fn list_promotions<R>(repo: &R, query: PromotionsQuery) -> ServiceResult<Vec<Promotion>>
where
    R: PromotionReader + ?Sized,
{
    let PromotionsQuery {
        name,
        products_type,
        date,
    } = query;
    let name = name.filter(|value| !value.is_empty());
    let products_type = products_type.filter(|value| !value.is_empty());
    let date = date.filter(|value| !value.is_empty());

    let list_query = if let Some(name) = name {
        log::info!("Processing name query for {name}");
        PromotionListQuery::new().name(name)
    } else if let Some(products_type) = products_type {
        log::info!("Processing products_type query for {products_type}");
        PromotionListQuery::new().products_type(products_type)
    } else if let Some(raw) = date {
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| ServiceError::Form(format!("Invalid date for [date]: {raw}")))?;
        log::info!("Processing date query for {date}");
        PromotionListQuery::new().active_on(date)
    } else {
        log::info!("Processing all promotions");
        PromotionListQuery::new()
    };

    let promotions = repo
        .list_promotions(list_query)
        .map_err(ServiceError::from)?;

    log::info!("Returning {} promotions", promotions.len());
    Ok(promotions)
}

/// Marks a promotion as active.
pub fn activate_promotion<R>(repo: &R, promotion_id: i32) -> ServiceResult<Promotion>
where
    R: PromotionWriter + ?Sized,
{
    set_active(repo, promotion_id, true)
}

/// Marks a promotion as inactive.
pub fn deactivate_promotion<R>(repo: &R, promotion_id: i32) -> ServiceResult<Promotion>
where
    R: PromotionWriter + ?Sized,
{
    set_active(repo, promotion_id, false)
}

fn set_active<R>(repo: &R, promotion_id: i32, is_active: bool) -> ServiceResult<Promotion>
where
    R: PromotionWriter + ?Sized,
{
    log::info!("Setting is_active={is_active} for promotion {promotion_id}");

    repo.set_promotion_active(promotion_id, is_active)
        .map_err(ServiceError::from)
}
