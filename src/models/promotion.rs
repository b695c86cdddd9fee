use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::promotion::{
    NewPromotion as DomainNewPromotion, Promotion as DomainPromotion,
    UpdatePromotion as DomainUpdatePromotion,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::promotions)]
pub struct Promotion {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub products_type: String,
    pub promotion_code: Option<String>,
    pub require_code: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::promotions)]
pub struct NewPromotion<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub products_type: &'a str,
    pub promotion_code: Option<&'a str>,
    pub require_code: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::promotions)]
#[diesel(treat_none_as_null = true)]
pub struct UpdatePromotion<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub products_type: &'a str,
    pub promotion_code: Option<&'a str>,
    pub require_code: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::promotions)]
pub struct SetPromotionActive {
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Promotion> for DomainPromotion {
    fn from(value: Promotion) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            products_type: value.products_type,
            promotion_code: value.promotion_code,
            require_code: value.require_code,
            start_date: value.start_date,
            end_date: value.end_date,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPromotion> for NewPromotion<'a> {
    fn from(value: &'a DomainNewPromotion) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            products_type: value.products_type.as_str(),
            promotion_code: value.promotion_code.as_deref(),
            require_code: value.require_code,
            start_date: value.start_date,
            end_date: value.end_date,
            is_active: value.is_active,
        }
    }
}

impl<'a> From<&'a DomainUpdatePromotion> for UpdatePromotion<'a> {
    fn from(value: &'a DomainUpdatePromotion) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            products_type: value.products_type.as_str(),
            promotion_code: value.promotion_code.as_deref(),
            require_code: value.require_code,
            start_date: value.start_date,
            end_date: value.end_date,
            updated_at: value.updated_at,
        }
    }
}
