use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

/// Invariant violations detected before a promotion is first persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromotionError {
    #[error("not require_code but promotion_code present")]
    CodeWithoutRequirement,
    #[error("start_date > end_date")]
    StartAfterEnd,
    #[error("name cannot be empty")]
    EmptyName,
    #[error("products_type cannot be empty")]
    EmptyProductsType,
}

/// Domain representation of a stored promotion.
///
/// Serializes to the public JSON shape of the API. Bookkeeping timestamps
/// stay internal.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Promotion {
    /// Identifier assigned by storage.
    pub id: i32,
    /// Human-readable name of the promotion.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Product category the promotion applies to (`all_types` for every category).
    pub products_type: String,
    /// Code a customer must present when `require_code` is set.
    pub promotion_code: Option<String>,
    /// Whether redeeming the promotion requires `promotion_code`.
    pub require_code: bool,
    /// First day the promotion is valid (inclusive).
    pub start_date: NaiveDate,
    /// Last day the promotion is valid (inclusive).
    pub end_date: NaiveDate,
    /// Activation flag, toggled only by activate/deactivate.
    pub is_active: bool,
    #[serde(skip)]
    pub created_at: NaiveDateTime,
    #[serde(skip)]
    pub updated_at: NaiveDateTime,
}

impl Promotion {
    /// Whether `date` falls inside the closed validity window.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Payload required to insert a new promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPromotion {
    pub name: String,
    pub description: Option<String>,
    pub products_type: String,
    pub promotion_code: Option<String>,
    pub require_code: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl NewPromotion {
    /// Build an inactive promotion without description or code.
    pub fn new(
        name: impl Into<String>,
        products_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            products_type: products_type.into(),
            promotion_code: None,
            require_code: false,
            start_date,
            end_date,
            is_active: false,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Require `code` to redeem the promotion.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.promotion_code = Some(code.into());
        self.require_code = true;
        self
    }

    /// Set the initial activation state.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Check the invariants a promotion must satisfy before it is created.
    ///
    /// Updates never run this check, so records loaded from older data can be
    /// rewritten without being rejected retroactively.
    pub fn validate_for_create(&self) -> Result<(), PromotionError> {
        if !self.require_code && has_code(self.promotion_code.as_deref()) {
            return Err(PromotionError::CodeWithoutRequirement);
        }
        if self.start_date > self.end_date {
            return Err(PromotionError::StartAfterEnd);
        }
        if self.name.trim().is_empty() {
            return Err(PromotionError::EmptyName);
        }
        if self.products_type.trim().is_empty() {
            return Err(PromotionError::EmptyProductsType);
        }
        Ok(())
    }
}

fn has_code(code: Option<&str>) -> bool {
    code.is_some_and(|value| !value.is_empty())
}

/// Full-field overwrite applied by a generic update. Identity and
/// `is_active` are not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePromotion {
    pub name: String,
    pub description: Option<String>,
    pub products_type: String,
    pub promotion_code: Option<String>,
    pub require_code: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

/// Filters applied when listing promotions. Filters that are set are
/// combined with AND; an empty query returns every promotion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionListQuery {
    /// Exact match on `name`.
    pub name: Option<String>,
    /// Exact match on `products_type`.
    pub products_type: Option<String>,
    /// Keep promotions whose validity window contains this date.
    pub active_on: Option<NaiveDate>,
}

impl PromotionListQuery {
    /// Construct a query matching every promotion.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn products_type(mut self, products_type: impl Into<String>) -> Self {
        self.products_type = Some(products_type.into());
        self
    }

    pub fn active_on(mut self, date: NaiveDate) -> Self {
        self.active_on = Some(date);
        self
    }
}
