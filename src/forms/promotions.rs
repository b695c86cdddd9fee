use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::promotion::{NewPromotion, UpdatePromotion};

/// Maximum length of every text column of a promotion.
const FIELD_MAX_LEN: usize = 63;
const FIELD_MAX_LEN_VALIDATOR: u64 = FIELD_MAX_LEN as u64;

/// Wire format of `start_date` / `end_date`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result type returned by the promotion form helpers.
pub type PromotionFormResult<T> = Result<T, PromotionFormError>;

/// Errors that can occur while decoding a promotion payload.
#[derive(Debug, Error)]
pub enum PromotionFormError {
    /// The payload is not a JSON object.
    #[error("body of request contained bad or no data")]
    BadData,
    /// A required key is absent.
    #[error("missing {key}")]
    Missing { key: &'static str },
    /// A boolean field carried a value of another JSON type.
    #[error("Invalid type for boolean [{key}]: {found}")]
    InvalidBoolean {
        key: &'static str,
        found: &'static str,
    },
    /// A text field carried a value of another JSON type.
    #[error("Invalid type for string [{key}]: {found}")]
    InvalidString {
        key: &'static str,
        found: &'static str,
    },
    /// A date field is not an ISO-8601 `YYYY-MM-DD` string.
    #[error("Invalid date for [{key}]: {value}")]
    InvalidDate { key: &'static str, value: String },
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Typed promotion payload decoded from a request body.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PromotionForm {
    #[validate(length(max = FIELD_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(length(max = FIELD_MAX_LEN_VALIDATOR))]
    pub description: Option<String>,
    #[validate(length(max = FIELD_MAX_LEN_VALIDATOR))]
    pub products_type: String,
    #[validate(length(max = FIELD_MAX_LEN_VALIDATOR))]
    pub promotion_code: Option<String>,
    pub require_code: bool,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Optional initial activation state; only honoured on create.
    pub is_active: Option<bool>,
}

impl PromotionForm {
    /// Parse a raw request body and decode it with [`PromotionForm::from_json`].
    pub fn from_slice(body: &[u8]) -> PromotionFormResult<Self> {
        let payload: Value = serde_json::from_slice(body).map_err(|err| {
            log::warn!("Rejected malformed JSON body: {err}");
            PromotionFormError::BadData
        })?;
        Self::from_json(&payload)
    }

    /// Decode an untyped JSON mapping into a typed payload.
    ///
    /// Only the shape and types of the fields are checked here. The
    /// create-time invariants are enforced separately by
    /// [`NewPromotion::validate_for_create`].
    pub fn from_json(payload: &Value) -> PromotionFormResult<Self> {
        let object = payload.as_object().ok_or(PromotionFormError::BadData)?;

        let name = required_string(object, "name")?;
        let description = optional_string(object, "description")?;
        let products_type = required_string(object, "products_type")?;
        let promotion_code = optional_string(object, "promotion_code")?;
        let require_code = boolean(require(object, "require_code")?, "require_code")?;
        let start_date = date(object, "start_date")?;
        let end_date = date(object, "end_date")?;
        let is_active = match object.get("is_active") {
            Some(value) => Some(boolean(value, "is_active")?),
            None => None,
        };

        Ok(Self {
            name,
            description,
            products_type,
            promotion_code,
            require_code,
            start_date,
            end_date,
            is_active,
        })
    }

    /// Validates the payload and converts it into a domain `NewPromotion`.
    pub fn into_new_promotion(self) -> PromotionFormResult<NewPromotion> {
        self.validate()?;

        Ok(NewPromotion {
            name: self.name,
            description: self.description,
            products_type: self.products_type,
            promotion_code: self.promotion_code,
            require_code: self.require_code,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active.unwrap_or(false),
        })
    }

    /// Converts the payload into a full-field overwrite. `is_active` is
    /// dropped: activation changes only through activate/deactivate.
    pub fn into_update_promotion(self, updated_at: NaiveDateTime) -> UpdatePromotion {
        UpdatePromotion {
            name: self.name,
            description: self.description,
            products_type: self.products_type,
            promotion_code: self.promotion_code,
            require_code: self.require_code,
            start_date: self.start_date,
            end_date: self.end_date,
            updated_at,
        }
    }
}

fn require<'a>(object: &'a Map<String, Value>, key: &'static str) -> PromotionFormResult<&'a Value> {
    object.get(key).ok_or(PromotionFormError::Missing { key })
}

fn required_string(object: &Map<String, Value>, key: &'static str) -> PromotionFormResult<String> {
    match require(object, key)? {
        Value::String(value) => Ok(value.clone()),
        other => Err(PromotionFormError::InvalidString {
            key,
            found: json_type(other),
        }),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    key: &'static str,
) -> PromotionFormResult<Option<String>> {
    match require(object, key)? {
        Value::Null => Ok(None),
        Value::String(value) => Ok(Some(value.clone())),
        other => Err(PromotionFormError::InvalidString {
            key,
            found: json_type(other),
        }),
    }
}

fn boolean(value: &Value, key: &'static str) -> PromotionFormResult<bool> {
    value.as_bool().ok_or(PromotionFormError::InvalidBoolean {
        key,
        found: json_type(value),
    })
}

fn date(object: &Map<String, Value>, key: &'static str) -> PromotionFormResult<NaiveDate> {
    let value = require(object, key)?;
    value
        .as_str()
        .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
        .ok_or_else(|| PromotionFormError::InvalidDate {
            key,
            value: value.to_string(),
        })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
