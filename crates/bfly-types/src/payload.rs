//! Creation and update payloads.
//!
//! Creation payloads are strict: every field is required, must have the
//! right JSON type, and no other field may appear. Anything else is a
//! [`ValidationError`].

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::ValidationError;
use crate::record::{Butterfly, Rating, User};

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 5.0;

fn strict<T: for<'de> Deserialize<'de>>(body: Value) -> Result<T, ValidationError> {
    serde_json::from_value(body).map_err(|e| ValidationError::Shape(e.to_string()))
}

fn in_range(value: f64) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&value)
}

/// Whole-valued floats (`3.0`) become integers so they persist as `3`.
fn canonical(rating: &Number) -> Number {
    match rating.as_f64() {
        Some(v) if rating.is_f64() && v.fract() == 0.0 && in_range(v) => Number::from(v as u64),
        _ => rating.clone(),
    }
}

/// Body of `POST /butterflies`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButterflyInput {
    pub common_name: String,
    pub species: String,
    pub article: String,
}

impl ButterflyInput {
    pub fn validate(body: Value) -> Result<Self, ValidationError> {
        strict(body)
    }

    pub fn into_record(self, id: String) -> Butterfly {
        Butterfly {
            id,
            common_name: self.common_name,
            species: self.species,
            article: self.article,
        }
    }
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserInput {
    pub username: String,
}

impl UserInput {
    pub fn validate(body: Value) -> Result<Self, ValidationError> {
        strict(body)
    }

    pub fn into_record(self, id: String) -> User {
        User { id, username: self.username }
    }
}

/// Body of `POST /ratings`.
///
/// `rating` must be a whole number in `[0, 5]`. A float with no fractional
/// part (`3.0`) is accepted as whole and stored as an integer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RatingInput {
    pub butterfly_id: String,
    pub user_id: String,
    pub rating: Number,
}

impl RatingInput {
    pub fn validate(body: Value) -> Result<Self, ValidationError> {
        let input: Self = strict(body)?;
        match input.rating.as_f64() {
            Some(v) if v.fract() == 0.0 && in_range(v) => Ok(Self {
                rating: canonical(&input.rating),
                ..input
            }),
            _ => Err(ValidationError::RatingNotWhole(input.rating.to_string())),
        }
    }

    pub fn into_record(self, id: String) -> Rating {
        Rating {
            id,
            user_id: self.user_id,
            butterfly_id: self.butterfly_id,
            rating: self.rating,
        }
    }
}

/// Body of `PUT /ratings/:id`.
///
/// Only `rating` is read; any other field in the body is ignored. Unlike
/// [`RatingInput`] a fractional value is allowed.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingUpdate {
    pub rating: Number,
}

impl RatingUpdate {
    pub fn validate(body: &Value) -> Result<Self, ValidationError> {
        match body.get("rating") {
            Some(Value::Number(n)) if n.as_f64().is_some_and(in_range) => {
                Ok(Self { rating: canonical(n) })
            }
            _ => Err(ValidationError::RatingOutOfRange),
        }
    }
}
