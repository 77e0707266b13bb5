// ABOUTME: Request body validation for exercise create and update payloads
// ABOUTME: Enforces the exact key set, positive integers, weight units and real MM-DD-YY dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! # Exercise Payload Validation
//!
//! A body is valid only when it is a JSON object carrying exactly the keys
//! `name`, `reps`, `weight`, `unit` and `date`, checked in that order:
//!
//! 1. key set matches exactly (nothing missing, nothing extra)
//! 2. `name` is a string that is non-empty once trimmed
//! 3. `reps` is a positive integer (`20` and `20.0` both qualify)
//! 4. `weight` follows the same rule as `reps`
//! 5. `unit` is `kgs` or `lbs`, in any letter case
//! 6. `date` has the `MM-DD-YY` shape and names a real day in 2000-2099
//!
//! The first failing rule short-circuits. Validation never normalizes; the
//! caller trims and lowercases via [`CheckedBody::normalize`] before storage.

use chrono::{Datelike, NaiveDate};
use exercise_tracker_core::constants::fields;
use exercise_tracker_core::models::{ExerciseId, NewExercise, WeightUnit};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use thiserror::Error;

/// `MM-DD-YY`, ASCII digits only
static DATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})-([0-9]{2})-([0-9]{2})$").ok());

/// Outcome of [`validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    /// Whether the payload passed every rule
    pub valid: bool,
}

/// The first rule a payload broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// Payload is not a JSON object
    #[error("request body must be a JSON object")]
    NotAnObject,
    /// Keys are not exactly name, reps, weight, unit, date
    #[error("request body must contain exactly name, reps, weight, unit and date")]
    KeySet,
    /// Name missing, not a string, or blank
    #[error("name must be a non-empty string")]
    Name,
    /// Reps not a positive integer
    #[error("reps must be an integer greater than 0")]
    Reps,
    /// Weight not a positive integer
    #[error("weight must be an integer greater than 0")]
    Weight,
    /// Unit not kgs or lbs
    #[error("unit must be kgs or lbs")]
    Unit,
    /// Date not a string of shape MM-DD-YY
    #[error("date must be a string in MM-DD-YY format")]
    DateShape,
    /// Date has the right shape but is not a real calendar day
    #[error("date must be a real calendar date")]
    DateCalendar,
}

/// Borrowed view of a payload that passed every rule
///
/// Fields hold the values exactly as received; `name` is not yet trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedBody<'a> {
    /// Name as received
    pub name: &'a str,
    /// Positive repetition count
    pub reps: i64,
    /// Positive weight
    pub weight: i64,
    /// Unit, parsed case-insensitively
    pub unit: WeightUnit,
    /// Date as received (`MM-DD-YY`)
    pub date: &'a str,
}

impl CheckedBody<'_> {
    /// Produce the storage form: trimmed name, canonical lowercase unit
    #[must_use]
    pub fn normalize(&self) -> NewExercise {
        NewExercise {
            name: self.name.trim().to_owned(),
            reps: self.reps,
            weight: self.weight,
            unit: self.unit,
            date: self.date.to_owned(),
        }
    }
}

/// Decide whether a raw payload is a valid exercise body
///
/// Pure and total: any JSON value is accepted as input.
#[must_use]
pub fn validate(payload: &Value) -> Validation {
    Validation {
        valid: inspect(payload).is_ok(),
    }
}

/// Run every rule in order and return the checked fields or the first failure
///
/// # Errors
///
/// Returns the [`ValidationFailure`] for the first rule the payload breaks.
pub fn inspect(payload: &Value) -> Result<CheckedBody<'_>, ValidationFailure> {
    let body = payload.as_object().ok_or(ValidationFailure::NotAnObject)?;

    if !has_exact_keys(body) {
        return Err(ValidationFailure::KeySet);
    }

    let name = body
        .get(fields::NAME)
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .ok_or(ValidationFailure::Name)?;

    let reps = body
        .get(fields::REPS)
        .and_then(positive_integer)
        .ok_or(ValidationFailure::Reps)?;

    let weight = body
        .get(fields::WEIGHT)
        .and_then(positive_integer)
        .ok_or(ValidationFailure::Weight)?;

    let unit = body
        .get(fields::UNIT)
        .and_then(Value::as_str)
        .and_then(WeightUnit::parse)
        .ok_or(ValidationFailure::Unit)?;

    let date = body
        .get(fields::DATE)
        .and_then(Value::as_str)
        .ok_or(ValidationFailure::DateShape)?;
    check_date(date)?;

    Ok(CheckedBody {
        name,
        reps,
        weight,
        unit,
        date,
    })
}

/// Identifier shape gate: exactly 24 hex characters of either case
#[must_use]
pub fn is_valid_hex_id(id: &str) -> bool {
    ExerciseId::parse(id).is_some()
}

/// Return true if `date` is `MM-DD-YY` and names a real day of year `2000 + YY`
#[must_use]
pub fn is_date_valid(date: &str) -> bool {
    check_date(date).is_ok()
}

fn has_exact_keys(body: &Map<String, Value>) -> bool {
    // Object keys are unique, so equal size plus membership means equal sets
    body.len() == fields::REQUIRED.len()
        && body
            .keys()
            .all(|key| fields::REQUIRED.contains(&key.as_str()))
}

/// A JSON number with no fractional part, greater than zero, that fits in `i64`
#[allow(clippy::float_cmp)] // Exact integrality is the rule being checked
fn positive_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    if let Some(int) = number.as_i64() {
        return (int > 0).then_some(int);
    }
    if number.is_u64() {
        // Above i64::MAX
        return None;
    }

    let float = number.as_f64()?;
    let fits = float > 0.0 && float < i64::MAX as f64;
    (fits && float.fract() == 0.0).then_some(float as i64)
}

fn check_date(date: &str) -> Result<(), ValidationFailure> {
    let captures = DATE_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(date))
        .ok_or(ValidationFailure::DateShape)?;

    let component = |index: usize| {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u32>().ok())
    };
    let (Some(month), Some(day), Some(yy)) = (component(1), component(2), component(3)) else {
        return Err(ValidationFailure::DateShape);
    };

    if !(1..=12).contains(&month) || day < 1 {
        return Err(ValidationFailure::DateCalendar);
    }

    let year = fields::DATE_CENTURY
        + i32::try_from(yy).map_err(|_| ValidationFailure::DateShape)?;
    NaiveDate::from_ymd_opt(year, month, day)
        .filter(|built| built.year() == year && built.month() == month && built.day() == day)
        .map(|_| ())
        .ok_or(ValidationFailure::DateCalendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> Value {
        json!({
            "name": "Push Ups",
            "reps": 20,
            "weight": 1,
            "unit": "KGS",
            "date": "06-01-25"
        })
    }

    #[test]
    fn test_first_failing_rule_is_reported() {
        let mut payload = body();
        payload["reps"] = json!(0);
        payload["unit"] = json!("stone");
        assert_eq!(inspect(&payload), Err(ValidationFailure::Reps));
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let mut payload = body();
        payload["name"] = json!("  Push Ups  ");
        let normalized = inspect(&payload).unwrap().normalize();

        assert_eq!(normalized.name, "Push Ups");
        assert_eq!(normalized.unit.as_str(), "kgs");
        assert_eq!(normalized.date, "06-01-25");
    }

    #[test]
    fn test_positive_integer_edges() {
        assert_eq!(positive_integer(&json!(1)), Some(1));
        assert_eq!(positive_integer(&json!(20.0)), Some(20));
        assert_eq!(positive_integer(&json!(2.5)), None);
        assert_eq!(positive_integer(&json!(-3)), None);
        assert_eq!(positive_integer(&json!(u64::MAX)), None);
        assert_eq!(positive_integer(&json!("5")), None);
        assert_eq!(positive_integer(&json!(true)), None);
    }

    #[test]
    fn test_date_rejects_non_ascii_digits() {
        assert!(!is_date_valid("٠٦-٠١-٢٥"));
    }
}
