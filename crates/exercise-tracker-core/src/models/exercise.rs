// ABOUTME: Exercise record model with storage identifier and weight unit types
// ABOUTME: Defines the normalized shape written to storage and returned to clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use crate::constants::fields;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use thiserror::Error;

/// Number of raw bytes behind an identifier
const ID_BYTES: usize = fields::ID_HEX_LEN / 2;

/// Counter values occupy the low three bytes of an identifier
const COUNTER_MASK: u32 = 0x00FF_FFFF;

/// Storage-assigned identifier: 12 bytes rendered as 24 lowercase hex characters
///
/// Layout of generated identifiers: 4-byte big-endian Unix seconds, 5 bytes
/// unique to this process, 3-byte counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseId(String);

/// Rejected identifier text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("exercise identifier must be exactly 24 hexadecimal characters")]
pub struct InvalidExerciseId;

impl ExerciseId {
    /// Parse an identifier, accepting hex digits of either case
    ///
    /// Returns `None` unless `raw` is exactly 24 ASCII hex digits. Uppercase
    /// digits name the same 12 bytes as lowercase ones, so the result is
    /// canonicalised to lowercase.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed =
            raw.len() == fields::ID_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit());
        well_formed.then(|| Self(raw.to_ascii_lowercase()))
    }

    /// Mint a fresh identifier
    #[must_use]
    pub fn generate() -> Self {
        static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
        static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

        let process = PROCESS_UNIQUE.get_or_init(rand::random::<[u8; 5]>);
        let count = COUNTER
            .get_or_init(|| AtomicU32::new(rand::random::<u32>()))
            .fetch_add(1, Ordering::Relaxed)
            & COUNTER_MASK;
        let seconds = Utc::now().timestamp() as u32;

        let mut bytes = [0_u8; ID_BYTES];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(process);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        Self(hex::encode(bytes))
    }

    /// Borrow the canonical hex form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ExerciseId {
    type Error = InvalidExerciseId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(InvalidExerciseId)
    }
}

impl From<ExerciseId> for String {
    fn from(id: ExerciseId) -> Self {
        id.0
    }
}

/// Unit the weight is recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    Kgs,
    /// Pounds
    Lbs,
}

impl WeightUnit {
    /// Convert to the stored lowercase representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kgs => "kgs",
            Self::Lbs => "lbs",
        }
    }

    /// Parse case-insensitively; anything but `kgs` / `lbs` is rejected
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kgs" => Some(Self::Kgs),
            "lbs" => Some(Self::Lbs),
            _ => None,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, normalized exercise ready to be written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExercise {
    /// Exercise name, trimmed and non-empty
    pub name: String,
    /// Repetitions, always positive
    pub reps: i64,
    /// Weight, always positive
    pub weight: i64,
    /// Weight unit
    pub unit: WeightUnit,
    /// Calendar date as `MM-DD-YY`
    pub date: String,
}

/// A stored exercise log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Storage-assigned identifier
    #[serde(rename = "_id")]
    pub id: ExerciseId,
    /// Exercise name
    pub name: String,
    /// Repetitions
    pub reps: i64,
    /// Weight
    pub weight: i64,
    /// Weight unit
    pub unit: WeightUnit,
    /// Calendar date as `MM-DD-YY`
    pub date: String,
}

impl Exercise {
    /// Attach an identifier to a normalized record
    #[must_use]
    pub fn from_new(id: ExerciseId, exercise: NewExercise) -> Self {
        Self {
            id,
            name: exercise.name,
            reps: exercise.reps,
            weight: exercise.weight,
            unit: exercise.unit,
            date: exercise.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonicalises_case() {
        let id = ExerciseId::parse("65A1B2C3D4E5F60718293A4B").unwrap();
        assert_eq!(id.as_str(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(ExerciseId::parse("xyz").is_none());
        assert!(ExerciseId::parse("65a1b2c3d4e5f60718293a4").is_none());
        assert!(ExerciseId::parse("65a1b2c3d4e5f60718293a4bc").is_none());
        assert!(ExerciseId::parse("65a1b2c3d4e5f60718293a4g").is_none());
        assert!(ExerciseId::parse("").is_none());
    }

    #[test]
    fn test_generated_ids_are_distinct_and_well_formed() {
        let first = ExerciseId::generate();
        let second = ExerciseId::generate();

        assert_ne!(first, second);
        assert_eq!(ExerciseId::parse(first.as_str()), Some(first.clone()));
        assert_eq!(first.as_str().len(), fields::ID_HEX_LEN);
    }

    #[test]
    fn test_weight_unit_parse() {
        assert_eq!(WeightUnit::parse("KGS"), Some(WeightUnit::Kgs));
        assert_eq!(WeightUnit::parse("Lbs"), Some(WeightUnit::Lbs));
        assert_eq!(WeightUnit::parse("KG"), None);
        assert_eq!(WeightUnit::parse("pounds"), None);
    }

    #[test]
    fn test_exercise_serializes_with_underscore_id() {
        let exercise = Exercise::from_new(
            ExerciseId::parse("65a1b2c3d4e5f60718293a4b").unwrap(),
            NewExercise {
                name: "Squat".to_owned(),
                reps: 5,
                weight: 100,
                unit: WeightUnit::Kgs,
                date: "06-01-25".to_owned(),
            },
        );

        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["_id"], "65a1b2c3d4e5f60718293a4b");
        assert_eq!(json["unit"], "kgs");
    }
}
