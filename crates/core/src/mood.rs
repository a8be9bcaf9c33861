//! Mood categories.
//!
//! The set is closed: quotes are tagged with exactly one [`MoodType`], stored
//! in the database as its stable integer value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Emotional target audience of a quote.
///
/// Serializes as the variant name (`"LackOfFocus"`). Deserializes from either
/// the name (case-insensitive) or the integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoodInput")]
pub enum MoodType {
    Depression,
    Anxiety,
    LackOfFocus,
    Sadness,
    Stress,
    Loneliness,
    Anger,
    Fear,
    Overwhelmed,
    LowSelfEsteem,
    Guilt,
    Hopelessness,
}

impl MoodType {
    /// Every mood, in value order.
    pub const ALL: [MoodType; 12] = [
        MoodType::Depression,
        MoodType::Anxiety,
        MoodType::LackOfFocus,
        MoodType::Sadness,
        MoodType::Stress,
        MoodType::Loneliness,
        MoodType::Anger,
        MoodType::Fear,
        MoodType::Overwhelmed,
        MoodType::LowSelfEsteem,
        MoodType::Guilt,
        MoodType::Hopelessness,
    ];

    /// Stable integer value persisted in `quotes.mood_type`.
    pub fn value(self) -> i32 {
        match self {
            MoodType::Depression => 1,
            MoodType::Anxiety => 2,
            MoodType::LackOfFocus => 3,
            MoodType::Sadness => 4,
            MoodType::Stress => 5,
            MoodType::Loneliness => 6,
            MoodType::Anger => 7,
            MoodType::Fear => 8,
            MoodType::Overwhelmed => 9,
            MoodType::LowSelfEsteem => 10,
            MoodType::Guilt => 11,
            MoodType::Hopelessness => 12,
        }
    }

    /// Look up a mood by its persisted integer value.
    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == value)
    }

    /// Identifier-style name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            MoodType::Depression => "Depression",
            MoodType::Anxiety => "Anxiety",
            MoodType::LackOfFocus => "LackOfFocus",
            MoodType::Sadness => "Sadness",
            MoodType::Stress => "Stress",
            MoodType::Loneliness => "Loneliness",
            MoodType::Anger => "Anger",
            MoodType::Fear => "Fear",
            MoodType::Overwhelmed => "Overwhelmed",
            MoodType::LowSelfEsteem => "LowSelfEsteem",
            MoodType::Guilt => "Guilt",
            MoodType::Hopelessness => "Hopelessness",
        }
    }

    /// Human-readable label shown in the UI.
    pub fn display_name(self) -> &'static str {
        match self {
            MoodType::LackOfFocus => "Lack of Focus",
            MoodType::LowSelfEsteem => "Low Self-Esteem",
            other => other.name(),
        }
    }

    /// Catalog entries for every mood, in value order.
    pub fn catalog() -> Vec<MoodTypeInfo> {
        Self::ALL.into_iter().map(MoodTypeInfo::from).collect()
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoodType {
    type Err = CoreError;

    /// Accepts the integer value (`"5"`) or the name, case-insensitively
    /// (`"stress"`, `"LackOfFocus"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let found = match trimmed.parse::<i32>() {
            Ok(value) => Self::from_value(value),
            Err(_) => Self::ALL
                .into_iter()
                .find(|m| m.name().eq_ignore_ascii_case(trimmed)),
        };
        found.ok_or_else(|| CoreError::InvalidMood(s.to_string()))
    }
}

/// Wire representation accepted when deserializing a [`MoodType`].
#[derive(Deserialize)]
#[serde(untagged)]
enum MoodInput {
    Value(i32),
    Name(String),
}

impl TryFrom<MoodInput> for MoodType {
    type Error = CoreError;

    fn try_from(input: MoodInput) -> Result<Self, Self::Error> {
        match input {
            MoodInput::Value(value) => {
                Self::from_value(value).ok_or_else(|| CoreError::InvalidMood(value.to_string()))
            }
            MoodInput::Name(name) => name.parse(),
        }
    }
}

/// One entry of the `/mood-types` catalog.
#[derive(Debug, Clone, Serialize)]
pub struct MoodTypeInfo {
    pub name: &'static str,
    pub value: i32,
    pub display_name: &'static str,
}

impl From<MoodType> for MoodTypeInfo {
    fn from(mood: MoodType) -> Self {
        Self {
            name: mood.name(),
            value: mood.value(),
            display_name: mood.display_name(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
