use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProfileError;

/// Default comfort level when the quiz skipped the slider.
pub const DEFAULT_COMFORT_LEVEL: i64 = 5;
/// Default enhancement commitment when the quiz skipped the slider.
pub const DEFAULT_ENHANCEMENT: i64 = 50;

/// Flat record of onboarding quiz answers.
///
/// Every field is optional. Accessors apply the documented defaults, and
/// free-form keys (challenge, frequency, turn-ons, fantasy settings) are
/// looked up against the insight tables at analysis time; unknown keys are
/// kept as-is and simply contribute nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    /// Comfort slider, 0–10
    pub comfort_level: Option<SliderValue>,
    /// Enhancement commitment slider, 0–100
    pub enhancement: Option<SliderValue>,
    /// Desired intensity
    pub desire: Option<Desire>,
    /// Current relationship stage
    pub relationship_status: Option<RelationshipStatus>,
    /// Challenge key, e.g. `communication`
    pub biggest_challenge: Option<String>,
    /// Frequency key, e.g. `weekly`
    pub intimacy_frequency: Option<String>,
    /// Turn-on keys in the order they were picked
    #[serde(deserialize_with = "null_as_empty")]
    pub turn_ons: Vec<String>,
    /// Fantasy-setting keys in the order they were picked
    #[serde(deserialize_with = "null_as_empty")]
    pub fantasy: Vec<String>,
}

impl AnswerRecord {
    /// Parse an answer record from the quiz's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Comfort level with the default applied. `None` when the slider
    /// value could not be read as a number.
    pub fn comfort_level(&self) -> Option<i64> {
        slider_or(self.comfort_level.as_ref(), DEFAULT_COMFORT_LEVEL)
    }

    /// Enhancement commitment with the default applied. `None` when the
    /// slider value could not be read as a number.
    pub fn enhancement(&self) -> Option<i64> {
        slider_or(self.enhancement.as_ref(), DEFAULT_ENHANCEMENT)
    }

    pub fn desire(&self) -> Desire {
        self.desire.clone().unwrap_or_default()
    }

    pub fn relationship_status(&self) -> RelationshipStatus {
        self.relationship_status.clone().unwrap_or_default()
    }

    pub fn has_turn_on(&self, key: &str) -> bool {
        self.turn_ons.iter().any(|t| t == key)
    }
}

fn slider_or(value: Option<&SliderValue>, default: i64) -> Option<i64> {
    match value {
        None => Some(default),
        Some(slider) => slider.as_i64(),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A slider answer as the quiz sent it.
///
/// Integers are kept as-is. Floats are rounded to the nearest integer and
/// numeric strings are parsed the same way. Anything else is kept verbatim
/// as [`SliderValue::Unreadable`] and matches no bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SliderValue {
    Number(i64),
    Unreadable(String),
}

impl SliderValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SliderValue::Number(n) => Some(*n),
            SliderValue::Unreadable(_) => None,
        }
    }

    fn from_float(f: f64) -> Self {
        if f.is_finite() {
            // `as` saturates at the i64 bounds
            SliderValue::Number(f.round() as i64)
        } else {
            SliderValue::Unreadable(f.to_string())
        }
    }

    fn from_text(raw: String) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            SliderValue::Number(n)
        } else {
            match trimmed.parse::<f64>() {
                Ok(f) if f.is_finite() => SliderValue::from_float(f),
                _ => SliderValue::Unreadable(raw),
            }
        }
    }
}

impl From<i64> for SliderValue {
    fn from(n: i64) -> Self {
        SliderValue::Number(n)
    }
}

impl<'de> Deserialize<'de> for SliderValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
            Other(serde_json::Value),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => SliderValue::Number(n),
            Raw::Float(f) => SliderValue::from_float(f),
            Raw::Text(raw) => SliderValue::from_text(raw),
            Raw::Other(value) => SliderValue::Unreadable(value.to_string()),
        })
    }
}

/// How intense the user wants their experience to be.
///
/// Deserialization is lenient: unknown strings become
/// [`Desire::Unrecognized`], which matches no persona rule. Use
/// [`str::parse`] for strict parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Desire {
    #[default]
    Mild,
    Spicy,
    Extreme,
    Unrecognized(String),
}

impl Desire {
    pub fn as_str(&self) -> &str {
        match self {
            Desire::Mild => "mild",
            Desire::Spicy => "spicy",
            Desire::Extreme => "extreme",
            Desire::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Desire {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "mild" => Desire::Mild,
            "spicy" => Desire::Spicy,
            "extreme" => Desire::Extreme,
            _ => Desire::Unrecognized(raw),
        }
    }
}

impl From<Desire> for String {
    fn from(desire: Desire) -> Self {
        match desire {
            Desire::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Desire {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Desire::from(s.to_string()) {
            Desire::Unrecognized(raw) => Err(ProfileError::UnknownDesire(raw)),
            known => Ok(known),
        }
    }
}

impl fmt::Display for Desire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relationship stage reported in the quiz.
///
/// Same lenient deserialization as [`Desire`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipStatus {
    #[default]
    Dating,
    Committed,
    Engaged,
    Married,
    LongTerm,
    Unrecognized(String),
}

impl RelationshipStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipStatus::Dating => "dating",
            RelationshipStatus::Committed => "committed",
            RelationshipStatus::Engaged => "engaged",
            RelationshipStatus::Married => "married",
            RelationshipStatus::LongTerm => "long-term",
            RelationshipStatus::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl From<String> for RelationshipStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "dating" => RelationshipStatus::Dating,
            "committed" => RelationshipStatus::Committed,
            "engaged" => RelationshipStatus::Engaged,
            "married" => RelationshipStatus::Married,
            "long-term" => RelationshipStatus::LongTerm,
            _ => RelationshipStatus::Unrecognized(raw),
        }
    }
}

impl From<RelationshipStatus> for String {
    fn from(status: RelationshipStatus) -> Self {
        match status {
            RelationshipStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for RelationshipStatus {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match RelationshipStatus::from(s.to_string()) {
            RelationshipStatus::Unrecognized(raw) => {
                Err(ProfileError::UnknownRelationshipStatus(raw))
            }
            known => Ok(known),
        }
    }
}

impl fmt::Display for RelationshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
