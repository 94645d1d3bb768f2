use serde::{Deserialize, Serialize};

use crate::insights::{InsightCategory, InsightDefinition};
use crate::personas::{PersonaDefinition, PersonaKey};

/// Owned copy of the selected persona, suitable for storing the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaSnapshot {
    pub key: PersonaKey,
    pub name: String,
    pub description: String,
    pub traits: Vec<String>,
    pub triggers: Vec<String>,
    pub recommendations: Vec<String>,
    pub color: String,
}

impl From<&PersonaDefinition> for PersonaSnapshot {
    fn from(def: &PersonaDefinition) -> Self {
        Self {
            key: def.key,
            name: def.name.to_string(),
            description: def.description.to_string(),
            traits: to_owned_list(def.traits),
            triggers: to_owned_list(def.triggers),
            recommendations: to_owned_list(def.recommendations),
            color: def.color.to_string(),
        }
    }
}

/// An insight attached to this analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub category: InsightCategory,
    /// The answer key that produced this insight
    pub key: String,
    pub title: String,
    pub insight: String,
    pub tips: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Insight {
    pub fn from_definition(category: InsightCategory, def: &InsightDefinition) -> Self {
        Self {
            category,
            key: def.key.to_string(),
            title: def.title.to_string(),
            insight: def.insight.to_string(),
            tips: to_owned_list(def.tips),
            recommendations: to_owned_list(def.recommendations),
        }
    }
}

/// Output of [`crate::ProfileAnalyzer::analyze`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub persona: PersonaSnapshot,
    /// Bucket and persona traits; repeats are kept
    pub traits: Vec<String>,
    pub tags: Vec<String>,
    /// Challenge, frequency, turn-ons, then fantasy settings
    pub insights: Vec<Insight>,
    /// Unique, first-seen order, capped
    pub recommendations: Vec<String>,
    /// Raw challenge key, recognized or not
    pub challenges: Vec<String>,
    /// Reserved; always empty
    pub strengths: Vec<String>,
    pub personalized_message: String,
}

impl AnalysisResult {
    pub fn insights_in(&self, category: InsightCategory) -> impl Iterator<Item = &Insight> {
        self.insights.iter().filter(move |i| i.category == category)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
