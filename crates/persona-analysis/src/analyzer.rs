use tracing::{debug, trace, warn};

use crate::answers::{AnswerRecord, Desire, RelationshipStatus, DEFAULT_COMFORT_LEVEL};
use crate::buckets::{BucketAxis, RangeBucket};
use crate::config::{AnalyzerConfig, RangePolicy};
use crate::insights::{is_challenge_title, is_frequency_title, InsightCategory};
use crate::personas::PersonaKey;
use crate::recommendations::RecommendationSet;
use crate::result::{AnalysisResult, Insight, PersonaSnapshot};

/// Comfort level at which a mild-desire user counts as an explorer.
const EXPLORER_COMFORT_THRESHOLD: i64 = 7;

/// Classifies quiz answers into a persona analysis.
///
/// The analyzer is stateless apart from its configuration; it only reads the
/// static tables and never fails. Share one instance freely across threads.
#[derive(Clone, Debug, Default)]
pub struct ProfileAnalyzer {
    config: AnalyzerConfig,
}

/// Analyze answers with the default configuration.
pub fn analyze(answers: &AnswerRecord) -> AnalysisResult {
    ProfileAnalyzer::default().analyze(answers)
}

/// Pick the persona for a set of answers. First matching rule wins.
///
/// `comfort_level` is the effective comfort value after range handling.
pub fn select_persona(answers: &AnswerRecord, comfort_level: i64) -> PersonaKey {
    let desire = answers.desire();
    let challenge = answers.biggest_challenge.as_deref();

    if desire == Desire::Mild && challenge == Some("communication") {
        PersonaKey::IntimateCommunicator
    } else if desire == Desire::Spicy && answers.has_turn_on("sensory") {
        PersonaKey::SensualMaster
    } else if desire == Desire::Extreme && answers.has_turn_on("public-play") {
        PersonaKey::WildDreamer
    } else if desire == Desire::Spicy && answers.has_turn_on("roleplay") {
        PersonaKey::PassionateAdventurer
    } else if desire == Desire::Mild && comfort_level >= EXPLORER_COMFORT_THRESHOLD {
        PersonaKey::GentleExplorer
    } else if desire == Desire::Extreme
        && answers.relationship_status() == RelationshipStatus::Married
    {
        PersonaKey::MysteriousSeductress
    } else {
        PersonaKey::GentleExplorer
    }
}

impl ProfileAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the full analysis over a set of answers.
    pub fn analyze(&self, answers: &AnswerRecord) -> AnalysisResult {
        let mut traits: Vec<String> = Vec::new();
        let mut tags: Vec<String> = Vec::new();
        let mut insights: Vec<Insight> = Vec::new();
        let mut challenges: Vec<String> = Vec::new();

        // Slider buckets
        let comfort_level = answers
            .comfort_level()
            .map(|v| self.effective_value(BucketAxis::Comfort, v));
        let enhancement = answers
            .enhancement()
            .map(|v| self.effective_value(BucketAxis::Enhancement, v));
        for (axis, value) in [
            (BucketAxis::Comfort, comfort_level),
            (BucketAxis::Enhancement, enhancement),
        ] {
            let Some(value) = value else {
                warn!(axis = axis.as_str(), "Slider value is not a number, no bucket");
                continue;
            };
            if let Some(bucket) = axis.lookup(value) {
                debug!(axis = axis.as_str(), value, bucket = bucket.key, "Bucket matched");
                push_bucket(bucket, &mut traits, &mut tags);
            } else {
                debug!(axis = axis.as_str(), value, "No bucket matched");
            }
        }

        // Persona; an unreadable comfort slider counts as the default
        let persona_key =
            select_persona(answers, comfort_level.unwrap_or(DEFAULT_COMFORT_LEVEL));
        let persona = persona_key.definition();
        debug!(
            persona = persona_key.as_str(),
            desire = answers.desire().as_str(),
            "Persona selected"
        );
        traits.extend(persona.traits.iter().map(|t| t.to_string()));
        tags.push(persona.tag());

        // Challenge
        if let Some(challenge) = answers.biggest_challenge.as_deref() {
            match InsightCategory::Challenge.lookup(challenge) {
                Some(def) => insights.push(Insight::from_definition(InsightCategory::Challenge, def)),
                None => trace!(challenge, "Unknown challenge key skipped"),
            }
            challenges.push(challenge.to_string());
        }

        // Frequency
        if let Some(frequency) = answers.intimacy_frequency.as_deref() {
            match InsightCategory::Frequency.lookup(frequency) {
                Some(def) => insights.push(Insight::from_definition(InsightCategory::Frequency, def)),
                None => trace!(frequency, "Unknown frequency key skipped"),
            }
        }

        // Turn-ons and fantasy settings, in answer order
        for (category, keys) in [
            (InsightCategory::TurnOn, &answers.turn_ons),
            (InsightCategory::Fantasy, &answers.fantasy),
        ] {
            for key in keys {
                match category.lookup(key) {
                    Some(def) => {
                        insights.push(Insight::from_definition(category, def));
                        tags.push(key.clone());
                    }
                    None => trace!(category = category.as_str(), key = key.as_str(), "Unknown key skipped"),
                }
            }
        }

        let personalized_message = personalized_message(persona.name, persona.recommendations, &insights);

        // Recommendations
        let mut recommendations = RecommendationSet::new();
        recommendations.extend(persona.recommendations.iter().copied());
        for insight in &insights {
            recommendations.extend(insight.recommendations.iter().map(String::as_str));
        }
        for key in &answers.turn_ons {
            if let Some(def) = InsightCategory::TurnOn.lookup(key) {
                recommendations.extend(def.recommendations.iter().copied());
            }
        }
        if recommendations.len() > self.config.max_recommendations {
            debug!(
                collected = recommendations.len(),
                cap = self.config.max_recommendations,
                "Recommendations truncated"
            );
        }

        AnalysisResult {
            persona: PersonaSnapshot::from(persona),
            traits,
            tags,
            insights,
            recommendations: recommendations.into_capped(self.config.max_recommendations),
            challenges,
            strengths: Vec::new(),
            personalized_message,
        }
    }

    /// Apply the range policy to a slider value.
    fn effective_value(&self, axis: BucketAxis, value: i64) -> i64 {
        match self.config.range_policy {
            RangePolicy::Clamp => {
                let clamped = axis.clamp(value);
                if clamped != value {
                    warn!(
                        axis = axis.as_str(),
                        value,
                        clamped,
                        "Slider value outside domain, clamped"
                    );
                }
                clamped
            }
            RangePolicy::Skip => value,
        }
    }
}

fn push_bucket(bucket: &RangeBucket, traits: &mut Vec<String>, tags: &mut Vec<String>) {
    traits.extend(bucket.traits.iter().map(|t| t.to_string()));
    tags.push(bucket.tag());
}

/// Build the summary paragraph shown on the results screen.
///
/// The challenge and frequency fragments are found by title markers, not by
/// insight category, so only titles from those two families contribute.
fn personalized_message(name: &str, recommendations: &[&str], insights: &[Insight]) -> String {
    let mut message = format!("You're a {} who ", name);

    if let Some(challenge) = insights.iter().find(|i| is_challenge_title(&i.title)) {
        message.push_str(&challenge.insight);
        message.push(' ');
    }
    if let Some(frequency) = insights.iter().find(|i| is_frequency_title(&i.title)) {
        message.push_str(&frequency.insight);
        message.push(' ');
    }

    message.push_str(&format!(
        "Your unique combination of traits makes you perfect for {}.",
        recommendations.join(", ")
    ));
    message
}
