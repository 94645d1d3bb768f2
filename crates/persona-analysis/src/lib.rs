//! # persona-analysis
//!
//! Persona Profiles, a rule-based classifier that turns onboarding quiz
//! answers into a persona, trait tags, insights, recommendations, and a
//! personalized summary message.
//!
//! ## Personas
//!
//! Six fixed personas represent the archetypes a couple can fall into:
//!
//! - **Gentle Explorer**: curious, tender, discovering at their own pace
//!   (also the fallback when no other rule matches)
//! - **Intimate Communicator**: connection through honest conversation
//! - **Sensual Master**: attuned to touch, texture, and atmosphere
//! - **Wild Dreamer**: thrill-seeking, boundary-testing imagination
//! - **Passionate Adventurer**: playful, story-driven, eager to try new roles
//! - **Mysterious Seductress**: confident allure within a long-term bond
//!
//! ## Analysis Pipeline
//!
//! [`ProfileAnalyzer::analyze`] runs nine independent steps over an
//! [`AnswerRecord`]:
//!
//! 1. Comfort-level bucket (0–10, five buckets)
//! 2. Enhancement-commitment bucket (0–100, five buckets)
//! 3. Persona selection: fixed priority list, first match wins
//! 4. Challenge insight
//! 5. Frequency insight
//! 6. Turn-on insights, in answer order
//! 7. Fantasy-setting insights, in answer order
//! 8. Personalized message
//! 9. Recommendations: ordered, deduplicated, capped
//!
//! ## Guarantees
//!
//! - **Total**: analysis never fails. Missing fields use defaults, unknown
//!   keys contribute nothing, and a slider value that is not a number
//!   matches no bucket.
//! - **Pure**: identical answers always produce identical results. The only
//!   side effect is `tracing` output.
//! - **Bucket totality**: every integer in an axis domain matches exactly one
//!   bucket (checked by [`validate_tables`]).

pub mod analyzer;
pub mod answers;
pub mod buckets;
pub mod config;
pub mod error;
pub mod insights;
pub mod personas;
pub mod recommendations;
pub mod result;
pub mod tables;

pub use analyzer::{analyze, select_persona, ProfileAnalyzer};
pub use answers::{AnswerRecord, Desire, RelationshipStatus, SliderValue};
pub use buckets::{slugify, BucketAxis, RangeBucket};
pub use config::{AnalyzerConfig, RangePolicy, DEFAULT_MAX_RECOMMENDATIONS};
pub use error::ProfileError;
pub use insights::{InsightCategory, InsightDefinition};
pub use personas::{PersonaDefinition, PersonaKey};
pub use recommendations::RecommendationSet;
pub use result::{AnalysisResult, Insight, PersonaSnapshot};
pub use tables::validate_tables;
