use thiserror::Error;

/// Errors from the Persona Profiles system.
///
/// Analysis itself is total and never produces these. They surface at the
/// edges: strict parsing, JSON input, configuration, and table validation.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("unknown desire level: {0}")]
    UnknownDesire(String),

    #[error("unknown relationship status: {0}")]
    UnknownRelationshipStatus(String),

    #[error("invalid answer record: {0}")]
    InvalidAnswers(#[from] serde_json::Error),

    #[error("{axis} buckets leave a gap between {after} and {before}")]
    BucketGap {
        axis: String,
        after: i64,
        before: i64,
    },

    #[error("{axis} buckets overlap at {at}")]
    BucketOverlap { axis: String, at: i64 },

    #[error("{axis} buckets cover {covered_min}..={covered_max}, domain is {min}..={max}")]
    BucketCoverage {
        axis: String,
        covered_min: i64,
        covered_max: i64,
        min: i64,
        max: i64,
    },

    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    #[error("invalid analyzer config: {message}")]
    InvalidConfig { message: String },
}
