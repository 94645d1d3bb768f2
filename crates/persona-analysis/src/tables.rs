use crate::buckets::{BucketAxis, RangeBucket};
use crate::error::ProfileError;
use crate::insights::{InsightCategory, InsightDefinition};
use crate::personas::{all_personas, PersonaDefinition, PersonaKey};

pub fn comfort_buckets() -> &'static [RangeBucket] {
    BucketAxis::Comfort.buckets()
}

pub fn enhancement_buckets() -> &'static [RangeBucket] {
    BucketAxis::Enhancement.buckets()
}

pub fn personas() -> Vec<&'static PersonaDefinition> {
    all_personas().collect()
}

pub fn persona(key: &str) -> Result<&'static PersonaDefinition, ProfileError> {
    PersonaKey::from_key(key)
        .map(|k| k.definition())
        .ok_or_else(|| ProfileError::UnknownPersona(key.to_string()))
}

pub fn challenge_insight(key: &str) -> Option<&'static InsightDefinition> {
    InsightCategory::Challenge.lookup(key)
}

pub fn frequency_insight(key: &str) -> Option<&'static InsightDefinition> {
    InsightCategory::Frequency.lookup(key)
}

pub fn turn_on_insight(key: &str) -> Option<&'static InsightDefinition> {
    InsightCategory::TurnOn.lookup(key)
}

pub fn fantasy_insight(key: &str) -> Option<&'static InsightDefinition> {
    InsightCategory::Fantasy.lookup(key)
}

/// Verify the static tables.
///
/// Each bucket axis must be sorted, contiguous, non-overlapping and cover its
/// whole domain, so every in-domain value matches exactly one bucket. Every
/// persona key must resolve to a definition carrying the same key.
pub fn validate_tables() -> Result<(), ProfileError> {
    for axis in [BucketAxis::Comfort, BucketAxis::Enhancement] {
        validate_axis(axis)?;
    }
    for key in PersonaKey::ALL {
        let def = key.definition();
        if def.key != key {
            return Err(ProfileError::UnknownPersona(key.as_str().to_string()));
        }
    }
    Ok(())
}

fn validate_axis(axis: BucketAxis) -> Result<(), ProfileError> {
    let (min, max) = axis.domain();
    let buckets = axis.buckets();
    let name = axis.as_str().to_string();

    let (first, last) = match (buckets.first(), buckets.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(ProfileError::BucketCoverage {
                axis: name,
                covered_min: 0,
                covered_max: -1,
                min,
                max,
            })
        }
    };

    for pair in buckets.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.min <= prev.max {
            return Err(ProfileError::BucketOverlap {
                axis: name,
                at: next.min,
            });
        }
        if next.min > prev.max + 1 {
            return Err(ProfileError::BucketGap {
                axis: name,
                after: prev.max,
                before: next.min,
            });
        }
    }

    if first.min != min || last.max != max {
        return Err(ProfileError::BucketCoverage {
            axis: name,
            covered_min: first.min,
            covered_max: last.max,
            min,
            max,
        });
    }
    Ok(())
}
