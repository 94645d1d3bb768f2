use serde::Serialize;

/// A contiguous numeric sub-range of a slider answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RangeBucket {
    /// Table key, e.g. `VERY_HIGH`
    pub key: &'static str,
    /// Inclusive lower bound
    pub min: i64,
    /// Inclusive upper bound
    pub max: i64,
    /// Human-readable label, slugified into a tag
    pub label: &'static str,
    /// Traits contributed when the bucket matches
    pub traits: &'static [&'static str],
}

impl RangeBucket {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Tag form of the label: lowercased, spaces replaced by hyphens.
    pub fn tag(&self) -> String {
        slugify(self.label)
    }
}

/// A slider axis partitioned into buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BucketAxis {
    /// Comfort level, 0–10
    Comfort,
    /// Enhancement commitment, 0–100
    Enhancement,
}

impl BucketAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketAxis::Comfort => "comfort",
            BucketAxis::Enhancement => "enhancement",
        }
    }

    /// Inclusive domain of the axis.
    pub fn domain(&self) -> (i64, i64) {
        match self {
            BucketAxis::Comfort => (0, 10),
            BucketAxis::Enhancement => (0, 100),
        }
    }

    pub fn buckets(&self) -> &'static [RangeBucket] {
        match self {
            BucketAxis::Comfort => COMFORT_BUCKETS,
            BucketAxis::Enhancement => ENHANCEMENT_BUCKETS,
        }
    }

    pub fn clamp(&self, value: i64) -> i64 {
        let (min, max) = self.domain();
        value.clamp(min, max)
    }

    /// First bucket, in ascending order, whose range contains `value`.
    pub fn lookup(&self, value: i64) -> Option<&'static RangeBucket> {
        self.buckets().iter().find(|b| b.contains(value))
    }
}

/// Lowercase a label and replace spaces with hyphens.
pub fn slugify(label: &str) -> String {
    label.to_lowercase().replace(' ', "-")
}

pub(crate) static COMFORT_BUCKETS: &[RangeBucket] = &[
    RangeBucket {
        key: "VERY_LOW",
        min: 0,
        max: 2,
        label: "Very Low Comfort",
        traits: &["reserved", "cautious", "private"],
    },
    RangeBucket {
        key: "LOW",
        min: 3,
        max: 4,
        label: "Low Comfort",
        traits: &["careful", "curious", "gentle"],
    },
    RangeBucket {
        key: "MODERATE",
        min: 5,
        max: 6,
        label: "Moderate Comfort",
        traits: &["open-minded", "balanced", "receptive"],
    },
    RangeBucket {
        key: "HIGH",
        min: 7,
        max: 8,
        label: "High Comfort",
        traits: &["confident", "adventurous", "expressive"],
    },
    RangeBucket {
        key: "EXTREME",
        min: 9,
        max: 10,
        label: "Extreme Comfort",
        traits: &["fearless", "uninhibited", "bold"],
    },
];

pub(crate) static ENHANCEMENT_BUCKETS: &[RangeBucket] = &[
    RangeBucket {
        key: "LOW",
        min: 0,
        max: 20,
        label: "Low Commitment",
        traits: &["casual", "relaxed", "spontaneous"],
    },
    RangeBucket {
        key: "MODERATE",
        min: 21,
        max: 40,
        label: "Moderate Commitment",
        traits: &["interested", "steady", "open"],
    },
    RangeBucket {
        key: "HIGH",
        min: 41,
        max: 60,
        label: "High Commitment",
        traits: &["dedicated", "motivated", "engaged"],
    },
    RangeBucket {
        key: "VERY_HIGH",
        min: 61,
        max: 80,
        label: "Very High Commitment",
        traits: &["highly-committed", "intensive", "goal-oriented"],
    },
    RangeBucket {
        key: "EXTREME",
        min: 81,
        max: 100,
        label: "Extreme Commitment",
        traits: &["all-in", "transformative", "devoted"],
    },
];
