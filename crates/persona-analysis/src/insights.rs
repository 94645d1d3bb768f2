use serde::{Deserialize, Serialize};

/// Which answer family an insight is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightCategory {
    Challenge,
    Frequency,
    TurnOn,
    Fantasy,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Challenge => "challenge",
            InsightCategory::Frequency => "frequency",
            InsightCategory::TurnOn => "turn-on",
            InsightCategory::Fantasy => "fantasy",
        }
    }

    pub fn table(&self) -> &'static [InsightDefinition] {
        match self {
            InsightCategory::Challenge => CHALLENGE_INSIGHTS,
            InsightCategory::Frequency => FREQUENCY_INSIGHTS,
            InsightCategory::TurnOn => TURN_ON_INSIGHTS,
            InsightCategory::Fantasy => FANTASY_INSIGHTS,
        }
    }

    /// Look up an insight by answer key. Unknown keys yield `None`.
    pub fn lookup(&self, key: &str) -> Option<&'static InsightDefinition> {
        self.table().iter().find(|i| i.key == key)
    }
}

/// A templated insight block attached to a specific answer value.
///
/// Challenge and frequency `insight` texts are written to continue the
/// sentence "You're a {persona} who ..." in the personalized message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InsightDefinition {
    /// Answer key this insight is attached to
    pub key: &'static str,
    pub title: &'static str,
    pub insight: &'static str,
    pub tips: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

/// Title markers identifying the challenge family.
pub const CHALLENGE_TITLE_MARKERS: [&str; 3] = ["Champion", "Master", "Seeker"];
/// Title markers identifying the frequency family.
pub const FREQUENCY_TITLE_MARKERS: [&str; 4] = ["Enthusiast", "Builder", "Focuser", "Rekindler"];

pub fn is_challenge_title(title: &str) -> bool {
    CHALLENGE_TITLE_MARKERS.iter().any(|m| title.contains(m))
}

pub fn is_frequency_title(title: &str) -> bool {
    FREQUENCY_TITLE_MARKERS.iter().any(|m| title.contains(m))
}

pub(crate) static CHALLENGE_INSIGHTS: &[InsightDefinition] = &[
    InsightDefinition {
        key: "communication",
        title: "Communication Champion",
        insight: "values honest dialogue and is ready to turn difficult conversations into \
                  deeper closeness.",
        tips: &[
            "Schedule a weekly no-phones check-in",
            "Start requests with \"I would love it if...\"",
            "Share one appreciation before one wish",
        ],
        recommendations: &["Desire Conversation Cards", "Active Listening Workshop"],
    },
    InsightDefinition {
        key: "routine",
        title: "Novelty Seeker",
        insight: "craves fresh experiences and is ready to break out of a predictable routine.",
        tips: &[
            "Change the setting, even within your own home",
            "Take turns planning a surprise evening",
            "Try one new thing each month",
        ],
        recommendations: &["Novelty Date Generator", "30-Day Spark Challenge"],
    },
    InsightDefinition {
        key: "time",
        title: "Time Master",
        insight: "juggles a busy life and wants to make every shared moment count.",
        tips: &[
            "Protect one evening a week as couple time",
            "Use short rituals like a six-second kiss",
            "Send a flirty message during the day",
        ],
        recommendations: &["Quick Connection Rituals", "Micro-Moment Guides"],
    },
    InsightDefinition {
        key: "mismatched-desire",
        title: "Harmony Seeker",
        insight: "wants to find a rhythm that honors both partners' needs.",
        tips: &[
            "Talk about desire without keeping score",
            "Explore what makes each of you feel wanted",
            "Agree on low-pressure ways to connect",
        ],
        recommendations: &["Desire Mapping Exercises", "Compromise Without Resentment Course"],
    },
    InsightDefinition {
        key: "confidence",
        title: "Confidence Champion",
        insight: "is building the self-assurance to express desires freely.",
        tips: &[
            "Write down three things you love about your body",
            "Practice saying one wish out loud",
            "Celebrate small steps outside your comfort zone",
        ],
        recommendations: &["Body Confidence Series", "Self-Expression Journaling"],
    },
    InsightDefinition {
        key: "stress",
        title: "Calm Master",
        insight: "is learning to let go of daily stress and be fully present.",
        tips: &[
            "Breathe together for two minutes before connecting",
            "Leave work talk outside the bedroom",
            "Try a shared bath or shower to unwind",
        ],
        recommendations: &["Mindful Intimacy Meditations", "Stress Release Massage Guide"],
    },
];

pub(crate) static FREQUENCY_INSIGHTS: &[InsightDefinition] = &[
    InsightDefinition {
        key: "daily",
        title: "Passion Enthusiast",
        insight: "already shares a vibrant connection and wants to keep it exciting.",
        tips: &[
            "Vary the time of day you connect",
            "Add anticipation with morning hints",
        ],
        recommendations: &["Advanced Technique Library", "Keep It Fresh Series"],
    },
    InsightDefinition {
        key: "weekly",
        title: "Rhythm Builder",
        insight: "enjoys a steady rhythm and wants each encounter to feel special.",
        tips: &[
            "Build a pre-date ritual you both look forward to",
            "Alternate who sets the mood each week",
        ],
        recommendations: &["Weekly Date Night Planner", "Anticipation Building Games"],
    },
    InsightDefinition {
        key: "monthly",
        title: "Quality Focuser",
        insight: "values quality over quantity and wants every moment to be meaningful.",
        tips: &[
            "Plan a longer, unhurried evening together",
            "Reflect afterwards on what you enjoyed most",
        ],
        recommendations: &["Deep Connection Weekends", "Slow Discovery Journeys"],
    },
    InsightDefinition {
        key: "rarely",
        title: "Spark Rekindler",
        insight: "is ready to rekindle the spark and rediscover closeness.",
        tips: &[
            "Start with non-sexual touch to rebuild comfort",
            "Revisit places from your early days together",
        ],
        recommendations: &["Rekindling Roadmap", "Tender Touch Guides"],
    },
];

pub(crate) static TURN_ON_INSIGHTS: &[InsightDefinition] = &[
    InsightDefinition {
        key: "sensory",
        title: "Sensory Connoisseur",
        insight: "You respond deeply to touch, scent, and atmosphere.",
        tips: &["Experiment with blindfolds and textures", "Curate a scent for date night"],
        recommendations: &["Sensory Play Guides", "Aromatherapy for Couples"],
    },
    InsightDefinition {
        key: "roleplay",
        title: "Storyteller at Heart",
        insight: "Stepping into a character lets you explore new sides of yourselves.",
        tips: &["Start with a simple first-meeting scenario", "Agree on a safe word"],
        recommendations: &["Roleplay Scenario Packs", "Character Card Deck"],
    },
    InsightDefinition {
        key: "public-play",
        title: "Thrill Chaser",
        insight: "A hint of risk and secrecy makes your heart race.",
        tips: &["Keep it discreet and consensual", "Try secret signals at a dinner party"],
        recommendations: &["Discreet Flirting Games", "Thrill Date Ideas"],
    },
    InsightDefinition {
        key: "romance",
        title: "Hopeless Romantic",
        insight: "Candlelight, love letters, and slow dances set the stage for you.",
        tips: &["Write your partner a letter", "Recreate your first date"],
        recommendations: &["Romantic Evening Blueprints", "Love Letter Prompts"],
    },
    InsightDefinition {
        key: "dominance",
        title: "Power Dynamics",
        insight: "Trading control builds trust and intensity between you.",
        tips: &["Negotiate boundaries beforehand", "Check in afterwards with aftercare"],
        recommendations: &["Power Exchange Basics", "Trust Building Exercises"],
    },
    InsightDefinition {
        key: "toys",
        title: "Playful Innovator",
        insight: "New tools and toys add curiosity and laughter to your play.",
        tips: &["Shop together online", "Introduce one new item at a time"],
        recommendations: &["Toy Discovery Guide", "Couples Game Nights"],
    },
];

pub(crate) static FANTASY_INSIGHTS: &[InsightDefinition] = &[
    InsightDefinition {
        key: "beach",
        title: "Seaside Escape",
        insight: "Sun, sand, and the sound of waves awaken your sense of freedom.",
        tips: &["Bring the beach home with ocean sounds", "Plan a coastal weekend"],
        recommendations: &["Beach Getaway Scenarios"],
    },
    InsightDefinition {
        key: "hotel",
        title: "Hotel Hideaway",
        insight: "A room with no history lets you both be someone new.",
        tips: &["Book a staycation in your own city", "Arrive separately and meet at the bar"],
        recommendations: &["Hotel Night Playbook"],
    },
    InsightDefinition {
        key: "outdoors",
        title: "Into the Wild",
        insight: "Fresh air and open skies make you feel alive and uninhibited.",
        tips: &["Stargaze with a blanket for two", "Choose secluded, legal spots"],
        recommendations: &["Outdoor Adventure Guide"],
    },
    InsightDefinition {
        key: "vacation",
        title: "Getaway Dreams",
        insight: "Leaving everyday life behind frees you to connect without distraction.",
        tips: &["Plan a phone-free trip", "Pack one surprise for your partner"],
        recommendations: &["Romantic Travel Planner"],
    },
    InsightDefinition {
        key: "home",
        title: "Comfort Zone",
        insight: "Your own space, made special, is where you feel most free.",
        tips: &["Transform a room with lighting", "Cook a sensual dinner together"],
        recommendations: &["Mood Setting Playlists", "Home Sanctuary Makeover"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown_keys() {
        assert_eq!(
            InsightCategory::Challenge.lookup("routine").unwrap().title,
            "Novelty Seeker"
        );
        assert_eq!(
            InsightCategory::Frequency.lookup("weekly").unwrap().title,
            "Rhythm Builder"
        );
        assert!(InsightCategory::Challenge.lookup("nonexistent-key").is_none());
        assert!(InsightCategory::TurnOn.lookup("").is_none());
    }

    #[test]
    fn challenge_titles_carry_challenge_markers_only() {
        for insight in CHALLENGE_INSIGHTS {
            assert!(is_challenge_title(insight.title), "{}", insight.title);
            assert!(!is_frequency_title(insight.title), "{}", insight.title);
        }
    }

    #[test]
    fn frequency_titles_carry_frequency_markers_only() {
        for insight in FREQUENCY_INSIGHTS {
            assert!(is_frequency_title(insight.title), "{}", insight.title);
            assert!(!is_challenge_title(insight.title), "{}", insight.title);
        }
    }

    #[test]
    fn turn_on_and_fantasy_titles_carry_no_markers() {
        for insight in TURN_ON_INSIGHTS.iter().chain(FANTASY_INSIGHTS) {
            assert!(!is_challenge_title(insight.title), "{}", insight.title);
            assert!(!is_frequency_title(insight.title), "{}", insight.title);
        }
    }

    #[test]
    fn keys_are_unique_within_each_table() {
        for category in [
            InsightCategory::Challenge,
            InsightCategory::Frequency,
            InsightCategory::TurnOn,
            InsightCategory::Fantasy,
        ] {
            let table = category.table();
            for (i, insight) in table.iter().enumerate() {
                assert!(
                    table[i + 1..].iter().all(|other| other.key != insight.key),
                    "duplicate {} key {}",
                    category.as_str(),
                    insight.key
                );
            }
        }
    }
}
