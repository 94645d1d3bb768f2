use serde::{Deserialize, Serialize};

use crate::buckets::slugify;

/// The six canonical personas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaKey {
    /// Curious, tender, discovering at their own pace. Also the fallback.
    GentleExplorer,
    /// Builds intimacy through honest conversation
    IntimateCommunicator,
    /// Attuned to touch, texture, and atmosphere
    SensualMaster,
    /// Thrill-seeking imagination
    WildDreamer,
    /// Playful, story-driven, eager to try new roles
    PassionateAdventurer,
    /// Confident allure within a long-term bond
    MysteriousSeductress,
}

impl PersonaKey {
    pub const ALL: [PersonaKey; 6] = [
        PersonaKey::GentleExplorer,
        PersonaKey::IntimateCommunicator,
        PersonaKey::SensualMaster,
        PersonaKey::WildDreamer,
        PersonaKey::PassionateAdventurer,
        PersonaKey::MysteriousSeductress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaKey::GentleExplorer => "gentle-explorer",
            PersonaKey::IntimateCommunicator => "intimate-communicator",
            PersonaKey::SensualMaster => "sensual-master",
            PersonaKey::WildDreamer => "wild-dreamer",
            PersonaKey::PassionateAdventurer => "passionate-adventurer",
            PersonaKey::MysteriousSeductress => "mysterious-seductress",
        }
    }

    pub fn from_key(key: &str) -> Option<PersonaKey> {
        PersonaKey::ALL.into_iter().find(|p| p.as_str() == key)
    }

    /// The static definition for this persona.
    pub fn definition(&self) -> &'static PersonaDefinition {
        match self {
            PersonaKey::GentleExplorer => &GENTLE_EXPLORER,
            PersonaKey::IntimateCommunicator => &INTIMATE_COMMUNICATOR,
            PersonaKey::SensualMaster => &SENSUAL_MASTER,
            PersonaKey::WildDreamer => &WILD_DREAMER,
            PersonaKey::PassionateAdventurer => &PASSIONATE_ADVENTURER,
            PersonaKey::MysteriousSeductress => &MYSTERIOUS_SEDUCTRESS,
        }
    }
}

/// The archetype a set of answers is classified into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PersonaDefinition {
    pub key: PersonaKey,
    /// Display name, also slugified into a tag
    pub name: &'static str,
    pub description: &'static str,
    /// Traits contributed to the analysis
    pub traits: &'static [&'static str],
    /// Answer patterns that typically lead here (descriptive only)
    pub triggers: &'static [&'static str],
    /// Content recommendations, highest priority first
    pub recommendations: &'static [&'static str],
    /// Accent color for the persona card
    pub color: &'static str,
}

impl PersonaDefinition {
    pub fn tag(&self) -> String {
        slugify(self.name)
    }
}

static GENTLE_EXPLORER: PersonaDefinition = PersonaDefinition {
    key: PersonaKey::GentleExplorer,
    name: "Gentle Explorer",
    description: "You approach intimacy with curiosity and tenderness, discovering new \
                  experiences at a pace that feels right for both of you.",
    traits: &["curious", "tender", "patient"],
    triggers: &["mild desire", "growing comfort", "new relationship"],
    recommendations: &[
        "Slow Discovery Journeys",
        "Tender Touch Guides",
        "Beginner Connection Rituals",
    ],
    color: "#F4A7B9",
};

static INTIMATE_COMMUNICATOR: PersonaDefinition = PersonaDefinition {
    key: PersonaKey::IntimateCommunicator,
    name: "Intimate Communicator",
    description: "For you, closeness starts with words. Honest conversation is how you \
                  build trust, share desires, and deepen your bond.",
    traits: &["articulate", "empathetic", "trusting"],
    triggers: &["mild desire", "communication challenge"],
    recommendations: &[
        "Desire Conversation Cards",
        "Guided Check-In Scripts",
        "Love Language Exercises",
    ],
    color: "#8EC5FC",
};

static SENSUAL_MASTER: PersonaDefinition = PersonaDefinition {
    key: PersonaKey::SensualMaster,
    name: "Sensual Master",
    description: "You experience intimacy through every sense. Touch, scent, sound, and \
                  atmosphere are your tools for creating unforgettable moments.",
    traits: &["sensual", "attentive", "present"],
    triggers: &["spicy desire", "sensory turn-on"],
    recommendations: &[
        "Sensory Play Guides",
        "Massage Technique Series",
        "Mood Setting Playlists",
    ],
    color: "#C471ED",
};

static WILD_DREAMER: PersonaDefinition = PersonaDefinition {
    key: PersonaKey::WildDreamer,
    name: "Wild Dreamer",
    description: "Your imagination knows no limits. You crave excitement, novelty, and \
                  the thrill of pushing boundaries together.",
    traits: &["daring", "imaginative", "thrill-seeking"],
    triggers: &["extreme desire", "public-play turn-on"],
    recommendations: &[
        "Adventure Challenge Decks",
        "Fantasy Exploration Stories",
        "Thrill Date Ideas",
    ],
    color: "#F7797D",
};

static PASSIONATE_ADVENTURER: PersonaDefinition = PersonaDefinition {
    key: PersonaKey::PassionateAdventurer,
    name: "Passionate Adventurer",
    description: "You love stories, games, and playful role changes. Every encounter is a \
                  chance to become someone new together.",
    traits: &["playful", "passionate", "creative"],
    triggers: &["spicy desire", "roleplay turn-on"],
    recommendations: &[
        "Roleplay Scenario Packs",
        "Couples Game Nights",
        "Spontaneity Challenges",
    ],
    color: "#FF6B6B",
};

static MYSTERIOUS_SEDUCTRESS: PersonaDefinition = PersonaDefinition {
    key: PersonaKey::MysteriousSeductress,
    name: "Mysterious Seductress",
    description: "Deep familiarity fuels your confidence. You know how to keep intrigue \
                  alive and surprise a partner who thinks they know you.",
    traits: &["alluring", "confident", "enigmatic"],
    triggers: &["extreme desire", "married"],
    recommendations: &[
        "Art of Seduction Course",
        "Surprise Planning Kits",
        "Anticipation Building Games",
    ],
    color: "#434343",
};

/// All persona definitions in declaration order.
pub fn all_personas() -> impl Iterator<Item = &'static PersonaDefinition> {
    PersonaKey::ALL.into_iter().map(|k| k.definition())
}
