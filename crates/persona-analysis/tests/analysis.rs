//! End-to-end analysis tests over realistic quiz answers.

use persona_analysis::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Full example
// ---------------------------------------------------------------------------

#[test]
fn spicy_roleplayer_is_passionate_adventurer() {
    let answers =
        AnswerRecord::from_json(include_str!("fixtures/passionate_adventurer.json")).unwrap();
    let result = analyze(&answers);

    assert_eq!(result.persona.key, PersonaKey::PassionateAdventurer);
    assert_eq!(
        result.traits,
        strings(&[
            "confident",
            "adventurous",
            "expressive",
            "highly-committed",
            "intensive",
            "goal-oriented",
            "playful",
            "passionate",
            "creative",
        ])
    );
    assert_eq!(
        result.tags,
        strings(&[
            "high-comfort",
            "very-high-commitment",
            "passionate-adventurer",
            "roleplay",
        ])
    );

    let titles: Vec<&str> = result.insights.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Novelty Seeker", "Rhythm Builder", "Storyteller at Heart"]);
    assert_eq!(result.challenges, strings(&["routine"]));
    assert!(result.strengths.is_empty());

    assert!(result
        .personalized_message
        .starts_with("You're a Passionate Adventurer who "));
    assert_eq!(
        result.personalized_message,
        "You're a Passionate Adventurer who craves fresh experiences and is ready to break out \
         of a predictable routine. enjoys a steady rhythm and wants each encounter to feel \
         special. Your unique combination of traits makes you perfect for Roleplay Scenario \
         Packs, Couples Game Nights, Spontaneity Challenges."
    );

    assert_eq!(
        result.recommendations,
        strings(&[
            "Roleplay Scenario Packs",
            "Couples Game Nights",
            "Spontaneity Challenges",
            "Novelty Date Generator",
            "30-Day Spark Challenge",
            "Weekly Date Night Planner",
            "Anticipation Building Games",
            "Character Card Deck",
        ])
    );
}

// ---------------------------------------------------------------------------
// Persona selection
// ---------------------------------------------------------------------------

#[test]
fn empty_answers_default_to_gentle_explorer() {
    let result = analyze(&AnswerRecord::default());
    assert_eq!(result.persona.key, PersonaKey::GentleExplorer);
    assert!(result.has_tag("moderate-comfort"));
    assert!(result.has_tag("high-commitment"));
    assert!(result.insights.is_empty());
    assert!(result.challenges.is_empty());
    assert_eq!(
        result.personalized_message,
        "You're a Gentle Explorer who Your unique combination of traits makes you perfect for \
         Slow Discovery Journeys, Tender Touch Guides, Beginner Connection Rituals."
    );
}

#[test]
fn communication_challenge_wins_for_mild_desire() {
    let answers = AnswerRecord {
        desire: Some(Desire::Mild),
        biggest_challenge: Some("communication".into()),
        turn_ons: strings(&["sensory"]),
        comfort_level: Some(SliderValue::Number(9)),
        ..Default::default()
    };
    let result = analyze(&answers);
    assert_eq!(result.persona.key, PersonaKey::IntimateCommunicator);
    assert!(result.has_tag("intimate-communicator"));
    // Sensory still contributes its insight and tag
    assert!(result.has_tag("sensory"));
}

#[test]
fn mild_high_comfort_is_gentle_explorer() {
    let answers = AnswerRecord {
        desire: Some(Desire::Mild),
        comfort_level: Some(SliderValue::Number(7)),
        biggest_challenge: Some("time".into()),
        ..Default::default()
    };
    assert_eq!(analyze(&answers).persona.key, PersonaKey::GentleExplorer);
}

#[test]
fn married_extreme_is_mysterious_seductress() {
    let answers = AnswerRecord::from_json(
        r#"{"desire": "extreme", "relationshipStatus": "married", "turnOns": ["dominance"]}"#,
    )
    .unwrap();
    let result = analyze(&answers);
    assert_eq!(result.persona.key, PersonaKey::MysteriousSeductress);
    assert_eq!(result.persona.color, "#434343");
}

#[test]
fn unknown_desire_falls_back_to_gentle_explorer() {
    let answers = AnswerRecord::from_json(
        r#"{"desire": "volcanic", "biggestChallenge": "communication", "comfortLevel": 10}"#,
    )
    .unwrap();
    assert_eq!(analyze(&answers).persona.key, PersonaKey::GentleExplorer);
}

// ---------------------------------------------------------------------------
// Insights and unknown keys
// ---------------------------------------------------------------------------

#[test]
fn unknown_challenge_is_echoed_without_insight() {
    let answers = AnswerRecord {
        biggest_challenge: Some("nonexistent-key".into()),
        ..Default::default()
    };
    let result = analyze(&answers);
    assert_eq!(result.challenges, strings(&["nonexistent-key"]));
    assert_eq!(result.insights_in(InsightCategory::Challenge).count(), 0);
    assert!(result.insights.is_empty());
    assert!(!result.personalized_message.contains("nonexistent"));
}

#[test]
fn unknown_turn_ons_and_fantasies_are_skipped() {
    let answers = AnswerRecord {
        intimacy_frequency: Some("hourly".into()),
        turn_ons: strings(&["romance", "telepathy", "toys"]),
        fantasy: strings(&["moon-base", "beach"]),
        ..Default::default()
    };
    let result = analyze(&answers);

    let keys: Vec<&str> = result.insights.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(keys, vec!["romance", "toys", "beach"]);
    assert!(result.has_tag("romance"));
    assert!(result.has_tag("beach"));
    assert!(!result.has_tag("telepathy"));
    assert!(!result.has_tag("moon-base"));
    assert_eq!(result.insights_in(InsightCategory::Frequency).count(), 0);
}

#[test]
fn insights_are_ordered_by_family_then_input() {
    let answers = AnswerRecord {
        biggest_challenge: Some("stress".into()),
        intimacy_frequency: Some("rarely".into()),
        turn_ons: strings(&["toys", "sensory"]),
        fantasy: strings(&["hotel", "outdoors"]),
        ..Default::default()
    };
    let result = analyze(&answers);
    let order: Vec<(InsightCategory, &str)> = result
        .insights
        .iter()
        .map(|i| (i.category, i.key.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (InsightCategory::Challenge, "stress"),
            (InsightCategory::Frequency, "rarely"),
            (InsightCategory::TurnOn, "toys"),
            (InsightCategory::TurnOn, "sensory"),
            (InsightCategory::Fantasy, "hotel"),
            (InsightCategory::Fantasy, "outdoors"),
        ]
    );
}

#[test]
fn frequency_only_message() {
    let answers = AnswerRecord {
        intimacy_frequency: Some("monthly".into()),
        ..Default::default()
    };
    let result = analyze(&answers);
    assert_eq!(
        result.personalized_message,
        "You're a Gentle Explorer who values quality over quantity and wants every moment to be \
         meaningful. Your unique combination of traits makes you perfect for Slow Discovery \
         Journeys, Tender Touch Guides, Beginner Connection Rituals."
    );
}

// ---------------------------------------------------------------------------
// Traits and recommendations
// ---------------------------------------------------------------------------

#[test]
fn traits_keep_duplicates() {
    // HIGH comfort and Mysterious Seductress both contribute "confident"
    let answers = AnswerRecord {
        comfort_level: Some(SliderValue::Number(8)),
        desire: Some(Desire::Extreme),
        relationship_status: Some(RelationshipStatus::Married),
        ..Default::default()
    };
    let result = analyze(&answers);
    assert_eq!(result.persona.key, PersonaKey::MysteriousSeductress);
    assert_eq!(result.traits.iter().filter(|t| *t == "confident").count(), 2);
}

#[test]
fn recommendations_are_capped_unique_and_ordered() {
    let answers = AnswerRecord {
        desire: Some(Desire::Spicy),
        biggest_challenge: Some("stress".into()),
        intimacy_frequency: Some("daily".into()),
        turn_ons: strings(&["sensory", "toys", "romance"]),
        ..Default::default()
    };
    let result = analyze(&answers);
    assert_eq!(result.persona.key, PersonaKey::SensualMaster);
    assert_eq!(
        result.recommendations,
        strings(&[
            "Sensory Play Guides",
            "Massage Technique Series",
            "Mood Setting Playlists",
            "Mindful Intimacy Meditations",
            "Stress Release Massage Guide",
            "Advanced Technique Library",
            "Keep It Fresh Series",
            "Aromatherapy for Couples",
        ])
    );
}

#[test]
fn fantasy_recommendations_follow_turn_ons_in_insight_order() {
    let answers = AnswerRecord {
        fantasy: strings(&["vacation"]),
        ..Default::default()
    };
    let result = analyze(&answers);
    assert_eq!(
        result.recommendations,
        strings(&[
            "Slow Discovery Journeys",
            "Tender Touch Guides",
            "Beginner Connection Rituals",
            "Romantic Travel Planner",
        ])
    );
}

// ---------------------------------------------------------------------------
// Serialization boundary
// ---------------------------------------------------------------------------

#[test]
fn result_serializes_for_storage() {
    let answers =
        AnswerRecord::from_json(include_str!("fixtures/passionate_adventurer.json")).unwrap();
    let result = analyze(&answers);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["persona"]["key"], "passionate-adventurer");
    assert_eq!(json["persona"]["triggers"][1], "roleplay turn-on");
    assert!(json["personalizedMessage"].is_string());
    assert_eq!(json["insights"][0]["category"], "challenge");

    let restored: AnalysisResult = serde_json::from_value(json).unwrap();
    assert_eq!(restored, result);
}
