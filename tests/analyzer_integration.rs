use emoji_analyzer::{
    Category, Context, WebElement, analyze_web_elements, batch_analyze_elements,
    get_emoji_suggestions,
};
use std::collections::HashMap;

fn usable(tag: &str, text: &str) -> WebElement {
    WebElement::new(tag)
        .with_text(text)
        .with_visibility(true)
        .with_accessibility(true)
}

#[test]
fn analysis_invariants_hold_for_varied_inputs() {
    let inputs: Vec<Vec<WebElement>> = vec![
        vec![],
        vec![usable("span", "📍 London")],
        vec![usable("p", "3+ years experience"), usable("p", "music producer")],
        vec![WebElement::new("div")],
        vec![usable("div", "")],
        vec![usable("h1", "rocket launch"), usable("p", "success story")],
    ];

    for elements in &inputs {
        let analysis = analyze_web_elements(elements);

        assert!(
            (0.0..=1.0).contains(&analysis.confidence),
            "confidence {} out of range",
            analysis.confidence
        );
        assert!(
            !analysis.alternatives.contains(&analysis.emoji),
            "alternatives must not repeat the chosen emoji"
        );
        assert!(!analysis.emoji.is_empty());
        assert!(!analysis.reasoning.is_empty());
    }
}

#[test]
fn empty_input_returns_default_analysis() {
    let analysis = analyze_web_elements(&[]);

    assert_eq!(analysis.emoji, "❓");
    assert_eq!(analysis.confidence, 0.0);
    assert_eq!(analysis.reasoning, "No elements provided");
    assert_eq!(analysis.alternatives, vec!["❔", "⚠️", "🤔"]);
}

#[test]
fn london_wins_over_music_in_same_group() {
    let elements = vec![
        usable("span", "London, UK"),
        usable("p", "music producer at night"),
    ];

    let analysis = analyze_web_elements(&elements);

    // Location is checked before music at both the element and context level
    assert!(analysis.extracted_data.has_category(Category::Location));
    assert!(analysis.extracted_data.locations.contains("london"));
    assert!(analysis.extracted_data.locations.contains("uk"));
    assert_eq!(analysis.emoji, "🇬🇧");
}

#[test]
fn years_of_experience_become_a_fact() {
    let elements = vec![usable("h2", "3+ years experience")];

    let analysis = analyze_web_elements(&elements);

    assert!(analysis.extracted_data.experiences.contains("3 years"));
    assert!(analysis.extracted_data.has_category(Category::Experience));
}

#[test]
fn invisible_elements_contribute_nothing() {
    let hidden = WebElement::new("span")
        .with_text("music producer in london")
        .with_visibility(false)
        .with_accessibility(true);

    let analysis = analyze_web_elements(&[hidden]);

    let data = &analysis.extracted_data;
    assert_eq!(data.valid_elements, 0);
    assert!(data.keywords.is_empty());
    assert!(data.categories.is_empty());
    assert!(data.locations.is_empty());
    assert!(data.music.is_empty());
    assert!(data.confidence_scores.is_empty());
}

#[test]
fn inaccessible_elements_contribute_nothing() {
    let inaccessible = WebElement::new("span")
        .with_text("music producer")
        .with_visibility(true)
        .with_accessibility(false);

    let analysis = analyze_web_elements(&[inaccessible]);
    assert_eq!(analysis.extracted_data.valid_elements, 0);
}

#[test]
fn analysis_is_idempotent() {
    let mut attrs = HashMap::new();
    attrs.insert("aria-label".to_string(), "Producer badge".to_string());

    let elements = vec![
        usable("span", "📍 London").with_class_name("location-badge"),
        usable("p", "3+ years experience").with_attributes(attrs),
        WebElement::new("div").with_text("hidden noise"),
    ];

    let first = analyze_web_elements(&elements);
    let second = analyze_web_elements(&elements);

    assert_eq!(first, second);
}

#[test]
fn music_suggestions_come_from_music_entries_only() {
    let suggestions = get_emoji_suggestions("music", 3);

    assert!(suggestions.len() <= 3);
    let music_emojis = ["🎵", "🎶", "🎧", "🎤", "🎹", "🎸", "▶️", "🔊"];
    for emoji in &suggestions {
        assert!(
            music_emojis.contains(&emoji.as_str()),
            "{} is not from a music entry",
            emoji
        );
    }

    // Deduplicated even though 🎵 and 🎧 appear in both music entries
    let mut deduped = suggestions.clone();
    deduped.dedup();
    assert_eq!(deduped, suggestions);
}

#[test]
fn pin_london_span_selects_location_rule() {
    let elements = vec![usable("span", "📍 London")];

    let analysis = analyze_web_elements(&elements);
    let data = &analysis.extracted_data;

    assert!(data.has_category(Category::Location));
    assert_eq!(data.valid_elements, 1);
    assert_eq!(analysis.emoji, "🇬🇧");
    assert!(analysis.confidence > 0.3);
    assert_eq!(Context::Location.as_str(), "location");
    assert!(analysis.reasoning.contains("location context"));
}

#[test]
fn batch_analysis_matches_individual_analysis() {
    let groups = vec![
        vec![usable("span", "📍 London")],
        vec![usable("p", "music producer")],
        vec![],
    ];

    let batch = batch_analyze_elements(&groups);
    assert_eq!(batch.len(), 3);

    for (group, from_batch) in groups.iter().zip(&batch) {
        assert_eq!(&analyze_web_elements(group), from_batch);
    }
}

#[test]
fn garbled_text_is_cleaned_before_matching() {
    // Corrupted multi-byte artifacts around the payload text
    let elements = vec![usable("span", "ðŸ“ music producer")];

    let analysis = analyze_web_elements(&elements);

    assert!(analysis.extracted_data.keywords.contains("music"));
    assert_eq!(analysis.emoji, "🎵");
}

#[test]
fn mixed_visibility_group_uses_only_visible_elements() {
    let elements = vec![
        usable("p", "my laptop and computer"),
        WebElement::new("p")
            .with_text("music producer")
            .with_visibility(false)
            .with_accessibility(false),
    ];

    let analysis = analyze_web_elements(&elements);
    let data = &analysis.extracted_data;

    assert_eq!(data.valid_elements, 1);
    assert!(data.has_category(Category::Technology));
    assert!(!data.has_category(Category::Music));
    assert_eq!(analysis.emoji, "💻");
}
