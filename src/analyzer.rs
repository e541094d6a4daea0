//! Public entry points
//!
//! Every function here is a pure function of its input plus the constant
//! rule table: no state persists across calls, nothing blocks, and results
//! are safe to compute concurrently from multiple callers.

use crate::analysis::{EmojiAnalysis, determine_context, extract_meaningful_data, select_emoji};
use crate::element::{ProcessedElement, WebElement};
use crate::error::{AnalyzerError, Result};
use crate::mapping::EMOJI_DATABASE;
use indexmap::IndexSet;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Analyze a group of web elements and return the best-fit emoji with
/// confidence, reasoning, and alternatives.
///
/// Never fails from the caller's perspective: an empty input yields the
/// default analysis with reasoning "No elements provided", and an unexpected
/// internal fault degrades to a default analysis carrying the failure
/// message instead of unwinding into the caller.
pub fn analyze_web_elements(elements: &[WebElement]) -> EmojiAnalysis {
    if elements.is_empty() {
        return EmojiAnalysis::default_with_reason("No elements provided");
    }

    match catch_unwind(AssertUnwindSafe(|| run_analysis(elements))) {
        Ok(analysis) => analysis,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "Unknown error".to_string());
            log::error!("Element analysis failed: {}", message);
            EmojiAnalysis::default_with_reason(format!("Analysis error: {}", message))
        }
    }
}

fn run_analysis(elements: &[WebElement]) -> EmojiAnalysis {
    let processed: Vec<ProcessedElement> =
        elements.iter().map(ProcessedElement::from_element).collect();

    let extracted_data = extract_meaningful_data(&processed);
    let context = determine_context(&extracted_data);
    let selection = select_emoji(&extracted_data, context);

    log::debug!(
        "Analyzed {} elements ({} valid, context {}): {}",
        elements.len(),
        extracted_data.valid_elements,
        context,
        selection.emoji
    );

    EmojiAnalysis {
        original_content: elements
            .iter()
            .map(|el| el.text_content.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" "),
        extracted_data,
        confidence: selection.confidence,
        emoji: selection.emoji,
        reasoning: selection.reasoning,
        alternatives: selection.alternatives,
    }
}

/// Analyze multiple element groups independently.
///
/// Groups share no state and have no ordering dependency; output order
/// matches input order.
pub fn batch_analyze_elements(groups: &[Vec<WebElement>]) -> Vec<EmojiAnalysis> {
    groups.iter().map(|group| analyze_web_elements(group)).collect()
}

/// Look up emoji suggestions for a free-form context string.
///
/// Considers rule-table entries whose category equals `context` or with a
/// keyword that appears inside `context`; flattens their emoji lists,
/// deduplicates preserving order, and returns at most `count` entries
/// (callers conventionally pass 5).
pub fn get_emoji_suggestions(context: &str, count: usize) -> Vec<String> {
    let mut suggestions: IndexSet<&str> = IndexSet::new();

    for mapping in EMOJI_DATABASE {
        let category_match = mapping.category == context;
        let keyword_match = mapping.keywords.iter().any(|k| context.contains(k));

        if category_match || keyword_match {
            suggestions.extend(mapping.emojis.iter().copied());
        }
    }

    suggestions
        .into_iter()
        .take(count)
        .map(String::from)
        .collect()
}

/// Parse an inspector payload into element groups.
///
/// Accepts either an array of element groups (`[[element, ...], ...]`) or a
/// flat array of elements, which is wrapped as a single group.
pub fn parse_element_groups(json: &str) -> Result<Vec<Vec<WebElement>>> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => {
            return Err(AnalyzerError::InvalidInput(
                "expected a JSON array of elements or element groups".to_string(),
            ));
        }
    };

    if items.iter().all(|item| item.is_array()) {
        items
            .into_iter()
            .map(|group| Ok(serde_json::from_value(group)?))
            .collect()
    } else {
        let group: Vec<WebElement> = serde_json::from_value(serde_json::Value::Array(items))?;
        Ok(vec![group])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usable(text: &str) -> WebElement {
        WebElement::new("span")
            .with_text(text)
            .with_visibility(true)
            .with_accessibility(true)
    }

    #[test]
    fn test_empty_input_yields_default() {
        let analysis = analyze_web_elements(&[]);

        assert_eq!(analysis.emoji, "❓");
        assert_eq!(analysis.confidence, 0.0);
        assert_eq!(analysis.reasoning, "No elements provided");
    }

    #[test]
    fn test_original_content_joins_raw_text() {
        let elements = vec![usable("📍 London"), WebElement::new("br"), usable("UK")];
        let analysis = analyze_web_elements(&elements);

        assert_eq!(analysis.original_content, "📍 London  UK");
    }

    #[test]
    fn test_batch_is_independent_per_group() {
        let groups = vec![
            vec![usable("music producer")],
            vec![],
            vec![usable("📍 London")],
        ];

        let results = batch_analyze_elements(&groups);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].emoji, "🎵");
        assert_eq!(results[1].reasoning, "No elements provided");
        assert_eq!(results[2].emoji, "🇬🇧");
    }

    #[test]
    fn test_suggestions_for_music() {
        let suggestions = get_emoji_suggestions("music", 3);
        assert_eq!(suggestions, vec!["🎵", "🎶", "🎧"]);
    }

    #[test]
    fn test_suggestions_dedupe_across_entries() {
        // Both music entries list 🎵 and 🎧; the union keeps one of each
        let suggestions = get_emoji_suggestions("music", 10);
        assert_eq!(suggestions, vec!["🎵", "🎶", "🎧", "🎤", "🎹", "🎸", "▶️", "🔊"]);
    }

    #[test]
    fn test_suggestions_by_keyword_substring() {
        // "rocket" is not a category, but it is a keyword of the progress entry
        let suggestions = get_emoji_suggestions("rocket science", 5);
        assert_eq!(suggestions, vec!["🚀", "🛫", "✈️", "🎯"]);
    }

    #[test]
    fn test_suggestions_unknown_context_empty() {
        assert!(get_emoji_suggestions("zzz", 5).is_empty());
    }

    #[test]
    fn test_parse_flat_element_array() {
        let json = r#"[{"tag_name": "span", "text_content": "hi"}]"#;
        let groups = parse_element_groups(json).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[0][0].tag_name, "span");
    }

    #[test]
    fn test_parse_grouped_elements() {
        let json = r#"[
            [{"tag_name": "span"}, {"tag_name": "p"}],
            [{"tag_name": "div"}]
        ]"#;
        let groups = parse_element_groups(json).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1][0].tag_name, "div");
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_element_groups(r#"{"tag_name": "div"}"#).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_element_groups("not json").unwrap_err();
        assert!(matches!(err, AnalyzerError::Serialization(_)));
    }
}
