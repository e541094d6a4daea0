use crate::element::WebElement;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Content class assigned to a single element.
///
/// Categorization is an ordered short-circuit: the first matching rule wins,
/// so text containing both "london" and "music" is `Location`. This ordering
/// is observable behavior, not an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Location,
    Experience,
    Music,
    Technology,
    Tools,
    Progress,
    Unknown,
}

impl Category {
    /// Lowercase tag used in reasoning strings and rule-table comparisons
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Location => "location",
            Category::Experience => "experience",
            Category::Music => "music",
            Category::Technology => "technology",
            Category::Tools => "tools",
            Category::Progress => "progress",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived, per-element view produced by [`ProcessedElement::from_element`].
///
/// Borrows the source element; one instance exists per input element and is
/// discarded after aggregation.
#[derive(Debug, Clone)]
pub struct ProcessedElement<'a> {
    /// The source element this was derived from
    pub original: &'a WebElement,

    /// Cleaned, lowercased, whitespace-normalized text content
    pub text: String,

    /// Deduplicated lowercase tokens from text and attribute values,
    /// in first-seen order
    pub keywords: IndexSet<String>,

    /// Assigned content category
    pub category: Category,

    /// Heuristic signal score in [0, 1]
    pub confidence: f64,

    /// Whether the element carries enough signal to aggregate
    /// (confidence above 0.3)
    pub is_valid: bool,
}

/// Residue of UTF-8 emoji bytes mis-decoded as windows-1252; stripped before
/// any other normalization.
const CORRUPTED_CHARS: [char; 4] = ['\u{00F0}', '\u{0178}', '\u{201C}', '\u{201D}'];

/// Minimum per-element confidence for inclusion in aggregation
const VALIDITY_THRESHOLD: f64 = 0.3;

impl<'a> ProcessedElement<'a> {
    /// Process a single element: gate on visibility/accessibility, then
    /// normalize text, extract keywords, categorize, and score.
    ///
    /// Elements that are not visible or not accessible (either flag missing
    /// or false) short-circuit to the all-default result before any text
    /// work happens.
    pub fn from_element(element: &'a WebElement) -> Self {
        let mut result = Self::unusable(element);

        if !element.is_usable() {
            return result;
        }

        result.text = clean_text_content(element.text_content.as_deref().unwrap_or(""));
        result.keywords = extract_keywords(&result.text, &element.attributes);
        result.category = categorize(element);
        result.confidence = calculate_confidence(element, &result);
        result.is_valid = result.confidence > VALIDITY_THRESHOLD;

        result
    }

    /// All-default processed form for gated-out elements
    fn unusable(element: &'a WebElement) -> Self {
        Self {
            original: element,
            text: String::new(),
            keywords: IndexSet::new(),
            category: Category::Unknown,
            confidence: 0.0,
            is_valid: false,
        }
    }
}

/// Clean and normalize raw text content: strip corrupted multi-byte
/// artifacts, collapse whitespace runs, trim, lowercase.
///
/// Pure and deterministic; empty input yields an empty string.
pub fn clean_text_content(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !CORRUPTED_CHARS.contains(c))
        .collect();

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extract deduplicated keywords from normalized text and attribute values.
///
/// Tokens are whitespace-separated and kept only when longer than one
/// character; first-seen order is preserved for reproducible output.
pub fn extract_keywords(text: &str, attributes: &HashMap<String, String>) -> IndexSet<String> {
    let mut keywords = IndexSet::new();

    for word in text.split_whitespace() {
        if word.chars().count() > 1 {
            keywords.insert(word.to_string());
        }
    }

    for value in attributes.values() {
        for word in value.to_lowercase().split_whitespace() {
            if word.chars().count() > 1 {
                keywords.insert(word.to_string());
            }
        }
    }

    keywords
}

/// Assign a category from ordered substring tests over the raw text content
/// (lowercased), falling back to class-name substrings, then `Unknown`.
pub fn categorize(element: &WebElement) -> Category {
    let text = element
        .text_content
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    if text.contains("london") || text.contains("📍") {
        return Category::Location;
    }
    if text.contains("years") || text.contains("experience") || text.contains("📅") {
        return Category::Experience;
    }
    if text.contains("music") || text.contains("producer") || text.contains("🎵") {
        return Category::Music;
    }
    if text.contains("computer") || text.contains("laptop") || text.contains("💻") {
        return Category::Technology;
    }
    if text.contains("tools") || text.contains("development") || text.contains("🛠️") {
        return Category::Tools;
    }
    if text.contains("rocket") || text.contains("launch") || text.contains("🚀") {
        return Category::Progress;
    }

    if let Some(class_name) = &element.class_name {
        if class_name.contains("location") {
            return Category::Location;
        }
        if class_name.contains("experience") {
            return Category::Experience;
        }
        if class_name.contains("music") {
            return Category::Music;
        }
        if class_name.contains("tech") {
            return Category::Technology;
        }
    }

    Category::Unknown
}

/// Additive confidence score for a processed element, clamped at 1.0:
/// non-empty text +0.3, text longer than 5 chars +0.2, keywords
/// +min(count * 0.1, 0.3), known category +0.2, accessible +0.1,
/// visible +0.1.
fn calculate_confidence(element: &WebElement, result: &ProcessedElement<'_>) -> f64 {
    let mut confidence: f64 = 0.0;

    if !result.text.is_empty() {
        confidence += 0.3;
    }
    if result.text.chars().count() > 5 {
        confidence += 0.2;
    }

    confidence += (result.keywords.len() as f64 * 0.1).min(0.3);

    if result.category != Category::Unknown {
        confidence += 0.2;
    }

    if element.is_accessible.unwrap_or(false) {
        confidence += 0.1;
    }
    if element.is_visible.unwrap_or(false) {
        confidence += 0.1;
    }

    confidence.min(1.0)
}
