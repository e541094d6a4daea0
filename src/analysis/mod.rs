//! Aggregation and emoji selection
//!
//! The second half of the pipeline: processed elements are aggregated into
//! an [`ExtractedData`] bag, an overall [`Context`] is determined, and the
//! rule table is scored to produce an [`EmojiAnalysis`].

pub mod aggregate;
pub mod context;
pub mod select;

pub use aggregate::extract_meaningful_data;
pub use context::{Context, determine_context};
pub use select::{EmojiSelection, select_emoji};

use crate::element::Category;
use crate::error::Result;
use crate::mapping::{DEFAULT_ALTERNATIVES, DEFAULT_EMOJI};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Aggregated data mined from the valid elements of one group.
///
/// All keyword and fact collections are deduplicated by construction and
/// preserve first-seen order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedData {
    /// Category → cleaned texts of the valid elements assigned to it
    pub categories: IndexMap<Category, Vec<String>>,

    /// Union of all valid elements' keywords
    pub keywords: IndexSet<String>,

    /// Location facts ("london", "uk", "england")
    pub locations: IndexSet<String>,

    /// Experience facts ("<N> years")
    pub experiences: IndexSet<String>,

    /// Technology facts ("computer", "laptop", "development")
    pub technologies: IndexSet<String>,

    /// Music facts ("music", "producer", "sound")
    pub music: IndexSet<String>,

    /// Per-element confidence scores of the valid elements
    pub confidence_scores: Vec<f64>,

    /// Number of elements that passed the validity threshold
    pub valid_elements: usize,
}

impl ExtractedData {
    /// Whether a category was assigned to at least one valid element
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }
}

/// Final analysis for one element group: the chosen emoji with its
/// confidence, reasoning, and ranked alternatives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmojiAnalysis {
    /// Space-joined raw text content of all input elements, unmodified
    pub original_content: String,

    /// Aggregated data bag the selection was based on
    pub extracted_data: ExtractedData,

    /// Normalized selection confidence in [0, 1]
    pub confidence: f64,

    /// Selected primary emoji
    pub emoji: String,

    /// Human-readable justification for the choice
    pub reasoning: String,

    /// Ordered fallback emoji; never repeats the primary
    pub alternatives: Vec<String>,
}

impl EmojiAnalysis {
    /// Default analysis used when no elements were provided or analysis
    /// degraded: question-mark emoji, zero confidence, and the given reason.
    pub fn default_with_reason(reason: impl Into<String>) -> Self {
        Self {
            original_content: String::new(),
            extracted_data: ExtractedData::default(),
            confidence: 0.0,
            emoji: DEFAULT_EMOJI.to_string(),
            reasoning: reason.into(),
            alternatives: DEFAULT_ALTERNATIVES.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Serialize the analysis to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_with_reason() {
        let analysis = EmojiAnalysis::default_with_reason("No elements provided");

        assert_eq!(analysis.emoji, "❓");
        assert_eq!(analysis.confidence, 0.0);
        assert_eq!(analysis.reasoning, "No elements provided");
        assert_eq!(analysis.alternatives, vec!["❔", "⚠️", "🤔"]);
        assert_eq!(analysis.extracted_data.valid_elements, 0);
        assert!(analysis.original_content.is_empty());
    }

    #[test]
    fn test_has_category() {
        let mut data = ExtractedData::default();
        data.categories
            .insert(Category::Music, vec!["music producer".to_string()]);

        assert!(data.has_category(Category::Music));
        assert!(!data.has_category(Category::Location));
    }

    #[test]
    fn test_analysis_to_json() {
        let analysis = EmojiAnalysis::default_with_reason("test");
        let json = analysis.to_json().unwrap();

        assert!(json.contains("\"emoji\""));
        assert!(json.contains("❓"));

        let round_trip: EmojiAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(round_trip, analysis);
    }
}
