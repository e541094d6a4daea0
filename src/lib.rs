//! # emoji-analyzer
//!
//! A Rust library for analyzing web elements and selecting best-fit emoji
//! responses based on content, context, and attributes.
//!
//! ## Features
//!
//! - **Element Classification**: Normalize text, extract keywords, and assign
//!   each element a content category with a confidence score
//! - **Context Aggregation**: Combine a group of elements into a single data
//!   bag and an overall context
//! - **Rule-Table Selection**: Score a fixed keyword/emoji table to pick a
//!   primary emoji, ranked alternatives, and a human-readable justification
//! - **Suggestion Lookup**: Query the rule table directly for emoji matching
//!   a free-form context string
//!
//! Elements are supplied by an external DOM inspector or test harness; the
//! analyzer never queries layout or style itself, and never renders anything.
//!
//! ## Analyzing elements
//!
//! ```rust
//! use emoji_analyzer::{WebElement, analyze_web_elements};
//!
//! let elements = vec![
//!     WebElement::new("span")
//!         .with_text("📍 London")
//!         .with_visibility(true)
//!         .with_accessibility(true),
//! ];
//!
//! let analysis = analyze_web_elements(&elements);
//! assert_eq!(analysis.emoji, "🇬🇧");
//! assert!(analysis.confidence > 0.3);
//! println!("{}: {}", analysis.emoji, analysis.reasoning);
//! ```
//!
//! Analysis never fails from the caller's perspective: empty input and
//! internal faults both degrade to a default analysis whose `reasoning`
//! explains what happened.
//!
//! ## Suggestions for a context
//!
//! ```rust
//! use emoji_analyzer::get_emoji_suggestions;
//!
//! let suggestions = get_emoji_suggestions("music", 3);
//! assert_eq!(suggestions, vec!["🎵", "🎶", "🎧"]);
//! ```
//!
//! ## Concurrency
//!
//! Every entry point is synchronous and touches no shared mutable state
//! beyond the constant rule table, so callers may fan out batch analysis
//! across threads freely.
//!
//! ## Module Overview
//!
//! - [`element`]: Input model ([`WebElement`]) and per-element processing
//! - [`analysis`]: Aggregation, context determination, and emoji selection
//! - [`analyzer`]: Public entry points
//! - [`mapping`]: The static keyword → emoji rule table
//! - [`error`]: Error types for the JSON boundaries

pub mod analysis;
pub mod analyzer;
pub mod element;
pub mod error;
pub mod mapping;

pub use analysis::{Context, EmojiAnalysis, EmojiSelection, ExtractedData};
pub use analyzer::{
    analyze_web_elements, batch_analyze_elements, get_emoji_suggestions, parse_element_groups,
};
pub use element::{Category, ProcessedElement, WebElement};
pub use error::{AnalyzerError, Result};
pub use mapping::{EMOJI_DATABASE, EmojiMapping};
