//! Element input model and per-element processing
//!
//! This module covers the first half of the analysis pipeline:
//! - WebElement: externally-supplied description of a markup node
//! - ProcessedElement: derived text, keywords, category, and confidence
//! - Category: fixed set of content classes assigned per element

pub mod processed;
pub mod web_element;

pub use processed::{Category, ProcessedElement, clean_text_content, extract_keywords};
pub use web_element::WebElement;
