use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Abstract description of a markup element, supplied by an external DOM
/// inspector or test harness.
///
/// The analyzer never queries layout or style itself: `is_visible` and
/// `is_accessible` are computed by the caller. Elements missing either flag,
/// or with either set to `false`, are treated as unusable for classification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WebElement {
    /// Lowercase element type identifier (e.g., "div", "span", "button")
    pub tag_name: String,

    /// Raw text content, possibly containing garbled multi-byte artifacts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,

    /// Element attributes (e.g., id, class, aria-label, etc.)
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Space-separated class list, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Element ID, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Child elements. The analyzer never traverses these; they are carried
    /// for external collaborators that want contextual lookup.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WebElement>,

    /// Whether the element is visible in the viewport (computed externally)
    #[serde(default)]
    pub is_visible: Option<bool>,

    /// Whether the element is accessible: not hidden, non-zero opacity,
    /// sufficient contrast (computed externally)
    #[serde(default)]
    pub is_accessible: Option<bool>,
}

impl WebElement {
    /// Create a new WebElement with the given tag name
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            text_content: None,
            attributes: HashMap::new(),
            class_name: None,
            id: None,
            children: Vec::new(),
            is_visible: None,
            is_accessible: None,
        }
    }

    /// Builder method: set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Builder method: set attributes
    pub fn with_attributes(mut self, attributes: HashMap<String, String>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method: set class name
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Builder method: set element ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<WebElement>) -> Self {
        self.children = children;
        self
    }

    /// Builder method: set visibility flag
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.is_visible = Some(visible);
        self
    }

    /// Builder method: set accessibility flag
    pub fn with_accessibility(mut self, accessible: bool) -> Self {
        self.is_accessible = Some(accessible);
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Check if the element carries a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        if let Some(classes) = &self.class_name {
            classes.split_whitespace().any(|c| c == class_name)
        } else {
            false
        }
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Whether both externally-computed flags mark this element usable
    pub fn is_usable(&self) -> bool {
        self.is_accessible.unwrap_or(false) && self.is_visible.unwrap_or(false)
    }
}
