use crate::analysis::ExtractedData;
use crate::element::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single aggregate context summarizing a whole element group.
///
/// Distinct from the per-element [`Category`]: a group of mixed elements
/// still resolves to one context via a fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    Location,
    Experience,
    Music,
    Technology,
    Progress,
    General,
}

impl Context {
    /// Lowercase tag compared against rule-table category labels
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Location => "location",
            Context::Experience => "experience",
            Context::Music => "music",
            Context::Technology => "technology",
            Context::Progress => "progress",
            Context::General => "general",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine the aggregate context with a fixed-priority check: a category
/// only claims the context when its fact list backs it up, except Progress
/// which has no fact list.
pub fn determine_context(data: &ExtractedData) -> Context {
    if data.has_category(Category::Location) && !data.locations.is_empty() {
        return Context::Location;
    }
    if data.has_category(Category::Experience) && !data.experiences.is_empty() {
        return Context::Experience;
    }
    if data.has_category(Category::Music) && !data.music.is_empty() {
        return Context::Music;
    }
    if data.has_category(Category::Technology) && !data.technologies.is_empty() {
        return Context::Technology;
    }
    if data.has_category(Category::Progress) {
        return Context::Progress;
    }

    Context::General
}
