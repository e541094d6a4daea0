use crate::analysis::ExtractedData;
use crate::element::{Category, ProcessedElement};
use once_cell::sync::Lazy;
use regex::Regex;

/// First "<digits>+ years" occurrence, e.g. "3+ years" or "10 year"
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\+?\s*years?").expect("year pattern is valid"));

/// Aggregate the valid elements of one group into an [`ExtractedData`] bag.
///
/// Invalid elements are skipped entirely; an all-invalid group yields empty
/// collections and `valid_elements == 0`. This step never fails.
pub fn extract_meaningful_data(elements: &[ProcessedElement<'_>]) -> ExtractedData {
    let mut data = ExtractedData::default();

    for element in elements {
        if !element.is_valid {
            continue;
        }

        data.valid_elements += 1;
        data.confidence_scores.push(element.confidence);

        data.categories
            .entry(element.category)
            .or_default()
            .push(element.text.clone());

        match element.category {
            Category::Location => data.locations.extend(extract_location_data(&element.text)),
            Category::Experience => {
                data.experiences.extend(extract_experience_data(&element.text))
            }
            Category::Technology => {
                data.technologies.extend(extract_technology_data(&element.text))
            }
            Category::Music => data.music.extend(extract_music_data(&element.text)),
            _ => {}
        }

        data.keywords.extend(element.keywords.iter().cloned());
    }

    data
}

/// Location facts: independent checks, so one text can yield several
fn extract_location_data(text: &str) -> Vec<String> {
    let mut locations = Vec::new();

    if text.contains("london") {
        locations.push("london".to_string());
    }
    if text.contains("uk") {
        locations.push("uk".to_string());
    }
    if text.contains("england") {
        locations.push("england".to_string());
    }

    locations
}

/// Experience facts: the first year count mentioned, as "<N> years"
fn extract_experience_data(text: &str) -> Vec<String> {
    let mut experiences = Vec::new();

    if let Some(captures) = YEAR_PATTERN.captures(text) {
        experiences.push(format!("{} years", &captures[1]));
    }

    experiences
}

/// Technology facts
fn extract_technology_data(text: &str) -> Vec<String> {
    let mut technologies = Vec::new();

    if text.contains("computer") {
        technologies.push("computer".to_string());
    }
    if text.contains("laptop") {
        technologies.push("laptop".to_string());
    }
    if text.contains("development") {
        technologies.push("development".to_string());
    }

    technologies
}

/// Music facts
fn extract_music_data(text: &str) -> Vec<String> {
    let mut music = Vec::new();

    if text.contains("music") {
        music.push("music".to_string());
    }
    if text.contains("producer") {
        music.push("producer".to_string());
    }
    if text.contains("sound") {
        music.push("sound".to_string());
    }

    music
}
