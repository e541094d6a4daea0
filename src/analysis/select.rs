use crate::analysis::{Context, ExtractedData};
use crate::mapping::{DEFAULT_ALTERNATIVES, DEFAULT_EMOJI, EMOJI_DATABASE, EmojiMapping};

/// Outcome of scoring the rule table for one element group
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiSelection {
    /// Winning entry's primary emoji
    pub emoji: String,

    /// min(score / 20, 1)
    pub confidence: f64,

    /// Names the matched keywords and the winning category
    pub reasoning: String,

    /// Tail of the winning entry's emoji list, order preserved
    pub alternatives: Vec<String>,
}

/// Score every rule-table entry and pick the best.
///
/// An entry scores its base priority, +5 for every aggregated-keyword /
/// entry-keyword pair where either contains the other (uncapped, so one
/// keyword may hit several entry keywords), and +10 when the context equals
/// the entry's category. The running maximum starts at zero and only a
/// strictly greater score replaces it, so ties keep the earliest entry:
/// table order is the tie-break.
pub fn select_emoji(data: &ExtractedData, context: Context) -> EmojiSelection {
    let mut best_match: Option<&EmojiMapping> = None;
    let mut max_score: u32 = 0;
    let mut reasoning = String::new();

    for mapping in EMOJI_DATABASE {
        let mut score = mapping.priority;
        let mut matched_keywords: Vec<&str> = Vec::new();

        for keyword in &data.keywords {
            for mapping_keyword in mapping.keywords {
                if keyword.contains(mapping_keyword) || mapping_keyword.contains(keyword.as_str())
                {
                    score += 5;
                    matched_keywords.push(keyword);
                }
            }
        }

        if context.as_str() == mapping.category {
            score += 10;
        }

        if score > max_score {
            max_score = score;
            best_match = Some(mapping);
            reasoning = format!(
                "Matched keywords: {} in {} context",
                matched_keywords.join(", "),
                mapping.category
            );
        }
    }

    match best_match {
        Some(mapping) => EmojiSelection {
            emoji: mapping
                .emojis
                .first()
                .copied()
                .unwrap_or(DEFAULT_EMOJI)
                .to_string(),
            confidence: (max_score as f64 / 20.0).min(1.0),
            reasoning,
            alternatives: mapping.emojis.iter().skip(1).map(|e| e.to_string()).collect(),
        },
        None => EmojiSelection {
            emoji: DEFAULT_EMOJI.to_string(),
            confidence: 0.1,
            reasoning: "No suitable match found, using default".to_string(),
            alternatives: DEFAULT_ALTERNATIVES.iter().map(|e| e.to_string()).collect(),
        },
    }
}
