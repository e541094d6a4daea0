//! Static keyword → emoji rule table
//!
//! The table is a process-wide constant: entries are never added, removed,
//! or mutated at runtime, so concurrent readers need no synchronization.
//! Table order is load-bearing: selection ties keep the first entry to
//! reach the maximum score.

/// One rule-table entry: trigger keywords mapped to an ordered emoji list
/// (first is primary, the rest are alternatives), with a priority weight and
/// a category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMapping {
    /// Trigger keywords, matched bidirectionally by substring
    pub keywords: &'static [&'static str],

    /// Candidate emoji, best first
    pub emojis: &'static [&'static str],

    /// Base score contributed before any keyword or context match
    pub priority: u32,

    /// Category label compared against the aggregate context
    pub category: &'static str,
}

/// Emoji returned when no rule-table entry matches
pub const DEFAULT_EMOJI: &str = "❓";

/// Alternatives accompanying the default emoji
pub const DEFAULT_ALTERNATIVES: [&str; 3] = ["❔", "⚠️", "🤔"];

/// The full rule table, highest-signal entries first within each theme
pub const EMOJI_DATABASE: &[EmojiMapping] = &[
    // Location
    EmojiMapping {
        keywords: &["london", "uk", "england", "british", "gb"],
        emojis: &["🇬🇧", "🏴󠁧󠁢󠁥󠁮󠁧󠁿", "🏙️", "📍"],
        priority: 10,
        category: "location",
    },
    EmojiMapping {
        keywords: &["location", "place", "map", "pin", "address", "where"],
        emojis: &["📍", "🗺️", "🏠", "🌍"],
        priority: 8,
        category: "location",
    },
    // Experience / time
    EmojiMapping {
        keywords: &["experience", "years", "time", "duration", "period"],
        emojis: &["⏰", "📅", "📆", "⏳", "⌛"],
        priority: 9,
        category: "time",
    },
    EmojiMapping {
        keywords: &["3+", "three", "3 years", "senior"],
        emojis: &["👔", "💼", "🎯", "⭐"],
        priority: 8,
        category: "experience",
    },
    // Music / audio
    EmojiMapping {
        keywords: &["music", "sound", "audio", "producer", "beat", "song"],
        emojis: &["🎵", "🎶", "🎧", "🎤", "🎹", "🎸"],
        priority: 10,
        category: "music",
    },
    EmojiMapping {
        keywords: &["play", "listen", "hear"],
        emojis: &["▶️", "🔊", "🎵", "🎧"],
        priority: 7,
        category: "music",
    },
    // Technology
    EmojiMapping {
        keywords: &["computer", "laptop", "pc", "mac", "technology"],
        emojis: &["💻", "🖥️", "⌨️", "🖱️"],
        priority: 9,
        category: "technology",
    },
    EmojiMapping {
        keywords: &["tools", "development", "coding", "programming"],
        emojis: &["🛠️", "🔧", "⚙️", "💻"],
        priority: 9,
        category: "technology",
    },
    // Progress / achievement
    EmojiMapping {
        keywords: &["rocket", "launch", "start", "go", "progress"],
        emojis: &["🚀", "🛫", "✈️", "🎯"],
        priority: 8,
        category: "progress",
    },
    EmojiMapping {
        keywords: &["success", "achievement", "win", "complete"],
        emojis: &["✅", "🎉", "🏆", "⭐"],
        priority: 8,
        category: "achievement",
    },
    // Generic fallback
    EmojiMapping {
        keywords: &["default", "unknown", "missing", "error"],
        emojis: &["❓", "❔", "⚠️", "🤔"],
        priority: 1,
        category: "default",
    },
];
