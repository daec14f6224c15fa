//! System emoji alias table.
//!
//! A static alias-to-sheet-index table registered into shared state at the
//! end of every bootstrap, unconditionally. Indexes address the bundled
//! emoji sprite sheet.

use std::collections::HashMap;

/// Alias-to-index lookup for the bundled emoji sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiTable {
    entries: HashMap<&'static str, u16>,
}

impl EmojiTable {
    /// Sheet index for an alias, if known.
    pub fn index_of(&self, alias: &str) -> Option<u16> {
        self.entries.get(alias).copied()
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Aliases in sheet order.
const ALIASES: &[&str] = &[
    "smile",
    "grin",
    "joy",
    "wink",
    "blush",
    "sweat_smile",
    "thinking",
    "neutral_face",
    "cry",
    "sob",
    "angry",
    "scream",
    "heart",
    "broken_heart",
    "thumbsup",
    "thumbsdown",
    "clap",
    "wave",
    "pray",
    "muscle",
    "fire",
    "star",
    "tada",
    "rocket",
    "eyes",
    "zzz",
    "check",
    "x",
    "warning",
    "question",
];

/// Build the static alias table.
pub fn alias_table() -> EmojiTable {
    let entries = ALIASES.iter().enumerate().map(|(index, alias)| (*alias, index as u16)).collect();
    EmojiTable { entries }
}
