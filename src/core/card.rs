//! # Cards
//!
//! The dashboard offers exactly three actions. Each one is a `CardKind`
//! paired with fixed display copy in [`CARDS`]. The set is closed: there is
//! no runtime registration of new cards.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which workflow panel a card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Email,
    Transcript,
    Youtube,
}

impl CardKind {
    /// Display order, left to right.
    pub const ALL: [CardKind; 3] = [CardKind::Email, CardKind::Transcript, CardKind::Youtube];

    pub fn index(self) -> usize {
        match self {
            CardKind::Email => 0,
            CardKind::Transcript => 1,
            CardKind::Youtube => 2,
        }
    }

    /// Number key that expands this card.
    pub fn hotkey(self) -> char {
        match self {
            CardKind::Email => '1',
            CardKind::Transcript => '2',
            CardKind::Youtube => '3',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.hotkey() == c)
    }

    /// Next card in display order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous card in display order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Email => write!(f, "email"),
            CardKind::Transcript => write!(f, "transcript"),
            CardKind::Youtube => write!(f, "youtube"),
        }
    }
}

/// Static display copy for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDef {
    pub kind: CardKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CARDS: [CardDef; 3] = [
    CardDef {
        kind: CardKind::Email,
        title: "Send AR Analyst Email",
        description: "Run today's incremental email process",
    },
    CardDef {
        kind: CardKind::Transcript,
        title: "Summarize Transcripts",
        description: "Upload a file to generate a summary",
    },
    CardDef {
        kind: CardKind::Youtube,
        title: "Analyze Youtube Transcript",
        description: "Paste a URL for a transcript + keywords",
    },
];

pub fn card_def(kind: CardKind) -> &'static CardDef {
    &CARDS[kind.index()]
}
