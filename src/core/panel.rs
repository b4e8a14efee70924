//! # Card Panels
//!
//! Each card owns a small state machine that is only meaningful while the
//! card is expanded. The panel is replaced with a fresh one whenever the
//! card collapses, so reopening a card always starts from its initial
//! sub-state.
//!
//! ```text
//! Email       AwaitingSend ──send──▶ Sent
//!
//! Transcript  NoFile ──select/drop──▶ FileSelected ──generate──▶ SummaryReady
//!               ▲                         │
//!               └────────remove───────────┘
//!
//! Youtube     Transcribe ◀──tab──▶ KeywordSearch   (one URL buffer per tab)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::card::CardKind;

// ============================================================================
// Uploaded file
// ============================================================================

/// A file the user picked for summarization.
///
/// Only metadata is kept. The path is the content handle; bytes are never
/// read by the dashboard itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    /// `None` when the path could not be stat'ed. Selection still succeeds.
    pub size: Option<u64>,
    pub path: PathBuf,
}

impl UploadedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let size = fs::metadata(&path).ok().map(|meta| meta.len());
        Self { name, size, path }
    }

    /// Builds a file from text a terminal delivered for a drag-and-drop.
    ///
    /// Terminals paste the dropped path, sometimes quoted, shell-escaped or
    /// as a `file://` URI. Returns `None` for blank input.
    pub fn from_dropped(raw: &str) -> Option<Self> {
        let first = raw.lines().map(str::trim).find(|l| !l.is_empty())?;
        let unquoted = first
            .strip_prefix('\'')
            .and_then(|s| s.strip_suffix('\''))
            .or_else(|| first.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
            .unwrap_or(first);
        let without_scheme = unquoted.strip_prefix("file://").unwrap_or(unquoted);
        let unescaped = without_scheme.replace("\\ ", " ");
        if unescaped.is_empty() {
            return None;
        }
        Some(Self::from_path(Path::new(&unescaped)))
    }

    /// Human readable size, e.g. `"12.5 KB"`.
    pub fn size_label(&self) -> Option<String> {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
        let bytes = self.size?;
        if bytes < 1024 {
            return Some(format!("{bytes} B"));
        }
        let mut value = bytes as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        Some(format!("{value:.1} {}", UNITS[unit]))
    }
}

// ============================================================================
// Email
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStage {
    AwaitingSend,
    Sent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailPanel {
    pub sent: bool,
}

impl EmailPanel {
    pub fn stage(&self) -> EmailStage {
        if self.sent {
            EmailStage::Sent
        } else {
            EmailStage::AwaitingSend
        }
    }

    /// Returns `true` if this call moved the panel to `Sent`.
    pub fn send(&mut self) -> bool {
        let fired = !self.sent;
        self.sent = true;
        fired
    }
}

// ============================================================================
// Transcript
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptStage {
    NoFile,
    FileSelected,
    SummaryReady,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptPanel {
    pub file: Option<UploadedFile>,
    pub drag_over: bool,
    pub summary_ready: bool,
}

impl TranscriptPanel {
    pub fn stage(&self) -> TranscriptStage {
        match (&self.file, self.summary_ready) {
            (_, true) => TranscriptStage::SummaryReady,
            (Some(_), false) => TranscriptStage::FileSelected,
            (None, false) => TranscriptStage::NoFile,
        }
    }

    /// Only the no-file stage shows a drop zone to hover.
    pub fn drag_over(&mut self) {
        if self.stage() == TranscriptStage::NoFile {
            self.drag_over = true;
        }
    }

    pub fn drag_leave(&mut self) {
        self.drag_over = false;
    }

    /// A drop always ends the drag. The file is only taken while no file
    /// is selected, since the drop zone is hidden otherwise.
    pub fn drop_file(&mut self, file: UploadedFile) -> bool {
        self.drag_over = false;
        self.select_file(file)
    }

    pub fn select_file(&mut self, file: UploadedFile) -> bool {
        if self.stage() != TranscriptStage::NoFile {
            return false;
        }
        self.file = Some(file);
        true
    }

    pub fn remove_file(&mut self) -> bool {
        if self.stage() != TranscriptStage::FileSelected {
            return false;
        }
        self.file = None;
        true
    }

    pub fn can_generate(&self) -> bool {
        self.stage() == TranscriptStage::FileSelected
    }

    /// Moves to `SummaryReady` and hands back the file to summarize.
    /// No-op without a selected file.
    pub fn generate_summary(&mut self) -> Option<UploadedFile> {
        if !self.can_generate() {
            return None;
        }
        self.summary_ready = true;
        self.file.clone()
    }
}

// ============================================================================
// YouTube
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum YoutubeTab {
    #[default]
    Transcribe,
    KeywordSearch,
}

impl YoutubeTab {
    pub const ALL: [YoutubeTab; 2] = [YoutubeTab::Transcribe, YoutubeTab::KeywordSearch];

    pub fn label(self) -> &'static str {
        match self {
            YoutubeTab::Transcribe => "Transcribe",
            YoutubeTab::KeywordSearch => "Keyword Search",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            YoutubeTab::Transcribe => "Get Transcripts",
            YoutubeTab::KeywordSearch => "Get Keywords",
        }
    }
}

/// Two tabs, each with its own URL buffer. Switching tabs never copies
/// text between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YoutubePanel {
    pub tab: YoutubeTab,
    transcribe_url: String,
    keyword_url: String,
}

impl YoutubePanel {
    pub fn url(&self, tab: YoutubeTab) -> &str {
        match tab {
            YoutubeTab::Transcribe => &self.transcribe_url,
            YoutubeTab::KeywordSearch => &self.keyword_url,
        }
    }

    pub fn active_url(&self) -> &str {
        self.url(self.tab)
    }

    fn active_url_mut(&mut self) -> &mut String {
        match self.tab {
            YoutubeTab::Transcribe => &mut self.transcribe_url,
            YoutubeTab::KeywordSearch => &mut self.keyword_url,
        }
    }

    pub fn select_tab(&mut self, tab: YoutubeTab) {
        self.tab = tab;
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.active_url_mut().push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.active_url_mut().pop();
    }

    /// Appends pasted text. URL fields are single-line, so line breaks
    /// are dropped.
    pub fn paste(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
        self.active_url_mut().push_str(&cleaned);
    }
}

// ============================================================================
// Panel
// ============================================================================

/// Transient per-card state, tagged by card kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Email(EmailPanel),
    Transcript(TranscriptPanel),
    Youtube(YoutubePanel),
}

impl Panel {
    /// The initial sub-state for a card.
    pub fn new(kind: CardKind) -> Self {
        match kind {
            CardKind::Email => Panel::Email(EmailPanel::default()),
            CardKind::Transcript => Panel::Transcript(TranscriptPanel::default()),
            CardKind::Youtube => Panel::Youtube(YoutubePanel::default()),
        }
    }

    pub fn kind(&self) -> CardKind {
        match self {
            Panel::Email(_) => CardKind::Email,
            Panel::Transcript(_) => CardKind::Transcript,
            Panel::Youtube(_) => CardKind::Youtube,
        }
    }

    /// True when nothing has changed since the panel was created.
    pub fn is_pristine(&self) -> bool {
        *self == Panel::new(self.kind())
    }

    pub fn reset(&mut self) {
        *self = Panel::new(self.kind());
    }
}
