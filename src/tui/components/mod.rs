//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Header`: organisation label, initials badge and welcome line
//! - `StatusBar`: status message and key hints
//! - `ActionCard`: one dashboard card; records its clickable regions
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `PathPromptState`: file path entry standing in for a file picker
//!
//! Card state itself is not component state. It lives in the core
//! `Dashboard` so that the single-selection rule holds by construction.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── header.rs       (Top header)
//! ├── action_card.rs  (Cards, controls, hit map)
//! ├── path_prompt.rs  (File path overlay)
//! └── status_bar.rs   (Bottom status line)
//! ```

pub mod action_card;
pub mod header;
pub mod path_prompt;
pub mod status_bar;

pub use action_card::{ActionCard, Control, HitMap};
pub use header::{HEADER_HEIGHT, Header};
pub use path_prompt::{PathPrompt, PathPromptState, PromptEvent};
pub use status_bar::StatusBar;
