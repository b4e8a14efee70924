//! # Core Dashboard Logic
//!
//! This module contains the dashboard's state machines.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Dashboard (state)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Execute
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                      ┌─────────────────────┐
//!     │    TUI     │                      │  WorkflowExecutor   │
//!     │  Adapter   │                      │  (stub or service)  │
//!     │ (ratatui)  │                      │                     │
//!     └────────────┘                      └─────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`card`]: `CardKind` and the fixed card copy
//! - [`panel`]: per-card transient state machines
//! - [`state`]: the `Dashboard` struct, owner of the single selection
//! - [`action`]: the `Action` enum and `update()`
//! - [`workflow`]: the executor capability behind each card
//! - [`config`]: layered configuration

pub mod action;
pub mod card;
pub mod config;
pub mod panel;
pub mod state;
pub mod workflow;
