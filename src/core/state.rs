//! # Dashboard State
//!
//! Core state for the dashboard. Domain logic only; focus, hit areas and
//! other presentation state live in the `tui` module.
//!
//! ```text
//! Dashboard
//! ├── user_name: String             // "Welcome <user>"
//! ├── organization: String          // header label
//! ├── initials: String              // header badge
//! ├── max_upload_mb: u32            // advisory text only
//! ├── selection: Option<CardKind>   // the one expanded card, if any
//! ├── panels: [Panel; 3]            // per-card transient state
//! └── status_message: String        // status bar text
//! ```
//!
//! Selection is a single value, so at most one card can be expanded.
//! State changes only happen through `update(state, action)` in action.rs.

use log::debug;

use crate::core::action::{Action, update};
use crate::core::card::CardKind;
use crate::core::config::ResolvedConfig;
use crate::core::panel::Panel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub user_name: String,
    pub organization: String,
    pub initials: String,
    pub max_upload_mb: u32,
    pub selection: Option<CardKind>,
    pub panels: [Panel; 3],
    pub status_message: String,
}

impl Dashboard {
    pub fn new(user_name: String) -> Self {
        Self {
            user_name,
            organization: crate::core::config::DEFAULT_ORGANIZATION.to_string(),
            initials: crate::core::config::DEFAULT_INITIALS.to_string(),
            max_upload_mb: crate::core::config::DEFAULT_MAX_UPLOAD_MB,
            selection: None,
            panels: CardKind::ALL.map(Panel::new),
            status_message: String::from("Select an action below"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.user_name.clone());
        app.organization = config.organization.clone();
        app.initials = config.initials.clone();
        app.max_upload_mb = config.max_upload_mb;
        if let Some(kind) = config.open_card {
            update(&mut app, Action::Expand(kind));
        }
        app
    }

    pub fn is_expanded(&self, kind: CardKind) -> bool {
        self.selection == Some(kind)
    }

    pub fn panel(&self, kind: CardKind) -> &Panel {
        &self.panels[kind.index()]
    }

    /// The expanded card's panel. Panel actions only ever reach this one.
    pub fn expanded_panel_mut(&mut self) -> Option<&mut Panel> {
        let kind = self.selection?;
        Some(&mut self.panels[kind.index()])
    }

    /// Selects `kind`. A previously expanded card is collapsed and reset.
    ///
    /// Returns `false` if `kind` was already expanded; its state is left
    /// untouched in that case.
    pub fn expand(&mut self, kind: CardKind) -> bool {
        if self.is_expanded(kind) {
            return false;
        }
        if let Some(previous) = self.selection {
            debug!("Collapsing {previous} in favour of {kind}");
            self.panels[previous.index()].reset();
        }
        self.selection = Some(kind);
        true
    }

    /// Clears the selection and resets the card that was expanded.
    pub fn collapse(&mut self) -> Option<CardKind> {
        let kind = self.selection.take()?;
        self.panels[kind.index()].reset();
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::panel::EmailPanel;
    use crate::test_support::test_dashboard;

    #[test]
    fn test_dashboard_new_defaults() {
        let app = test_dashboard();
        assert_eq!(app.user_name, "test-user");
        assert_eq!(app.organization, "Investor Relations");
        assert_eq!(app.selection, None);
        assert!(app.panels.iter().all(Panel::is_pristine));
        for kind in CardKind::ALL {
            assert_eq!(app.panel(kind).kind(), kind);
        }
    }

    #[test]
    fn test_expand_is_exclusive() {
        let mut app = test_dashboard();
        assert!(app.expand(CardKind::Email));
        assert!(app.expand(CardKind::Youtube));
        assert!(app.is_expanded(CardKind::Youtube));
        assert!(!app.is_expanded(CardKind::Email));
    }

    #[test]
    fn test_switching_cards_resets_previous() {
        let mut app = test_dashboard();
        app.expand(CardKind::Email);
        app.panels[0] = Panel::Email(EmailPanel { sent: true });
        app.expand(CardKind::Transcript);
        assert!(app.panel(CardKind::Email).is_pristine());
    }

    #[test]
    fn test_expand_same_card_keeps_state() {
        let mut app = test_dashboard();
        app.expand(CardKind::Email);
        app.panels[0] = Panel::Email(EmailPanel { sent: true });
        assert!(!app.expand(CardKind::Email));
        assert_eq!(app.panel(CardKind::Email), &Panel::Email(EmailPanel { sent: true }));
    }

    #[test]
    fn test_collapse_without_selection() {
        let mut app = test_dashboard();
        assert_eq!(app.collapse(), None);
        assert!(app.expanded_panel_mut().is_none());
    }

    #[test]
    fn test_from_config_opens_card() {
        let config = ResolvedConfig {
            user_name: "Dana".to_string(),
            organization: "IR Team".to_string(),
            initials: "IT".to_string(),
            max_upload_mb: 10,
            open_card: Some(CardKind::Youtube),
        };
        let app = Dashboard::from_config(&config);
        assert_eq!(app.user_name, "Dana");
        assert_eq!(app.initials, "IT");
        assert_eq!(app.max_upload_mb, 10);
        assert!(app.is_expanded(CardKind::Youtube));
        assert_eq!(app.status_message, "Analyze Youtube Transcript");
    }
}
