//! # Actions
//!
//! Everything that can happen on the dashboard becomes an `Action`.
//! User clicks a card? That's `Action::Expand(kind)`.
//! User drops a file? That's `Action::DropFile(file)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the caller what, if anything, must happen outside the
//! core. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Panel actions only affect the expanded card. Sending an email while the
//! email card is collapsed does nothing, so a workflow flag can never be set
//! on a collapsed card.

use log::debug;

use crate::core::card::CardKind;
use crate::core::panel::{Panel, UploadedFile, YoutubeTab};
use crate::core::state::Dashboard;
use crate::core::workflow::WorkflowRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Dashboard
    Expand(CardKind),
    Collapse,
    Quit,

    // Email
    SendEmail,

    // Transcript
    DragOver,
    DragLeave,
    DropFile(UploadedFile),
    SelectFile(UploadedFile),
    RemoveFile,
    GenerateSummary,
    Download,

    // YouTube
    SelectTab(YoutubeTab),
    UrlInput(char),
    UrlBackspace,
    UrlPaste(String),
    SubmitUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Hand this request to the workflow executor.
    Execute(WorkflowRequest),
}

pub fn update(app: &mut Dashboard, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Expand(kind) => {
            if app.expand(kind) {
                app.status_message = crate::core::card::card_def(kind).title.to_string();
            }
            Effect::None
        }
        Action::Collapse => {
            if app.collapse().is_some() {
                app.status_message = String::from("Select an action below");
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
        other => update_panel(app, other),
    }
}

fn update_panel(app: &mut Dashboard, action: Action) -> Effect {
    let Some(panel) = app.expanded_panel_mut() else {
        debug!("Ignoring {:?}: no card expanded", action);
        return Effect::None;
    };

    match (panel, action) {
        (Panel::Email(email), Action::SendEmail) => {
            if email.send() {
                return Effect::Execute(WorkflowRequest::SendEmail);
            }
        }

        (Panel::Transcript(t), Action::DragOver) => t.drag_over(),
        (Panel::Transcript(t), Action::DragLeave) => t.drag_leave(),
        (Panel::Transcript(t), Action::DropFile(file)) => {
            t.drop_file(file);
        }
        (Panel::Transcript(t), Action::SelectFile(file)) => {
            t.select_file(file);
        }
        (Panel::Transcript(t), Action::RemoveFile) => {
            t.remove_file();
        }
        (Panel::Transcript(t), Action::GenerateSummary) => {
            if let Some(file) = t.generate_summary() {
                return Effect::Execute(WorkflowRequest::Summarize(file));
            }
        }
        (Panel::Transcript(_), Action::Download) => {}

        (Panel::Youtube(y), Action::SelectTab(tab)) => y.select_tab(tab),
        (Panel::Youtube(y), Action::UrlInput(c)) => y.push_char(c),
        (Panel::Youtube(y), Action::UrlBackspace) => y.backspace(),
        (Panel::Youtube(y), Action::UrlPaste(text)) => y.paste(&text),
        (Panel::Youtube(y), Action::SubmitUrl) => {
            let url = y.active_url().to_string();
            let request = match y.tab {
                YoutubeTab::Transcribe => WorkflowRequest::FetchTranscript { url },
                YoutubeTab::KeywordSearch => WorkflowRequest::FetchKeywords { url },
            };
            return Effect::Execute(request);
        }

        (panel, action) => {
            debug!("Ignoring {:?} for {} card", action, panel.kind());
        }
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::panel::{EmailStage, TranscriptStage};
    use crate::test_support::test_dashboard;
    use std::path::PathBuf;

    fn report() -> UploadedFile {
        UploadedFile {
            name: "report.pdf".to_string(),
            size: Some(1024),
            path: PathBuf::from("/tmp/report.pdf"),
        }
    }

    fn transcript(app: &Dashboard) -> &crate::core::panel::TranscriptPanel {
        match app.panel(CardKind::Transcript) {
            Panel::Transcript(t) => t,
            other => panic!("expected transcript panel, got {other:?}"),
        }
    }

    #[test]
    fn test_expand_each_card_is_exclusive() {
        let mut app = test_dashboard();
        for kind in CardKind::ALL {
            assert_eq!(update(&mut app, Action::Expand(kind)), Effect::None);
            for other in CardKind::ALL {
                assert_eq!(app.is_expanded(other), other == kind);
            }
        }
    }

    #[test]
    fn test_collapse_resets_every_card() {
        for kind in CardKind::ALL {
            let mut app = test_dashboard();
            update(&mut app, Action::Expand(kind));
            update(&mut app, Action::SendEmail);
            update(&mut app, Action::DragOver);
            update(&mut app, Action::SelectFile(report()));
            update(&mut app, Action::SelectTab(YoutubeTab::KeywordSearch));
            update(&mut app, Action::UrlPaste("https://youtu.be/x".to_string()));
            assert!(!app.panel(kind).is_pristine());

            update(&mut app, Action::Collapse);
            assert_eq!(app.selection, None);
            assert!(app.panel(kind).is_pristine(), "{kind} not reset on close");
        }
    }

    #[test]
    fn test_send_email_then_close() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Email));
        let effect = update(&mut app, Action::SendEmail);
        assert_eq!(effect, Effect::Execute(WorkflowRequest::SendEmail));
        let Panel::Email(email) = app.panel(CardKind::Email) else {
            panic!("expected email panel");
        };
        assert_eq!(email.stage(), EmailStage::Sent);

        update(&mut app, Action::Collapse);
        let Panel::Email(email) = app.panel(CardKind::Email) else {
            panic!("expected email panel");
        };
        assert_eq!(email.stage(), EmailStage::AwaitingSend);
    }

    #[test]
    fn test_send_email_ignored_when_collapsed() {
        let mut app = test_dashboard();
        assert_eq!(update(&mut app, Action::SendEmail), Effect::None);
        assert!(app.panel(CardKind::Email).is_pristine());
    }

    #[test]
    fn test_panel_action_for_other_card_is_ignored() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Youtube));
        assert_eq!(update(&mut app, Action::SendEmail), Effect::None);
        assert_eq!(update(&mut app, Action::GenerateSummary), Effect::None);
        assert!(app.panels.iter().all(Panel::is_pristine));
    }

    #[test]
    fn test_generate_summary_disabled_without_file() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Transcript));
        assert_eq!(update(&mut app, Action::GenerateSummary), Effect::None);
        assert_eq!(transcript(&app).stage(), TranscriptStage::NoFile);

        update(&mut app, Action::SelectFile(report()));
        let effect = update(&mut app, Action::GenerateSummary);
        assert_eq!(effect, Effect::Execute(WorkflowRequest::Summarize(report())));
        assert_eq!(transcript(&app).stage(), TranscriptStage::SummaryReady);
    }

    #[test]
    fn test_drag_and_drop() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Transcript));
        update(&mut app, Action::DragOver);
        assert!(transcript(&app).drag_over);
        update(&mut app, Action::DragLeave);
        assert!(!transcript(&app).drag_over);

        update(&mut app, Action::DragOver);
        update(&mut app, Action::DropFile(report()));
        let t = transcript(&app);
        assert!(!t.drag_over);
        assert_eq!(t.stage(), TranscriptStage::FileSelected);
        assert_eq!(t.file.as_ref().map(|f| f.name.as_str()), Some("report.pdf"));
    }

    #[test]
    fn test_drag_over_ignored_once_file_is_chosen() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Transcript));
        update(&mut app, Action::SelectFile(report()));
        update(&mut app, Action::DragOver);
        assert!(!transcript(&app).drag_over);

        update(&mut app, Action::GenerateSummary);
        update(&mut app, Action::DragOver);
        assert!(!transcript(&app).drag_over);
    }

    #[test]
    fn test_remove_file() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Transcript));
        update(&mut app, Action::SelectFile(report()));
        update(&mut app, Action::RemoveFile);
        assert_eq!(transcript(&app).stage(), TranscriptStage::NoFile);
    }

    #[test]
    fn test_download_is_inert() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Transcript));
        update(&mut app, Action::SelectFile(report()));
        update(&mut app, Action::GenerateSummary);
        let before = app.clone();
        assert_eq!(update(&mut app, Action::Download), Effect::None);
        assert_eq!(app, before);
    }

    #[test]
    fn test_submit_url_uses_active_tab() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Youtube));
        for c in "https://youtu.be/t".chars() {
            update(&mut app, Action::UrlInput(c));
        }
        assert_eq!(
            update(&mut app, Action::SubmitUrl),
            Effect::Execute(WorkflowRequest::FetchTranscript {
                url: "https://youtu.be/t".to_string()
            })
        );

        update(&mut app, Action::SelectTab(YoutubeTab::KeywordSearch));
        update(&mut app, Action::UrlPaste("https://youtu.be/k".to_string()));
        assert_eq!(
            update(&mut app, Action::SubmitUrl),
            Effect::Execute(WorkflowRequest::FetchKeywords {
                url: "https://youtu.be/k".to_string()
            })
        );
    }

    #[test]
    fn test_submit_empty_url_still_succeeds() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Youtube));
        assert_eq!(
            update(&mut app, Action::SubmitUrl),
            Effect::Execute(WorkflowRequest::FetchTranscript { url: String::new() })
        );
    }

    #[test]
    fn test_reopened_youtube_card_starts_on_transcribe() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Youtube));
        update(&mut app, Action::SelectTab(YoutubeTab::KeywordSearch));
        update(&mut app, Action::Collapse);
        update(&mut app, Action::Expand(CardKind::Youtube));
        let Panel::Youtube(y) = app.panel(CardKind::Youtube) else {
            panic!("expected youtube panel");
        };
        assert_eq!(y.tab, YoutubeTab::Transcribe);
        assert_eq!(y.active_url(), "");
    }

    #[test]
    fn test_quit() {
        let mut app = test_dashboard();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
