//! # Workflow Executors
//!
//! The dashboard never talks to the outside world itself. Each terminal
//! action produces a `WorkflowRequest`, and whoever runs the dashboard
//! hands it to a `WorkflowExecutor`:
//!
//! ```text
//! Send Email        → email dispatch service
//! Generate Summary  → document summarization service
//! Get Transcripts   → video transcript service
//! Get Keywords      → video transcript service
//! ```
//!
//! `StubExecutor` stands in for all three services. It logs the request and
//! reports success, which is all the dashboard currently needs.

use log::{info, warn};
use std::fmt;

use crate::core::card::CardKind;
use crate::core::panel::UploadedFile;
use crate::core::state::Dashboard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowRequest {
    /// Run today's incremental analyst email.
    SendEmail,
    Summarize(UploadedFile),
    FetchTranscript { url: String },
    FetchKeywords { url: String },
}

impl WorkflowRequest {
    pub fn kind(&self) -> CardKind {
        match self {
            WorkflowRequest::SendEmail => CardKind::Email,
            WorkflowRequest::Summarize(_) => CardKind::Transcript,
            WorkflowRequest::FetchTranscript { .. } | WorkflowRequest::FetchKeywords { .. } => {
                CardKind::Youtube
            }
        }
    }

    /// Status bar text once the request has been accepted.
    pub fn done_message(&self) -> String {
        match self {
            WorkflowRequest::SendEmail => "Email sent".to_string(),
            WorkflowRequest::Summarize(file) => format!("Summary generated for {}", file.name),
            WorkflowRequest::FetchTranscript { url } => format!("Transcript requested: {url}"),
            WorkflowRequest::FetchKeywords { url } => format!("Keywords requested: {url}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// The backing service could not be reached.
    Unavailable(String),
    /// The service refused the request.
    Rejected(String),
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowError::Unavailable(msg) => write!(f, "service unavailable: {msg}"),
            WorkflowError::Rejected(msg) => write!(f, "request rejected: {msg}"),
        }
    }
}

impl std::error::Error for WorkflowError {}

/// Backend for the dashboard's actions.
pub trait WorkflowExecutor {
    fn name(&self) -> &str;

    fn execute(&self, request: &WorkflowRequest) -> Result<(), WorkflowError>;
}

/// Accepts every request without doing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubExecutor;

impl WorkflowExecutor for StubExecutor {
    fn name(&self) -> &str {
        "stub"
    }

    fn execute(&self, request: &WorkflowRequest) -> Result<(), WorkflowError> {
        info!("[stub] {} workflow accepted: {:?}", request.kind(), request);
        Ok(())
    }
}

/// Runs a request and reports the outcome in the status bar.
///
/// A failure is only reported. The card keeps the sub-state the reducer
/// already moved it to.
pub fn perform(app: &mut Dashboard, executor: &dyn WorkflowExecutor, request: &WorkflowRequest) {
    info!("Executing {:?} via {}", request, executor.name());
    match executor.execute(request) {
        Ok(()) => app.status_message = request.done_message(),
        Err(e) => {
            warn!("{} workflow failed via {}: {}", request.kind(), executor.name(), e);
            app.status_message = format!("{} failed: {e}", request.kind());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingExecutor, test_dashboard};
    use std::path::PathBuf;

    struct FailingExecutor(WorkflowError);

    impl WorkflowExecutor for FailingExecutor {
        fn name(&self) -> &str {
            "failing"
        }

        fn execute(&self, _request: &WorkflowRequest) -> Result<(), WorkflowError> {
            Err(self.0.clone())
        }
    }

    #[test]
    fn test_stub_always_succeeds() {
        let stub = StubExecutor;
        let requests = [
            WorkflowRequest::SendEmail,
            WorkflowRequest::FetchTranscript { url: String::new() },
            WorkflowRequest::FetchKeywords { url: "not a url".to_string() },
        ];
        for request in &requests {
            assert_eq!(stub.execute(request), Ok(()));
        }
    }

    #[test]
    fn test_request_kinds() {
        let file = UploadedFile {
            name: "a.pdf".to_string(),
            size: None,
            path: PathBuf::from("a.pdf"),
        };
        assert_eq!(WorkflowRequest::SendEmail.kind(), CardKind::Email);
        assert_eq!(WorkflowRequest::Summarize(file).kind(), CardKind::Transcript);
        assert_eq!(
            WorkflowRequest::FetchKeywords { url: String::new() }.kind(),
            CardKind::Youtube
        );
    }

    #[test]
    fn test_perform_records_request_and_status() {
        let mut app = test_dashboard();
        let executor = RecordingExecutor::default();
        perform(&mut app, &executor, &WorkflowRequest::SendEmail);
        assert_eq!(executor.requests(), vec![WorkflowRequest::SendEmail]);
        assert_eq!(app.status_message, "Email sent");
    }

    #[test]
    fn test_perform_reports_failure() {
        let mut app = test_dashboard();
        let executor = FailingExecutor(WorkflowError::Unavailable("smtp down".to_string()));
        perform(&mut app, &executor, &WorkflowRequest::SendEmail);
        assert_eq!(app.status_message, "email failed: service unavailable: smtp down");

        let executor = FailingExecutor(WorkflowError::Rejected("invalid url".to_string()));
        perform(&mut app, &executor, &WorkflowRequest::FetchKeywords { url: "x".to_string() });
        assert_eq!(app.status_message, "youtube failed: request rejected: invalid url");
    }
}
