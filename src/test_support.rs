//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;

use ratatui::buffer::Buffer;

use crate::core::state::Dashboard;
use crate::core::workflow::{WorkflowError, WorkflowExecutor, WorkflowRequest};

/// An executor that remembers every request and always succeeds.
#[derive(Default)]
pub struct RecordingExecutor {
    requests: RefCell<Vec<WorkflowRequest>>,
}

impl RecordingExecutor {
    pub fn requests(&self) -> Vec<WorkflowRequest> {
        self.requests.borrow().clone()
    }
}

impl WorkflowExecutor for RecordingExecutor {
    fn name(&self) -> &str {
        "recording"
    }

    fn execute(&self, request: &WorkflowRequest) -> Result<(), WorkflowError> {
        self.requests.borrow_mut().push(request.clone());
        Ok(())
    }
}

/// Creates a test Dashboard with default profile values.
pub fn test_dashboard() -> Dashboard {
    Dashboard::new("test-user".to_string())
}

/// Rendered buffer as one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect()
}

/// Rendered buffer as a single string.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}
