//! # StatusBar Component
//!
//! Bottom line: the latest status message, then key hints for whatever
//! currently has focus.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Email sent | Tab next  Enter select  Esc close"`
//! 2. **Default**: `"Tab next  Enter select  Esc close"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct StatusBar<'a> {
    pub status_message: &'a str,
    pub hints: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(status_message: &'a str, hints: &'a str) -> Self {
        Self {
            status_message,
            hints,
        }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hint_style = Style::default().fg(Color::DarkGray);
        let line = if self.status_message.is_empty() {
            Line::from(Span::styled(format!(" {}", self.hints), hint_style))
        } else {
            Line::from(vec![
                Span::raw(format!(" {}", self.status_message)),
                Span::styled(" | ", hint_style),
                Span::styled(self.hints, hint_style),
            ])
        };
        frame.render_widget(line, area);
    }
}
