//! # Path Prompt Component
//!
//! Overlay that stands in for a file picker when "Select file" is
//! activated. The user types or pastes a path and confirms with Enter.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PathPromptState` lives in `TuiState` while the prompt is open
//! - `PathPrompt` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the path prompt overlay.
#[derive(Debug, Default)]
pub struct PathPromptState {
    pub buffer: String,
}

/// Events emitted by the path prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Confirm(String),
    Dismiss,
}

impl EventHandler for PathPromptState {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PromptEvent> {
        match event {
            TuiEvent::Escape => Some(PromptEvent::Dismiss),
            TuiEvent::Submit => {
                let path = self.buffer.trim();
                if path.is_empty() {
                    None
                } else {
                    Some(PromptEvent::Confirm(path.to_string()))
                }
            }
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text.trim_end_matches(['\r', '\n']));
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the path prompt overlay.
pub struct PathPrompt<'a> {
    state: &'a PathPromptState,
}

impl<'a> PathPrompt<'a> {
    pub fn new(state: &'a PathPromptState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 5, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Select file ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);

        let text = if self.state.buffer.is_empty() {
            Paragraph::new("Type or paste a file path...")
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.state.buffer.as_str())
        };
        frame.render_widget(block, overlay);
        frame.render_widget(text, inner);

        let typed = self.state.buffer.width() as u16;
        let cursor_x = inner.x + typed.min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}

/// A rect `percent_x` wide and `height` rows tall, centered in `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_and_confirm() {
        let mut prompt = PathPromptState::default();
        for c in "/tmp/a.pdf".chars() {
            assert_eq!(prompt.handle_event(&TuiEvent::InputChar(c)), None);
        }
        prompt.handle_event(&TuiEvent::Backspace);
        assert_eq!(prompt.buffer, "/tmp/a.pd");
        assert_eq!(
            prompt.handle_event(&TuiEvent::Submit),
            Some(PromptEvent::Confirm("/tmp/a.pd".to_string()))
        );
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut prompt = PathPromptState::default();
        prompt.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(prompt.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_paste_and_dismiss() {
        let mut prompt = PathPromptState::default();
        prompt.handle_event(&TuiEvent::Paste("/home/me/notes.txt\n".to_string()));
        assert_eq!(prompt.buffer, "/home/me/notes.txt");
        assert_eq!(prompt.handle_event(&TuiEvent::Escape), Some(PromptEvent::Dismiss));
    }

    #[test]
    fn test_render_shows_placeholder() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = PathPromptState::default();
        terminal
            .draw(|f| PathPrompt::new(&state).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Select file"));
        assert!(text.contains("Type or paste a file path..."));
    }
}
