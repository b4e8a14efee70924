//! # Header Component
//!
//! Top of the dashboard: organisation label on the left, initials badge on
//! the right, then the welcome line and the prompt.
//!
//! Stateless. All three strings are props from the `Dashboard`, which in
//! turn gets them from configuration.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Rows the header needs: bar, spacer, welcome, prompt, spacer.
pub const HEADER_HEIGHT: u16 = 5;

pub struct Header<'a> {
    pub organization: &'a str,
    pub initials: &'a str,
    pub user_name: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(organization: &'a str, initials: &'a str, user_name: &'a str) -> Self {
        Self {
            organization,
            initials,
            user_name,
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [bar, _, welcome, prompt, _] = Layout::vertical([Constraint::Length(1); 5]).areas(area);

        let badge = format!(" {} ", self.initials);
        let badge_width = badge.chars().count() as u16;
        let [org_area, badge_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(badge_width)]).areas(bar);

        frame.render_widget(
            Span::styled(
                format!(" {}", self.organization),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            org_area,
        );
        frame.render_widget(
            Span::styled(badge, Style::default().fg(Color::Black).bg(Color::Gray)),
            badge_area,
        );

        let welcome_line = Line::from(vec![
            Span::styled("Welcome ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                self.user_name,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(welcome_line).alignment(Alignment::Center),
            welcome,
        );
        frame.render_widget(
            Paragraph::new("Select an action below:")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            prompt,
        );
    }
}
