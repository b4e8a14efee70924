use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::card::{CardKind, card_def};
use crate::core::state::Dashboard;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ActionCard, Control, HEADER_HEIGHT, Header, PathPrompt, StatusBar};

/// Below this grid width cards are stacked instead of side by side.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 90;
const MAX_GRID_WIDTH: u16 = 140;
const CARD_GAP: u16 = 2;

pub fn draw_ui(frame: &mut Frame, app: &Dashboard, tui: &mut TuiState) {
    tui.hits.clear();

    let area = frame.area();
    let [header_area, _, cards_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    Header::new(&app.organization, &app.initials, &app.user_name).render(frame, header_area);
    draw_cards(frame, cards_area, app, tui);
    StatusBar::new(&app.status_message, key_hints(app, tui)).render(frame, status_area);

    if let Some(prompt) = &tui.prompt {
        PathPrompt::new(prompt).render(frame, area);
    }
}

fn draw_cards(frame: &mut Frame, area: Rect, app: &Dashboard, tui: &mut TuiState) {
    let grid_width = area.width.saturating_sub(2).min(MAX_GRID_WIDTH);
    let grid = Rect {
        x: area.x + (area.width - grid_width) / 2,
        width: grid_width,
        ..area
    };

    let slots: Vec<(CardKind, Rect)> = if grid.width >= WIDE_LAYOUT_MIN_WIDTH {
        // Expanded card takes twice the width of the others
        let columns: [Rect; 3] = Layout::horizontal(
            CardKind::ALL.map(|kind| Constraint::Fill(if app.is_expanded(kind) { 2 } else { 1 })),
        )
        .spacing(CARD_GAP)
        .areas(grid);
        CardKind::ALL.into_iter().zip(columns).collect()
    } else {
        CardKind::ALL.into_iter().map(|kind| (kind, grid)).collect()
    };
    let stacked = grid.width < WIDE_LAYOUT_MIN_WIDTH;

    let focus = tui.focus;
    let focused_card = tui.focused_card;
    let mut y = grid.y;
    for (kind, slot) in slots {
        let expanded = app.is_expanded(kind);
        let mut card = ActionCard {
            def: card_def(kind),
            panel: app.panel(kind),
            expanded,
            highlighted: focused_card == kind && app.selection.is_none(),
            focus: if expanded { focus } else { None },
            max_upload_mb: app.max_upload_mb,
            hits: &mut tui.hits,
        };
        let wanted = card.required_height(slot.width);

        let rect = if stacked {
            let remaining = grid.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let rect = Rect::new(slot.x, y, slot.width, wanted.min(remaining));
            y += rect.height + 1;
            rect
        } else {
            Rect {
                height: wanted.min(slot.height),
                ..slot
            }
        };
        card.render(frame, rect);
    }
}

fn key_hints(app: &Dashboard, tui: &TuiState) -> &'static str {
    if tui.prompt.is_some() {
        "Enter select  Esc cancel"
    } else if tui.focus == Some(Control::UrlField) {
        "Type URL  Enter submit  Tab next  Esc close"
    } else if app.selection.is_some() {
        "Tab next  Enter select  Esc close  Ctrl+C quit"
    } else {
        "←/→ move  Enter open  1-3 open  q quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{buffer_text, test_dashboard};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &Dashboard, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_dashboard_renders_three_cards() {
        let app = test_dashboard();
        let mut tui = TuiState::new(&app);
        let text = draw(&app, &mut tui, 120, 30);

        assert!(text.contains("Investor Relations"));
        assert!(text.contains("Welcome test-user"));
        assert!(text.contains("Send AR Analyst Email"));
        assert!(text.contains("Summarize Transcripts"));
        assert!(text.contains("Analyze Youtube Transcript"));
        assert_eq!(tui.hits.cards.len(), 3);
        assert!(tui.hits.controls.is_empty());
    }

    #[test]
    fn test_wide_layout_places_cards_side_by_side() {
        let app = test_dashboard();
        let mut tui = TuiState::new(&app);
        draw(&app, &mut tui, 120, 30);
        let ys: Vec<u16> = tui.hits.cards.iter().map(|(_, r)| r.y).collect();
        assert!(ys.iter().all(|&y| y == ys[0]));
        let xs: Vec<u16> = tui.hits.cards.iter().map(|(_, r)| r.x).collect();
        assert!(xs[0] < xs[1] && xs[1] < xs[2]);
    }

    #[test]
    fn test_narrow_layout_stacks_cards() {
        let app = test_dashboard();
        let mut tui = TuiState::new(&app);
        draw(&app, &mut tui, 60, 40);
        let ys: Vec<u16> = tui.hits.cards.iter().map(|(_, r)| r.y).collect();
        assert_eq!(ys.len(), 3);
        assert!(ys[0] < ys[1] && ys[1] < ys[2]);
    }

    #[test]
    fn test_expanded_card_registers_controls() {
        let mut app = test_dashboard();
        update(&mut app, Action::Expand(CardKind::Email));
        let mut tui = TuiState::new(&app);
        let text = draw(&app, &mut tui, 120, 30);
        assert!(text.contains("[ Send Email ]"));
        assert!(tui.hits.rect_of(Control::SendEmail).is_some());
        assert!(tui.hits.rect_of(Control::Close).is_some());
        assert!(text.contains("Esc close"));
    }

    #[test]
    fn test_prompt_overlay_is_drawn() {
        let app = test_dashboard();
        let mut tui = TuiState::new(&app);
        tui.prompt = Some(Default::default());
        let text = draw(&app, &mut tui, 120, 30);
        assert!(text.contains("Type or paste a file path..."));
        assert!(text.contains("Enter select  Esc cancel"));
    }
}
