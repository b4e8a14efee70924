//! # ActionCard Component
//!
//! One dashboard card. Collapsed it shows the title and description;
//! expanded it adds the panel for its `CardKind`.
//!
//! ## Rows
//!
//! An expanded panel is a vertical list of [`Row`]s derived from the
//! panel's current sub-state. The same list drives height calculation,
//! rendering and the focus order of controls, so the three never disagree.
//!
//! ## Hit-testing
//!
//! While rendering, the card records where it drew itself and each of its
//! controls in a [`HitMap`]. The event loop checks controls before cards,
//! so a click on a control never reaches the card underneath.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::action::Action;
use crate::core::card::{CardDef, CardKind};
use crate::core::panel::{EmailStage, Panel, TranscriptStage, YoutubeTab};
use crate::tui::component::Component;

// ============================================================================
// Controls
// ============================================================================

/// Something inside an expanded card that can be focused or clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Close,
    SendEmail,
    SelectFile,
    RemoveFile,
    GenerateSummary,
    Download,
    Tab(YoutubeTab),
    UrlField,
    GetTranscripts,
    GetKeywords,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Close => "Close",
            Control::SendEmail => "Send Email",
            Control::SelectFile => "Select file",
            Control::RemoveFile => "✕",
            Control::GenerateSummary => "Generate Summary",
            Control::Download => "Download",
            Control::Tab(tab) => tab.label(),
            Control::UrlField => "URL",
            Control::GetTranscripts => YoutubeTab::Transcribe.submit_label(),
            Control::GetKeywords => YoutubeTab::KeywordSearch.submit_label(),
        }
    }

    /// The core action this control triggers.
    ///
    /// `SelectFile` and `UrlField` return `None`: the first opens the path
    /// prompt and the second only takes focus, both handled by the TUI.
    pub fn action(self) -> Option<Action> {
        match self {
            Control::Close => Some(Action::Collapse),
            Control::SendEmail => Some(Action::SendEmail),
            Control::RemoveFile => Some(Action::RemoveFile),
            Control::GenerateSummary => Some(Action::GenerateSummary),
            Control::Download => Some(Action::Download),
            Control::Tab(tab) => Some(Action::SelectTab(tab)),
            Control::GetTranscripts | Control::GetKeywords => Some(Action::SubmitUrl),
            Control::SelectFile | Control::UrlField => None,
        }
    }

    /// Width of the rendered button, brackets included.
    fn button_width(self) -> u16 {
        self.label().width() as u16 + 4
    }
}

/// Whether a control is live in the panel's current state.
pub fn is_enabled(control: Control, panel: &Panel) -> bool {
    match (control, panel) {
        (Control::GenerateSummary, Panel::Transcript(t)) => t.can_generate(),
        _ => true,
    }
}

/// Controls of an expanded panel in focus order.
pub fn controls_for(panel: &Panel, max_upload_mb: u32) -> Vec<Control> {
    rows_for(panel, max_upload_mb)
        .iter()
        .flat_map(|row| match row {
            Row::DropZone { .. } => vec![Control::SelectFile],
            Row::File { control, .. } => vec![*control],
            Row::Tabs(_) => YoutubeTab::ALL.map(Control::Tab).to_vec(),
            Row::UrlField { .. } => vec![Control::UrlField],
            Row::Buttons(buttons) => buttons.clone(),
            _ => Vec::new(),
        })
        .collect()
}

/// The control that receives focus when a panel opens or its focused
/// control disappears.
pub fn default_focus(panel: &Panel) -> Control {
    match panel {
        Panel::Email(e) => match e.stage() {
            EmailStage::AwaitingSend => Control::SendEmail,
            EmailStage::Sent => Control::Close,
        },
        Panel::Transcript(t) => match t.stage() {
            TranscriptStage::NoFile => Control::SelectFile,
            TranscriptStage::FileSelected => Control::GenerateSummary,
            TranscriptStage::SummaryReady => Control::Close,
        },
        Panel::Youtube(_) => Control::UrlField,
    }
}

// ============================================================================
// Hit map
// ============================================================================

/// Screen regions recorded during the last draw.
#[derive(Debug, Default)]
pub struct HitMap {
    pub cards: Vec<(CardKind, Rect)>,
    pub controls: Vec<(Control, Rect)>,
    pub drop_zone: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.controls.clear();
        self.drop_zone = None;
    }

    pub fn control_at(&self, x: u16, y: u16) -> Option<Control> {
        self.controls
            .iter()
            .find(|(_, rect)| rect.contains((x, y).into()))
            .map(|(control, _)| *control)
    }

    pub fn card_at(&self, x: u16, y: u16) -> Option<CardKind> {
        self.cards
            .iter()
            .find(|(_, rect)| rect.contains((x, y).into()))
            .map(|(kind, _)| *kind)
    }

    pub fn in_drop_zone(&self, x: u16, y: u16) -> bool {
        self.drop_zone.is_some_and(|rect| rect.contains((x, y).into()))
    }

    /// Where a control was drawn, if it was.
    pub fn rect_of(&self, control: Control) -> Option<Rect> {
        self.controls
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, rect)| *rect)
    }
}

// ============================================================================
// Rows
// ============================================================================

const DROP_ZONE_HEIGHT: u16 = 5;
const URL_FIELD_HEIGHT: u16 = 3;
const URL_PLACEHOLDER: &str = "Enter URL here...";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Blank,
    Label(&'static str),
    Success(&'static str),
    DropZone { drag_over: bool, max_upload_mb: u32 },
    File { name: String, size: Option<String>, control: Control },
    Tabs(YoutubeTab),
    UrlField { value: String },
    Buttons(Vec<Control>),
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::DropZone { .. } => DROP_ZONE_HEIGHT,
            Row::UrlField { .. } => URL_FIELD_HEIGHT,
            _ => 1,
        }
    }
}

fn rows_for(panel: &Panel, max_upload_mb: u32) -> Vec<Row> {
    match panel {
        Panel::Email(email) => match email.stage() {
            EmailStage::AwaitingSend => {
                vec![Row::Buttons(vec![Control::Close, Control::SendEmail])]
            }
            EmailStage::Sent => vec![
                Row::Success("✓ Email sent"),
                Row::Blank,
                Row::Buttons(vec![Control::Close]),
            ],
        },
        Panel::Transcript(t) => {
            let file_row = |control| {
                t.file.as_ref().map(|f| Row::File {
                    name: f.name.clone(),
                    size: f.size_label(),
                    control,
                })
            };
            match t.stage() {
                TranscriptStage::NoFile => vec![
                    Row::Label("Upload Files"),
                    Row::DropZone {
                        drag_over: t.drag_over,
                        max_upload_mb,
                    },
                    Row::Blank,
                    Row::Buttons(vec![Control::Close, Control::GenerateSummary]),
                ],
                TranscriptStage::FileSelected => {
                    let mut rows = vec![Row::Label("Upload Files")];
                    rows.extend(file_row(Control::RemoveFile));
                    rows.push(Row::Blank);
                    rows.push(Row::Buttons(vec![Control::Close, Control::GenerateSummary]));
                    rows
                }
                TranscriptStage::SummaryReady => {
                    let mut rows = vec![Row::Success("✓ Summary generated")];
                    rows.extend(file_row(Control::Download));
                    rows.push(Row::Blank);
                    rows.push(Row::Buttons(vec![Control::Close]));
                    rows
                }
            }
        }
        Panel::Youtube(y) => {
            let submit = match y.tab {
                YoutubeTab::Transcribe => Control::GetTranscripts,
                YoutubeTab::KeywordSearch => Control::GetKeywords,
            };
            vec![
                Row::Tabs(y.tab),
                Row::Blank,
                Row::Label("Paste Youtube URL"),
                Row::UrlField {
                    value: y.active_url().to_string(),
                },
                Row::Blank,
                Row::Buttons(vec![Control::Close, submit]),
            ]
        }
    }
}

// ============================================================================
// Component
// ============================================================================

/// Transient render wrapper for one card.
pub struct ActionCard<'a> {
    pub def: &'static CardDef,
    pub panel: &'a Panel,
    pub expanded: bool,
    /// Keyboard focus in the card grid (collapsed navigation).
    pub highlighted: bool,
    /// Focused control inside the expanded panel.
    pub focus: Option<Control>,
    pub max_upload_mb: u32,
    pub hits: &'a mut HitMap,
}

impl ActionCard<'_> {
    /// Rows needed to show the card in full at the given width.
    pub fn required_height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(4);
        let description = Paragraph::new(self.def.description).wrap(Wrap { trim: true });
        let mut height = 2 + 1 + description.line_count(inner_width) as u16;
        if self.expanded {
            height += 1;
            height += rows_for(self.panel, self.max_upload_mb)
                .iter()
                .map(Row::height)
                .sum::<u16>();
        }
        height
    }

    fn control_style(&self, control: Control) -> Style {
        if !is_enabled(control, self.panel) {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if self.focus == Some(control) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    fn render_button(&mut self, frame: &mut Frame, control: Control, rect: Rect) {
        let text = format!("[ {} ]", control.label());
        frame.render_widget(Span::styled(text, self.control_style(control)), rect);
        self.hits.controls.push((control, rect));
    }

    fn render_button_row(&mut self, frame: &mut Frame, buttons: &[Control], area: Rect) {
        const GAP: u16 = 1;
        let total: u16 = buttons.iter().map(|b| b.button_width()).sum::<u16>()
            + GAP * buttons.len().saturating_sub(1) as u16;
        let mut x = area.right().saturating_sub(total).max(area.x);
        for &control in buttons {
            let width = control.button_width().min(area.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            self.render_button(frame, control, Rect::new(x, area.y, width, 1));
            x += width + GAP;
        }
    }

    fn render_drop_zone(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        drag_over: bool,
        max_upload_mb: u32,
    ) {
        let (border_type, border_style) = if drag_over {
            (BorderType::Double, Style::default().fg(Color::Cyan))
        } else {
            (BorderType::Plain, Style::default().fg(Color::DarkGray))
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.drop_zone = Some(area);

        let [select, hint, limit] = Layout::vertical([Constraint::Length(1); 3]).areas(inner);

        let width = Control::SelectFile.button_width().min(select.width);
        let x = select.x + (select.width - width) / 2;
        self.render_button(frame, Control::SelectFile, Rect::new(x, select.y, width, 1));

        let muted = Style::default().fg(Color::DarkGray);
        frame.render_widget(
            Paragraph::new("Or drag and drop file to upload")
                .style(muted)
                .alignment(Alignment::Center),
            hint,
        );
        frame.render_widget(
            Paragraph::new(format!("Max file size: {max_upload_mb} MB per transcript file"))
                .style(muted)
                .alignment(Alignment::Center),
            limit,
        );
    }

    fn render_file_row(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        name: &str,
        size: Option<&str>,
        control: Control,
    ) {
        let button_width = control.button_width().min(area.width);
        let [text_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)]).areas(area);

        let suffix = size.map(|s| format!(" ({s})")).unwrap_or_default();
        let name_width = (text_area.width as usize).saturating_sub(2 + suffix.width() + 1);
        let line = Line::from(vec![
            Span::styled("▤ ", Style::default().fg(Color::Blue)),
            Span::styled(
                truncate_str(name, name_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(suffix, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(line, text_area);
        self.render_button(frame, control, button_area);
    }

    fn render_tabs(&mut self, frame: &mut Frame, area: Rect, active: YoutubeTab) {
        let halves: [Rect; 2] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);
        for (tab, rect) in YoutubeTab::ALL.into_iter().zip(halves) {
            let control = Control::Tab(tab);
            let mut style = if tab == active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if self.focus == Some(control) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            frame.render_widget(
                Paragraph::new(tab.label())
                    .style(style)
                    .alignment(Alignment::Center),
                rect,
            );
            self.hits.controls.push((control, rect));
        }
    }

    fn render_url_field(&mut self, frame: &mut Frame, area: Rect, value: &str) {
        let focused = self.focus == Some(Control::UrlField);
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.controls.push((Control::UrlField, area));

        if value.is_empty() {
            frame.render_widget(
                Span::styled(URL_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
                inner,
            );
        } else {
            // Keep the end of long URLs visible
            let visible = tail_str(value, inner.width.saturating_sub(1) as usize);
            frame.render_widget(Span::raw(visible), inner);
        }

        if focused && inner.width > 0 {
            let typed = value.width().min(inner.width.saturating_sub(1) as usize) as u16;
            frame.set_cursor_position(Position::new(inner.x + typed, inner.y));
        }
    }

    fn render_panel(&mut self, frame: &mut Frame, area: Rect) {
        let mut y = area.y;
        for row in rows_for(self.panel, self.max_upload_mb) {
            let height = row.height();
            if y + height > area.bottom() {
                break;
            }
            let rect = Rect::new(area.x, y, area.width, height);
            match row {
                Row::Blank => {}
                Row::Label(text) => frame.render_widget(
                    Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
                    rect,
                ),
                Row::Success(text) => frame.render_widget(
                    Span::styled(
                        text,
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    rect,
                ),
                Row::DropZone {
                    drag_over,
                    max_upload_mb,
                } => self.render_drop_zone(frame, rect, drag_over, max_upload_mb),
                Row::File {
                    name,
                    size,
                    control,
                } => self.render_file_row(frame, rect, &name, size.as_deref(), control),
                Row::Tabs(active) => self.render_tabs(frame, rect, active),
                Row::UrlField { value } => self.render_url_field(frame, rect, &value),
                Row::Buttons(buttons) => self.render_button_row(frame, &buttons, rect),
            }
            y += height;
        }
    }
}

impl Component for ActionCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = if self.expanded {
            Block::bordered()
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Blue))
        } else if self.highlighted {
            Block::bordered().border_style(Style::default().fg(Color::Cyan))
        } else {
            Block::bordered().border_style(Style::default().fg(Color::DarkGray))
        };
        let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 0));
        frame.render_widget(block, area);
        self.hits.cards.push((self.def.kind, area));

        let description = Paragraph::new(self.def.description)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        let description_height = description.line_count(inner.width) as u16;

        let [title_area, description_area, panel_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(description_height),
            Constraint::Min(0),
        ])
        .areas(inner);

        frame.render_widget(
            Span::styled(self.def.title, Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );
        frame.render_widget(description, description_area);

        if self.expanded && panel_area.height > 1 {
            let panel_area = Rect {
                y: panel_area.y + 1,
                height: panel_area.height - 1,
                ..panel_area
            };
            self.render_panel(frame, panel_area);
        }
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}

/// The longest suffix of `s` that fits within `max_width` columns.
fn tail_str(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = i;
    }
    s[start..].to_string()
}
