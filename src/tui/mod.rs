//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the dashboard,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Events are routed in priority order:
//!
//! 1. Ctrl+C quits, always.
//! 2. An open path prompt takes every other event.
//! 3. Mouse clicks are hit-tested against the last frame: controls first,
//!    then cards. A click on a control therefore never expands its card.
//! 4. Drags and pastes feed the transcript drop zone or the URL field.
//! 5. Keys go to the expanded card, or to card navigation when none is open.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after an event arrived.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::card::CardKind;
use crate::core::config::ResolvedConfig;
use crate::core::panel::{Panel, TranscriptStage, UploadedFile};
use crate::core::state::Dashboard;
use crate::core::workflow::{WorkflowExecutor, perform};
use crate::tui::component::EventHandler;
use crate::tui::components::action_card::{controls_for, default_focus, is_enabled};
use crate::tui::components::{Control, HitMap, PathPromptState, PromptEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core dashboard logic)
pub struct TuiState {
    /// Card highlighted for keyboard navigation while none is expanded.
    pub focused_card: CardKind,
    /// Focused control inside the expanded card.
    pub focus: Option<Control>,
    /// File path prompt overlay (None = hidden)
    pub prompt: Option<PathPromptState>,
    /// Clickable regions from the last draw
    pub hits: HitMap,
    last_selection: Option<CardKind>,
}

impl TuiState {
    pub fn new(app: &Dashboard) -> Self {
        let mut tui = Self {
            focused_card: CardKind::Email,
            focus: None,
            prompt: None,
            hits: HitMap::default(),
            last_selection: None,
        };
        tui.sync_focus(app);
        tui
    }

    /// Keeps focus on a control that exists in the expanded card.
    ///
    /// A newly expanded card, or a focused control that vanished after a
    /// state change, gets the panel's default focus.
    fn sync_focus(&mut self, app: &Dashboard) {
        let Some(kind) = app.selection else {
            self.focus = None;
            self.last_selection = None;
            return;
        };
        self.focused_card = kind;
        let panel = app.panel(kind);
        let controls = controls_for(panel, app.max_upload_mb);
        let still_valid = self.focus.is_some_and(|c| controls.contains(&c));
        if self.last_selection != Some(kind) || !still_valid {
            self.focus = Some(default_focus(panel));
        }
        self.last_selection = Some(kind);
    }

    fn cycle_focus(&mut self, app: &Dashboard, forward: bool) {
        let Some(kind) = app.selection else {
            return;
        };
        let controls = controls_for(app.panel(kind), app.max_upload_mb);
        if controls.is_empty() {
            return;
        }
        let current = self
            .focus
            .and_then(|c| controls.iter().position(|&x| x == c))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % controls.len()
        } else {
            (current + controls.len() - 1) % controls.len()
        };
        self.focus = Some(controls[next]);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Bracketed paste is how terminals hand over drag-and-dropped files
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig, executor: &dyn WorkflowExecutor) -> std::io::Result<()> {
    let mut app = Dashboard::from_config(&config);
    let mut tui = TuiState::new(&app);
    info!("Using {} workflow executor", executor.name());

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|guard| {
        let result = event_loop(&mut terminal, &mut app, &mut tui, executor);
        drop(guard);
        result
    });
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut Dashboard,
    tui: &mut TuiState,
    executor: &dyn WorkflowExecutor,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, event, executor) {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}

/// Apply one terminal event. Returns `true` when the app should quit.
fn handle_event(
    app: &mut Dashboard,
    tui: &mut TuiState,
    event: TuiEvent,
    executor: &dyn WorkflowExecutor,
) -> bool {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit, executor),
        TuiEvent::Resize => return false,
        _ => {}
    }

    if let Some(prompt) = tui.prompt.as_mut() {
        match prompt.handle_event(&event) {
            Some(PromptEvent::Confirm(path)) => {
                tui.prompt = None;
                let file = UploadedFile::from_path(path);
                info!("File selected: {}", file.path.display());
                return dispatch(app, tui, Action::SelectFile(file), executor);
            }
            Some(PromptEvent::Dismiss) => tui.prompt = None,
            None => {}
        }
        return false;
    }

    match event {
        TuiEvent::MouseClick(x, y) => handle_click(app, tui, x, y, executor),
        TuiEvent::MouseDrag(x, y) => {
            let Some(dragging) = transcript_drag_state(app) else {
                return false;
            };
            let inside = tui.hits.in_drop_zone(x, y);
            match (inside, dragging) {
                (true, false) => dispatch(app, tui, Action::DragOver, executor),
                (false, true) => dispatch(app, tui, Action::DragLeave, executor),
                _ => false,
            }
        }
        TuiEvent::MouseRelease(..) => {
            if transcript_drag_state(app) == Some(true) {
                dispatch(app, tui, Action::DragLeave, executor)
            } else {
                false
            }
        }
        TuiEvent::Paste(text) => handle_paste(app, tui, text, executor),
        other => handle_key(app, tui, other, executor),
    }
}

fn handle_click(
    app: &mut Dashboard,
    tui: &mut TuiState,
    x: u16,
    y: u16,
    executor: &dyn WorkflowExecutor,
) -> bool {
    // Controls sit on top of their card and swallow the click
    if let Some(control) = tui.hits.control_at(x, y) {
        tui.focus = Some(control);
        return activate(app, tui, control, executor);
    }
    if let Some(kind) = tui.hits.card_at(x, y) {
        tui.focused_card = kind;
        return dispatch(app, tui, Action::Expand(kind), executor);
    }
    false
}

fn handle_paste(
    app: &mut Dashboard,
    tui: &mut TuiState,
    text: String,
    executor: &dyn WorkflowExecutor,
) -> bool {
    if tui.focus == Some(Control::UrlField) {
        return dispatch(app, tui, Action::UrlPaste(text), executor);
    }
    let accepts_drop = matches!(
        app.selection.map(|kind| app.panel(kind)),
        Some(Panel::Transcript(t)) if t.stage() == TranscriptStage::NoFile
    );
    if !accepts_drop {
        debug!("Ignoring paste: nothing accepts it");
        return false;
    }
    match UploadedFile::from_dropped(&text) {
        Some(file) => {
            info!("File dropped: {}", file.path.display());
            dispatch(app, tui, Action::DropFile(file), executor)
        }
        None => false,
    }
}

fn handle_key(
    app: &mut Dashboard,
    tui: &mut TuiState,
    event: TuiEvent,
    executor: &dyn WorkflowExecutor,
) -> bool {
    if app.selection.is_none() {
        let highlighted = tui.focused_card;
        return match event {
            TuiEvent::Left | TuiEvent::FocusPrev => {
                tui.focused_card = tui.focused_card.prev();
                false
            }
            TuiEvent::Right | TuiEvent::FocusNext => {
                tui.focused_card = tui.focused_card.next();
                false
            }
            TuiEvent::Submit => dispatch(app, tui, Action::Expand(highlighted), executor),
            TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit, executor),
            TuiEvent::InputChar(c) => match CardKind::from_hotkey(c) {
                Some(kind) => dispatch(app, tui, Action::Expand(kind), executor),
                None => false,
            },
            _ => false,
        };
    }

    let editing_url = tui.focus == Some(Control::UrlField);
    match event {
        TuiEvent::Escape => dispatch(app, tui, Action::Collapse, executor),
        TuiEvent::FocusNext => {
            tui.cycle_focus(app, true);
            false
        }
        TuiEvent::FocusPrev => {
            tui.cycle_focus(app, false);
            false
        }
        TuiEvent::Left if !editing_url => {
            tui.cycle_focus(app, false);
            false
        }
        TuiEvent::Right if !editing_url => {
            tui.cycle_focus(app, true);
            false
        }
        TuiEvent::Submit if editing_url => dispatch(app, tui, Action::SubmitUrl, executor),
        TuiEvent::Submit => match tui.focus {
            Some(control) => activate(app, tui, control, executor),
            None => false,
        },
        TuiEvent::InputChar(c) if editing_url => dispatch(app, tui, Action::UrlInput(c), executor),
        TuiEvent::Backspace if editing_url => dispatch(app, tui, Action::UrlBackspace, executor),
        TuiEvent::InputChar(c) => match CardKind::from_hotkey(c) {
            Some(kind) => dispatch(app, tui, Action::Expand(kind), executor),
            None => false,
        },
        _ => false,
    }
}

/// Trigger a control of the expanded card. Disabled controls do nothing.
fn activate(
    app: &mut Dashboard,
    tui: &mut TuiState,
    control: Control,
    executor: &dyn WorkflowExecutor,
) -> bool {
    let Some(kind) = app.selection else {
        return false;
    };
    if !is_enabled(control, app.panel(kind)) {
        debug!("{:?} is disabled", control);
        return false;
    }
    match control {
        Control::SelectFile => {
            tui.prompt = Some(PathPromptState::default());
            false
        }
        Control::UrlField => {
            tui.focus = Some(Control::UrlField);
            false
        }
        other => match other.action() {
            Some(action) => dispatch(app, tui, action, executor),
            None => false,
        },
    }
}

/// Run an action through the core and carry out its effect.
fn dispatch(
    app: &mut Dashboard,
    tui: &mut TuiState,
    action: Action,
    executor: &dyn WorkflowExecutor,
) -> bool {
    let effect = update(app, action);
    debug!("Effect: {:?}", effect);
    let quit = match effect {
        Effect::Quit => true,
        Effect::Execute(request) => {
            perform(app, executor, &request);
            false
        }
        Effect::None => false,
    };
    tui.sync_focus(app);
    quit
}

/// Drag flag of the transcript card, if it is the expanded one.
fn transcript_drag_state(app: &Dashboard) -> Option<bool> {
    match app.selection.map(|kind| app.panel(kind)) {
        Some(Panel::Transcript(t)) => Some(t.drag_over),
        _ => None,
    }
}
