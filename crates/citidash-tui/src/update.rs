//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Every page change, whatever triggered it, is expressed as a
//! [`NavCommand`] and applied by [`apply_nav_command`].

use citidash_core::catalog::PageId;
use citidash_core::navigation::StepDirection;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::navigation::ControlSite;
use crate::state::{AppState, Focus};

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

/// A requested page change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Step(StepDirection),
    /// Go to the page under the sidebar cursor.
    CommitSelector,
    Goto(String),
}

/// Which control issued a [`NavCommand`]. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSource {
    Keyboard,
    Button(ControlSite),
    Sidebar,
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.status.on_tick();
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.size = (width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::MapOpened { result } => {
            match result {
                Ok(path) => app.status.flash_info(format!("Opened {path} in the browser")),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to open map document");
                    app.status.flash_error(format!("Could not open map: {err}"));
                }
            }
            vec![]
        }
    }
}

/// Applies a page change. The single entry point for every control.
///
/// Returns whether the current page changed. Rejected commands are logged
/// and flashed; the index is left untouched.
pub fn apply_nav_command(app: &mut AppState, command: NavCommand, source: NavSource) -> bool {
    let result = match command {
        NavCommand::Step(direction) => Ok(app.nav.step(direction)),
        NavCommand::CommitSelector => app.sidebar.selector.commit(&mut app.nav),
        NavCommand::Goto(title) => app.nav.goto(&title),
    };
    match result {
        Ok(changed) => {
            if changed {
                tracing::info!(?source, page = app.nav.current_page().title(), "navigated");
            }
            // Keep an open selector cursor on the page that is now shown.
            if app.sidebar.selector.is_open() {
                app.sidebar.selector.open(&app.nav);
            }
            changed
        }
        Err(err) => {
            tracing::warn!(?source, error = %err, "navigation rejected");
            app.status.flash_error(err.to_string());
            false
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            vec![]
        }
        _ => vec![],
    }
}

fn set_focus(app: &mut AppState, focus: Focus) {
    app.focus = focus;
    match focus {
        Focus::Sidebar => app.sidebar.selector.open(&app.nav),
        Focus::Content => app.sidebar.selector.close(),
    }
}

fn scroll(app: &mut AppState, delta: i32) {
    let page = app.nav.current_page();
    app.body.scroll_by(page, delta);
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    let page = app.nav.current_page();
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![UiEffect::Quit];
        }
        KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Left | KeyCode::Char('h') => {
            apply_nav_command(app, NavCommand::Step(StepDirection::Backward), NavSource::Keyboard);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            apply_nav_command(app, NavCommand::Step(StepDirection::Forward), NavSource::Keyboard);
        }
        KeyCode::Tab | KeyCode::BackTab => {
            let next = match app.focus {
                Focus::Content => Focus::Sidebar,
                Focus::Sidebar => Focus::Content,
            };
            set_focus(app, next);
        }
        KeyCode::Up | KeyCode::Char('k') => match app.focus {
            Focus::Sidebar => app.sidebar.selector.move_cursor(StepDirection::Backward, &app.nav),
            Focus::Content => scroll(app, -1),
        },
        KeyCode::Down | KeyCode::Char('j') => match app.focus {
            Focus::Sidebar => app.sidebar.selector.move_cursor(StepDirection::Forward, &app.nav),
            Focus::Content => scroll(app, 1),
        },
        KeyCode::Enter if app.focus == Focus::Sidebar => {
            apply_nav_command(app, NavCommand::CommitSelector, NavSource::Sidebar);
            set_focus(app, Focus::Content);
        }
        KeyCode::PageUp => scroll(app, -i32::from(app.body.page_rows())),
        KeyCode::PageDown | KeyCode::Char(' ') => scroll(app, i32::from(app.body.page_rows())),
        KeyCode::Home => app.body.scroll_to_top(page),
        KeyCode::End => app.body.scroll_to_end(page),
        KeyCode::Char('m') => toggle_map_layer(app),
        KeyCode::Char('o') => return open_current_map(app),
        _ => {}
    }
    vec![]
}

fn toggle_map_layer(app: &mut AppState) {
    if app.nav.current_page() != PageId::Expansion {
        app.status
            .flash_info(format!("Map layers switch on \"{}\"", PageId::Expansion.title()));
        return;
    }
    app.options.map_layer = app.options.map_layer.toggle();
    tracing::debug!(layer = app.options.map_layer.label(), "map layer switched");
}

fn open_current_map(app: &mut AppState) -> Vec<UiEffect> {
    let path = app.page_content().map().map(|doc| doc.path.clone());
    match path {
        Some(path) => {
            app.status.flash_info(format!("Opening {}…", path.display()));
            vec![UiEffect::OpenMapDocument { path }]
        }
        None => {
            app.status.flash_info("This page has no map");
            vec![]
        }
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some((site, direction)) = app.controls.hit_test(column, row) {
                apply_nav_command(app, NavCommand::Step(direction), NavSource::Button(site));
            } else if let Some(index) = app.sidebar.row_at(column, row, app.nav.catalog().len()) {
                app.sidebar.selector.set_cursor(index, &app.nav);
                apply_nav_command(app, NavCommand::CommitSelector, NavSource::Sidebar);
                set_focus(app, Focus::Content);
            }
        }
        MouseEventKind::ScrollUp => wheel(app, column, row, StepDirection::Backward),
        MouseEventKind::ScrollDown => wheel(app, column, row, StepDirection::Forward),
        _ => {}
    }
}

fn wheel(app: &mut AppState, column: u16, row: u16, direction: StepDirection) {
    if app.sidebar.contains(column, row) {
        if app.focus != Focus::Sidebar {
            set_focus(app, Focus::Sidebar);
        }
        app.sidebar.selector.move_cursor(direction, &app.nav);
    } else if app.body.is_over_body(column, row) {
        scroll(app, WHEEL_ROWS * direction.delta() as i32);
    }
}
