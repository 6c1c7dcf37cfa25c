//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! return effects. Hit areas are recorded through `Cell`s so the reducer can
//! map mouse clicks back to controls.

use citidash_core::config::{DASHBOARD_TITLE, LAYOUT_MODE, LayoutMode};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::navigation::{ControlSite, render_nav_controls};
use crate::page::render_page_body;
use crate::sidebar::render_sidebar;
use crate::state::{AppState, Focus};
use crate::statusline::render_status_line;

const TITLE_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const CONTROLS_HEIGHT: u16 = 1;
const SIDEBAR_WIDTH: u16 = 36;
/// Below this width the sidebar is hidden.
const SIDEBAR_MIN_TOTAL_WIDTH: u16 = 70;

/// Horizontal region used by the page column under the current layout mode.
fn content_column(area: Rect) -> Rect {
    match LAYOUT_MODE {
        LayoutMode::Wide => area,
    }
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [title_area, main, status_area] = Layout::vertical([
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(DASHBOARD_TITLE).centered()).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 107, 182))
                .add_modifier(Modifier::BOLD),
        ),
        title_area,
    );

    let show_sidebar = main.width >= SIDEBAR_MIN_TOTAL_WIDTH;
    let sidebar_width = if show_sidebar { SIDEBAR_WIDTH } else { 0 };
    let [sidebar_area, content_area] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Fill(1)]).areas(main);
    if show_sidebar {
        render_sidebar(
            &app.sidebar,
            &app.nav,
            app.focus == Focus::Sidebar,
            frame,
            sidebar_area,
        );
    } else {
        app.sidebar.list_area.set(Rect::default());
    }

    let column = content_column(content_area);
    let [top, body, bottom] = Layout::vertical([
        Constraint::Length(CONTROLS_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(CONTROLS_HEIGHT),
    ])
    .areas(column);

    render_nav_controls(&app.nav, &app.controls, ControlSite::Top, frame, top);
    let content = app.page_content();
    render_page_body(&app.body, &content, frame, body);
    render_nav_controls(&app.nav, &app.controls, ControlSite::Bottom, frame, bottom);

    render_status_line(
        &app.status,
        &app.nav,
        app.focus == Focus::Sidebar,
        frame,
        status_area,
    );
}

#[cfg(test)]
mod tests {
    use citidash_core::catalog::PageId;
    use citidash_core::navigation::StepDirection;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::state::fixtures;
    use crate::widgets::buffer_text;

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_every_page_renders_with_chrome() {
        let mut app = fixtures::app();
        for page in PageId::all() {
            app.nav.goto_page(*page).unwrap();
            let text = draw(&app, 140, 45);
            assert!(text.contains(DASHBOARD_TITLE), "{page:?}");
            assert!(text.contains("Select an aspect of the analysis"), "{page:?}");
            assert_eq!(text.matches("◀ Previous").count(), 2, "{page:?}");
            assert_eq!(text.matches("Next ▶").count(), 2, "{page:?}");
        }
    }

    #[test]
    fn test_both_pairs_reach_the_reducer_after_render() {
        let mut app = fixtures::app();
        draw(&app, 140, 45);
        // Bottom "Next" button sits in the row above the status line.
        let hit = app.controls.hit_test(139, 43);
        assert_eq!(hit, Some((ControlSite::Bottom, StepDirection::Forward)));
        let hit = app.controls.hit_test(139, 1);
        assert_eq!(hit, Some((ControlSite::Top, StepDirection::Forward)));
        app.nav.step(StepDirection::Forward);
        assert!(draw(&app, 140, 45).contains("Page 2 of 7"));
    }

    #[test]
    fn test_narrow_terminal_hides_sidebar() {
        let app = fixtures::app();
        let text = draw(&app, 60, 30);
        assert!(!text.contains("Select an aspect"));
        assert_eq!(app.sidebar.row_at(2, 3, 7), None);
    }

    #[test]
    fn test_missing_image_warning_is_visible() {
        let app = fixtures::app();
        let text = draw(&app, 140, 45);
        assert!(text.contains("Image could not be loaded"));
    }
}
