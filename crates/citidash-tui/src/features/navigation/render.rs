use citidash_core::navigation::{NavigationState, StepDirection};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::state::{ControlSite, NavControlsState};

const PREV_LABEL: &str = " ◀ Previous ";
const NEXT_LABEL: &str = " Next ▶ ";
const BUTTON_WIDTH: u16 = 12;

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0, 107, 182))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Rgb(40, 40, 40))
    }
}

/// Draws one control pair and records its button areas.
pub fn render_nav_controls(
    nav: &NavigationState,
    controls: &NavControlsState,
    site: ControlSite,
    frame: &mut Frame,
    area: Rect,
) {
    if area.is_empty() {
        controls.record(site, Rect::default(), Rect::default());
        return;
    }
    let [prev_area, middle, next_area] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(BUTTON_WIDTH),
    ])
    .areas(area);

    let back = nav.can_step(StepDirection::Backward);
    let forward = nav.can_step(StepDirection::Forward);
    frame.render_widget(
        Paragraph::new(PREV_LABEL).style(button_style(back)),
        prev_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(NEXT_LABEL).right_aligned()).style(button_style(forward)),
        next_area,
    );

    let position = format!("Page {} of {}", nav.index() + 1, nav.catalog().len());
    frame.render_widget(
        Paragraph::new(Line::from(position).centered()).style(Style::default().fg(Color::Gray)),
        middle,
    );

    controls.record(site, prev_area, next_area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::widgets::buffer_text;

    fn draw(nav: &NavigationState, controls: &NavControlsState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| {
                render_nav_controls(nav, controls, ControlSite::Top, frame, frame.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_shows_position_and_records_buttons() {
        let mut nav = NavigationState::default();
        nav.step(StepDirection::Forward);
        let controls = NavControlsState::new();

        let text = draw(&nav, &controls);
        assert!(text.contains("◀ Previous"));
        assert!(text.contains("Next ▶"));
        assert!(text.contains("Page 2 of 7"));
        assert_eq!(
            controls.hit_test(59, 0),
            Some((ControlSite::Top, StepDirection::Forward))
        );
    }

    #[test]
    fn test_boundary_button_is_dimmed() {
        let nav = NavigationState::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|frame| {
                render_nav_controls(
                    &nav,
                    &NavControlsState::new(),
                    ControlSite::Bottom,
                    frame,
                    frame.area(),
                );
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(2, 0)].fg, Color::DarkGray);
        assert_eq!(buf[(58, 0)].fg, Color::White);
    }
}
