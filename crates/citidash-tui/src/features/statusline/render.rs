use citidash_core::navigation::NavigationState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{FlashLevel, StatusState};
use crate::common::text::truncate_with_ellipsis;

const CONTENT_HINTS: &[(&str, &str)] = &[
    ("←/→", "page"),
    ("↑↓", "scroll"),
    ("Tab", "sidebar"),
    ("o", "open map"),
    ("m", "map layer"),
    ("q", "quit"),
];

const SIDEBAR_HINTS: &[(&str, &str)] = &[
    ("↑↓", "choose"),
    ("Enter", "go"),
    ("Tab", "back"),
    ("q", "quit"),
];

fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Rgb(245, 132, 38))));
        spans.push(Span::styled(format!(" {action}  "), Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

pub fn render_status_line(
    status: &StatusState,
    nav: &NavigationState,
    sidebar_focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let page = nav.current_page();
    let position = format!(" {}/{} · {} ", nav.index() + 1, nav.catalog().len(), page.title());
    let right_width = (position.chars().count() as u16).min(area.width / 2);
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(right_width)]).areas(area);

    let left_line = match status.flash() {
        Some(flash) => {
            let color = match flash.level {
                FlashLevel::Info => Color::Green,
                FlashLevel::Error => Color::Red,
            };
            Line::styled(
                truncate_with_ellipsis(&flash.text, left.width as usize),
                Style::default().fg(color),
            )
        }
        None if sidebar_focused => hint_line(SIDEBAR_HINTS),
        None => hint_line(CONTENT_HINTS),
    };
    frame.render_widget(Paragraph::new(left_line), left);
    frame.render_widget(
        Paragraph::new(
            Line::from(truncate_with_ellipsis(&position, right.width as usize)).right_aligned(),
        )
        .style(Style::default().fg(Color::Gray)),
        right,
    );
}
