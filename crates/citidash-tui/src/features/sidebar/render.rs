use citidash_core::navigation::NavigationState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use super::state::SidebarState;
use crate::common::text::truncate_with_ellipsis;

pub const SIDEBAR_LABEL: &str = "Select an aspect of the analysis";

/// Draws the page list. The `●` marker always follows the navigation index;
/// the highlight bar shows the selector cursor while the sidebar has focus.
pub fn render_sidebar(
    sidebar: &SidebarState,
    nav: &NavigationState,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border = if focused { Color::Rgb(245, 132, 38) } else { Color::DarkGray };
    let block = Block::bordered()
        .border_style(Style::default().fg(border))
        .title(Line::from(SIDEBAR_LABEL).style(Style::default().add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);

    let selected = sidebar.selector.selected(nav);
    let width = inner.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = nav
        .catalog()
        .iter()
        .map(|page| {
            let marker = if page == selected { "● " } else { "  " };
            let style = if page == selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Rgb(245, 132, 38))),
                Span::styled(truncate_with_ellipsis(page.title(), width), style),
            ]))
        })
        .collect();

    let mut list = List::new(items).block(block);
    if focused {
        list = list.highlight_style(Style::default().bg(Color::Rgb(0, 107, 182)));
    }
    let mut list_state = ListState::default()
        .with_offset(sidebar.list_offset.get())
        .with_selected(Some(sidebar.selector.highlighted(nav)));
    frame.render_stateful_widget(list, area, &mut list_state);

    sidebar.list_area.set(inner);
    sidebar.list_offset.set(list_state.offset());
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::widgets::buffer_text;

    #[test]
    fn test_marks_current_page_and_records_area() {
        let mut nav = NavigationState::default();
        nav.goto("Busiest stations").unwrap();
        let sidebar = SidebarState::new();

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| render_sidebar(&sidebar, &nav, false, frame, frame.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(SIDEBAR_LABEL));
        let marked: Vec<&str> = text.lines().filter(|l| l.contains('●')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains(nav.current_page().title()));
        assert_eq!(sidebar.list_area.get(), Rect::new(1, 1, 38, 8));
    }
}
