//! Section measuring and drawing.
//!
//! `section_height` and `draw_section` must agree row for row: the page is
//! drawn into a buffer sized from the measured height.

use citidash_core::pages::Section;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::common::text::wrap_text;
use crate::widgets::{
    BarChartView, BoxPlotView, CardRow, DualAxisChart, HalfBlockImage, MapEmbedView,
};

/// Blank rows between consecutive sections.
const SECTION_GAP: u16 = 1;
const COLUMN_GAP: u16 = 2;
const ACCENT: Color = Color::Rgb(245, 132, 38);

fn split_columns(area: Rect, ratio: (u16, u16)) -> [Rect; 2] {
    Layout::horizontal([Constraint::Fill(ratio.0), Constraint::Fill(ratio.1)])
        .spacing(COLUMN_GAP)
        .areas(area)
}

fn styled_rows(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width as usize)
        .into_iter()
        .map(|row| Line::styled(row, style))
        .collect()
}

/// Rows with a marker on the first line and matching indent after.
fn marked_rows(text: &str, width: u16, marker: &'static str, style: Style) -> Vec<Line<'static>> {
    let indent = " ".repeat(marker.chars().count());
    wrap_text(text, width.saturating_sub(indent.len() as u16) as usize)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let lead = if i == 0 { marker.to_string() } else { indent.clone() };
            Line::from(vec![Span::styled(lead, style), Span::styled(row, style)])
        })
        .collect()
}

/// Lines of a text-only section, `None` for widget sections.
fn text_lines(section: &Section<'_>, width: u16) -> Option<Vec<Line<'static>>> {
    let lines = match section {
        Section::Title(text) => {
            let mut lines = styled_rows(
                text,
                width,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            );
            lines.push(Line::styled(
                "━".repeat(width as usize),
                Style::default().fg(ACCENT),
            ));
            lines
        }
        Section::Subheader(text) => styled_rows(
            text,
            width,
            Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        ),
        Section::Heading(text) => styled_rows(
            text,
            width,
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Section::Paragraph(text) => styled_rows(text, width, Style::default()),
        Section::Caption(text) => styled_rows(
            text,
            width,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
        Section::Bullets(items) => items
            .iter()
            .flat_map(|item| marked_rows(item, width, "• ", Style::default()))
            .collect(),
        Section::Warning(text) => {
            marked_rows(text, width, "⚠ ", Style::default().fg(Color::Yellow))
        }
        Section::Selector {
            label,
            options,
            selected,
        } => {
            let mut spans = vec![Span::styled(
                format!("{label} "),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            for (i, option) in options.iter().enumerate() {
                let (mark, style) = if i == *selected {
                    ("◉", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                } else {
                    ("○", Style::default().fg(Color::Gray))
                };
                spans.push(Span::styled(format!("{mark} {option}  "), style));
            }
            spans.push(Span::styled("(m to switch)", Style::default().fg(Color::DarkGray)));
            vec![Line::from(spans)]
        }
        Section::Image(_)
        | Section::BarChart(_)
        | Section::DualAxis(_)
        | Section::BoxPlot(_)
        | Section::MapEmbed { .. }
        | Section::Cards(_)
        | Section::Columns { .. } => return None,
    };
    Some(lines)
}

/// Rows `section` takes at `width`.
pub fn section_height(section: &Section<'_>, width: u16) -> u16 {
    if let Some(lines) = text_lines(section, width) {
        return lines.len() as u16;
    }
    match section {
        Section::Image(asset) => HalfBlockImage::new(asset).height(width),
        Section::BarChart(spec) => BarChartView::new(spec).height(),
        Section::DualAxis(_) => DualAxisChart::height(),
        Section::BoxPlot(spec) => BoxPlotView::new(spec).height(),
        Section::MapEmbed { height, .. } => *height,
        Section::Cards(cards) => CardRow::new(cards).height(width),
        Section::Columns { ratio, left, right } => {
            let [l, r] = split_columns(Rect::new(0, 0, width, 1), *ratio);
            sections_height(left, l.width).max(sections_height(right, r.width))
        }
        _ => 0,
    }
}

/// Total rows of `sections` stacked with gaps.
pub fn sections_height(sections: &[Section<'_>], width: u16) -> u16 {
    let body = sections
        .iter()
        .fold(0u16, |acc, s| acc.saturating_add(section_height(s, width)));
    let gaps = SECTION_GAP.saturating_mul((sections.len() as u16).saturating_sub(1));
    body.saturating_add(gaps)
}

fn draw_section(section: &Section<'_>, area: Rect, buf: &mut Buffer) {
    if let Some(lines) = text_lines(section, area.width) {
        Paragraph::new(lines).render(area, buf);
        return;
    }
    match section {
        Section::Image(asset) => HalfBlockImage::new(asset).render(area, buf),
        Section::BarChart(spec) => BarChartView::new(spec).render(area, buf),
        Section::DualAxis(spec) => DualAxisChart::new(spec).render(area, buf),
        Section::BoxPlot(spec) => BoxPlotView::new(spec).render(area, buf),
        Section::MapEmbed { doc, .. } => MapEmbedView::new(doc).render(area, buf),
        Section::Cards(cards) => CardRow::new(cards).render(area, buf),
        Section::Columns { ratio, left, right } => {
            let [l, r] = split_columns(area, *ratio);
            draw_sections(left, l, buf);
            draw_sections(right, r, buf);
        }
        _ => {}
    }
}

/// Draws `sections` top to bottom inside `area`.
pub fn draw_sections(sections: &[Section<'_>], area: Rect, buf: &mut Buffer) {
    let mut y = area.y;
    for section in sections {
        if y >= area.bottom() {
            break;
        }
        let height = section_height(section, area.width).min(area.bottom() - y);
        draw_section(section, Rect { y, height, ..area }, buf);
        y = y.saturating_add(height).saturating_add(SECTION_GAP);
    }
}
