use citidash_core::charts::BarChartSpec;
use ratatui::buffer::Buffer;
use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Widget};

use super::series_color;
use crate::common::text::{compact_number, truncate_with_ellipsis};

/// Rows for the bars of a vertical chart.
const VERTICAL_BODY_ROWS: u16 = 14;
/// More bars than this are drawn horizontally so labels stay readable.
const HORIZONTAL_THRESHOLD: usize = 8;
const HORIZONTAL_LABEL_WIDTH: usize = 28;

pub struct BarChartView<'a> {
    spec: &'a BarChartSpec,
}

impl<'a> BarChartView<'a> {
    pub fn new(spec: &'a BarChartSpec) -> Self {
        Self { spec }
    }

    fn is_horizontal(&self) -> bool {
        self.spec.bars.len() > HORIZONTAL_THRESHOLD
    }

    fn header_rows(&self) -> u16 {
        if self.axis_caption().is_some() { 2 } else { 1 }
    }

    fn axis_caption(&self) -> Option<String> {
        match (&self.spec.x_title, &self.spec.y_title) {
            (None, None) => None,
            (x, y) => Some(format!(
                "{} by {}",
                y.as_deref().unwrap_or("value"),
                x.as_deref().unwrap_or("category")
            )),
        }
    }

    pub fn height(&self) -> u16 {
        let body = if self.spec.bars.is_empty() {
            1
        } else if self.is_horizontal() {
            self.spec.bars.len() as u16
        } else {
            VERTICAL_BODY_ROWS
        };
        self.header_rows() + body
    }
}

impl Widget for BarChartView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let spec = self.spec;
        buf.set_stringn(
            area.x,
            area.y,
            &spec.title,
            area.width as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if let Some(caption) = self.axis_caption() {
            buf.set_stringn(
                area.x,
                area.y + 1,
                caption,
                area.width as usize,
                Style::default().fg(Color::DarkGray),
            );
        }

        let header = self.header_rows().min(area.height);
        let body = Rect {
            y: area.y + header,
            height: area.height - header,
            ..area
        };
        if body.is_empty() {
            return;
        }
        if spec.bars.is_empty() {
            buf.set_string(body.x, body.y, "No data", Style::default().fg(Color::DarkGray));
            return;
        }

        let color = series_color(spec.color);
        let horizontal = self.is_horizontal();
        let n = spec.bars.len() as u16;
        let bar_gap: u16 = if horizontal { 0 } else { 1 };
        let bar_width = if horizontal {
            1
        } else {
            (body.width.saturating_sub(bar_gap * (n - 1)) / n).clamp(1, 14)
        };
        let label_width = if horizontal {
            HORIZONTAL_LABEL_WIDTH
        } else {
            bar_width as usize
        };

        let bars: Vec<Bar> = spec
            .bars
            .iter()
            .map(|point| {
                Bar::default()
                    .value(point.value.max(0.0).round() as u64)
                    .text_value(compact_number(point.value))
                    .label(Line::from(truncate_with_ellipsis(&point.label, label_width)))
            })
            .collect();

        let mut chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .max(spec.y_max().max(1.0).round() as u64)
            .bar_width(bar_width)
            .bar_gap(bar_gap)
            .bar_style(Style::default().fg(color))
            .value_style(Style::default().fg(Color::Black).bg(color))
            .label_style(Style::default().fg(Color::Gray));
        if horizontal {
            chart = chart.direction(Direction::Horizontal);
        }
        chart.render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use citidash_core::charts::{BarPoint, SeriesColor};

    use super::*;
    use crate::widgets::buffer_text;

    fn spec(n: usize) -> BarChartSpec {
        BarChartSpec {
            title: "Average trips".to_string(),
            x_title: None,
            y_title: None,
            bars: (0..n)
                .map(|i| BarPoint {
                    label: format!("Day{i}"),
                    value: 1_000.0 * (i + 1) as f64,
                })
                .collect(),
            y_range: None,
            color: SeriesColor::Blue,
        }
    }

    #[test]
    fn test_height_depends_on_orientation() {
        let few = spec(7);
        assert_eq!(BarChartView::new(&few).height(), 1 + VERTICAL_BODY_ROWS);
        let many = spec(20);
        assert_eq!(BarChartView::new(&many).height(), 21);
    }

    #[test]
    fn test_renders_title_and_labels() {
        let spec = spec(3);
        let view = BarChartView::new(&spec);
        let area = Rect::new(0, 0, 40, view.height());
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Average trips"));
        assert!(text.contains("Day0"));
    }

    #[test]
    fn test_empty_chart_says_no_data() {
        let spec = spec(0);
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);
        BarChartView::new(&spec).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("No data"));
    }
}
