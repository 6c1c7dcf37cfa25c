//! Horizontal grouped box plot.
//!
//! One row per (category, series) group; rows of the same category are
//! stacked and categories are separated by a blank row. The value axis runs
//! left to right and is capped a little past the largest upper whisker, so
//! a long tail of outliers does not squash the boxes. Outliers past the cap
//! are drawn as `»` on the last column.

use citidash_core::charts::{BoxPlotGroup, BoxPlotSpec};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::series_color;
use crate::common::text::{compact_number, truncate_with_ellipsis};

const LABEL_WIDTH: u16 = 24;
/// Title row plus the header row with the legend.
const HEADER_ROWS: u16 = 2;
/// Axis line, tick labels and axis title.
const AXIS_ROWS: u16 = 3;
const WHISKER_HEADROOM: f64 = 1.2;

pub struct BoxPlotView<'a> {
    spec: &'a BoxPlotSpec,
}

/// Value range shown on the axis.
fn axis_range(spec: &BoxPlotSpec) -> Option<(f64, f64)> {
    let (min, max) = spec.value_bounds()?;
    let whisker_max = spec
        .groups
        .iter()
        .map(|g| g.stats.upper_whisker)
        .fold(f64::NEG_INFINITY, f64::max);
    let cap = (whisker_max * WHISKER_HEADROOM).min(max).max(whisker_max);
    let lo = min.min(0.0);
    if (cap - lo).abs() < f64::EPSILON {
        Some((lo, lo + 1.0))
    } else {
        Some((lo, cap))
    }
}

/// Column offset of `value` on a plot `width` columns wide.
fn column(value: f64, range: (f64, f64), width: u16) -> u16 {
    if width <= 1 {
        return 0;
    }
    let t = ((value - range.0) / (range.1 - range.0)).clamp(0.0, 1.0);
    (t * f64::from(width - 1)).round() as u16
}

/// Number of category separators between consecutive groups.
fn category_breaks(groups: &[BoxPlotGroup]) -> u16 {
    groups
        .windows(2)
        .filter(|pair| pair[0].category != pair[1].category)
        .count() as u16
}

impl<'a> BoxPlotView<'a> {
    pub fn new(spec: &'a BoxPlotSpec) -> Self {
        Self { spec }
    }

    pub fn height(&self) -> u16 {
        let groups = &self.spec.groups;
        if groups.is_empty() {
            return HEADER_ROWS + 1;
        }
        HEADER_ROWS + groups.len() as u16 + category_breaks(groups) + AXIS_ROWS
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let spec = self.spec;
        buf.set_stringn(
            area.x,
            area.y,
            &spec.title,
            area.width as usize,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if area.height < 2 {
            return;
        }
        let mut spans = vec![
            Span::styled(
                format!("{:<width$}", spec.x_title, width = LABEL_WIDTH as usize),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!("{}: ", spec.legend_title), Style::default().fg(Color::Gray)),
        ];
        for (name, color) in spec.legend() {
            spans.push(Span::styled("■ ", Style::default().fg(series_color(color))));
            spans.push(Span::raw(format!("{name}  ")));
        }
        buf.set_line(area.x, area.y + 1, &Line::from(spans), area.width);
    }

    fn render_group(group: &BoxPlotGroup, plot: Rect, y: u16, range: (f64, f64), buf: &mut Buffer) {
        let color = series_color(group.color);
        let stats = &group.stats;
        let col = |v: f64| plot.x + column(v, range, plot.width);

        let (lw, uw) = (col(stats.lower_whisker), col(stats.upper_whisker));
        for x in lw..=uw {
            buf.set_string(x, y, "─", Style::default().fg(color));
        }
        let (q1, q3) = (col(stats.q1), col(stats.q3));
        for x in q1..=q3 {
            buf.set_string(x, y, "█", Style::default().fg(color));
        }
        buf.set_string(
            col(stats.median),
            y,
            "┃",
            Style::default().fg(Color::White).bg(color),
        );
        for &outlier in &stats.outliers {
            let symbol = if outlier > range.1 { "»" } else { "•" };
            buf.set_string(col(outlier), y, symbol, Style::default().fg(color));
        }
    }

    fn render_axis(&self, plot: Rect, y: u16, range: (f64, f64), buf: &mut Buffer) {
        let style = Style::default().fg(Color::DarkGray);
        for x in plot.left()..plot.right() {
            buf.set_string(x, y, "─", style);
        }
        let ticks = [range.0, f64::midpoint(range.0, range.1), range.1];
        for (i, value) in ticks.iter().enumerate() {
            let label = compact_number(*value);
            let x = plot.x + column(*value, range, plot.width);
            buf.set_string(x, y, "┴", style);
            // Last label is right-aligned so it stays inside the plot.
            let start = if i == ticks.len() - 1 {
                (x + 1).saturating_sub(label.len() as u16).max(plot.x)
            } else {
                x
            };
            buf.set_string(start, y + 1, label, Style::default().fg(Color::Gray));
        }
        let title = &self.spec.y_title;
        let title_x = plot.x + plot.width.saturating_sub(title.len() as u16) / 2;
        let title_style = Style::default().fg(Color::Gray);
        buf.set_stringn(title_x, y + 2, title, plot.width as usize, title_style);
    }
}

impl Widget for BoxPlotView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        self.render_header(Rect { height: HEADER_ROWS.min(area.height), ..area }, buf);

        let groups = &self.spec.groups;
        let Some(range) = axis_range(self.spec) else {
            if area.height > HEADER_ROWS {
                let style = Style::default().fg(Color::DarkGray);
                buf.set_string(area.x, area.y + HEADER_ROWS, "No data", style);
            }
            return;
        };
        if area.width <= LABEL_WIDTH + 2 {
            return;
        }
        let plot = Rect {
            x: area.x + LABEL_WIDTH,
            width: area.width - LABEL_WIDTH - 1,
            ..area
        };

        let mut y = area.y + HEADER_ROWS;
        let mut previous: Option<&str> = None;
        for group in groups {
            if previous.is_some_and(|p| p != group.category) {
                y += 1;
            }
            if y >= area.bottom() {
                return;
            }
            let category = if previous == Some(group.category.as_str()) {
                String::new()
            } else {
                group.category.clone()
            };
            let label = Line::from(vec![
                Span::raw(format!("{:<13} ", truncate_with_ellipsis(&category, 13))),
                Span::styled(
                    truncate_with_ellipsis(&group.series, (LABEL_WIDTH - 15) as usize),
                    Style::default().fg(series_color(group.color)),
                ),
            ]);
            buf.set_line(area.x, y, &label, LABEL_WIDTH - 1);
            Self::render_group(group, plot, y, range, buf);
            previous = Some(group.category.as_str());
            y += 1;
        }

        if y + AXIS_ROWS <= area.bottom() {
            self.render_axis(plot, y, range, buf);
        }
    }
}
