//! Two line series over a shared date axis, each with its own y scale.
//!
//! ratatui's `Chart` has a single y axis. The right series is rescaled into
//! the left axis range and its own tick labels are drawn in a gutter on the
//! right edge. A reversed axis is drawn by mirroring values inside their
//! bounds and listing the tick labels in the opposite order.

use citidash_core::charts::{DualAxisSpec, LineSeries, x_to_date};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Widget};

use super::series_color;
use crate::common::text::compact_number;

const HEADER_ROWS: u16 = 2;
const PLOT_ROWS: u16 = 16;
const RIGHT_GUTTER: u16 = 7;
/// Rows under the plot used by the x axis line, labels and title.
const X_AXIS_ROWS: u16 = 2;

pub struct DualAxisChart<'a> {
    spec: &'a DualAxisSpec,
}

/// Bounds of a series with a little headroom; never degenerate.
fn padded_bounds(bounds: Option<(f64, f64)>) -> (f64, f64) {
    match bounds {
        None => (0.0, 1.0),
        Some((lo, hi)) if (hi - lo).abs() < f64::EPSILON => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        }
    }
}

/// Linear map of `value` from one range onto another.
fn scale_into(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span.abs() < f64::EPSILON {
        return to.0;
    }
    to.0 + (value - from.0) / span * (to.1 - to.0)
}

/// Mirrors `value` inside `bounds` so larger values sit lower.
fn mirror(value: f64, bounds: (f64, f64)) -> f64 {
    bounds.0 + bounds.1 - value
}

/// Tick labels bottom to top.
fn tick_labels(bounds: (f64, f64), reversed: bool) -> Vec<String> {
    let mid = f64::midpoint(bounds.0, bounds.1);
    let mut labels = vec![
        compact_number(bounds.0),
        compact_number(mid),
        compact_number(bounds.1),
    ];
    if reversed {
        labels.reverse();
    }
    labels
}

fn date_labels(bounds: (f64, f64)) -> Vec<String> {
    [bounds.0, f64::midpoint(bounds.0, bounds.1), bounds.1]
        .iter()
        .map(|x| x_to_date(*x).map_or_else(String::new, |d| d.format("%b %Y").to_string()))
        .collect()
}

/// Points of `series` in left-axis coordinates.
fn project(
    series: &LineSeries,
    own: (f64, f64),
    reversed: bool,
    target: (f64, f64),
) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .map(|&(x, y)| {
            let y = if reversed { mirror(y, own) } else { y };
            (x, scale_into(y, own, target))
        })
        .collect()
}

impl<'a> DualAxisChart<'a> {
    pub fn new(spec: &'a DualAxisSpec) -> Self {
        Self { spec }
    }

    pub fn height() -> u16 {
        HEADER_ROWS + PLOT_ROWS + X_AXIS_ROWS
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
        let suffix = |reversed: bool| if reversed { " (reversed)" } else { "" };
        let left = format!("◀ {}{}", spec.left_axis.title, suffix(spec.left_axis.reversed));
        let right = format!("{}{} ▶", spec.right_axis.title, suffix(spec.right_axis.reversed));
        let row = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        Line::styled(left, Style::default().fg(series_color(spec.left.color))).render(row, buf);
        Line::styled(right, Style::default().fg(series_color(spec.right.color)))
            .alignment(Alignment::Right)
            .render(row, buf);
    }
}

impl Widget for DualAxisChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let spec = self.spec;
        let header = HEADER_ROWS.min(area.height);
        self.render_header(Rect { height: header, ..area }, buf);

        let body = Rect {
            y: area.y + header,
            height: area.height - header,
            width: area.width.saturating_sub(RIGHT_GUTTER),
            ..area
        };
        if body.height <= X_AXIS_ROWS || body.width == 0 {
            return;
        }

        let x_bounds = padded_bounds(spec.x_bounds());
        let left_bounds = padded_bounds(spec.left.y_bounds());
        let right_bounds = padded_bounds(spec.right.y_bounds());

        let left_points = project(&spec.left, left_bounds, spec.left_axis.reversed, left_bounds);
        let right_points = project(
            &spec.right,
            right_bounds,
            spec.right_axis.reversed,
            left_bounds,
        );

        let datasets = vec![
            Dataset::default()
                .name(spec.left.name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(spec.left.color)))
                .data(&left_points),
            Dataset::default()
                .name(spec.right.name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(spec.right.color)))
                .data(&right_points),
        ];

        let axis_style = Style::default().fg(Color::DarkGray);
        Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .title(spec.x_title.clone())
                    .style(axis_style)
                    .bounds([x_bounds.0, x_bounds.1])
                    .labels(date_labels(x_bounds)),
            )
            .y_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds([left_bounds.0, left_bounds.1])
                    .labels(tick_labels(left_bounds, spec.left_axis.reversed)),
            )
            .legend_position(Some(LegendPosition::TopLeft))
            .render(body, buf);

        // Right-hand tick labels, top / middle / bottom of the plot rows.
        let gutter_x = body.right() + 1;
        let plot_top = body.y;
        let plot_bottom = body.bottom().saturating_sub(X_AXIS_ROWS + 1);
        let labels = tick_labels(right_bounds, spec.right_axis.reversed);
        let style = Style::default().fg(series_color(spec.right.color));
        let rows = [plot_bottom, plot_top + (plot_bottom - plot_top) / 2, plot_top];
        for (row, label) in rows.iter().zip(&labels) {
            buf.set_stringn(gutter_x, *row, label, (RIGHT_GUTTER - 1) as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use citidash_core::charts::{AxisSpec, SeriesColor};

    use super::*;
    use crate::widgets::buffer_text;

    fn spec(reversed: bool) -> DualAxisSpec {
        let days: Vec<NaiveDate> = (1..=30)
            .map(|d| NaiveDate::from_ymd_opt(2022, 6, d).unwrap())
            .collect();
        DualAxisSpec {
            title: "Trips and Temperature".to_string(),
            x_title: "Date".to_string(),
            left: LineSeries::from_dated(
                "daily temperature",
                SeriesColor::Red,
                days.iter().map(|d| (*d, Some(20.0 + f64::from(d.day0())))),
            ),
            left_axis: AxisSpec {
                title: "Temperature".to_string(),
                reversed,
            },
            right: LineSeries::from_dated(
                "daily bike rides",
                SeriesColor::Blue,
                days.iter().map(|d| (*d, Some(50_000.0 + 1_000.0 * f64::from(d.day0())))),
            ),
            right_axis: AxisSpec::new("Trips"),
        }
    }

    #[test]
    fn test_scale_into_maps_endpoints() {
        assert!((scale_into(10.0, (10.0, 20.0), (0.0, 1.0))).abs() < 1e-9);
        assert!((scale_into(20.0, (10.0, 20.0), (0.0, 1.0)) - 1.0).abs() < 1e-9);
        assert!((scale_into(5.0, (5.0, 5.0), (3.0, 4.0)) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_mirror_swaps_ends() {
        assert!((mirror(0.0, (0.0, 30.0)) - 30.0).abs() < 1e-9);
        assert!((mirror(30.0, (0.0, 30.0))).abs() < 1e-9);
    }

    #[test]
    fn test_reversed_axis_flips_tick_labels() {
        assert_eq!(tick_labels((0.0, 20.0), false), vec!["0", "10", "20"]);
        assert_eq!(tick_labels((0.0, 20.0), true), vec!["20", "10", "0"]);
    }

    #[test]
    fn test_padded_bounds_never_degenerate() {
        assert_eq!(padded_bounds(None), (0.0, 1.0));
        assert_eq!(padded_bounds(Some((4.0, 4.0))), (3.0, 5.0));
    }

    #[test]
    fn test_renders_both_axis_titles() {
        let spec = spec(true);
        let area = Rect::new(0, 0, 90, DualAxisChart::height());
        let mut buf = Buffer::empty(area);
        DualAxisChart::new(&spec).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Trips and Temperature"));
        assert!(text.contains("Temperature (reversed)"));
        assert!(text.contains("Trips ▶"));
        assert!(text.contains("Jun 2022"));
    }
}
