//! Chart specifications.
//!
//! Pages describe charts as plain data: a title, axis bindings, series and
//! display options. Drawing them is the terminal layer's job.

use chrono::NaiveDate;

/// Named palette shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Red,
    Blue,
    Orange,
    Gray,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub bars: Vec<BarPoint>,
    /// Fixed value range; derived from the data when `None`.
    pub y_range: Option<(f64, f64)>,
    pub color: SeriesColor,
}

impl BarChartSpec {
    /// Upper bound of the value axis.
    pub fn y_max(&self) -> f64 {
        self.y_range.map_or_else(
            || self.bars.iter().map(|b| b.value).fold(0.0, f64::max),
            |(_, max)| max,
        )
    }
}

/// One line of a time series. `x` is days since the common era.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: SeriesColor,
    pub points: Vec<(f64, f64)>,
}

impl LineSeries {
    /// Builds a series from dated values, skipping missing ones.
    pub fn from_dated<I>(name: &str, color: SeriesColor, values: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, Option<f64>)>,
    {
        let points = values
            .into_iter()
            .filter_map(|(date, value)| value.map(|v| (date_to_x(date), v)))
            .collect();
        Self {
            name: name.to_string(),
            color,
            points,
        }
    }

    /// `(min, max)` of the y values, or `None` for an empty series.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|(_, y)| *y))
    }

    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|(x, _)| *x))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub title: String,
    /// Larger values are drawn lower.
    pub reversed: bool,
}

impl AxisSpec {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            reversed: false,
        }
    }

    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }
}

/// Two time series sharing the x axis, each with its own y axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DualAxisSpec {
    pub title: String,
    pub x_title: String,
    pub left: LineSeries,
    pub left_axis: AxisSpec,
    pub right: LineSeries,
    pub right_axis: AxisSpec,
}

impl DualAxisSpec {
    /// Shared x range across both series.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        match (self.left.x_bounds(), self.right.x_bounds()) {
            (Some(a), Some(b)) => Some((a.0.min(b.0), a.1.max(b.1))),
            (a, b) => a.or(b),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotGroup {
    /// Category on the x axis.
    pub category: String,
    /// Color group within the category.
    pub series: String,
    pub color: SeriesColor,
    pub stats: crate::data::BoxStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub legend_title: String,
    pub groups: Vec<BoxPlotGroup>,
}

impl BoxPlotSpec {
    /// Value range covering every whisker and outlier.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.groups
            .iter()
            .map(|g| g.stats.extent())
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1)))
    }

    /// Distinct series with their colors, in first-appearance order.
    pub fn legend(&self) -> Vec<(&str, SeriesColor)> {
        let mut out: Vec<(&str, SeriesColor)> = Vec::new();
        for group in &self.groups {
            if !out.iter().any(|(name, _)| *name == group.series) {
                out.push((&group.series, group.color));
            }
        }
        out
    }
}

/// Converts a date to the numeric x used by line series.
pub fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(chrono::Datelike::num_days_from_ce(&date))
}

/// Converts a numeric x back to a date, if in range.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
