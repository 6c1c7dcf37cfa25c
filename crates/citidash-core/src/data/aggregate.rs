//! Aggregates derived once at load time.

use chrono::{Datelike, Weekday};

use super::tables::{TripRecord, WeatherDay};

/// Mean daily trips for one weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayAverage {
    pub weekday: Weekday,
    pub mean_trips: f64,
    pub days: usize,
}

/// English weekday name ("Monday").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Average `trip_count` per weekday, ordered Monday through Sunday.
/// Weekdays without any day in the table are omitted.
pub fn weekday_averages(days: &[WeatherDay]) -> Vec<WeekdayAverage> {
    let mut sums = [0.0_f64; 7];
    let mut counts = [0_usize; 7];
    for day in days {
        let slot = day.date.weekday().num_days_from_monday() as usize;
        sums[slot] += day.trip_count;
        counts[slot] += 1;
    }

    let mut weekday = Weekday::Mon;
    let mut out = Vec::with_capacity(7);
    for slot in 0..7 {
        if counts[slot] > 0 {
            out.push(WeekdayAverage {
                weekday,
                mean_trips: sums[slot] / counts[slot] as f64,
                days: counts[slot],
            });
        }
        weekday = weekday.succ();
    }
    out
}

/// Five-number summary with Tukey whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value within `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Computes the summary. Non-finite values are ignored; returns `None`
    /// when nothing is left.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);
        let fence = 1.5 * (q3 - q1);
        let (low_fence, high_fence) = (q1 - fence, q3 + fence);

        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|v| *v >= low_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    /// Smallest and largest plotted value, outliers included.
    pub fn extent(&self) -> (f64, f64) {
        let min = self.outliers.first().map_or(self.lower_whisker, |v| v.min(self.lower_whisker));
        let max = self.outliers.last().map_or(self.upper_whisker, |v| v.max(self.upper_whisker));
        (min, max)
    }
}

/// Linear-interpolated quantile of sorted, non-empty data.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Trip duration summary for one (bike type, membership) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub rideable_type: String,
    pub member_casual: String,
    pub stats: BoxStats,
}

/// Groups trip durations by bike type, then membership, in order of first
/// appearance for both keys.
pub fn duration_boxes(trips: &[TripRecord]) -> Vec<BoxGroup> {
    let mut rideable_order: Vec<&str> = Vec::new();
    let mut member_order: Vec<&str> = Vec::new();
    for trip in trips {
        if !rideable_order.contains(&trip.rideable_type.as_str()) {
            rideable_order.push(&trip.rideable_type);
        }
        if !member_order.contains(&trip.member_casual.as_str()) {
            member_order.push(&trip.member_casual);
        }
    }

    let mut groups = Vec::new();
    for rideable in &rideable_order {
        for member in &member_order {
            let values: Vec<f64> = trips
                .iter()
                .filter(|t| t.rideable_type == *rideable && t.member_casual == *member)
                .map(|t| t.trip_duration)
                .collect();
            if let Some(stats) = BoxStats::from_values(&values) {
                groups.push(BoxGroup {
                    rideable_type: (*rideable).to_string(),
                    member_casual: (*member).to_string(),
                    stats,
                });
            }
        }
    }
    groups
}
