use super::{Section, image_section};
use crate::charts::{AxisSpec, BarChartSpec, BarPoint, DualAxisSpec, LineSeries, SeriesColor};
use crate::data::{DatasetBundle, ImageId, weekday_name};

const PAGE_TITLE: &str = "When and how are people using Citibike?";
const TRIPS_AXIS: &str = "Number of Citibike Trips";
const WEEKDAY_RANGE: (f64, f64) = (0.0, 100_000.0);

pub(super) fn render(bundle: &DatasetBundle) -> Vec<Section<'_>> {
    vec![
        Section::Title(PAGE_TITLE.to_string()),
        image_section(bundle, ImageId::SeasonAnnotated),
        Section::paragraph(
            "There is a clear seasonal pattern to the number of daily trips, with the summer \
             months having over double the average daily # of trips compared to Winter. If \
             cost-effective, there is large scope here to reduce capacities in the Winter months.",
        ),
        Section::BarChart(weekday_chart(bundle)),
        Section::paragraph(
            "We see a midweek peak for average trips per day of the week, ramping up from \
             Monday, peaking on Wednesday, and Sunday being the least busy day. As evidenced by \
             the consistently high number of trips from Tuesday to Friday, we see that midweek \
             ridership is strong and steady. The lower numbers on Monday could be due to fatigue \
             from the weekend or more people in home office.",
        ),
        Section::DualAxis(temperature_chart(bundle)),
        Section::paragraph(
            "There is a clear link between temperature and the number of trips. The amount of \
             Citibike trips generally rises and drops with the average daily temperature, \
             corresponding with the above seasonal pattern. However since there are some strong \
             dips despite higher temperature, we will look at precipitation also.",
        ),
        Section::DualAxis(precipitation_chart(bundle)),
        Section::paragraph(
            "Looking into these seemingly random dips further, we see the extreme dips in number \
             of trips align closely with very rainy days.",
        ),
    ]
}

fn weekday_chart(bundle: &DatasetBundle) -> BarChartSpec {
    BarChartSpec {
        title: "Bar Chart of Average Daily Trips by Day of the Week".to_string(),
        x_title: None,
        y_title: None,
        bars: bundle
            .weekday_averages
            .iter()
            .map(|avg| BarPoint {
                label: weekday_name(avg.weekday).to_string(),
                value: avg.mean_trips,
            })
            .collect(),
        y_range: Some(WEEKDAY_RANGE),
        color: SeriesColor::Blue,
    }
}

fn trips_series(bundle: &DatasetBundle) -> LineSeries {
    LineSeries::from_dated(
        "daily bike rides",
        SeriesColor::Blue,
        bundle.weather.iter().map(|d| (d.date, Some(d.trip_count))),
    )
}

fn temperature_chart(bundle: &DatasetBundle) -> DualAxisSpec {
    DualAxisSpec {
        title: "Line Plot of Daily Citibike Trips and Temperature - New York 2022".to_string(),
        x_title: "Date".to_string(),
        left: LineSeries::from_dated(
            "daily temperature",
            SeriesColor::Red,
            bundle.weather.iter().map(|d| (d.date, d.temperature)),
        ),
        left_axis: AxisSpec::new("Temperature (Daily Average °C)"),
        right: trips_series(bundle),
        right_axis: AxisSpec::new(TRIPS_AXIS),
    }
}

fn precipitation_chart(bundle: &DatasetBundle) -> DualAxisSpec {
    DualAxisSpec {
        title: "Line Plot of Daily Citibike Trips and Precipitation - New York 2022".to_string(),
        x_title: "Date".to_string(),
        left: LineSeries::from_dated(
            "daily precipitation",
            SeriesColor::Red,
            bundle.weather.iter().map(|d| (d.date, d.precipitation)),
        ),
        left_axis: AxisSpec::new("Precipitation (mm)").reversed(),
        right: trips_series(bundle),
        right_axis: AxisSpec::new(TRIPS_AXIS),
    }
}
