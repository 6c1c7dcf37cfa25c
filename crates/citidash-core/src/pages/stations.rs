use super::{PageOptions, Section};
use crate::charts::{BarChartSpec, BarPoint, SeriesColor};
use crate::data::{DatasetBundle, MapId, OptionalTable, TOP_STATIONS_FILE};

pub(super) fn render<'a>(bundle: &'a DatasetBundle, options: &PageOptions) -> Vec<Section<'a>> {
    let mut sections = vec![
        Section::Title("Top 100 busiest citibike stations by daily departures".to_string()),
        Section::paragraph("Open the map for per-station statistics."),
        Section::Heading("100 Busiest Citibike Stations in New York 2022".to_string()),
        Section::MapEmbed {
            doc: bundle.map(MapId::TopStations),
            height: options.map_height,
        },
        Section::paragraph(
            "Perhaps unsurprisingly, the busiest stations are on Manhattan, in particular \
             midtown and the lower half of Manhattan. For operations, it's worth noting that of \
             these busiest stations, none have departures and arrivals that are extremely \
             out-of-balance: no station sees more than a 5% difference between arrivals and \
             departures.",
        ),
    ];

    match &bundle.top_stations {
        OptionalTable::Loaded(rows) => sections.push(Section::BarChart(BarChartSpec {
            title: "Top 20 most popular bike stations in New York City (2022)".to_string(),
            x_title: Some("Start stations".to_string()),
            y_title: Some("Total trips started".to_string()),
            bars: rows
                .iter()
                .map(|row| BarPoint {
                    label: row.start_station_name.clone(),
                    value: row.num_trips,
                })
                .collect(),
            y_range: None,
            color: SeriesColor::Blue,
        })),
        OptionalTable::Missing { reason } => sections.push(Section::Warning(format!(
            "Top 20 stations chart unavailable ({TOP_STATIONS_FILE}): {reason}"
        ))),
    }

    sections
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::data::{DatasetBundle, StationCount, fixtures};

    #[test]
    fn test_missing_top_stations_table_is_warning() {
        let dir = tempdir().unwrap();
        let bundle = fixtures::bundle(dir.path());
        let sections = render(&bundle, &PageOptions::default());
        let Some(Section::Warning(text)) = sections.last() else {
            panic!("expected a trailing warning");
        };
        assert!(text.contains("top_20.csv"));
    }

    #[test]
    fn test_top_stations_table_becomes_bar_chart() {
        let dir = tempdir().unwrap();
        let loaded = fixtures::bundle(dir.path());
        let bundle = DatasetBundle::from_parts(
            loaded.trips.clone(),
            loaded.weather.clone(),
            OptionalTable::Loaded(vec![StationCount {
                start_station_name: "W 21 St & 6 Ave".to_string(),
                num_trips: 129_000.0,
            }]),
            loaded.maps.clone(),
            loaded.images.clone(),
        );

        let sections = render(&bundle, &PageOptions::default());
        let Some(Section::BarChart(spec)) = sections.last() else {
            panic!("expected a trailing bar chart");
        };
        assert_eq!(spec.bars.len(), 1);
        assert_eq!(spec.x_title.as_deref(), Some("Start stations"));
    }
}
