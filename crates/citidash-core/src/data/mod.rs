//! The dataset bundle: every table, aggregate, map document and image the
//! pages read.
//!
//! Loaded once before the first frame and never mutated afterwards. Required
//! inputs (trip sample, weather table, map documents) fail the load; optional
//! inputs (top stations table, images) degrade to warnings.

pub mod aggregate;
pub mod assets;
pub mod tables;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
pub use assets::{ImageAsset, ImageId, ImageSlot, MapDocument, MapId};
pub use aggregate::{BoxGroup, BoxStats, WeekdayAverage, weekday_name};
use enum_map::EnumMap;
pub use tables::{StationCount, TripRecord, WeatherDay};

use crate::config::Config;

pub const TRIPS_FILE: &str = "df_sample_100.csv";
pub const WEATHER_FILE: &str = "df_weather.csv";
pub const TOP_STATIONS_FILE: &str = "top_20.csv";

/// Resolved input directories.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl DataPaths {
    pub fn new(root: &Path, config: &Config) -> Self {
        Self {
            data_dir: config.data_path(root),
            assets_dir: config.assets_path(root),
        }
    }
}

/// An optional table that may have failed to load.
#[derive(Debug, Clone)]
pub enum OptionalTable<T> {
    Loaded(Vec<T>),
    Missing { reason: String },
}

impl<T> OptionalTable<T> {
    pub fn rows(&self) -> Option<&[T]> {
        match self {
            OptionalTable::Loaded(rows) => Some(rows),
            OptionalTable::Missing { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct DatasetBundle {
    pub trips: Vec<TripRecord>,
    pub weather: Vec<WeatherDay>,
    pub weekday_averages: Vec<WeekdayAverage>,
    pub duration_boxes: Vec<BoxGroup>,
    pub top_stations: OptionalTable<StationCount>,
    pub maps: EnumMap<MapId, MapDocument>,
    pub images: EnumMap<ImageId, ImageSlot>,
}

impl DatasetBundle {
    /// Loads every input under `paths`.
    ///
    /// # Errors
    /// Returns an error if a required table or map document is missing,
    /// unreadable, or does not match its schema.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let trips = tables::read_trips(&paths.data_dir.join(TRIPS_FILE))
            .context("Failed to load the trip sample")?;
        let weather = tables::read_weather(&paths.data_dir.join(WEATHER_FILE))
            .context("Failed to load the weather table")?;

        let top_stations_path = paths.data_dir.join(TOP_STATIONS_FILE);
        let top_stations = match tables::read_top_stations(&top_stations_path) {
            Ok(rows) => OptionalTable::Loaded(rows),
            Err(err) => {
                tracing::warn!(
                    path = %top_stations_path.display(),
                    error = %format!("{err:#}"),
                    "optional table not loaded"
                );
                OptionalTable::Missing {
                    reason: format!("{err:#}"),
                }
            }
        };

        let maps = EnumMap::from_array([
            MapDocument::load(MapId::Routes, &paths.assets_dir)?,
            MapDocument::load(MapId::TopStations, &paths.assets_dir)?,
            MapDocument::load(MapId::PopulationLayer, &paths.assets_dir)?,
            MapDocument::load(MapId::IncomeLayer, &paths.assets_dir)?,
        ]);
        let images = EnumMap::from_fn(|id| ImageSlot::load(id, &paths.assets_dir));

        let bundle = Self::from_parts(trips, weather, top_stations, maps, images);
        tracing::info!(
            trips = bundle.trips.len(),
            days = bundle.weather.len(),
            "dataset bundle loaded"
        );
        Ok(bundle)
    }

    /// Assembles a bundle from already-loaded parts and derives aggregates.
    pub fn from_parts(
        trips: Vec<TripRecord>,
        weather: Vec<WeatherDay>,
        top_stations: OptionalTable<StationCount>,
        maps: EnumMap<MapId, MapDocument>,
        images: EnumMap<ImageId, ImageSlot>,
    ) -> Self {
        let weekday_averages = aggregate::weekday_averages(&weather);
        let duration_boxes = aggregate::duration_boxes(&trips);
        Self {
            trips,
            weather,
            weekday_averages,
            duration_boxes,
            top_stations,
            maps,
            images,
        }
    }

    pub fn map(&self, id: MapId) -> &MapDocument {
        &self.maps[id]
    }

    pub fn image(&self, id: ImageId) -> &ImageSlot {
        &self.images[id]
    }

    /// Human-readable warnings for every optional input that failed.
    pub fn warnings(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let OptionalTable::Missing { reason } = &self.top_stations {
            out.push(format!("{TOP_STATIONS_FILE}: {reason}"));
        }
        for (_, slot) in &self.images {
            if let ImageSlot::Missing { path, reason } = slot {
                out.push(format!("{}: {reason}", path.display()));
            }
        }
        out
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Small on-disk dataset used by tests across the crate.

    use std::fs;
    use std::path::Path;

    use super::*;

    pub const TRIPS_CSV: &str = "rideable_type,member_casual,trip_duration\n\
        classic_bike,member,6.0\n\
        classic_bike,member,8.0\n\
        classic_bike,casual,14.0\n\
        classic_bike,casual,22.0\n\
        electric_bike,member,7.0\n\
        electric_bike,casual,12.0\n\
        electric_bike,casual,95.0\n";

    pub const WEATHER_CSV: &str = "date,temperature,precipitation,trip_count\n\
        2022-01-04,3.1,0.0,41000\n\
        2022-01-03,1.2,12.5,30000\n\
        2022-07-06,27.5,0.0,98000\n\
        2022-07-09,29.0,30.0,52000\n";

    /// Writes tables and map documents (no images) under `root`.
    pub fn write_dataset(root: &Path) -> DataPaths {
        let paths = DataPaths::new(root, &Config::default());
        fs::create_dir_all(&paths.data_dir).unwrap();
        fs::create_dir_all(&paths.assets_dir).unwrap();
        fs::write(paths.data_dir.join(TRIPS_FILE), TRIPS_CSV).unwrap();
        fs::write(paths.data_dir.join(WEATHER_FILE), WEATHER_CSV).unwrap();
        for id in [
            MapId::Routes,
            MapId::TopStations,
            MapId::PopulationLayer,
            MapId::IncomeLayer,
        ] {
            fs::write(
                paths.assets_dir.join(id.file_name()),
                format!("<html><title>{}</title></html>", id.file_name()),
            )
            .unwrap();
        }
        paths
    }

    pub fn bundle(root: &Path) -> DatasetBundle {
        DatasetBundle::load(&write_dataset(root)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_derives_aggregates_and_collects_warnings() {
        let dir = tempdir().unwrap();
        let bundle = fixtures::bundle(dir.path());

        assert_eq!(bundle.trips.len(), 7);
        assert_eq!(bundle.weather.len(), 4);
        assert!(bundle.weather.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(bundle.duration_boxes.len(), 4);
        assert!(!bundle.weekday_averages.is_empty());
        assert!(bundle.top_stations.rows().is_none());

        // Missing top_20.csv plus three missing images.
        assert_eq!(bundle.warnings().len(), 4);
    }

    #[test]
    fn test_load_reads_optional_top_stations() {
        let dir = tempdir().unwrap();
        let paths = fixtures::write_dataset(dir.path());
        fs::write(
            paths.data_dir.join(TOP_STATIONS_FILE),
            "start_station_name,num_trips\nW 21 St & 6 Ave,129000\n",
        )
        .unwrap();

        let bundle = DatasetBundle::load(&paths).unwrap();
        let rows = bundle.top_stations.rows().unwrap();
        assert_eq!(rows[0].start_station_name, "W 21 St & 6 Ave");
    }

    #[test]
    fn test_missing_required_table_is_fatal() {
        let dir = tempdir().unwrap();
        let paths = fixtures::write_dataset(dir.path());
        fs::remove_file(paths.data_dir.join(WEATHER_FILE)).unwrap();

        let err = DatasetBundle::load(&paths).unwrap_err();
        assert!(format!("{err:#}").contains("weather table"));
    }

    #[test]
    fn test_missing_map_document_is_fatal() {
        let dir = tempdir().unwrap();
        let paths = fixtures::write_dataset(dir.path());
        fs::remove_file(paths.assets_dir.join(MapId::TopStations.file_name())).unwrap();

        let err = DatasetBundle::load(&paths).unwrap_err();
        assert!(format!("{err:#}").contains("top100_stations.html"));
    }
}
