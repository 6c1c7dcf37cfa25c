//! On-disk dashboard data for integration tests.

#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const TRIPS_CSV: &str = "ride_id,rideable_type,member_casual,trip_duration\n\
    a,classic_bike,member,6.5\n\
    b,classic_bike,casual,21.0\n\
    c,electric_bike,member,9.25\n\
    d,electric_bike,casual,30.0\n";

pub const WEATHER_CSV: &str = "date,temperature,precipitation,trip_count\n\
    2022-01-02 00:00:00,4.5,0.0,35000\n\
    2022-01-01 00:00:00,3.0,2.5,30000\n\
    2022-01-03 00:00:00,,0.0,41000\n";

pub const TOP_20_CSV: &str = "start_station_name,num_trips\n\
    W 21 St & 6 Ave,1200\n\
    West St & Chambers St,1100\n";

const MAPS: [&str; 4] = [
    "routes.html",
    "top100_stations.html",
    "stops_layers_pop.html",
    "stops_layers_inc.html",
];

/// Writes the required tables and map documents under `root`.
pub fn write_dataset(root: &Path) {
    let data = root.join("Data");
    let assets = root.join("visualisations");
    fs::create_dir_all(&data).unwrap();
    fs::create_dir_all(&assets).unwrap();
    fs::write(data.join("df_sample_100.csv"), TRIPS_CSV).unwrap();
    fs::write(data.join("df_weather.csv"), WEATHER_CSV).unwrap();
    for name in MAPS {
        fs::write(assets.join(name), format!("<html>{name}</html>")).unwrap();
    }
}

/// Writes a zip archive holding `members` (name, contents).
pub fn write_zip(path: &Path, members: &[(&str, &str)]) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    for (name, contents) in members {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}
