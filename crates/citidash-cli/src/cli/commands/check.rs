//! `citidash check`: load everything, print what was found.

use std::path::Path;

use anyhow::{Context, Result};
use citidash_core::catalog::PageCatalog;
use citidash_core::config::Config;
use citidash_core::data::{DataPaths, DatasetBundle, ImageSlot, OptionalTable};
use citidash_core::pages::{self, PageOptions};

pub fn run(root: &Path, config: &Config) -> Result<()> {
    let paths = DataPaths::new(root, config);
    let bundle = DatasetBundle::load(&paths)
        .with_context(|| format!("load dashboard data under {}", root.display()))?;

    println!("Data:   {}", paths.data_dir.display());
    println!("Assets: {}", paths.assets_dir.display());
    println!("Trips sample: {} rows", bundle.trips.len());
    match (bundle.weather.first(), bundle.weather.last()) {
        (Some(first), Some(last)) => println!(
            "Weather: {} days ({} to {})",
            bundle.weather.len(),
            first.date,
            last.date
        ),
        _ => println!("Weather: 0 days"),
    }
    match &bundle.top_stations {
        OptionalTable::Loaded(rows) => println!("Top stations: {} rows", rows.len()),
        OptionalTable::Missing { reason } => println!("Top stations: missing ({reason})"),
    }
    for (id, doc) in &bundle.maps {
        println!("Map {}: {} bytes", id.file_name(), doc.len());
    }
    for (id, slot) in &bundle.images {
        match slot {
            ImageSlot::Loaded(asset) => {
                println!("Image {}: {}x{}", id.file_name(), asset.width, asset.height);
            }
            ImageSlot::Missing { reason, .. } => {
                println!("Image {}: missing ({reason})", id.file_name());
            }
        }
    }

    let options = PageOptions {
        map_height: config.effective_map_height(),
        ..PageOptions::default()
    };
    let catalog = PageCatalog::default();
    let mut inline_warnings = 0;
    for page in catalog.iter() {
        let content = pages::render(page, &bundle, &options);
        inline_warnings += content.warnings().len();
        tracing::debug!(page = page.title(), sections = content.sections.len(), "page rendered");
    }
    println!(
        "Pages: {} rendered, {} inline warning(s)",
        catalog.len(),
        inline_warnings
    );

    let warnings = bundle.warnings();
    if warnings.is_empty() {
        println!("OK");
    } else {
        for warning in &warnings {
            eprintln!("Warning: {warning}");
        }
        println!("OK with {} warning(s)", warnings.len());
    }
    Ok(())
}
