//! `citidash extract`.

use std::path::Path;

use anyhow::Result;
use citidash_core::extract;

pub fn run(source: &Path, target: Option<&Path>) -> Result<()> {
    let report = extract::extract_archives(source, target)?;

    for file in &report.extracted {
        println!("{} -> {}", file.member, file.output.display());
    }
    for skipped in &report.skipped {
        eprintln!("Skipped {}: {}", skipped.archive.display(), skipped.reason);
    }
    println!(
        "Extracted {} file(s) from {} archive(s) into {}",
        report.extracted.len(),
        report.archives - report.skipped.len(),
        report.target.display()
    );
    Ok(())
}
