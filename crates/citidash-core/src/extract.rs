//! Bulk extraction of CSV members from a directory of zip archives.
//!
//! Every `*.zip` directly inside the source directory is opened in sorted
//! order and each `.csv` member is written to the target directory under a
//! name derived from the archive stem. A malformed archive is recorded in
//! [`ExtractReport::skipped`] and the batch moves on.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use zip::ZipArchive;

use crate::interrupt::{self, InterruptedError};

/// Name of the default target directory, created inside the source.
pub const DEFAULT_TARGET_DIR: &str = "extracted_data";

const NAME_SEPARATORS: [char; 2] = ['_', '-'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub archive: PathBuf,
    pub member: String,
    pub output: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedArchive {
    pub archive: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    pub target: PathBuf,
    pub archives: usize,
    pub extracted: Vec<ExtractedFile>,
    pub skipped: Vec<SkippedArchive>,
}

/// Target used when none is given: `<source>/extracted_data`.
pub fn default_target(source: &Path) -> PathBuf {
    source.join(DEFAULT_TARGET_DIR)
}

/// Output file name for `member_name` extracted from an archive with
/// stem `stem`.
///
/// Names that already start with the stem keep it exactly once, joined by
/// the separator they used (`_` when they had none). Other names get
/// `stem_` prepended.
pub fn output_name(stem: &str, member_name: &str) -> String {
    match member_name.strip_prefix(stem) {
        Some(remainder) => {
            let separator = remainder
                .chars()
                .next()
                .filter(|c| NAME_SEPARATORS.contains(c))
                .unwrap_or('_');
            let rest = remainder.trim_start_matches(NAME_SEPARATORS);
            format!("{stem}{separator}{rest}")
        }
        None => format!("{stem}_{member_name}"),
    }
}

/// Inserts `.n` before the extension: `a.csv` -> `a.1.csv`.
fn numbered_name(name: &str, n: usize) -> String {
    match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => format!("{base}.{n}.{ext}"),
        _ => format!("{name}.{n}"),
    }
}

/// Reserves a name not yet used in this run.
fn unique_name(name: String, used: &mut HashSet<String>) -> String {
    let mut candidate = name.clone();
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = numbered_name(&name, n);
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

/// Base name of a CSV member worth extracting, or `None` to skip it.
fn csv_base_name(member: &str) -> Option<&str> {
    if member.ends_with('/') || member.split('/').any(|part| part == "__MACOSX") {
        return None;
    }
    let base = member.rsplit(['/', '\\']).next()?;
    if base.starts_with("._") || !base.ends_with(".csv") {
        return None;
    }
    Some(base)
}

/// `*.zip` files directly inside `source`, sorted by path.
fn list_archives(source: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(source)
        .with_context(|| format!("Failed to read source directory {}", source.display()))?;
    let mut archives = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_zip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
        if is_zip && path.is_file() {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives)
}

/// Extracts every CSV member of every archive in `source` into `target`
/// (default [`default_target`]).
///
/// # Errors
/// Returns an error if the source cannot be listed, the target cannot be
/// created, or the run was interrupted. Per-archive failures are reported
/// in [`ExtractReport::skipped`] instead.
pub fn extract_archives(source: &Path, target: Option<&Path>) -> Result<ExtractReport> {
    let target = target.map_or_else(|| default_target(source), Path::to_path_buf);
    let archives = list_archives(source)?;
    fs::create_dir_all(&target)
        .with_context(|| format!("Failed to create target directory {}", target.display()))?;

    let mut report = ExtractReport {
        target: target.clone(),
        archives: archives.len(),
        ..ExtractReport::default()
    };
    let mut used = HashSet::new();

    for archive in archives {
        match extract_one(&archive, &target, &mut used, &mut report.extracted) {
            Ok(()) => {}
            Err(err) if err.downcast_ref::<InterruptedError>().is_some() => return Err(err),
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::warn!(archive = %archive.display(), %reason, "skipping archive");
                report.skipped.push(SkippedArchive { archive, reason });
            }
        }
    }

    tracing::info!(
        archives = report.archives,
        extracted = report.extracted.len(),
        skipped = report.skipped.len(),
        target = %target.display(),
        "extraction finished"
    );
    Ok(report)
}

fn extract_one(
    archive_path: &Path,
    target: &Path,
    used: &mut HashSet<String>,
    extracted: &mut Vec<ExtractedFile>,
) -> Result<()> {
    let stem = archive_path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Archive name is not valid UTF-8: {}", archive_path.display()))?;
    let file = File::open(archive_path)
        .with_context(|| format!("Failed to open {}", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Not a readable zip archive: {}", archive_path.display()))?;

    for i in 0..archive.len() {
        interrupt::check()?;

        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to read member #{i}"))?;
        if entry.is_dir() {
            continue;
        }
        let member = entry.name().to_string();
        let Some(base) = csv_base_name(&member) else {
            continue;
        };

        let name = unique_name(output_name(stem, base), used);
        let output = target.join(&name);
        let mut tmp = NamedTempFile::new_in(target)
            .with_context(|| format!("Failed to create temp file in {}", target.display()))?;
        let bytes = io::copy(&mut entry, &mut tmp)
            .with_context(|| format!("Failed to extract {member}"))?;
        tmp.persist(&output)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        tracing::debug!(%member, output = %output.display(), bytes, "extracted member");
        extracted.push(ExtractedFile {
            archive: archive_path.to_path_buf(),
            member,
            output,
            bytes,
        });
    }
    Ok(())
}
