//! Pre-rendered map documents and decorative images.
//!
//! Map documents are required and kept as opaque bytes. Images are optional:
//! a missing or undecodable image becomes [`ImageSlot::Missing`] with the
//! reason, never a load failure.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use enum_map::Enum;
use image::RgbaImage;

/// Longest edge of the cached thumbnail, in pixels.
const THUMBNAIL_MAX_EDGE_PX: u32 = 320;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum MapId {
    /// Top 1000 routes.
    Routes,
    /// 100 busiest stations.
    TopStations,
    /// Stations over population density by neighbourhood.
    PopulationLayer,
    /// Stations over median household income by neighbourhood.
    IncomeLayer,
}

impl MapId {
    pub fn file_name(self) -> &'static str {
        match self {
            MapId::Routes => "routes.html",
            MapId::TopStations => "top100_stations.html",
            MapId::PopulationLayer => "stops_layers_pop.html",
            MapId::IncomeLayer => "stops_layers_inc.html",
        }
    }
}

/// A self-contained map document, embedded verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct MapDocument {
    pub id: MapId,
    pub path: PathBuf,
    bytes: Vec<u8>,
}

impl MapDocument {
    /// Reads the document for `id` from `dir`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load(id: MapId, dir: &Path) -> Result<Self> {
        let path = dir.join(id.file_name());
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read map document {}", path.display()))?;
        Ok(Self { id, path, bytes })
    }

    /// Wraps bytes that were obtained elsewhere.
    pub fn from_bytes(id: MapId, path: PathBuf, bytes: Vec<u8>) -> Self {
        Self { id, path, bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Document text; invalid UTF-8 is replaced, never rejected.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl fmt::Debug for MapDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapDocument")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum ImageId {
    /// Parked bikes photo on the intro page.
    Bikes,
    /// Daily trips line plot annotated with seasonal averages.
    SeasonAnnotated,
    /// Proposed expansion zones.
    ExpansionZones,
}

impl ImageId {
    pub fn file_name(self) -> &'static str {
        match self {
            ImageId::Bikes => "vertical_bikes_redbrick.png",
            ImageId::SeasonAnnotated => "season_annotated.png",
            ImageId::ExpansionZones => "Expansion_zones.png",
        }
    }
}

/// A decoded image, downscaled for terminal display.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub id: ImageId,
    pub path: PathBuf,
    /// Original dimensions in pixels.
    pub width: u32,
    pub height: u32,
    pub thumbnail: RgbaImage,
}

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loaded(ImageAsset),
    Missing { path: PathBuf, reason: String },
}

impl ImageSlot {
    /// Decodes the image for `id`. Failures are captured, not returned.
    pub fn load(id: ImageId, dir: &Path) -> Self {
        let path = dir.join(id.file_name());
        match image::open(&path) {
            Ok(decoded) => {
                let thumbnail = decoded
                    .thumbnail(THUMBNAIL_MAX_EDGE_PX, THUMBNAIL_MAX_EDGE_PX)
                    .to_rgba8();
                ImageSlot::Loaded(ImageAsset {
                    id,
                    width: decoded.width(),
                    height: decoded.height(),
                    path,
                    thumbnail,
                })
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "optional image not loaded");
                ImageSlot::Missing {
                    path,
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn asset(&self) -> Option<&ImageAsset> {
        match self {
            ImageSlot::Loaded(asset) => Some(asset),
            ImageSlot::Missing { .. } => None,
        }
    }

    /// Inline warning text for a missing image.
    pub fn warning(&self) -> Option<String> {
        match self {
            ImageSlot::Loaded(_) => None,
            ImageSlot::Missing { reason, .. } => {
                Some(format!("Image could not be loaded: {reason}"))
            }
        }
    }
}
