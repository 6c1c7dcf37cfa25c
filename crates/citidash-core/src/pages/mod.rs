//! Page renderers.
//!
//! Each page is a pure function from the dataset bundle to an ordered list
//! of [`Section`]s. Nothing here touches the terminal; the TUI lays the
//! sections out and turns chart specs into widgets.

mod expansion;
mod intro;
mod membership;
mod recommendations;
mod routes;
mod stations;
mod usage;

use crate::catalog::PageId;
use crate::charts::{BarChartSpec, BoxPlotSpec, DualAxisSpec};
use crate::data::{DatasetBundle, ImageAsset, ImageId, ImageSlot, MapDocument, MapId};

pub use recommendations::RECOMMENDATION_CARDS;

/// Background layer of the expansion map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MapLayer {
    #[default]
    PopulationDensity,
    Income,
}

impl MapLayer {
    pub const ALL: [MapLayer; 2] = [MapLayer::PopulationDensity, MapLayer::Income];

    pub fn label(self) -> &'static str {
        match self {
            MapLayer::PopulationDensity => "Population Density",
            MapLayer::Income => "Income",
        }
    }

    pub fn map_id(self) -> MapId {
        match self {
            MapLayer::PopulationDensity => MapId::PopulationLayer,
            MapLayer::Income => MapId::IncomeLayer,
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            MapLayer::PopulationDensity => MapLayer::Income,
            MapLayer::Income => MapLayer::PopulationDensity,
        }
    }

    pub fn index(self) -> usize {
        match self {
            MapLayer::PopulationDensity => 0,
            MapLayer::Income => 1,
        }
    }
}

/// Per-session display options that affect page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub map_layer: MapLayer,
    /// Map embed height in terminal rows.
    pub map_height: u16,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            map_layer: MapLayer::default(),
            map_height: 20,
        }
    }
}

/// A titled card holding a bullet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub items: &'static [CardItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardItem {
    /// Emphasized lead-in, drawn bold before the text.
    pub lead: Option<&'static str>,
    pub text: &'static str,
    /// Nested bullets.
    pub children: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub enum Section<'a> {
    Title(String),
    Subheader(String),
    Heading(String),
    Paragraph(String),
    Caption(String),
    Bullets(Vec<String>),
    Warning(String),
    Image(&'a ImageAsset),
    BarChart(BarChartSpec),
    DualAxis(DualAxisSpec),
    BoxPlot(BoxPlotSpec),
    MapEmbed {
        doc: &'a MapDocument,
        /// Rows.
        height: u16,
    },
    /// One row of cards, side by side.
    Cards(Vec<Card>),
    /// Two columns split by `ratio` (left, right).
    Columns {
        ratio: (u16, u16),
        left: Vec<Section<'a>>,
        right: Vec<Section<'a>>,
    },
    /// A choice shown inline; the TUI binds it to a key.
    Selector {
        label: String,
        options: Vec<String>,
        selected: usize,
    },
}

impl Section<'_> {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Section::Paragraph(text.into())
    }
}

/// Everything a page shows, top to bottom.
#[derive(Debug, Clone)]
pub struct PageContent<'a> {
    pub page: PageId,
    pub sections: Vec<Section<'a>>,
}

impl<'a> PageContent<'a> {
    /// First embedded map document, searching into columns.
    pub fn map(&self) -> Option<&'a MapDocument> {
        find_map(&self.sections)
    }

    /// Inline warning texts, in order.
    pub fn warnings(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_warnings(&self.sections, &mut out);
        out
    }
}

fn find_map<'a>(sections: &[Section<'a>]) -> Option<&'a MapDocument> {
    sections.iter().find_map(|section| match section {
        Section::MapEmbed { doc, .. } => Some(*doc),
        Section::Columns { left, right, .. } => find_map(left).or_else(|| find_map(right)),
        _ => None,
    })
}

fn collect_warnings<'s>(sections: &'s [Section<'_>], out: &mut Vec<&'s str>) {
    for section in sections {
        match section {
            Section::Warning(text) => out.push(text),
            Section::Columns { left, right, .. } => {
                collect_warnings(left, out);
                collect_warnings(right, out);
            }
            _ => {}
        }
    }
}

/// Image section for `id`, or a warning when the image is unavailable.
fn image_section(bundle: &DatasetBundle, id: ImageId) -> Section<'_> {
    let slot: &ImageSlot = bundle.image(id);
    match slot.asset() {
        Some(asset) => Section::Image(asset),
        None => Section::Warning(slot.warning().unwrap_or_default()),
    }
}

/// Produces the content of `page`.
pub fn render<'a>(
    page: PageId,
    bundle: &'a DatasetBundle,
    options: &PageOptions,
) -> PageContent<'a> {
    let sections = match page {
        PageId::Intro => intro::render(bundle),
        PageId::Usage => usage::render(bundle),
        PageId::Membership => membership::render(bundle),
        PageId::Routes => routes::render(bundle, options),
        PageId::Stations => stations::render(bundle, options),
        PageId::Expansion => expansion::render(bundle, options),
        PageId::Recommendations => recommendations::render(bundle),
    };
    PageContent { page, sections }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::data::fixtures;

    #[test]
    fn test_every_page_starts_with_a_title() {
        let dir = tempdir().unwrap();
        let bundle = fixtures::bundle(dir.path());
        for page in PageId::all() {
            let content = render(*page, &bundle, &PageOptions::default());
            assert_eq!(content.page, *page);
            assert!(
                matches!(content.sections.first(), Some(Section::Title(_))),
                "{page:?} has no title"
            );
        }
    }

    #[test]
    fn test_render_is_pure() {
        let dir = tempdir().unwrap();
        let bundle = fixtures::bundle(dir.path());
        let options = PageOptions::default();
        let a = format!("{:?}", render(PageId::Usage, &bundle, &options));
        let b = format!("{:?}", render(PageId::Usage, &bundle, &options));
        assert_eq!(a, b);
    }

    #[test]
    fn test_map_pages_expose_their_document() {
        let dir = tempdir().unwrap();
        let bundle = fixtures::bundle(dir.path());
        let options = PageOptions::default();

        let expected = [
            (PageId::Routes, Some(MapId::Routes)),
            (PageId::Stations, Some(MapId::TopStations)),
            (PageId::Expansion, Some(MapId::PopulationLayer)),
            (PageId::Usage, None),
        ];
        for (page, map) in expected {
            let content = render(page, &bundle, &options);
            assert_eq!(content.map().map(|doc| doc.id), map, "{page:?}");
        }
    }

    #[test]
    fn test_map_layer_toggle_round_trips() {
        let layer = MapLayer::default();
        assert_eq!(layer, MapLayer::PopulationDensity);
        assert_eq!(layer.toggle(), MapLayer::Income);
        assert_eq!(layer.toggle().toggle(), layer);
        assert_eq!(MapLayer::Income.map_id(), MapId::IncomeLayer);
        assert_eq!(MapLayer::ALL[MapLayer::Income.index()], MapLayer::Income);
    }

    #[test]
    fn test_missing_images_become_warnings() {
        let dir = tempdir().unwrap();
        let bundle = fixtures::bundle(dir.path());
        let content = render(PageId::Intro, &bundle, &PageOptions::default());
        let warnings = content.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Image could not be loaded:"));
    }
}
