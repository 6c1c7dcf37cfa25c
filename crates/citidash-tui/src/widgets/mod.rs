//! Widgets that draw page sections.
//!
//! Each widget reports the rows it needs for a given width through a
//! `height` function, so the page body can be laid out before drawing.

mod bar_chart;
mod box_plot;
mod cards;
mod dual_axis;
mod image;
mod map_embed;

pub use bar_chart::BarChartView;
pub use box_plot::BoxPlotView;
pub use cards::CardRow;
use citidash_core::charts::SeriesColor;
pub use dual_axis::DualAxisChart;
pub use image::HalfBlockImage;
pub use map_embed::MapEmbedView;
use ratatui::style::Color;

pub fn series_color(color: SeriesColor) -> Color {
    match color {
        SeriesColor::Red => Color::Rgb(214, 39, 40),
        SeriesColor::Blue => Color::Rgb(31, 119, 180),
        SeriesColor::Orange => Color::Rgb(255, 127, 14),
        SeriesColor::Gray => Color::Gray,
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}
