//! Image drawn with half-block cells.
//!
//! Each terminal cell shows two vertically stacked pixels: `▀` with the top
//! pixel as foreground and the bottom pixel as background. Pixels are
//! sampled nearest-neighbour from the cached thumbnail.

use citidash_core::data::ImageAsset;
use image::Rgba;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

/// Tallest an image may get, in rows.
pub const MAX_IMAGE_ROWS: u16 = 24;

pub struct HalfBlockImage<'a> {
    asset: &'a ImageAsset,
}

/// Largest `(cols, rows)` that fits `max_cols` x `max_rows` and keeps the
/// aspect ratio (one cell is one pixel wide and two pixels tall).
fn fitted_size(px_width: u32, px_height: u32, max_cols: u16, max_rows: u16) -> (u16, u16) {
    if px_width == 0 || px_height == 0 || max_cols == 0 || max_rows == 0 {
        return (0, 0);
    }
    let (w, h) = (f64::from(px_width), f64::from(px_height));
    let mut cols = f64::from(max_cols).min(w);
    let mut rows = (cols * h / w / 2.0).ceil();
    if rows > f64::from(max_rows) {
        rows = f64::from(max_rows);
        cols = (rows * 2.0 * w / h).floor().max(1.0);
    }
    (cols as u16, rows.max(1.0) as u16)
}

/// Composites a pixel over black.
fn to_color(pixel: Rgba<u8>) -> Color {
    let [r, g, b, a] = pixel.0;
    let blend = |c: u8| (u16::from(c) * u16::from(a) / 255) as u8;
    Color::Rgb(blend(r), blend(g), blend(b))
}

impl<'a> HalfBlockImage<'a> {
    pub fn new(asset: &'a ImageAsset) -> Self {
        Self { asset }
    }

    /// Cells the image covers when drawn at most `max_cols` wide.
    pub fn size(&self, max_cols: u16) -> (u16, u16) {
        let thumb = &self.asset.thumbnail;
        fitted_size(thumb.width(), thumb.height(), max_cols, MAX_IMAGE_ROWS)
    }

    /// Image rows plus the caption row.
    pub fn height(&self, max_cols: u16) -> u16 {
        self.size(max_cols).1 + 1
    }
}

impl Widget for HalfBlockImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.size(area.width);
        let rows = rows.min(area.height.saturating_sub(1));
        let thumb = &self.asset.thumbnail;
        if cols == 0 || rows == 0 {
            return;
        }
        let (tw, th) = (thumb.width(), thumb.height());
        let sample = |cx: u16, py: u32| {
            let x = (u32::from(cx) * tw / u32::from(cols)).min(tw - 1);
            let y = (py * th / (u32::from(rows) * 2)).min(th - 1);
            to_color(*thumb.get_pixel(x, y))
        };

        for cy in 0..rows {
            for cx in 0..cols {
                let top = sample(cx, u32::from(cy) * 2);
                let bottom = sample(cx, u32::from(cy) * 2 + 1);
                if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                    cell.set_symbol("▀").set_fg(top).set_bg(bottom);
                }
            }
        }

        let caption = format!(
            "{} ({}×{})",
            self.asset.id.file_name(),
            self.asset.width,
            self.asset.height
        );
        buf.set_stringn(
            area.x,
            area.y + rows,
            caption,
            area.width as usize,
            Style::default().fg(Color::DarkGray),
        );
    }
}
