use citidash_core::pages::PageContent;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use super::layout::{draw_sections, sections_height};
use super::state::PageBodyState;
use crate::common::Scrollbar;

/// Horizontal padding on each side of the page content.
const BODY_MARGIN: u16 = 1;
/// Column kept for the scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

/// Draws the visible slice of `content` and records the body geometry.
pub fn render_page_body(
    body: &PageBodyState,
    content: &PageContent<'_>,
    frame: &mut Frame,
    area: Rect,
) {
    let width = area.width.saturating_sub(BODY_MARGIN * 2 + SCROLLBAR_WIDTH);
    let height = sections_height(&content.sections, width);
    body.viewport.set(area);
    body.content_height.set(height);
    if width == 0 || area.height == 0 {
        return;
    }

    let offset = body
        .offset(content.page)
        .min(height.saturating_sub(area.height));
    let page_area = Rect::new(0, 0, width, height);
    let mut page = Buffer::empty(page_area);
    draw_sections(&content.sections, page_area, &mut page);

    let visible = area.height.min(height.saturating_sub(offset));
    let buf = frame.buffer_mut();
    for row in 0..visible {
        for col in 0..width {
            let Some(src) = page.cell((col, offset + row)) else {
                continue;
            };
            if let Some(dst) = buf.cell_mut((area.x + BODY_MARGIN + col, area.y + row)) {
                *dst = src.clone();
            }
        }
    }

    let scrollbar_area = Rect {
        x: area.right().saturating_sub(SCROLLBAR_WIDTH),
        width: SCROLLBAR_WIDTH,
        ..area
    };
    Scrollbar::new(height, area.height, offset).render(scrollbar_area, buf);
}
