//! Page body scrollbar.
//!
//! The thumb length is fixed for a given content height so it does not
//! wobble while scrolling, and it touches the bottom of the track exactly at
//! the maximum offset.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB: &str = "█";
const TRACK: &str = "│";

#[derive(Debug, Clone, Copy)]
pub struct Scrollbar {
    content_height: u16,
    viewport_height: u16,
    offset: u16,
}

impl Scrollbar {
    pub fn new(content_height: u16, viewport_height: u16, offset: u16) -> Self {
        Self {
            content_height,
            viewport_height,
            offset,
        }
    }

    fn is_needed(&self) -> bool {
        self.content_height > self.viewport_height
    }

    /// `(start, len)` of the thumb on a track of `track` rows.
    fn thumb(&self, track: u16) -> (u16, u16) {
        let track = u32::from(track);
        let content = u32::from(self.content_height.max(1));
        let viewport = u32::from(self.viewport_height).min(content);
        let len = ((track * viewport + content / 2) / content).clamp(1, track.max(1));

        let max_offset = content - viewport;
        let free = track.saturating_sub(len);
        let start = if max_offset == 0 {
            0
        } else {
            u32::from(self.offset).min(max_offset) * free / max_offset
        };
        (start as u16, len as u16)
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.is_needed() || area.height == 0 || area.width == 0 {
            return;
        }
        let (start, len) = self.thumb(area.height);
        let x = area.right() - 1;
        for row in 0..area.height {
            let on_thumb = row >= start && row < start + len;
            let (symbol, color) = if on_thumb {
                (THUMB, Color::Gray)
            } else {
                (TRACK, Color::DarkGray)
            };
            buf.set_string(x, area.y + row, symbol, Style::default().fg(color));
        }
    }
}
