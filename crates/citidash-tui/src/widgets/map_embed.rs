//! Bordered container showing a map document verbatim.
//!
//! The terminal cannot run the document, so the container shows its source
//! text, hard-wrapped to the inner width and clipped to the configured
//! height. `o` opens the real document in the system browser.

use citidash_core::data::MapDocument;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Widget};
use unicode_width::UnicodeWidthChar;

use crate::common::text::sanitize_for_display;

pub struct MapEmbedView<'a> {
    doc: &'a MapDocument,
}

/// Splits `text` into rows of at most `width` columns, stopping at `limit`.
fn hard_wrap(text: &str, width: usize, limit: usize) -> Vec<String> {
    let mut rows = Vec::new();
    if width == 0 {
        return rows;
    }
    for line in text.lines() {
        let line = sanitize_for_display(line);
        let mut current = String::new();
        let mut used = 0;
        for ch in line.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                rows.push(std::mem::take(&mut current));
                used = 0;
                if rows.len() == limit {
                    return rows;
                }
            }
            current.push(ch);
            used += w;
        }
        rows.push(current);
        if rows.len() == limit {
            return rows;
        }
    }
    rows
}

fn human_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

impl<'a> MapEmbedView<'a> {
    pub fn new(doc: &'a MapDocument) -> Self {
        Self { doc }
    }
}

impl Widget for MapEmbedView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let name = self
            .doc
            .path
            .file_name()
            .map_or_else(|| self.doc.id.file_name().into(), |n| n.to_string_lossy());
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {name} · {} ", human_size(self.doc.len())))
            .title_bottom(Line::from(" o: open in browser ").right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let style = Style::default().fg(Color::Gray);
        let text = self.doc.text();
        for (row, line) in hard_wrap(&text, inner.width as usize, inner.height as usize)
            .iter()
            .enumerate()
        {
            buf.set_string(inner.x, inner.y + row as u16, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use citidash_core::data::MapId;

    use super::*;
    use crate::widgets::buffer_text;

    #[test]
    fn test_hard_wrap_splits_and_clips() {
        assert_eq!(hard_wrap("abcdef\ngh", 4, 10), vec!["abcd", "ef", "gh"]);
        assert_eq!(hard_wrap("abcdef\ngh", 4, 2), vec!["abcd", "ef"]);
        assert_eq!(hard_wrap("a\tb", 10, 10), vec!["a    b"]);
        assert!(hard_wrap("abc", 0, 10).is_empty());
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(2048), "2.0 KiB");
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn test_shows_document_text_inside_border() {
        let doc = MapDocument::from_bytes(
            MapId::Routes,
            PathBuf::from("visualisations/routes.html"),
            b"<html>\n<body>kepler map</body>\n</html>".to_vec(),
        );
        let area = Rect::new(0, 0, 50, 6);
        let mut buf = Buffer::empty(area);
        MapEmbedView::new(&doc).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("routes.html"));
        assert!(text.contains("<body>kepler map</body>"));
        assert!(text.contains("o: open in browser"));
    }
}
