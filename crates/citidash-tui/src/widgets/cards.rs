//! A row of titled recommendation cards.

use citidash_core::pages::Card;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::common::text::wrap_text;

const CARD_GAP: u16 = 1;
const TITLE_BG: Color = Color::Rgb(245, 132, 38);
const BORDER: Color = Color::Rgb(0, 107, 182);

pub struct CardRow<'a> {
    cards: &'a [Card],
}

/// Body lines of `card` wrapped to `width` columns.
///
/// Used both to measure and to draw, so the two never disagree.
fn card_lines(card: &Card, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();
    for (i, item) in card.items.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        if let Some(lead) = item.lead {
            for row in wrap_text(lead, width) {
                lines.push(Line::styled(row, Style::default().add_modifier(Modifier::BOLD)));
            }
        }
        for (j, row) in wrap_text(item.text, width.saturating_sub(2)).into_iter().enumerate() {
            let marker = if j == 0 { "• " } else { "  " };
            lines.push(Line::from(vec![Span::raw(marker), Span::raw(row)]));
        }
        for child in item.children {
            for (j, row) in wrap_text(child, width.saturating_sub(4)).into_iter().enumerate() {
                let marker = if j == 0 { "  ◦ " } else { "    " };
                lines.push(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::DarkGray)),
                    Span::raw(row),
                ]));
            }
        }
    }
    lines
}

impl<'a> CardRow<'a> {
    pub fn new(cards: &'a [Card]) -> Self {
        Self { cards }
    }

    fn columns(&self, area: Rect) -> Vec<Rect> {
        let n = self.cards.len().max(1) as u32;
        Layout::horizontal(vec![Constraint::Ratio(1, n); self.cards.len()])
            .spacing(CARD_GAP)
            .split(area)
            .to_vec()
    }

    /// Rows needed to show every card in full at `width`.
    pub fn height(&self, width: u16) -> u16 {
        let area = Rect::new(0, 0, width, 1);
        self.cards
            .iter()
            .zip(self.columns(area))
            .map(|(card, col)| {
                // Borders plus the title row.
                card_lines(card, col.width.saturating_sub(2)).len() as u16 + 3
            })
            .max()
            .unwrap_or(0)
    }
}

impl Widget for CardRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (card, col) in self.cards.iter().zip(self.columns(area)) {
            let block = Block::bordered().border_style(Style::default().fg(BORDER));
            let inner = block.inner(col);
            block.render(col, buf);
            if inner.is_empty() {
                continue;
            }

            let title_row = Rect { height: 1, ..inner };
            Paragraph::new(Line::from(format!(" {}", card.title)))
                .style(
                    Style::default()
                        .fg(Color::White)
                        .bg(TITLE_BG)
                        .add_modifier(Modifier::BOLD),
                )
                .render(title_row, buf);

            let body = Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(1),
                ..inner
            };
            Paragraph::new(card_lines(card, body.width)).render(body, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use citidash_core::pages::{CardItem, RECOMMENDATION_CARDS};

    use super::*;
    use crate::widgets::buffer_text;

    const ITEMS: &[CardItem] = &[
        CardItem {
            lead: Some("Lead"),
            text: "one two three four",
            children: &["nested"],
        },
        CardItem {
            lead: None,
            text: "five",
            children: &[],
        },
    ];

    #[test]
    fn test_card_lines_wrap_and_nest() {
        let card = Card {
            title: "Card",
            items: ITEMS,
        };
        let lines = card_lines(&card, 10);
        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            vec!["Lead", "• one two", "  three", "  four", "  ◦ nested", "", "• five"]
        );
    }

    #[test]
    fn test_height_fits_tallest_card() {
        let short = Card {
            title: "Short",
            items: &ITEMS[1..],
        };
        let tall = Card {
            title: "Tall",
            items: ITEMS,
        };
        let cards = [short, tall];
        let row = CardRow::new(&cards);
        let col_width = (41 - CARD_GAP) / 2;
        let expected = card_lines(&tall, col_width - 2).len() as u16 + 3;
        assert_eq!(row.height(41), expected);
    }

    #[test]
    fn test_renders_titles() {
        let cards = &RECOMMENDATION_CARDS[..3];
        let row = CardRow::new(cards);
        let area = Rect::new(0, 0, 120, row.height(120));
        let mut buf = Buffer::empty(area);
        row.render(area, &mut buf);

        let text = buffer_text(&buf);
        for card in cards {
            assert!(text.contains(card.title), "{} missing", card.title);
        }
    }
}
