use marquee_core::format;
use marquee_core::model::SearchResultItem;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// Rows one card occupies in the grid, borders included.
pub const CARD_HEIGHT: u16 = 5;

/// One search result: title, `year • type`, poster marker.
pub struct Card<'a> {
    pub item: &'a SearchResultItem,
    pub selected: bool,
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border, title_style) = if self.selected {
            (
                Style::default().fg(Color::Cyan),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Indexed(236))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().add_modifier(Modifier::BOLD),
            )
        };

        let block = Block::default().borders(Borders::ALL).border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let width = usize::from(inner.width);

        let title = Line::from(Span::styled(
            format::truncate(&self.item.title, width),
            title_style,
        ));
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if inner.height > 1 {
            let meta = format::join_meta(&[self.item.year.clone(), self.item.kind.to_string()]);
            let meta = Line::from(Span::styled(
                format::truncate(&meta, width),
                Style::default().fg(Color::DarkGray),
            ));
            buf.set_line(inner.x, inner.y + 1, &meta, inner.width);
        }

        if inner.height > 2 {
            let (marker, color) = match self.item.poster {
                Some(_) => ("▣", Color::Green),
                None => ("□", Color::DarkGray),
            };
            let poster = Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(color)),
                Span::styled(
                    format::truncate(self.item.poster_or_placeholder(), width.saturating_sub(2)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            buf.set_line(inner.x, inner.y + 2, &poster, inner.width);
        }
    }
}
