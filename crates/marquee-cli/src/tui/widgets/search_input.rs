use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

const PLACEHOLDER: &str = "Movie title, e.g. Inception";

/// Title search box above the card grid.
pub struct SearchInput<'a> {
    pub text: &'a str,
    /// Cursor position in chars.
    pub cursor: usize,
    pub focused: bool,
    /// A search request is outstanding.
    pub loading: bool,
    /// Typing submits on its own after a pause.
    pub live: bool,
}

impl SearchInput<'_> {
    fn title(&self) -> &'static str {
        match (self.loading, self.focused, self.live) {
            (true, _, _) => " Searching OMDb... ",
            (false, true, true) => " Title (live search, Enter to submit now) ",
            (false, true, false) => " Title (Enter to search, Esc to cancel) ",
            (false, false, _) => " Title (press / to search) ",
        }
    }

    fn border_color(&self) -> Color {
        if self.loading {
            Color::Yellow
        } else if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }
    }

    fn line(&self) -> Line<'_> {
        let prompt = Span::styled("› ", Style::default().fg(self.border_color()));

        if self.text.is_empty() && !self.focused {
            return Line::from(vec![
                prompt,
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ]);
        }

        let split = self
            .text
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        let (before, after) = self.text.split_at(split);
        let mut spans = vec![prompt, Span::raw(before)];

        if !self.focused {
            spans.push(Span::raw(after));
            return Line::from(spans);
        }

        let under_cursor = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            under_cursor.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        if let Some(rest) = after.get(under_cursor.len_utf8()..) {
            spans.push(Span::raw(rest));
        }
        Line::from(spans)
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color()))
            .title(self.title());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.line(), inner.width);
    }
}
