use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::app::{InputMode, Screen};

/// Bottom help bar showing context-sensitive key bindings.
pub struct HelpBar<'a> {
    pub screen: &'a Screen,
    pub input_mode: &'a InputMode,
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(Color::DarkGray);
        let key_style = Style::default().fg(Color::Cyan);

        let spans: Vec<Span> = match (self.screen, self.input_mode) {
            (Screen::Results, InputMode::Normal) => vec![
                Span::styled("h/j/k/l", key_style),
                Span::styled(" move  ", style),
                Span::styled("Enter", key_style),
                Span::styled(" details  ", style),
                Span::styled("/", key_style),
                Span::styled(" search  ", style),
                Span::styled("q", key_style),
                Span::styled(" quit", style),
            ],
            (Screen::Results, InputMode::Search) => vec![
                Span::styled("Enter", key_style),
                Span::styled(" search  ", style),
                Span::styled("Esc", key_style),
                Span::styled(" cancel", style),
            ],
            (Screen::Detail, _) => vec![
                Span::styled("j/k", key_style),
                Span::styled(" scroll  ", style),
                Span::styled("Esc/x", key_style),
                Span::styled(" close  ", style),
                Span::styled("q", key_style),
                Span::styled(" quit", style),
            ],
        };

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
