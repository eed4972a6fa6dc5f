use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    app::{App, InputMode},
    widgets::{
        card::{Card, CARD_HEIGHT},
        help_bar::HelpBar,
        search_input::SearchInput,
    },
};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::vertical([
        Constraint::Length(3), // search bar
        Constraint::Length(1), // count label
        Constraint::Min(5),    // grid
        Constraint::Length(1), // help bar
    ])
    .split(area);

    frame.render_widget(
        SearchInput {
            text: &app.search_input,
            cursor: app.search_cursor,
            focused: app.input_mode == InputMode::Search,
            loading: app.loading,
            live: app.live_search(),
        },
        layout[0],
    );

    render_status(frame, app, layout[1]);
    render_grid(frame, app, layout[2]);

    frame.render_widget(
        HelpBar {
            screen: &app.screen,
            input_mode: &app.input_mode,
        },
        layout[3],
    );
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.loading {
        Line::from(Span::styled(
            " Searching...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(ref label) = app.count_label {
        Line::from(Span::styled(
            format!(" {label}"),
            Style::default().fg(Color::Cyan),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Results ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.loading {
        return;
    }

    if app.cards.is_empty() {
        let (text, color) = match app.empty_message {
            Some(ref msg) => (msg.as_str(), Color::Gray),
            None => ("Press / to search for a movie.", Color::DarkGray),
        };
        let msg = Paragraph::new(format!("  {text}")).style(Style::default().fg(color));
        frame.render_widget(msg, inner);
        return;
    }

    let cols = app.grid_columns.max(1);
    let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let selected_row = app.selected / cols;
    // Keep the selected row on screen.
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(inner);
    let col_constraints = vec![Constraint::Ratio(1, cols as u32); cols];

    for (screen_row, row_area) in rows.iter().enumerate() {
        let start = (first_row + screen_row) * cols;
        if start >= app.cards.len() {
            break;
        }
        let cells = Layout::horizontal(col_constraints.clone()).split(*row_area);
        for (offset, cell) in cells.iter().enumerate() {
            let index = start + offset;
            let Some(item) = app.cards.get(index) else {
                break;
            };
            frame.render_widget(
                Card {
                    item,
                    selected: index == app.selected,
                },
                *cell,
            );
        }
    }
}
