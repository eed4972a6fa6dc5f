use marquee_core::model::RatingClass;
use marquee_core::viewer::DetailView;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::{app::App, widgets::help_bar::HelpBar};

/// Centered panel the detail view is drawn into.
pub fn panel_area(area: Rect) -> Rect {
    let [panel] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(panel);
    panel
}

pub fn rating_color(class: RatingClass) -> Color {
    match class {
        RatingClass::High => Color::Green,
        RatingClass::Medium => Color::Yellow,
        RatingClass::Low => Color::Red,
        RatingClass::Unrated => Color::DarkGray,
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref view) = app.viewer else {
        return;
    };

    let panel = panel_area(area);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", view.title));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let layout = Layout::vertical([
        Constraint::Min(3),    // body (scrollable)
        Constraint::Length(1), // help bar
    ])
    .split(inner);

    let body = Paragraph::new(body_lines(view))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(body, layout[0]);

    frame.render_widget(
        HelpBar {
            screen: &app.screen,
            input_mode: &app.input_mode,
        },
        layout[1],
    );
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("─── {title} ───"),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn body_lines(view: &DetailView) -> Vec<Line<'_>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        view.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(view.meta_line(), dim)));
    lines.push(Line::from(Span::styled(
        view.genres.join(", "),
        Style::default().fg(Color::Magenta),
    )));

    lines.push(Line::from(""));
    lines.push(section("Plot"));
    lines.push(Line::from(view.plot.as_str()));

    lines.push(Line::from(""));
    lines.push(section("Credits"));
    lines.push(field("Director", &view.director));
    lines.push(field("Writer", &view.writer));
    lines.push(field("Actors", &view.actors));

    lines.push(Line::from(""));
    lines.push(section("Ratings"));
    lines.push(Line::from(vec![
        Span::styled("  IMDb: ", dim),
        Span::styled(
            view.rating.as_str(),
            Style::default()
                .fg(rating_color(view.rating_class))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    for (source, value) in view.secondary_ratings() {
        lines.push(field(source, value));
    }

    lines.push(Line::from(""));
    lines.push(section("Poster"));
    let poster_style = if view.has_poster {
        Style::default()
    } else {
        dim
    };
    lines.push(Line::from(Span::styled(
        format!("  {}", view.poster),
        poster_style,
    )));
    lines.push(field("ID", &view.id));

    lines
}
