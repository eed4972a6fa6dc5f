pub mod app;
pub mod event;
mod views;
mod widgets;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use marquee_core::config::MarqueeConfig;
use marquee_core::controller::{Completion, Controller};
use marquee_core::deeplink::DeepLink;
use marquee_core::omdb::{MovieApi, OmdbClient};
use marquee_core::toast::{Toast, ToastKind};
use ratatui::{layout::Rect, DefaultTerminal, Frame};
use tokio::sync::mpsc;

use self::app::{App, Screen};

/// Entry point for the interactive TUI mode.
pub async fn run_tui(config: &MarqueeConfig, deep_link: Option<DeepLink>) -> Result<()> {
    let client = OmdbClient::from_config(&config.api).context("failed to create OMDb client")?;
    tracing::info!(base_url = client.base_url(), "starting tui");

    let (mut controller, mut completion_rx) =
        Controller::new(Arc::new(client), App::new(&config.tui));

    if let Some(link) = deep_link {
        controller.open_deep_link(link);
    }

    // Initialize terminal
    let mut terminal = ratatui::init();
    let result = crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        .context("failed to enable mouse capture")
        .and_then(|()| run_loop(&mut terminal, &mut controller, &mut completion_rx));

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run_loop<A: MovieApi + 'static>(
    terminal: &mut DefaultTerminal,
    controller: &mut Controller<A, App>,
    completion_rx: &mut mpsc::UnboundedReceiver<Completion>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, controller.presenter()))?;

        // Apply finished network tasks (non-blocking)
        while let Ok(completion) = completion_rx.try_recv() {
            controller.handle_completion(completion);
        }

        // Poll for input (50ms timeout for responsive UI)
        if ct_event::poll(Duration::from_millis(50))? {
            let action = match ct_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    controller.presenter_mut().handle_key(key)
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    controller.presenter_mut().handle_mouse(mouse, area)
                }
                _ => None,
            };
            if let Some(action) = action {
                action.dispatch(controller);
            }
        }

        if let Some(action) = controller.presenter_mut().poll_debounce(Instant::now()) {
            action.dispatch(controller);
        }

        controller.presenter_mut().tick();

        if controller.presenter().should_quit {
            break;
        }
    }

    Ok(())
}

fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    views::results::render(frame, app, area);
    if app.screen == Screen::Detail {
        views::detail::render(frame, app, area);
    }

    if let Some(toast) = app.toast.current() {
        render_toast(frame, toast);
    }
}

fn render_toast(frame: &mut Frame, toast: &Toast) {
    use ratatui::{
        layout::{Constraint, Flex, Layout},
        style::{Color, Style},
        widgets::{Block, Borders, Clear, Paragraph},
    };

    let (symbol, title, color) = match toast.kind {
        ToastKind::Info => ("ℹ", " Info ", Color::Blue),
        ToastKind::Warning => ("⚠", " Warning ", Color::Yellow),
        ToastKind::Error => ("✗", " Error ", Color::Red),
    };

    let area = frame.area();
    let [toast_area] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(area);
    let [toast_area] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::End)
        .areas(toast_area);

    frame.render_widget(Clear, toast_area);
    let widget = Paragraph::new(format!(" {symbol} {}", toast.message))
        .style(Style::default().fg(Color::Black).bg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        );
    frame.render_widget(widget, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use marquee_core::config::TuiConfig;
    use marquee_core::error::{MarqueeError, Result as CoreResult};
    use marquee_core::model::{DetailRecord, MediaType, Query, SearchResultItem};

    struct StubApi;

    impl MovieApi for StubApi {
        async fn search(&self, query: &Query) -> CoreResult<Vec<SearchResultItem>> {
            if query.as_str() == "zzzznotfound" {
                return Err(MarqueeError::NoMatch("Movie not found!".into()));
            }
            Ok(vec![SearchResultItem {
                id: "tt1375666".into(),
                title: "Inception".into(),
                year: "2010".into(),
                kind: MediaType::Movie,
                poster: None,
            }])
        }

        async fn details(&self, id: &str) -> CoreResult<DetailRecord> {
            let mut record = DetailRecord::new(id);
            record.title = Some("Inception".into());
            Ok(record)
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn drain(
        controller: &mut Controller<StubApi, App>,
        rx: &mut mpsc::UnboundedReceiver<Completion>,
    ) {
        while controller.pending() > 0 {
            let completion = rx.recv().await.expect("completion channel closed");
            controller.handle_completion(completion);
        }
    }

    fn type_and_submit(controller: &mut Controller<StubApi, App>, text: &str) {
        let app = controller.presenter_mut();
        app.handle_key(key(KeyCode::Char('/')));
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        if let Some(action) = controller.presenter_mut().handle_key(key(KeyCode::Enter)) {
            action.dispatch(controller);
        }
    }

    #[tokio::test]
    async fn test_search_then_open_card() {
        let (mut controller, mut rx) =
            Controller::new(Arc::new(StubApi), App::new(&TuiConfig::default()));

        type_and_submit(&mut controller, "Inception");
        assert!(controller.presenter().loading);
        drain(&mut controller, &mut rx).await;

        let app = controller.presenter();
        assert_eq!(app.cards.len(), 1);
        assert_eq!(app.count_label.as_deref(), Some("Found 1 result"));

        let action = controller.presenter_mut().handle_key(key(KeyCode::Enter));
        action.expect("card selected").dispatch(&mut controller);

        let app = controller.presenter();
        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(
            app.viewer.as_ref().map(|v| v.title.as_str()),
            Some("Inception")
        );

        let action = controller.presenter_mut().handle_key(key(KeyCode::Esc));
        action.expect("close").dispatch(&mut controller);
        assert_eq!(controller.presenter().screen, Screen::Results);
        assert!(controller.session().current_movie().is_none());
    }

    #[tokio::test]
    async fn test_failed_search_shows_error_toast() {
        let (mut controller, mut rx) =
            Controller::new(Arc::new(StubApi), App::new(&TuiConfig::default()));

        type_and_submit(&mut controller, "zzzznotfound");
        drain(&mut controller, &mut rx).await;

        let app = controller.presenter();
        assert!(app.cards.is_empty());
        let toast = app.toast.current().expect("toast shown");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Movie not found!");
    }

    #[tokio::test]
    async fn test_blank_submit_warns() {
        let (mut controller, _rx) =
            Controller::new(Arc::new(StubApi), App::new(&TuiConfig::default()));

        type_and_submit(&mut controller, "  ");
        assert_eq!(controller.pending(), 0);
        let toast = controller.presenter().toast.current().expect("toast shown");
        assert_eq!(toast.kind, ToastKind::Warning);
    }

    #[tokio::test]
    async fn test_deep_link_search_prefills_box() {
        let (mut controller, mut rx) =
            Controller::new(Arc::new(StubApi), App::new(&TuiConfig::default()));

        let link = DeepLink::parse_url("marquee://open?q=Inception")
            .unwrap()
            .unwrap();
        controller.open_deep_link(link);
        drain(&mut controller, &mut rx).await;

        let app = controller.presenter();
        assert_eq!(app.search_input, "Inception");
        assert_eq!(app.cards.len(), 1);
    }
}
