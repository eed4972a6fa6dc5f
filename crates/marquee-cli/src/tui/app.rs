use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use marquee_core::config::TuiConfig;
use marquee_core::controller::Presenter;
use marquee_core::debounce::Debouncer;
use marquee_core::model::SearchResultItem;
use marquee_core::toast::{Toast, ToastSlot};
use marquee_core::viewer::DetailView;
use ratatui::layout::{Position, Rect};

use super::event::UiAction;
use super::views;

/// Which screen is currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Results,
    /// Detail panel drawn over the results grid.
    Detail,
}

/// Input mode within the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Central application state. Also the controller's presenter.
pub struct App {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub loading: bool,

    // -- Results state --
    pub cards: Vec<SearchResultItem>,
    pub count_label: Option<String>,
    pub empty_message: Option<String>,
    pub selected: usize,
    pub grid_columns: usize,
    pub search_input: String,
    pub search_cursor: usize, // in chars

    // -- Detail state --
    pub viewer: Option<DetailView>,
    pub detail_scroll: u16,

    // -- Toast --
    pub toast: ToastSlot,
    toast_ticks: u8,

    // -- Live search --
    live_search: bool,
    debouncer: Debouncer,
}

impl App {
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            screen: Screen::Results,
            input_mode: InputMode::Normal,
            should_quit: false,
            loading: false,

            cards: Vec::new(),
            count_label: None,
            empty_message: None,
            selected: 0,
            grid_columns: usize::from(config.grid_columns.max(1)),
            search_input: String::new(),
            search_cursor: 0,

            viewer: None,
            detail_scroll: 0,

            toast: ToastSlot::default(),
            toast_ticks: config.toast_ticks,

            live_search: config.live_search,
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
        }
    }

    /// Handle a key event. Returns an optional action for the controller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        match (&self.screen, &self.input_mode) {
            (Screen::Results, InputMode::Normal) => self.handle_results_normal(key),
            (Screen::Results, InputMode::Search) => self.handle_results_search(key),
            (Screen::Detail, _) => self.handle_detail(key),
        }
    }

    /// Handle a mouse event against the current terminal `area`.
    ///
    /// A left click outside the detail panel closes it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Option<UiAction> {
        if self.screen != Screen::Detail {
            return None;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let panel = views::detail::panel_area(area);
        if panel.contains(Position::new(mouse.column, mouse.row)) {
            None
        } else {
            Some(UiAction::CloseViewer)
        }
    }

    /// Live search: submit the box once typing has paused.
    ///
    /// While a search is loading the submit is held back and re-armed, so the
    /// latest text goes out once the current request finishes.
    pub fn poll_debounce(&mut self, now: Instant) -> Option<UiAction> {
        if !self.debouncer.fire(now) {
            return None;
        }
        if self.loading {
            self.debouncer.touch(now);
            return None;
        }
        if self.search_input.trim().is_empty() {
            return None;
        }
        Some(UiAction::SubmitSearch(self.search_input.clone()))
    }

    /// Advance the toast timer by one UI tick.
    pub fn tick(&mut self) {
        self.toast.tick();
    }

    pub fn live_search(&self) -> bool {
        self.live_search
    }

    pub fn selected_card(&self) -> Option<&SearchResultItem> {
        self.cards.get(self.selected)
    }

    fn handle_results_normal(&mut self, key: KeyEvent) -> Option<UiAction> {
        let cols = self.grid_columns as isize;
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.move_selection(-1);
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(cols);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-cols);
                None
            }
            KeyCode::Char('g') => {
                self.selected = 0;
                None
            }
            KeyCode::Char('G') => {
                self.selected = self.cards.len().saturating_sub(1);
                None
            }
            KeyCode::Enter => self
                .selected_card()
                .map(|card| UiAction::SelectResult(card.id.clone())),
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.search_cursor = self.search_input.chars().count();
                None
            }
            KeyCode::Esc => {
                self.toast.dismiss();
                None
            }
            _ => None,
        }
    }

    fn handle_results_search(&mut self, key: KeyEvent) -> Option<UiAction> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.debouncer.cancel();
                None
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.debouncer.cancel();
                Some(UiAction::SubmitSearch(self.search_input.clone()))
            }
            KeyCode::Backspace => {
                if self.search_cursor > 0 {
                    self.search_cursor -= 1;
                    let at = self.cursor_byte_index();
                    self.search_input.remove(at);
                    self.input_changed();
                }
                None
            }
            KeyCode::Left => {
                self.search_cursor = self.search_cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.search_cursor < self.search_input.chars().count() {
                    self.search_cursor += 1;
                }
                None
            }
            KeyCode::Char(c) => {
                let at = self.cursor_byte_index();
                self.search_input.insert(at, c);
                self.search_cursor += 1;
                self.input_changed();
                None
            }
            _ => None,
        }
    }

    fn handle_detail(&mut self, key: KeyEvent) -> Option<UiAction> {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Esc | KeyCode::Char('x') => Some(UiAction::CloseViewer),
            KeyCode::Char('j') | KeyCode::Down => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(10);
                None
            }
            _ => None,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.cards.is_empty() {
            return;
        }
        let max = self.cards.len() as isize - 1;
        self.selected = (self.selected as isize + delta).clamp(0, max) as usize;
    }

    fn cursor_byte_index(&self) -> usize {
        self.search_input
            .char_indices()
            .nth(self.search_cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.search_input.len())
    }

    fn input_changed(&mut self) {
        if self.live_search {
            self.debouncer.touch(Instant::now());
        }
    }
}

impl Presenter for App {
    fn show_loading(&mut self) {
        self.loading = true;
        self.cards.clear();
        self.count_label = None;
        self.empty_message = None;
        self.selected = 0;
    }

    fn show_results(&mut self, items: &[SearchResultItem], count_label: &str) {
        self.loading = false;
        self.cards = items.to_vec();
        self.count_label = Some(count_label.to_string());
        self.empty_message = None;
        self.selected = 0;
    }

    fn show_empty(&mut self, message: &str) {
        self.loading = false;
        self.cards.clear();
        self.count_label = None;
        self.empty_message = Some(message.to_string());
        self.selected = 0;
    }

    fn notify(&mut self, toast: Toast) {
        self.toast.show(toast, self.toast_ticks);
    }

    fn open_viewer(&mut self, view: DetailView) {
        self.viewer = Some(view);
        self.detail_scroll = 0;
        self.screen = Screen::Detail;
        self.input_mode = InputMode::Normal;
    }

    fn close_viewer(&mut self) {
        self.viewer = None;
        self.detail_scroll = 0;
        self.screen = Screen::Results;
    }

    fn prefill_query(&mut self, query: &str) {
        self.search_input = query.to_string();
        self.search_cursor = self.search_input.chars().count();
    }
}
