#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use marquee_core::controller::{Completion, Controller, Presenter};
use marquee_core::error::{MarqueeError, Result};
use marquee_core::model::{DetailRecord, MediaType, Query, Rating, SearchResultItem};
use marquee_core::omdb::MovieApi;
use marquee_core::toast::{Toast, ToastKind};
use marquee_core::viewer::DetailView;
use tokio::sync::mpsc;

/// Scripted search outcome for one query.
#[derive(Clone)]
pub enum SearchScript {
    Items(Vec<SearchResultItem>),
    NoMatch(String),
    Down,
}

/// In-process movie API that records every call.
#[derive(Default)]
pub struct FakeApi {
    searches: HashMap<String, SearchScript>,
    details: HashMap<String, DetailRecord>,
    failing_details: HashSet<String>,
    search_calls: AtomicUsize,
    detail_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, script: SearchScript) -> Self {
        self.searches.insert(query.to_string(), script);
        self
    }

    pub fn with_detail(mut self, record: DetailRecord) -> Self {
        self.details.insert(record.id.clone(), record);
        self
    }

    /// Detail requests for `id` fail at the transport level.
    pub fn with_failing_detail(mut self, id: &str) -> Self {
        self.failing_details.insert(id.to_string());
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn detail_calls_for(&self, id: &str) -> usize {
        self.detail_calls().iter().filter(|c| *c == id).count()
    }
}

impl MovieApi for FakeApi {
    async fn search(&self, query: &Query) -> Result<Vec<SearchResultItem>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        match self.searches.get(query.as_str()) {
            Some(SearchScript::Items(items)) => Ok(items.clone()),
            Some(SearchScript::NoMatch(msg)) => Err(MarqueeError::NoMatch(msg.clone())),
            Some(SearchScript::Down) => Err(MarqueeError::Api("OMDb error 503".into())),
            None => Err(MarqueeError::NoMatch("Movie not found!".into())),
        }
    }

    async fn details(&self, id: &str) -> Result<DetailRecord> {
        self.detail_calls.lock().unwrap().push(id.to_string());
        if self.failing_details.contains(id) {
            return Err(MarqueeError::Api("OMDb error 500".into()));
        }
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| MarqueeError::NoMatch("Incorrect IMDb ID.".into()))
    }
}

/// Presenter that records what would be on screen.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub loading: bool,
    pub cards: Vec<SearchResultItem>,
    pub count_label: Option<String>,
    pub empty_message: Option<String>,
    pub toasts: Vec<Toast>,
    pub viewer: Option<DetailView>,
    pub viewer_opens: usize,
    pub prefill: Option<String>,
}

impl RecordingPresenter {
    pub fn errors(&self) -> Vec<&Toast> {
        self.toasts
            .iter()
            .filter(|t| t.kind == ToastKind::Error)
            .collect()
    }

    pub fn warnings(&self) -> Vec<&Toast> {
        self.toasts
            .iter()
            .filter(|t| t.kind == ToastKind::Warning)
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn show_loading(&mut self) {
        self.loading = true;
        self.cards.clear();
        self.count_label = None;
        self.empty_message = None;
    }

    fn show_results(&mut self, items: &[SearchResultItem], count_label: &str) {
        self.loading = false;
        self.cards = items.to_vec();
        self.count_label = Some(count_label.to_string());
        self.empty_message = None;
    }

    fn show_empty(&mut self, message: &str) {
        self.loading = false;
        self.cards.clear();
        self.count_label = None;
        self.empty_message = Some(message.to_string());
    }

    fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    fn open_viewer(&mut self, view: DetailView) {
        self.viewer_opens += 1;
        self.viewer = Some(view);
    }

    fn close_viewer(&mut self) {
        self.viewer = None;
    }

    fn prefill_query(&mut self, query: &str) {
        self.prefill = Some(query.to_string());
    }
}

pub type TestController = Controller<FakeApi, RecordingPresenter>;

pub fn controller(api: FakeApi) -> (TestController, mpsc::UnboundedReceiver<Completion>, Arc<FakeApi>) {
    let api = Arc::new(api);
    let (ctrl, rx) = Controller::new(Arc::clone(&api), RecordingPresenter::default());
    (ctrl, rx, api)
}

/// Handle exactly one completion.
pub async fn step(ctrl: &mut TestController, rx: &mut mpsc::UnboundedReceiver<Completion>) {
    let completion = rx.recv().await.expect("completion channel closed");
    ctrl.handle_completion(completion);
}

/// Handle completions until no spawned task is outstanding.
pub async fn drain(ctrl: &mut TestController, rx: &mut mpsc::UnboundedReceiver<Completion>) {
    while ctrl.pending() > 0 {
        step(ctrl, rx).await;
    }
}

pub fn item(id: &str, title: &str, year: &str) -> SearchResultItem {
    SearchResultItem {
        id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        kind: MediaType::Movie,
        poster: None,
    }
}

pub fn record(id: &str, title: &str) -> DetailRecord {
    DetailRecord {
        id: id.to_string(),
        title: Some(title.to_string()),
        year: Some("2010".into()),
        rated: Some("PG-13".into()),
        runtime: Some("148 min".into()),
        genres: vec!["Action".into(), "Sci-Fi".into()],
        plot: Some("A thief enters dreams.".into()),
        director: Some("Christopher Nolan".into()),
        actors: Some("Leonardo DiCaprio".into()),
        writer: Some("Christopher Nolan".into()),
        poster: None,
        rating: Some("8.8".into()),
        ratings: vec![Rating {
            source: "Rotten Tomatoes".into(),
            value: "94%".into(),
        }],
    }
}

/// API with one "Inception" match and its detail record.
pub fn inception_api() -> FakeApi {
    FakeApi::new()
        .with_search(
            "Inception",
            SearchScript::Items(vec![item("tt1375666", "Inception", "2010")]),
        )
        .with_detail(record("tt1375666", "Inception"))
}
