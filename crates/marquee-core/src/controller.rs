//! Search controller and detail fetch orchestration.
//!
//! The controller is the single owner of [`SessionState`]. Network calls run
//! as spawned tokio tasks that report back through an unbounded channel; the
//! UI loop feeds those [`Completion`]s to [`Controller::handle_completion`]
//! between input events, so the cache is only ever touched by its owner.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::cache::{Generation, InsertOutcome};
use crate::deeplink::DeepLink;
use crate::error::{MarqueeError, Result};
use crate::format;
use crate::model::{DetailRecord, Query, SearchResultItem};
use crate::omdb::MovieApi;
use crate::session::SessionState;
use crate::toast::Toast;
use crate::viewer::DetailView;

/// Rendering surface driven by the controller.
pub trait Presenter {
    /// Clear the results surface, hide the empty state, clear the count.
    fn show_loading(&mut self);

    /// Render one card per item, in order, plus the count label.
    fn show_results(&mut self, items: &[SearchResultItem], count_label: &str);

    /// Render the empty-state message (no cards).
    fn show_empty(&mut self, message: &str);

    fn notify(&mut self, toast: Toast);

    fn open_viewer(&mut self, view: DetailView);

    fn close_viewer(&mut self);

    /// Put `query` into the search box (deep links).
    fn prefill_query(&mut self, _query: &str) {}
}

/// User-initiated events the presentation layer forwards.
pub trait UiEvents {
    fn on_submit_search(&mut self, term: &str);
    fn on_select_result(&mut self, id: &str);
    fn on_close_viewer(&mut self);
}

/// Result of a spawned network task.
#[derive(Debug)]
pub enum Completion {
    Search {
        generation: Generation,
        query: Query,
        result: Result<Vec<SearchResultItem>>,
    },
    Detail {
        generation: Generation,
        id: String,
        open_viewer: bool,
        result: Result<DetailRecord>,
    },
}

pub struct Controller<A, P> {
    api: Arc<A>,
    presenter: P,
    session: SessionState,
    completion_tx: mpsc::UnboundedSender<Completion>,
    pending: usize,
}

impl<A, P> Controller<A, P>
where
    A: MovieApi + 'static,
    P: Presenter,
{
    /// Create a controller and the receiver its spawned tasks report to.
    pub fn new(api: Arc<A>, presenter: P) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let controller = Self {
            api,
            presenter,
            session: SessionState::new(),
            completion_tx,
            pending: 0,
        };
        (controller, completion_rx)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Spawned tasks whose completion has not been handled yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Run a search for `term`.
    ///
    /// Blank input is rejected with a warning and no request. While a search
    /// is in flight further calls are ignored.
    pub fn search(&mut self, term: &str) {
        let query = match Query::parse(term) {
            Ok(q) => q,
            Err(e) => {
                let message = match e {
                    MarqueeError::InvalidInput(msg) => msg,
                    other => other.to_string(),
                };
                self.presenter.notify(Toast::warning(message));
                return;
            }
        };

        if self.session.is_search_in_flight() {
            tracing::debug!(query = %query, "search already in flight, ignoring");
            return;
        }

        self.presenter.show_loading();
        let generation = self.session.begin_search(query.clone());
        tracing::debug!(query = %query, generation, "search issued");

        let api = Arc::clone(&self.api);
        let tx = self.completion_tx.clone();
        self.pending += 1;
        tokio::spawn(async move {
            let result = api.search(&query).await;
            // Receiver gone means the UI closed.
            let _ = tx.send(Completion::Search {
                generation,
                query,
                result,
            });
        });
    }

    /// Return the cached record for `id`, or start a fetch and return `None`.
    ///
    /// With `open_viewer`, a hit opens the viewer immediately and a miss opens
    /// it when the record arrives (or surfaces an error toast on failure).
    /// Without it the fetch is a silent preload.
    pub fn fetch_details(&mut self, id: &str, open_viewer: bool) -> Option<DetailRecord> {
        if let Some(record) = self.session.cache().get(id).cloned() {
            if open_viewer {
                self.open(record.clone());
            }
            return Some(record);
        }

        let generation = self.session.cache().generation();
        let api = Arc::clone(&self.api);
        let tx = self.completion_tx.clone();
        let id = id.to_string();
        tracing::debug!(id = %id, open_viewer, generation, "detail fetch issued");

        self.pending += 1;
        tokio::spawn(async move {
            let result = api.details(&id).await;
            let _ = tx.send(Completion::Detail {
                generation,
                id,
                open_viewer,
                result,
            });
        });
        None
    }

    /// Apply a finished network task to the session and presenter.
    pub fn handle_completion(&mut self, completion: Completion) {
        self.pending = self.pending.saturating_sub(1);
        match completion {
            Completion::Search {
                generation,
                query,
                result,
            } => self.apply_search(generation, query, result),
            Completion::Detail {
                generation,
                id,
                open_viewer,
                result,
            } => self.apply_detail(generation, id, open_viewer, result),
        }
    }

    /// Act on a startup deep link. Call once.
    pub fn open_deep_link(&mut self, link: DeepLink) {
        match link {
            DeepLink::Title(id) => {
                self.fetch_details(&id, true);
            }
            DeepLink::Search(query) => {
                self.presenter.prefill_query(query.as_str());
                self.search(query.as_str());
            }
        }
    }

    fn apply_search(
        &mut self,
        generation: Generation,
        query: Query,
        result: Result<Vec<SearchResultItem>>,
    ) {
        if generation != self.session.cache().generation() {
            tracing::debug!(query = %query, generation, "dropping stale search result");
            return;
        }
        self.session.finish_search();

        match result {
            Ok(items) if !items.is_empty() => {
                tracing::info!(query = %query, count = items.len(), "search complete");
                self.presenter
                    .show_results(&items, &format::count_label(items.len()));
                for item in &items {
                    self.fetch_details(&item.id, false);
                }
            }
            Ok(_) => {
                tracing::info!(query = %query, "search returned no matches");
                self.presenter
                    .show_empty(&format::empty_state_message(query.as_str()));
            }
            Err(e) => {
                tracing::error!(query = %query, error = %e, "search failed");
                self.presenter
                    .show_empty(&format::empty_state_message(query.as_str()));
                let message = match e {
                    MarqueeError::NoMatch(msg) => msg,
                    other => format!("Search failed: {other}"),
                };
                self.presenter.notify(Toast::error(message));
            }
        }
    }

    fn apply_detail(
        &mut self,
        generation: Generation,
        id: String,
        open_viewer: bool,
        result: Result<DetailRecord>,
    ) {
        match result {
            Ok(record) => {
                let outcome = self
                    .session
                    .cache_mut()
                    .insert_as(generation, id.clone(), record);
                if outcome == InsertOutcome::Stale {
                    tracing::debug!(id = %id, generation, "dropping stale detail result");
                    return;
                }
                if open_viewer {
                    if let Some(record) = self.session.cache().get(&id).cloned() {
                        self.open(record);
                    }
                }
            }
            Err(e) if generation != self.session.cache().generation() => {
                tracing::debug!(id = %id, generation, error = %e, "dropping stale detail failure");
            }
            Err(e) if open_viewer => {
                tracing::error!(id = %id, error = %e, "detail fetch failed");
                self.presenter
                    .notify(Toast::error(format!("Could not load details for {id}: {e}")));
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "detail preload failed");
            }
        }
    }

    fn open(&mut self, record: DetailRecord) {
        let view = DetailView::from_record(&record);
        self.session.set_current_movie(record);
        self.presenter.open_viewer(view);
    }

    fn close(&mut self) {
        if self.session.clear_current_movie().is_some() {
            tracing::debug!("viewer closed");
        }
        self.presenter.close_viewer();
    }
}

impl<A, P> UiEvents for Controller<A, P>
where
    A: MovieApi + 'static,
    P: Presenter,
{
    fn on_submit_search(&mut self, term: &str) {
        self.search(term);
    }

    fn on_select_result(&mut self, id: &str) {
        self.fetch_details(id, true);
    }

    fn on_close_viewer(&mut self) {
        self.close();
    }
}
