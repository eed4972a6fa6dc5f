use crate::cache::{DetailCache, Generation};
use crate::model::{DetailRecord, Query};

/// Per-client mutable state, owned by the controller.
#[derive(Debug, Default)]
pub struct SessionState {
    current_search: Option<Query>,
    cache: DetailCache,
    current_movie: Option<DetailRecord>,
    search_in_flight: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search cycle: remember the query, wipe the cache, and mark
    /// the search in flight. Returns the new cache generation.
    pub fn begin_search(&mut self, query: Query) -> Generation {
        self.current_search = Some(query);
        self.search_in_flight = true;
        self.cache.clear()
    }

    pub fn finish_search(&mut self) {
        self.search_in_flight = false;
    }

    pub fn is_search_in_flight(&self) -> bool {
        self.search_in_flight
    }

    pub fn current_search(&self) -> Option<&Query> {
        self.current_search.as_ref()
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut DetailCache {
        &mut self.cache
    }

    pub fn current_movie(&self) -> Option<&DetailRecord> {
        self.current_movie.as_ref()
    }

    pub fn set_current_movie(&mut self, record: DetailRecord) {
        self.current_movie = Some(record);
    }

    pub fn clear_current_movie(&mut self) -> Option<DetailRecord> {
        self.current_movie.take()
    }
}
