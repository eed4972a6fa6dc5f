use crate::error::Result;
use crate::model::{DetailRecord, Query, SearchResultItem};

/// The external movie-metadata service.
///
/// Implementations:
/// - `OmdbClient`: the OMDb HTTP API (search by `s=`, detail by `i=`)
/// - in-process fakes in tests
///
/// A well-formed "no match" response is reported as `MarqueeError::NoMatch`.
pub trait MovieApi: Send + Sync {
    /// Search titles matching `query`, in server order.
    fn search(
        &self,
        query: &Query,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResultItem>>> + Send;

    /// Fetch the full detail record for one identifier.
    fn details(&self, id: &str) -> impl std::future::Future<Output = Result<DetailRecord>> + Send;
}
