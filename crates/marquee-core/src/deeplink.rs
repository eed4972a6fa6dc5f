use reqwest::Url;

use crate::error::{MarqueeError, Result};
use crate::model::{validate_identifier, Query};

/// Startup instruction read once at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// Open the detail viewer for this identifier.
    Title(String),
    /// Pre-fill the search box and run this query.
    Search(Query),
}

impl DeepLink {
    /// Build from separate parameters. The identifier wins when both are set;
    /// blank values count as absent.
    pub fn from_params(id: Option<&str>, query: Option<&str>) -> Result<Option<Self>> {
        if let Some(id) = id.filter(|s| !s.trim().is_empty()) {
            return Ok(Some(Self::Title(validate_identifier(id)?)));
        }
        if let Some(q) = query.filter(|s| !s.trim().is_empty()) {
            return Ok(Some(Self::Search(Query::parse(q)?)));
        }
        Ok(None)
    }

    /// Parse a link such as `marquee://open?id=tt1375666` or
    /// `https://example.com/?q=Inception`. `i` and `s` are accepted as
    /// aliases for `id` and `q`.
    pub fn parse_url(link: &str) -> Result<Option<Self>> {
        let url = Url::parse(link)
            .map_err(|e| MarqueeError::InvalidInput(format!("invalid link '{link}': {e}")))?;

        let mut id = None;
        let mut query = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "id" | "i" if id.is_none() => id = Some(value.into_owned()),
                "q" | "s" if query.is_none() => query = Some(value.into_owned()),
                _ => {}
            }
        }

        Self::from_params(id.as_deref(), query.as_deref())
    }
}
