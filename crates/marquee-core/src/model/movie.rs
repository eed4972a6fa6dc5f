use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, Result};

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^tt\d{7,10}$").unwrap());

/// Returns `true` when `id` looks like an IMDb-style title identifier (`tt1375666`).
pub fn is_valid_identifier(id: &str) -> bool {
    IDENTIFIER_RE.is_match(id)
}

/// Validate a user-supplied identifier (deep links, `marquee show`).
pub fn validate_identifier(id: &str) -> Result<String> {
    let trimmed = id.trim();
    if !is_valid_identifier(trimmed) {
        return Err(MarqueeError::InvalidInput(format!(
            "'{trimmed}' is not a title identifier (expected e.g. tt1375666)"
        )));
    }
    Ok(trimmed.to_string())
}

/// A trimmed, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MarqueeError::InvalidInput(
                "Please enter a movie title".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of title as reported by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
    Episode,
    Game,
    Other(String),
}

impl MediaType {
    pub fn from_api(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "movie" => Self::Movie,
            "series" => Self::Series,
            "episode" => Self::Episode,
            "game" => Self::Game,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Series => write!(f, "series"),
            Self::Episode => write!(f, "episode"),
            Self::Game => write!(f, "game"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// One card in the results grid. Discarded on the next search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub id: String,
    pub title: String,
    pub year: String,
    pub kind: MediaType,
    pub poster: Option<String>,
}

impl SearchResultItem {
    /// Poster reference for the card, or the card placeholder.
    pub fn poster_or_placeholder(&self) -> &str {
        self.poster
            .as_deref()
            .unwrap_or(crate::format::CARD_POSTER_PLACEHOLDER)
    }
}

/// A secondary rating, e.g. `("Rotten Tomatoes", "94%")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Full metadata for one title. Immutable once cached.
///
/// Absent fields stay `None`; the viewer renders them as `N/A`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: String,
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub plot: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub writer: Option<String>,
    pub poster: Option<String>,
    /// Primary (IMDb) rating on a 0–10 scale, as reported.
    pub rating: Option<String>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

impl DetailRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Look up a secondary rating by source name (case-insensitive).
    pub fn rating_from(&self, source: &str) -> Option<&str> {
        self.ratings
            .iter()
            .find(|r| r.source.eq_ignore_ascii_case(source))
            .map(|r| r.value.as_str())
    }
}

/// Color class of the primary rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingClass {
    High,
    Medium,
    Low,
    Unrated,
}

impl RatingClass {
    /// High ≥ 8, medium ≥ 6, low otherwise. Absent or unparseable → unrated.
    pub fn classify(rating: Option<&str>) -> Self {
        match rating.and_then(|r| r.trim().parse::<f32>().ok()) {
            Some(score) if score >= 8.0 => Self::High,
            Some(score) if score >= 6.0 => Self::Medium,
            Some(_) => Self::Low,
            None => Self::Unrated,
        }
    }
}

impl std::fmt::Display for RatingClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
            Self::Unrated => write!(f, "unrated"),
        }
    }
}
