use serde::Serialize;

use crate::format::{self, or_na, NOT_AVAILABLE, VIEWER_POSTER_PLACEHOLDER};
use crate::model::{DetailRecord, RatingClass};

pub const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";
pub const METACRITIC: &str = "Metacritic";

/// Everything the detail panel shows, with absent values already replaced
/// by `N/A`. Built fresh on every open; nothing is carried over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub poster: String,
    pub has_poster: bool,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub runtime: String,
    pub genres: Vec<String>,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub writer: String,
    pub rating: String,
    pub rating_class: RatingClass,
    /// Shown only when the record carries a Rotten Tomatoes entry.
    pub rotten_tomatoes: Option<String>,
    /// Shown only when the record carries a Metacritic entry.
    pub metacritic: Option<String>,
}

impl DetailView {
    pub fn from_record(record: &DetailRecord) -> Self {
        let genres = if record.genres.is_empty() {
            vec![NOT_AVAILABLE.to_string()]
        } else {
            record.genres.clone()
        };

        Self {
            id: record.id.clone(),
            poster: record
                .poster
                .clone()
                .unwrap_or_else(|| VIEWER_POSTER_PLACEHOLDER.to_string()),
            has_poster: record.poster.is_some(),
            title: or_na(record.title.as_deref()),
            year: or_na(record.year.as_deref()),
            rated: or_na(record.rated.as_deref()),
            runtime: or_na(record.runtime.as_deref()),
            genres,
            plot: or_na(record.plot.as_deref()),
            director: or_na(record.director.as_deref()),
            actors: or_na(record.actors.as_deref()),
            writer: or_na(record.writer.as_deref()),
            rating: or_na(record.rating.as_deref()),
            rating_class: RatingClass::classify(record.rating.as_deref()),
            rotten_tomatoes: record.rating_from(ROTTEN_TOMATOES).map(str::to_string),
            metacritic: record.rating_from(METACRITIC).map(str::to_string),
        }
    }

    /// `2010 • PG-13 • 148 min`
    pub fn meta_line(&self) -> String {
        format::join_meta(&[&self.year, &self.rated, &self.runtime])
    }

    /// Named secondary ratings that are present, in display order.
    pub fn secondary_ratings(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(ref v) = self.rotten_tomatoes {
            out.push((ROTTEN_TOMATOES, v.as_str()));
        }
        if let Some(ref v) = self.metacritic {
            out.push((METACRITIC, v.as_str()));
        }
        out
    }
}
