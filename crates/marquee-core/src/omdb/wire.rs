use serde::Deserialize;

use crate::error::{MarqueeError, Result};
use crate::model::{DetailRecord, MediaType, Rating, SearchResultItem};

/// OMDb's marker for an absent value.
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchEnvelope {
    response: String,
    #[serde(default)]
    search: Vec<SearchItemDto>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchItemDto {
    title: String,
    #[serde(default)]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(default)]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetailDto {
    response: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(rename = "imdbID", default)]
    imdb_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    rated: Option<String>,
    #[serde(default)]
    runtime: Option<String>,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    plot: Option<String>,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    actors: Option<String>,
    #[serde(default)]
    writer: Option<String>,
    #[serde(default)]
    poster: Option<String>,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,
    #[serde(default)]
    ratings: Vec<RatingDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RatingDto {
    source: String,
    value: String,
}

/// Map OMDb's `"N/A"` and blank strings to `None`.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != NOT_AVAILABLE)
}

fn no_match(error: Option<String>) -> MarqueeError {
    MarqueeError::NoMatch(error.unwrap_or_else(|| "no match".to_string()))
}

/// Decode a search response body.
///
/// `Response: "False"` becomes `MarqueeError::NoMatch`; a `"True"` response
/// with no `Search` array is a successful zero-match search.
pub fn parse_search(body: &str) -> Result<Vec<SearchResultItem>> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;
    if !envelope.response.eq_ignore_ascii_case("true") {
        return Err(no_match(envelope.error));
    }

    Ok(envelope
        .search
        .into_iter()
        .map(|item| SearchResultItem {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            kind: MediaType::from_api(&item.kind),
            poster: present(item.poster),
        })
        .collect())
}

/// Decode a detail response body for `requested_id`.
pub fn parse_detail(requested_id: &str, body: &str) -> Result<DetailRecord> {
    let dto: DetailDto = serde_json::from_str(body)?;
    if !dto.response.eq_ignore_ascii_case("true") {
        return Err(no_match(dto.error));
    }

    let genres = present(dto.genre)
        .map(|g| {
            g.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(DetailRecord {
        id: present(dto.imdb_id).unwrap_or_else(|| requested_id.to_string()),
        title: present(dto.title),
        year: present(dto.year),
        rated: present(dto.rated),
        runtime: present(dto.runtime),
        genres,
        plot: present(dto.plot),
        director: present(dto.director),
        actors: present(dto.actors),
        writer: present(dto.writer),
        poster: present(dto.poster),
        rating: present(dto.imdb_rating),
        ratings: dto
            .ratings
            .into_iter()
            .filter(|r| r.value != NOT_AVAILABLE)
            .map(|r| Rating {
                source: r.source,
                value: r.value,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCEPTION_SEARCH: &str = r#"{
        "Search": [
            {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie",
             "Poster": "https://m.media-amazon.com/images/M/inception.jpg"},
            {"Title": "Inception: The Cobol Job", "Year": "2010", "imdbID": "tt5295894",
             "Type": "movie", "Poster": "N/A"}
        ],
        "totalResults": "2",
        "Response": "True"
    }"#;

    const INCEPTION_DETAIL: &str = r#"{
        "Title": "Inception", "Year": "2010", "Rated": "PG-13", "Runtime": "148 min",
        "Genre": "Action, Adventure, Sci-Fi", "Director": "Christopher Nolan",
        "Writer": "Christopher Nolan", "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
        "Plot": "A thief who steals corporate secrets through dream-sharing technology.",
        "Poster": "https://m.media-amazon.com/images/M/inception.jpg",
        "Ratings": [
            {"Source": "Internet Movie Database", "Value": "8.8/10"},
            {"Source": "Rotten Tomatoes", "Value": "87%"},
            {"Source": "Metacritic", "Value": "74/100"}
        ],
        "imdbRating": "8.8", "imdbID": "tt1375666", "Type": "movie", "Response": "True"
    }"#;

    #[test]
    fn test_parse_search_preserves_order() {
        let items = parse_search(INCEPTION_SEARCH).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "tt1375666");
        assert_eq!(items[0].title, "Inception");
        assert_eq!(items[0].kind, MediaType::Movie);
        assert!(items[0].poster.is_some());
        assert_eq!(items[1].id, "tt5295894");
        assert!(items[1].poster.is_none(), "N/A poster maps to None");
    }

    #[test]
    fn test_parse_search_not_found_is_no_match() {
        let err = parse_search(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap_err();
        assert!(err.is_no_match());
        assert!(err.to_string().contains("Movie not found!"));
    }

    #[test]
    fn test_parse_search_true_without_results_is_empty() {
        let items = parse_search(r#"{"Response":"True","Search":[]}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_search_malformed() {
        let err = parse_search("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, MarqueeError::Serialization(_)));
    }

    #[test]
    fn test_parse_detail_full() {
        let record = parse_detail("tt1375666", INCEPTION_DETAIL).unwrap();
        assert_eq!(record.id, "tt1375666");
        assert_eq!(record.title.as_deref(), Some("Inception"));
        assert_eq!(record.rated.as_deref(), Some("PG-13"));
        assert_eq!(record.genres, vec!["Action", "Adventure", "Sci-Fi"]);
        assert_eq!(record.rating.as_deref(), Some("8.8"));
        assert_eq!(record.ratings.len(), 3);
        assert_eq!(record.rating_from("Rotten Tomatoes"), Some("87%"));
    }

    #[test]
    fn test_parse_detail_na_fields_become_none() {
        let body = r#"{"Title":"Obscure Short","Year":"1999","Rated":"N/A","Runtime":"N/A",
            "Genre":"N/A","Plot":"","Director":"N/A","imdbRating":"N/A","Response":"True"}"#;
        let record = parse_detail("tt0000001", body).unwrap();
        assert_eq!(record.id, "tt0000001", "falls back to the requested id");
        assert_eq!(record.title.as_deref(), Some("Obscure Short"));
        assert!(record.rated.is_none());
        assert!(record.runtime.is_none());
        assert!(record.genres.is_empty());
        assert!(record.plot.is_none());
        assert!(record.director.is_none());
        assert!(record.actors.is_none());
        assert!(record.rating.is_none());
        assert!(record.ratings.is_empty());
    }

    #[test]
    fn test_parse_detail_incorrect_id() {
        let err = parse_detail("tt9999999", r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#)
            .unwrap_err();
        assert!(err.is_no_match());
    }
}
