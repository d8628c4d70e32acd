//! Normalized display records and the raw-to-display mapping

use std::fmt::{Display, Formatter};

use super::raw::RawResult;

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w300";
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=No+Image";

const UNTITLED: &str = "Sin título";
const NO_OVERVIEW: &str = "Sin descripción.";
const NO_YEAR: &str = "—";

/// Category of a display record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Series,
    /// Categories we don't special-case (e.g. "person") pass through
    Other(String),
    Unknown,
}

impl MediaKind {
    fn from_media_type(media_type: Option<&str>) -> Self {
        match media_type {
            Some("movie") => MediaKind::Movie,
            Some("tv") => MediaKind::Series,
            Some(other) => MediaKind::Other(other.to_string()),
            None => MediaKind::Unknown,
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Series => write!(f, "series"),
            MediaKind::Other(other) => write!(f, "{}", other),
            MediaKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// The uniform, always-renderable form of a search result.
/// Invariant: every field holds a displayable value; missing raw fields
/// are replaced with placeholders during normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub title: String,
    pub year: String,
    pub kind: MediaKind,
    pub overview: String,
    pub poster_url: String,
}

impl DisplayRecord {
    /// "{year} · {kind}" line shown under titles and in the detail view
    pub fn meta_line(&self) -> String {
        format!("{} · {}", self.year, self.kind)
    }
}

/// State for the results area
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub records: Vec<DisplayRecord>,
    pub selected: usize,
    pub is_loading: bool,
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Map one raw record into a display record.
///
/// Total over any combination of missing fields. Empty strings count as
/// missing, matching how the upstream API leaves fields blank instead of
/// omitting them.
pub fn normalize(raw: &RawResult) -> DisplayRecord {
    let title = non_empty(&raw.title)
        .or_else(|| non_empty(&raw.name))
        .unwrap_or(UNTITLED)
        .to_string();

    let year = non_empty(&raw.release_date)
        .or_else(|| non_empty(&raw.first_air_date))
        .map(|date| date.chars().take(4).collect::<String>())
        .unwrap_or_else(|| NO_YEAR.to_string());

    let poster_url = non_empty(&raw.poster_path)
        .or_else(|| non_empty(&raw.profile_path))
        .map(|path| format!("{}{}", IMAGE_BASE, path))
        .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string());

    // Person records carry known_for_department instead of an overview
    let overview = non_empty(&raw.overview)
        .or_else(|| non_empty(&raw.known_for_department))
        .unwrap_or(NO_OVERVIEW)
        .to_string();

    DisplayRecord {
        title,
        year,
        kind: MediaKind::from_media_type(raw.media_type.as_deref()),
        overview,
        poster_url,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, MediaKind, IMAGE_BASE, PLACEHOLDER_POSTER};
    use crate::model::raw::RawResult;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_record_yields_all_placeholders() {
        let record = normalize(&RawResult::default());

        assert_eq!(record.title, "Sin título");
        assert_eq!(record.year, "—");
        assert_eq!(record.kind, MediaKind::Unknown);
        assert_eq!(record.overview, "Sin descripción.");
        assert_eq!(record.poster_url, PLACEHOLDER_POSTER);
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let record = normalize(&raw(json!({
            "title": "",
            "release_date": "",
            "poster_path": "",
            "overview": ""
        })));

        assert_eq!(record.title, "Sin título");
        assert_eq!(record.year, "—");
        assert_eq!(record.overview, "Sin descripción.");
        assert_eq!(record.poster_url, PLACEHOLDER_POSTER);
    }

    #[test]
    fn movie_fields_map_directly() {
        let record = normalize(&raw(json!({
            "title": "Batman Begins",
            "release_date": "2005-06-10",
            "media_type": "movie",
            "poster_path": "/batman.jpg",
            "overview": "A young Bruce Wayne."
        })));

        assert_eq!(record.title, "Batman Begins");
        assert_eq!(record.year, "2005");
        assert_eq!(record.kind, MediaKind::Movie);
        assert_eq!(record.overview, "A young Bruce Wayne.");
        assert_eq!(record.poster_url, format!("{}/batman.jpg", IMAGE_BASE));
    }

    #[test]
    fn series_fall_back_to_name_and_first_air_date() {
        let record = normalize(&raw(json!({
            "name": "Batman: The Animated Series",
            "first_air_date": "1992-09-05",
            "media_type": "tv"
        })));

        assert_eq!(record.title, "Batman: The Animated Series");
        assert_eq!(record.year, "1992");
        assert_eq!(record.kind, MediaKind::Series);
    }

    #[test]
    fn year_is_first_four_characters() {
        let record = normalize(&raw(json!({ "release_date": "1999-03-31" })));
        assert_eq!(record.year, "1999");
    }

    #[test]
    fn kind_passes_through_unrecognized_categories() {
        let record = normalize(&raw(json!({ "media_type": "person" })));
        assert_eq!(record.kind, MediaKind::Other("person".to_string()));
        assert_eq!(record.kind.to_string(), "person");
    }

    #[test]
    fn poster_path_wins_over_profile_path() {
        let record = normalize(&raw(json!({
            "poster_path": "/poster.jpg",
            "profile_path": "/profile.jpg"
        })));
        assert_eq!(record.poster_url, format!("{}/poster.jpg", IMAGE_BASE));

        let record = normalize(&raw(json!({ "profile_path": "/profile.jpg" })));
        assert_eq!(record.poster_url, format!("{}/profile.jpg", IMAGE_BASE));
    }

    #[test]
    fn person_overview_falls_back_to_department() {
        let record = normalize(&raw(json!({
            "name": "Christian Bale",
            "media_type": "person",
            "known_for_department": "Acting"
        })));
        assert_eq!(record.overview, "Acting");
    }

    #[test]
    fn meta_line_combines_year_and_kind() {
        let record = normalize(&raw(json!({
            "title": "Heat",
            "release_date": "1995-12-15",
            "media_type": "movie"
        })));
        assert_eq!(record.meta_line(), "1995 · movie");
    }
}
