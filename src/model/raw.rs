//! Wire-format record shapes as they come off the TMDB API

use serde::Deserialize;

/// One page of a TMDB listing or search response.
/// A body without a `results` array deserializes as an empty page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<RawResult>,
}

/// A single record from `/search/multi` or a listing endpoint.
///
/// TMDB mixes movies, series and people in the same array and each
/// category carries a different subset of fields, so everything here is
/// optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    pub title: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub profile_path: Option<String>,
    pub overview: Option<String>,
    pub media_type: Option<String>,
    pub known_for_department: Option<String>,
}
