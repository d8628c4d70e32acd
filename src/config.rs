//! Runtime configuration, resolved once at startup

use std::env;

const API_KEY_VAR: &str = "TMDB_API_KEY";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// A missing API key is not fatal: the client degrades every fetch
    /// to an empty result set and the UI shows its empty state.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        Self { api_key }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
