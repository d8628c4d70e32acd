//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (enums, UI state, etc.)
//! - `raw`: Wire-format records as the TMDB API returns them
//! - `display`: Normalized display records and the normalizer
//! - `tmdb_client`: TMDB API client wrapper
//! - `app_model`: Main application model with state management methods

mod types;
mod raw;
mod display;
mod tmdb_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, DetailState, TypeFilter, UiState};

pub use raw::{RawResult, SearchPage};

pub use display::{
    normalize, ContentState, DisplayRecord, MediaKind,
};

pub use tmdb_client::{TmdbClient, TmdbError};

pub use app_model::AppModel;
