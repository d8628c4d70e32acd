//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and drives the search pipeline.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `debounce`: Quiet-period timer for search input
//! - `query`: Search/browse refresh logic

mod debounce;
mod input;
mod query;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, TmdbClient};

pub use debounce::{Debouncer, DEBOUNCE_DELAY};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) tmdb: TmdbClient,
    pub(crate) debouncer: Arc<Mutex<Debouncer>>,
    // Monotonic fetch counter; responses that lost the race are dropped
    pub(crate) fetch_seq: Arc<AtomicU64>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, tmdb: TmdbClient) -> Self {
        Self {
            model,
            tmdb,
            debouncer: Arc::new(Mutex::new(Debouncer::default())),
            fetch_seq: Arc::new(AtomicU64::new(0)),
        }
    }
}
