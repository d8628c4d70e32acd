//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::display::{ContentState, DisplayRecord};
use super::types::{DetailState, TypeFilter, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    pub detail_state: Arc<Mutex<DetailState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            ui_state: Arc::new(Mutex::new(UiState::default())),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            detail_state: Arc::new(Mutex::new(DetailState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI state (focus, query text, filter)
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn update_search_query(&self, query: String) {
        let mut state = self.ui_state.lock().await;
        state.search_query = query;
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop();
    }

    /// Snapshot of the two inputs a refresh decision depends on
    pub async fn get_query_and_filter(&self) -> (String, TypeFilter) {
        let state = self.ui_state.lock().await;
        (state.search_query.clone(), state.type_filter)
    }

    pub async fn cycle_filter_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.type_filter = state.type_filter.next();
    }

    pub async fn cycle_filter_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.type_filter = state.type_filter.prev();
    }

    // ========================================================================
    // Content state (results list)
    // ========================================================================

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    pub async fn set_content_loading(&self, loading: bool) {
        let mut state = self.content_state.lock().await;
        state.is_loading = loading;
    }

    /// Replace the results list wholesale; selection resets to the top
    pub async fn apply_results(&self, records: Vec<DisplayRecord>) {
        let mut state = self.content_state.lock().await;
        state.records = records;
        state.selected = 0;
        state.is_loading = false;
    }

    pub async fn content_move_up(&self) {
        let mut state = self.content_state.lock().await;
        if state.selected > 0 {
            state.selected -= 1;
        }
    }

    pub async fn content_move_down(&self) {
        let mut state = self.content_state.lock().await;
        if state.selected < state.records.len().saturating_sub(1) {
            state.selected += 1;
        }
    }

    pub async fn get_selected_record(&self) -> Option<DisplayRecord> {
        let state = self.content_state.lock().await;
        state.records.get(state.selected).cloned()
    }

    // ========================================================================
    // Detail overlay
    // ========================================================================

    pub async fn get_detail_state(&self) -> DetailState {
        self.detail_state.lock().await.clone()
    }

    pub async fn is_detail_open(&self) -> bool {
        self.detail_state.lock().await.visible
    }

    pub async fn open_detail(&self, record: DisplayRecord) {
        let mut state = self.detail_state.lock().await;
        state.record = Some(record);
        state.visible = true;
    }

    pub async fn close_detail(&self) {
        let mut state = self.detail_state.lock().await;
        state.visible = false;
    }

    // ========================================================================
    // Help popup
    // ========================================================================

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }
}
