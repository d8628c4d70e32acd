//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, popup geometry, labels)
//! - `layout`: Top bar (search input, filter selector) and hint bar
//! - `content`: Results list rendering
//! - `overlays`: Modal overlays (record detail, help)

pub(crate) mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{ContentState, DetailState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        content_state: &ContentState,
        detail_state: &DetailState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + filter selector
                Constraint::Min(0),    // Results list
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        // Top bar: Search + Filter
        layout::render_top_bar(frame, chunks[0], ui_state);

        // Results list with count title and empty state
        content::render_results(frame, chunks[1], ui_state, content_state);

        // Bottom: key hint line
        layout::render_hint_bar(frame, chunks[2]);

        // Detail overlay (if open)
        if detail_state.visible {
            if let Some(record) = &detail_state.record {
                overlays::render_detail(frame, record);
            }
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
