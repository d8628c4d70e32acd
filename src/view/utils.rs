//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Result-count title: "0 resultados" / "N resultado(s)"
pub fn results_label(count: usize) -> String {
    if count == 0 {
        "0 resultados".to_string()
    } else {
        format!("{} resultado(s)", count)
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    } else {
        s.to_string()
    }
}

/// Centered popup area clamped to the frame
pub fn popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));

    Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

#[cfg(test)]
mod tests {
    use super::{results_label, truncate_string};

    #[test]
    fn results_label_pluralizes() {
        assert_eq!(results_label(0), "0 resultados");
        assert_eq!(results_label(1), "1 resultado(s)");
        assert_eq!(results_label(2), "2 resultado(s)");
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_string("Heat", 10), "Heat");
    }

    #[test]
    fn truncate_marks_long_strings() {
        assert_eq!(truncate_string("Batman Begins", 7), "Batman…");
    }
}
