//! Layout rendering (top bar with search input and filter selector, hint bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, TypeFilter, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(28), // Filter selector
        ])
        .split(area);

    let search_focused = ui_state.active_section == ActiveSection::Search;
    let search_text = if ui_state.search_query.is_empty() {
        "Type to search..."
    } else {
        &ui_state.search_query
    };
    let search_style = if search_focused && ui_state.search_query.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if search_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if search_focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    render_filter_selector(frame, chunks[1], ui_state);
}

fn render_filter_selector(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let filter_focused = ui_state.active_section == ActiveSection::Filter;

    let options = [TypeFilter::All, TypeFilter::Movie, TypeFilter::Series];
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *option == ui_state.type_filter {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(option.label(), style));
    }

    let filter = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Filter ")
            .padding(Padding::horizontal(1))
            .border_style(if filter_focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(filter, area);
}

pub fn render_hint_bar(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(" Tab switch · ↑↓ select · Enter open · H help · Q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
