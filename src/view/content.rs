//! Results list rendering (cards, empty state, count title)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, ContentState, UiState};
use super::utils::{render_scrollable_list, results_label, truncate_string};

pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if content_state.is_loading {
        let loading = Paragraph::new("Cargando…")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(loading, area);
        return;
    }

    let title = format!(" {} ", results_label(content_state.records.len()));

    if content_state.records.is_empty() {
        let empty = Paragraph::new("No se encontraron resultados.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(empty, area);
        return;
    }

    // Two text columns per card: title, then meta + overview snippet
    let overview_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = content_state
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let is_selected = i == content_state.selected;
            let title_style = if is_selected && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let meta = record.meta_line();
            let snippet_width = overview_width.saturating_sub(meta.chars().count() + 3);
            let lines = vec![
                Line::from(Span::styled(record.title.clone(), title_style)),
                Line::from(vec![
                    Span::styled(meta, Style::default().fg(Color::Cyan)),
                    Span::raw("   "),
                    Span::styled(
                        truncate_string(&record.overview, snippet_width),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ];
            ListItem::new(lines)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, items, content_state.selected, block);
}
