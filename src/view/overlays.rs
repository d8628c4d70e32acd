//! Overlay rendering (record detail, help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::DisplayRecord;
use super::utils::popup_rect;

pub fn render_detail(frame: &mut Frame, record: &DisplayRecord) {
    let area = frame.area();

    let popup_width = 62.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4) as usize;

    // Wrapped overview height plus meta, poster line and spacing
    let overview_lines =
        ((record.overview.chars().count() as f32) / (inner_width.max(1) as f32)).ceil() as u16;
    let popup_height = (overview_lines.max(1) + 6).min(area.height.saturating_sub(4));

    let popup_area = popup_rect(popup_width, popup_height, area);

    // Clear the area behind the popup first
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(Span::styled(
            record.meta_line(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(record.overview.clone()),
        Line::default(),
        Line::from(Span::styled(
            record.poster_url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1))
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", record.title))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .title_bottom(" Enter/Esc to close ")
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(detail, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    // Define keybindings organized by category
    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move selection / change filter"),
        ("← / →", "Change filter"),
        ("Enter", "Open detail / search now"),
        ("Esc", "Clear search / close overlay"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_width = 52;
    let popup_height = (keybindings.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_area = popup_rect(popup_width, popup_height, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^46}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>16}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
