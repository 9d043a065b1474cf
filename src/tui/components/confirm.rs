//! Delete confirmation overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Calculate a centered popup area with fixed dimensions.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Render the blocking yes/no gate shown before a role is deleted.
/// Input handling lives in the activity; this only draws.
pub fn render_confirm(frame: &mut Frame, role_name: &str) {
    let area = popup_area(frame.area(), 46, 5);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete role ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = if role_name.is_empty() {
        "this role".to_string()
    } else {
        format!("\"{role_name}\"")
    };
    let lines = vec![
        Line::from(format!("Are you sure you want to delete {label}?")),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": delete   "),
            Span::styled("n/Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": keep it"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
