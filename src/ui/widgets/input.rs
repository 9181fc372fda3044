//! Input bar: prompt, query and cursor.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

/// Column of the cursor, pinned to the last cell of `inner`.
fn cursor_x(inner: Rect, prompt: &str, query: &str) -> u16 {
    let offset = u16::try_from(prompt.chars().count() + query.chars().count()).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(offset)
        .min(inner.x.saturating_add(inner.width.saturating_sub(1)))
}

pub fn render(f: &mut Frame, prompt: &str, query: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(query, Style::default().fg(colors::TEXT)),
    ]);
    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(line), inner);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let x = cursor_x(inner, prompt, query);
    f.set_cursor_position(Position { x, y: inner.y });
}
