//! Single-column layout: input bar, result list, status line.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders};

use super::theme::{colors, INPUT_HEIGHT, LIST_CHROME, STATUS_HEIGHT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Rect,
    /// Outer rect of the list block, borders included.
    pub list_block: Rect,
    /// Rows available for items.
    pub list: Rect,
    pub status: Rect,
}

pub fn list_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::ELEVATED))
}

pub fn compute(area: Rect, max_rows: u16) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Max(max_rows.saturating_add(LIST_CHROME)),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);
    LayoutRegions {
        input: chunks[0],
        list_block: chunks[1],
        list: list_block("").inner(chunks[1]),
        status: chunks[2],
    }
}
