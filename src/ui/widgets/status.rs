//! Status bar: match counter + shortcuts.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

pub fn render(
    f: &mut Frame,
    area: ratatui::prelude::Rect,
    matches: usize,
    total: usize,
    picks: usize,
) {
    let left = if picks > 0 {
        format!(" {}/{}  picked {}", matches, total, picks)
    } else {
        format!(" {}/{}", matches, total)
    };
    let right = " ↑↓ move  Enter pick  Tab toggle  Esc cancel ";
    let pad = (area.width as usize).saturating_sub(left.chars().count() + right.chars().count());
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
