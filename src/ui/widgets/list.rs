//! Result list: accent bar on the highlighted row, matched chars in accent.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::search::match_positions;
use crate::ui::layout::{list_block, LayoutRegions};
use crate::ui::theme::{colors, HIGHLIGHT_BAR, SELECTED_MARK};

fn item_spans<'a>(text: &'a str, query: &str, highlighted: bool) -> Vec<Span<'a>> {
    let base = if highlighted {
        Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_DIM)
    };
    let hit = base.fg(colors::ACCENT);
    let positions = match_positions(text, query);
    if positions.is_empty() {
        return vec![Span::styled(text, base)];
    }
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let style = if positions.binary_search(&i).is_ok() { hit } else { base };
            Span::styled(c.to_string(), style)
        })
        .collect()
}

pub fn render(f: &mut Frame, app: &App, regions: LayoutRegions) {
    let select = &app.select;
    let block = list_block("  Results  ");
    f.render_widget(block, regions.list_block);

    let rows = regions.list.height as usize;
    let top = app.list_top(rows);
    let lines: Vec<Line> = select
        .current_items()
        .into_iter()
        .enumerate()
        .skip(top)
        .take(rows)
        .map(|(position, item)| {
            let flags = select.item_flags(position);
            let mut spans = vec![Span::styled(
                if flags.highlighted { HIGHLIGHT_BAR } else { "  " },
                Style::default().fg(colors::ACCENT),
            )];
            spans.extend(item_spans(item, select.query(), flags.highlighted));
            if flags.selected {
                spans.push(Span::styled(SELECTED_MARK, Style::default().fg(colors::SELECTED)));
            }
            let line = Line::from(spans);
            if flags.highlighted {
                line.style(Style::default().bg(colors::ACCENT_GLOW))
            } else {
                line
            }
        })
        .collect();
    f.render_widget(Paragraph::new(lines), regions.list);
}
