//! Full-frame render: input bar, result list, status line.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::widgets::{render_input, render_list, render_status};

/// Draw the picker and return the regions used, for mouse hit-testing.
pub fn render(f: &mut Frame, app: &App) -> layout::LayoutRegions {
    let regions = layout::compute(f.area(), app.max_rows);
    let select = &app.select;

    render_input(f, &app.prompt, select.query(), regions.input);
    if select.is_open() {
        render_list(f, app, regions);
    }
    render_status(
        f,
        regions.status,
        select.state().filtered_indices.len(),
        select.items().len(),
        app.picks.len(),
    );
    regions
}
