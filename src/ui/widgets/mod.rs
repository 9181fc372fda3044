//! TUI widgets: input bar, result list, status.

mod input;
mod list;
mod status;

pub use input::render as render_input;
pub use list::render as render_list;
pub use status::render as render_status;
