//! Picker state container and event dispatch.

use serde::Serialize;
use tracing::debug;

use crate::actions::SelectDecision;
use crate::config::PickerConfig;
use crate::events::{PickerEvent, SelectEvent, SelectKey};
use crate::select::{SearchableSelect, SelectResult};
use crate::services::visible_window;

/// One committed item, as printed on exit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Pick {
    pub index: usize,
    pub item: String,
}

pub struct App {
    pub select: SearchableSelect<String>,
    pub prompt: String,
    pub max_rows: u16,
    pub picks: Vec<Pick>,
    pub should_quit: bool,
    pub cancelled: bool,
    keep_open: bool,
}

impl App {
    pub fn new(items: Vec<String>, config: &PickerConfig) -> Self {
        let mut select = SearchableSelect::new(items, |s: &String| s.clone());
        if config.keep_open {
            select = select.with_on_select(|item: &String| {
                debug!(%item, "pick recorded, staying open");
                SelectDecision::Suppress
            });
        }
        if let Some(selected) = &config.selected {
            select = select.with_selected(selected.clone());
        }
        select.open();
        Self {
            select,
            prompt: config.prompt.clone(),
            max_rows: config.max_rows,
            picks: Vec::new(),
            should_quit: false,
            cancelled: false,
            keep_open: config.keep_open,
        }
    }

    pub fn dispatch(&mut self, event: PickerEvent) {
        let event = match event {
            PickerEvent::Quit => {
                self.should_quit = true;
                self.cancelled = self.picks.is_empty();
                return;
            }
            PickerEvent::Select(event) => event,
        };

        // Typing or navigating into a closed list brings it back.
        let reopens = matches!(
            event,
            SelectEvent::TextChanged(_)
                | SelectEvent::Key(SelectKey::ArrowUp)
                | SelectEvent::Key(SelectKey::ArrowDown)
        );
        if reopens && !self.select.is_open() {
            self.select.open();
        }

        match self.select.handle_event(event) {
            SelectResult::Selected(index) => {
                let item = self.select.items()[index].clone();
                self.picks.push(Pick { index, item });
                if !self.keep_open {
                    self.should_quit = true;
                }
            }
            SelectResult::Cancelled => {
                self.should_quit = true;
                self.cancelled = self.picks.is_empty();
            }
            SelectResult::None => {}
        }
    }

    /// Filtered position shown on the first list row.
    pub fn list_top(&self, rows: usize) -> usize {
        visible_window(
            self.select.highlighted(),
            rows,
            self.select.state().filtered_indices.len(),
        )
    }
}
