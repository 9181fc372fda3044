//! Searchable single-select: turns user gestures into select actions.
//!
//! [`SearchableSelect`] owns the items, a search index over their text and
//! the [`SelectState`]. Every gesture (typing, arrow keys, Enter, Escape,
//! pointer input) is expanded into a fixed sequence of [`SelectAction`]s
//! that is reduced on a copy of the state and swapped in whole.
//!
//! Contract violations (a cursor or filtered index out of range, repeated
//! indices) panic in debug builds. Release builds repair the state and log
//! a warning.

use tracing::{debug, trace, warn};

use crate::actions::{SelectAction, SelectDecision};
use crate::events::{SelectEvent, SelectKey};
use crate::reducer::reduce;
use crate::search::SearchIndex;
use crate::services::circular_clamp;
use crate::state::SelectState;

/// Projects an item onto the text that is searched.
pub type TextFn<T> = Box<dyn Fn(&T) -> String>;

/// Called with the committed item; decides what happens next.
pub type SelectHandler<T> = Box<dyn FnMut(&T) -> SelectDecision>;

/// Per-row flags for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemFlags {
    pub highlighted: bool,
    pub selected: bool,
}

/// What a gesture did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectResult {
    /// Nothing committed.
    None,
    /// Item at this index of the item list was committed.
    Selected(usize),
    /// Escape.
    Cancelled,
}

pub struct SearchableSelect<T> {
    items: Vec<T>,
    text_fn: TextFn<T>,
    index: SearchIndex,
    on_select: Option<SelectHandler<T>>,
    selected: Option<T>,
    state: SelectState,
}

impl<T> SearchableSelect<T> {
    pub fn new<F>(items: Vec<T>, text_fn: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        let index = SearchIndex::build(items.iter().map(&text_fn));
        let state = SelectState::new(items.len());
        Self {
            items,
            text_fn: Box::new(text_fn),
            index,
            on_select: None,
            selected: None,
            state,
        }
    }

    /// Install a handler that runs instead of the built-in reset on commit.
    pub fn with_on_select<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&T) -> SelectDecision + 'static,
    {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn with_selected(mut self, selected: T) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn set_selected(&mut self, selected: Option<T>) {
        self.selected = selected;
    }

    pub fn state(&self) -> &SelectState {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn highlighted(&self) -> usize {
        self.state.highlighted
    }

    /// Items that match the query, in ranking order.
    pub fn current_items(&self) -> Vec<&T> {
        self.state.filtered_indices.iter().map(|&i| &self.items[i]).collect()
    }

    pub fn highlighted_item(&self) -> Option<&T> {
        self.state.highlighted_item().map(|i| &self.items[i])
    }

    /// Swap in a new item list. The index is rebuilt and the query, cursor
    /// and filter start over; the open flag is kept.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.index = SearchIndex::build(items.iter().map(&self.text_fn));
        self.items = items;
        self.state = SelectState {
            open: self.state.open,
            ..SelectState::new(self.items.len())
        };
        debug!(items = self.index.len(), "item list replaced");
    }

    pub fn dispatch(&mut self, action: SelectAction) {
        self.dispatch_all(vec![action]);
    }

    /// Reduce `actions` in order and publish the result once.
    pub fn dispatch_all(&mut self, actions: Vec<SelectAction>) {
        let mut next = self.state.clone();
        for action in &actions {
            trace!(?action, "reduce");
            next = reduce(&next, action);
        }
        self.state = next;
        self.settle();
    }

    pub fn open(&mut self) {
        self.dispatch(SelectAction::Open);
    }

    pub fn close(&mut self) {
        self.dispatch(SelectAction::Close);
    }

    pub fn toggle(&mut self) {
        self.dispatch(SelectAction::Toggle);
    }

    /// Re-filter for `value`, keeping the cursor on the same item when it
    /// survives the new filter.
    pub fn input_changed(&mut self, value: &str) {
        let filtered = if value.is_empty() {
            (0..self.items.len()).collect()
        } else {
            self.index.search(value)
        };
        let highlighted = self
            .state
            .highlighted_item()
            .and_then(|prev| filtered.iter().position(|&i| i == prev))
            .unwrap_or(0);
        debug!(query = value, matches = filtered.len(), highlighted, "input changed");
        self.dispatch_all(vec![
            SelectAction::SetHighlighted(highlighted),
            SelectAction::SetFilteredIndices(filtered),
            SelectAction::SetQuery(value.to_string()),
        ]);
    }

    pub fn key(&mut self, key: SelectKey) -> SelectResult {
        match key {
            SelectKey::Enter => self.commit(self.state.highlighted),
            SelectKey::ArrowUp => {
                self.step(-1);
                SelectResult::None
            }
            SelectKey::ArrowDown => {
                self.step(1);
                SelectResult::None
            }
            SelectKey::Escape => {
                self.default_action();
                SelectResult::Cancelled
            }
            SelectKey::Other => SelectResult::None,
        }
    }

    /// Click on the input surface. Runs the same reset as a commit, which
    /// also closes the list.
    pub fn click_input(&mut self) {
        self.default_action();
    }

    pub fn item_enter(&mut self, position: usize) {
        self.dispatch(SelectAction::SetHighlighted(position));
    }

    pub fn item_click(&mut self, position: usize) -> SelectResult {
        self.commit(position)
    }

    pub fn handle_event(&mut self, event: SelectEvent) -> SelectResult {
        match event {
            SelectEvent::TextChanged(value) => self.input_changed(&value),
            SelectEvent::Key(key) => return self.key(key),
            SelectEvent::InputClicked => self.click_input(),
            SelectEvent::ItemEntered(position) => self.item_enter(position),
            SelectEvent::ItemClicked(position) => return self.item_click(position),
            SelectEvent::Open => self.open(),
            SelectEvent::Close => self.close(),
            SelectEvent::Toggle => self.toggle(),
        }
        SelectResult::None
    }

    fn step(&mut self, delta: i64) {
        let len = self.state.filtered_indices.len();
        if len == 0 {
            debug!("navigation ignored, no matches");
            return;
        }
        let next = circular_clamp(self.state.highlighted as i64 + delta, 0, len as i64 - 1);
        self.dispatch(SelectAction::SetHighlighted(next as usize));
    }

    fn commit(&mut self, position: usize) -> SelectResult {
        let Some(item_index) = self.state.item_at(position) else {
            debug!(position, "commit ignored, nothing at position");
            return SelectResult::None;
        };
        let decision = match self.on_select.as_mut() {
            Some(handler) => handler(&self.items[item_index]),
            None => SelectDecision::UseDefault,
        };
        debug!(item_index, ?decision, "item committed");
        match decision {
            SelectDecision::UseDefault => self.default_action(),
            SelectDecision::Suppress => {}
            SelectDecision::Dispatch(actions) => self.dispatch_all(actions),
        }
        SelectResult::Selected(item_index)
    }

    fn default_action(&mut self) {
        self.dispatch(SelectAction::ResetOnSelect {
            item_count: self.items.len(),
        });
    }

    fn settle(&mut self) {
        let item_count = self.items.len();
        if let Some(violation) = self.state.violation(item_count) {
            if cfg!(debug_assertions) {
                panic!("select contract violated: {}", violation);
            }
            warn!(%violation, "repairing select state");
            self.state.repair(item_count);
        }
    }
}

impl<T: PartialEq> SearchableSelect<T> {
    pub fn item_flags(&self, position: usize) -> ItemFlags {
        let selected = match (self.state.item_at(position), self.selected.as_ref()) {
            (Some(i), Some(sel)) => self.items[i] == *sel,
            _ => false,
        };
        ItemFlags {
            highlighted: position == self.state.highlighted,
            selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fruit() -> SearchableSelect<String> {
        let items = ["Apple", "Banana", "Cherry", "Grape", "Pineapple"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        SearchableSelect::new(items, |s: &String| s.clone())
    }

    #[test]
    fn test_initial_state() {
        let select = fruit();
        assert!(!select.is_open());
        assert_eq!(select.query(), "");
        assert_eq!(select.highlighted(), 0);
        assert_eq!(select.state().filtered_indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(select.current_items().len(), 5);
    }

    #[test]
    fn test_open_close_toggle() {
        let mut select = fruit();
        select.open();
        assert!(select.is_open());
        select.close();
        assert!(!select.is_open());
        select.toggle();
        assert!(select.is_open());
    }

    #[test]
    fn test_typing_filters_and_keeps_cursor() {
        let mut select = fruit();
        select.key(SelectKey::ArrowDown);
        select.key(SelectKey::ArrowDown);
        select.key(SelectKey::ArrowDown);
        assert_eq!(select.highlighted_item().map(String::as_str), Some("Grape"));

        select.input_changed("ap");
        assert_eq!(select.query(), "ap");
        assert!(!select.current_items().iter().any(|s| s.as_str() == "Banana"));
        assert_eq!(select.highlighted_item().map(String::as_str), Some("Grape"));
    }

    #[test]
    fn test_typing_falls_back_to_first_row() {
        let mut select = fruit();
        select.key(SelectKey::ArrowDown);
        assert_eq!(select.highlighted_item().map(String::as_str), Some("Banana"));

        select.input_changed("cher");
        assert_eq!(select.highlighted(), 0);
        assert_eq!(select.highlighted_item().map(String::as_str), Some("Cherry"));
    }

    #[test]
    fn test_no_matches_then_clear() {
        let mut select = fruit();
        select.input_changed("zzz");
        assert!(select.current_items().is_empty());
        assert_eq!(select.highlighted(), 0);
        assert_eq!(select.highlighted_item(), None);

        select.input_changed("");
        assert_eq!(select.state().filtered_indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(select.highlighted(), 0);
    }

    #[test]
    fn test_arrows_ignored_without_matches() {
        let mut select = fruit();
        select.input_changed("zzz");
        select.key(SelectKey::ArrowDown);
        select.key(SelectKey::ArrowUp);
        assert_eq!(select.highlighted(), 0);
    }

    #[test]
    fn test_wrap_around() {
        let mut select = fruit();
        select.key(SelectKey::ArrowUp);
        assert_eq!(select.highlighted(), 4);
        select.key(SelectKey::ArrowDown);
        assert_eq!(select.highlighted(), 0);
    }

    #[test]
    fn test_enter_without_handler_resets() {
        let mut select = fruit();
        select.open();
        select.input_changed("an");
        let picked = select.highlighted_item().cloned();
        let result = select.key(SelectKey::Enter);

        let index = select.items().iter().position(|s| Some(s) == picked.as_ref());
        assert_eq!(result, SelectResult::Selected(index.unwrap()));
        assert!(!select.is_open());
        assert_eq!(select.query(), "");
        assert_eq!(select.current_items().len(), 5);
    }

    #[test]
    fn test_enter_on_empty_matches_is_noop() {
        let mut select = fruit();
        select.open();
        select.input_changed("zzz");
        assert_eq!(select.key(SelectKey::Enter), SelectResult::None);
        assert!(select.is_open());
        assert_eq!(select.query(), "zzz");
    }

    #[test]
    fn test_handler_suppress_keeps_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut select = fruit().with_on_select(move |item: &String| {
            log.borrow_mut().push(item.clone());
            SelectDecision::Suppress
        });
        select.open();
        select.input_changed("cherry");
        let before = select.state().clone();

        assert_eq!(select.key(SelectKey::Enter), SelectResult::Selected(2));
        assert_eq!(select.state(), &before);
        assert_eq!(*seen.borrow(), vec!["Cherry".to_string()]);
    }

    #[test]
    fn test_handler_use_default() {
        let mut select = fruit().with_on_select(|_: &String| SelectDecision::UseDefault);
        select.open();
        select.item_click(1);
        assert!(!select.is_open());
    }

    #[test]
    fn test_handler_dispatch() {
        let mut select = fruit().with_on_select(|_: &String| {
            SelectDecision::Dispatch(vec![SelectAction::SetQuery("kept".into()), SelectAction::Close])
        });
        select.open();
        assert_eq!(select.item_click(3), SelectResult::Selected(3));
        assert!(!select.is_open());
        assert_eq!(select.query(), "kept");
        assert_eq!(select.current_items().len(), 5);
    }

    #[test]
    fn test_escape_ignores_handler() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut select = fruit().with_on_select(move |_: &String| {
            *counter.borrow_mut() += 1;
            SelectDecision::Suppress
        });
        select.open();
        select.input_changed("gr");
        assert_eq!(select.key(SelectKey::Escape), SelectResult::Cancelled);
        assert_eq!(*calls.borrow(), 0);
        assert!(!select.is_open());
        assert_eq!(select.query(), "");
    }

    #[test]
    fn test_click_input_closes() {
        let mut select = fruit();
        select.open();
        select.input_changed("ba");
        select.click_input();
        assert!(!select.is_open());
        assert_eq!(select.query(), "");
        assert_eq!(select.current_items().len(), 5);
    }

    #[test]
    fn test_pointer_enter_highlights() {
        let mut select = fruit();
        select.item_enter(3);
        let flags = select.item_flags(3);
        assert!(flags.highlighted);
        assert!(!select.item_flags(0).highlighted);
    }

    #[test]
    fn test_selected_flag() {
        let mut select = fruit().with_selected("Cherry".to_string());
        assert!(select.item_flags(2).selected);
        assert!(!select.item_flags(1).selected);

        select.input_changed("cherry");
        assert!(select.item_flags(0).selected);

        select.set_selected(None);
        assert!(!select.item_flags(0).selected);
        assert!(!select.item_flags(9).selected);
    }

    #[test]
    fn test_other_key_ignored() {
        let mut select = fruit();
        let before = select.state().clone();
        assert_eq!(select.key(SelectKey::Other), SelectResult::None);
        assert_eq!(select.state(), &before);
    }

    #[test]
    fn test_handle_event_routes() {
        let mut select = fruit();
        select.handle_event(SelectEvent::Open);
        select.handle_event(SelectEvent::TextChanged("pine".into()));
        assert_eq!(select.current_items()[0].as_str(), "Pineapple");
        let result = select.handle_event(SelectEvent::Key(SelectKey::Enter));
        assert_eq!(result, SelectResult::Selected(4));
        select.handle_event(SelectEvent::Toggle);
        assert!(select.is_open());
    }

    #[test]
    fn test_replace_items_resets() {
        let mut select = fruit();
        select.open();
        select.input_changed("ap");
        select.key(SelectKey::ArrowDown);

        select.replace_items(vec!["Kiwi".to_string(), "Lime".to_string()]);
        assert!(select.is_open());
        assert_eq!(select.query(), "");
        assert_eq!(select.highlighted(), 0);
        assert_eq!(select.state().filtered_indices, vec![0, 1]);

        select.input_changed("lim");
        assert_eq!(select.highlighted_item().map(String::as_str), Some("Lime"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "select contract violated")]
    fn test_out_of_range_highlight_panics_in_debug() {
        let mut select = fruit();
        select.dispatch(SelectAction::SetHighlighted(9));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_release_repairs_bad_dispatch() {
        let mut select = fruit();
        select.dispatch(SelectAction::SetFilteredIndices(vec![1, 9, 1, 0]));
        assert_eq!(select.state().filtered_indices, vec![1, 0]);
        select.dispatch(SelectAction::SetHighlighted(7));
        assert_eq!(select.highlighted(), 1);
        assert_eq!(select.state().violation(select.items().len()), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "appears twice")]
    fn test_duplicate_indices_panic_in_debug() {
        let mut select = fruit();
        select.dispatch(SelectAction::SetFilteredIndices(vec![1, 1]));
    }
}
