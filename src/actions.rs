//! Select actions and select-handler decisions.

/// Primitive transitions of the select state. Each one is applied whole by
/// [`crate::reducer::reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectAction {
    Open,
    Close,
    Toggle,
    /// Replace the filtered index list. The highlight is left alone.
    SetFilteredIndices(Vec<usize>),
    SetQuery(String),
    /// Move the cursor to a position within the filtered list.
    SetHighlighted(usize),
    /// Close, clear the query and restore `0..item_count`. Keeps the highlight.
    ResetOnSelect { item_count: usize },
}

/// What a select handler wants done after an item is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectDecision {
    /// Run the built-in reset (`ResetOnSelect` over the whole list).
    UseDefault,
    /// Leave the state untouched.
    Suppress,
    /// Apply these actions instead of the default, in order.
    Dispatch(Vec<SelectAction>),
}
