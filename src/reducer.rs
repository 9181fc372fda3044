//! Pure transition function for the select state.

use crate::actions::SelectAction;
use crate::state::SelectState;

/// Apply one action and return the next state.
///
/// Total and side-effect free. No bounds are enforced here: keeping the
/// cursor valid across `SetFilteredIndices` is the job of the caller that
/// composes actions per gesture.
pub fn reduce(state: &SelectState, action: &SelectAction) -> SelectState {
    let mut next = state.clone();
    match action {
        SelectAction::Open => next.open = true,
        SelectAction::Close => next.open = false,
        SelectAction::Toggle => next.open = !state.open,
        SelectAction::SetFilteredIndices(indices) => next.filtered_indices = indices.clone(),
        SelectAction::SetQuery(text) => next.query = text.clone(),
        SelectAction::SetHighlighted(index) => next.highlighted = *index,
        SelectAction::ResetOnSelect { item_count } => {
            next.open = false;
            next.query.clear();
            next.filtered_indices = (0..*item_count).collect();
        }
    }
    next
}
