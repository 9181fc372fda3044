//! Searchable single-select: fuzzy filtering, cursor navigation and
//! commit handling, plus the terminal picker built on top of it.

pub mod actions;
pub mod app;
pub mod config;
pub mod events;
pub mod reducer;
pub mod search;
pub mod select;
pub mod services;
pub mod state;
pub mod ui;

pub use actions::{SelectAction, SelectDecision};
pub use events::{SelectEvent, SelectKey};
pub use reducer::reduce;
pub use search::SearchIndex;
pub use select::{ItemFlags, SearchableSelect, SelectResult};
pub use state::SelectState;
