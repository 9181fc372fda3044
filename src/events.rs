//! Input events: symbolic keys, select events, and terminal key/mouse mapping.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

/// Keys the select reacts to. Anything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectKey {
    Enter,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

impl SelectKey {
    /// Parse a DOM-style key name (`"Enter"`, `"ArrowUp"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => SelectKey::Enter,
            "ArrowUp" => SelectKey::ArrowUp,
            "ArrowDown" => SelectKey::ArrowDown,
            "Escape" => SelectKey::Escape,
            _ => SelectKey::Other,
        }
    }
}

/// Everything a host can feed into a select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectEvent {
    /// New full value of the text input.
    TextChanged(String),
    Key(SelectKey),
    InputClicked,
    /// Pointer entered the row at this filtered position.
    ItemEntered(usize),
    ItemClicked(usize),
    Open,
    Close,
    Toggle,
}

/// Picker-level events: select input plus quitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    Quit,
    Select(SelectEvent),
}

impl From<SelectEvent> for PickerEvent {
    fn from(event: SelectEvent) -> Self {
        PickerEvent::Select(event)
    }
}

/// Map a terminal key press, given the current query, to a picker event.
pub fn key_to_event(event: &KeyEvent, query: &str) -> Option<PickerEvent> {
    // Accept Press and Repeat; ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if mods.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(PickerEvent::Quit),
            KeyCode::Char('u') => Some(SelectEvent::TextChanged(String::new()).into()),
            KeyCode::Char('n') => Some(SelectEvent::Key(SelectKey::ArrowDown).into()),
            KeyCode::Char('p') => Some(SelectEvent::Key(SelectKey::ArrowUp).into()),
            _ => None,
        };
    }

    let event = match code {
        KeyCode::Enter => SelectEvent::Key(SelectKey::Enter),
        KeyCode::Up => SelectEvent::Key(SelectKey::ArrowUp),
        KeyCode::Down => SelectEvent::Key(SelectKey::ArrowDown),
        KeyCode::Esc => SelectEvent::Key(SelectKey::Escape),
        KeyCode::Tab => SelectEvent::Toggle,
        KeyCode::Backspace => {
            let mut chars = query.chars();
            chars.next_back()?;
            SelectEvent::TextChanged(chars.as_str().to_string())
        }
        // Alt stays allowed for accented characters.
        KeyCode::Char(c) if !mods.contains(KeyModifiers::SUPER) => {
            SelectEvent::TextChanged(format!("{}{}", query, c))
        }
        _ => return None,
    };
    Some(event.into())
}

/// Map a mouse event onto the input bar or a list row.
///
/// `top` is the filtered position shown on the first row of `list` and
/// `shown` the number of rows actually drawn.
pub fn mouse_to_event(
    event: &MouseEvent,
    input: Rect,
    list: Rect,
    top: usize,
    shown: usize,
) -> Option<PickerEvent> {
    let (x, y) = (event.column, event.row);
    let inside = |r: Rect| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height;

    if inside(input) {
        return match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(SelectEvent::InputClicked.into()),
            _ => None,
        };
    }
    if !inside(list) {
        return None;
    }
    let row = (y - list.y) as usize;
    if row >= shown {
        return None;
    }
    let position = top + row;
    match event.kind {
        MouseEventKind::Moved => Some(SelectEvent::ItemEntered(position).into()),
        MouseEventKind::Down(MouseButton::Left) => Some(SelectEvent::ItemClicked(position).into()),
        _ => None,
    }
}
