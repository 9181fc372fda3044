//! Select state: open flag, query, cursor and filtered indices.

/// State of one searchable select.
///
/// `highlighted` is a position in `filtered_indices`, not an item index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectState {
    pub open: bool,
    pub query: String,
    pub highlighted: usize,
    /// Indices into the item list that match `query`, best match first.
    pub filtered_indices: Vec<usize>,
}

impl SelectState {
    /// Closed, empty query, cursor on the first row, every item visible.
    pub fn new(item_count: usize) -> Self {
        Self {
            open: false,
            query: String::new(),
            highlighted: 0,
            filtered_indices: (0..item_count).collect(),
        }
    }

    /// Item index under the cursor, if the cursor resolves.
    pub fn highlighted_item(&self) -> Option<usize> {
        self.filtered_indices.get(self.highlighted).copied()
    }

    /// Item index shown at a filtered position.
    pub fn item_at(&self, position: usize) -> Option<usize> {
        self.filtered_indices.get(position).copied()
    }

    /// First broken invariant for a list of `item_count` items, if any.
    pub fn violation(&self, item_count: usize) -> Option<String> {
        let mut seen = vec![false; item_count];
        for &i in &self.filtered_indices {
            if i >= item_count {
                return Some(format!("filtered index {} out of range 0..{}", i, item_count));
            }
            if seen[i] {
                return Some(format!("filtered index {} appears twice", i));
            }
            seen[i] = true;
        }
        if !self.filtered_indices.is_empty() && self.highlighted >= self.filtered_indices.len() {
            return Some(format!(
                "highlighted {} out of range 0..{}",
                self.highlighted,
                self.filtered_indices.len()
            ));
        }
        None
    }

    /// Drop invalid and repeated indices, then clamp the cursor.
    pub fn repair(&mut self, item_count: usize) {
        let mut seen = vec![false; item_count];
        self.filtered_indices.retain(|&i| {
            if i >= item_count || seen[i] {
                return false;
            }
            seen[i] = true;
            true
        });
        self.highlighted = self.highlighted.min(self.filtered_indices.len().saturating_sub(1));
    }
}
