//! Cursor over a list whose length is owned by the caller.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(index: usize) -> Self {
        Self {
            selected: Some(index),
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Moves down one item, stopping at the last one.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves up one item, stopping at the first one.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    /// Moves forward, wrapping from the last item to the first.
    pub fn cycle_forward(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
    }

    /// Moves backward, wrapping from the first item to the last.
    pub fn cycle_backward(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(idx) => (idx - 1).min(len - 1),
        });
    }

    pub fn select_first_if_empty(&mut self, len: usize) {
        if self.selected.is_none() && len > 0 {
            self.selected = Some(0);
        }
    }

    /// Keeps the cursor inside `0..len` after the list was replaced.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.selected {
            if len == 0 {
                self.selected = None;
            } else if idx >= len {
                self.selected = Some(len - 1);
            }
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_end() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_prev_on_empty_list_clears() {
        let mut selection = SelectionState::at(3);
        selection.prev(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut selection = SelectionState::at(2);
        selection.cycle_forward(3);
        assert_eq!(selection.get(), Some(0));
        selection.cycle_backward(3);
        assert_eq!(selection.get(), Some(2));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut selection = SelectionState::at(5);
        selection.clamp(3);
        assert_eq!(selection.get(), Some(2));
        selection.clamp(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_select_first_if_empty() {
        let mut selection = SelectionState::new();
        selection.select_first_if_empty(0);
        assert_eq!(selection.get(), None);
        selection.select_first_if_empty(4);
        assert_eq!(selection.get(), Some(0));
        selection.set(Some(2));
        selection.select_first_if_empty(4);
        assert!(selection.is_selected(2));
    }
}
