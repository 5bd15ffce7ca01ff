//! Keyboard focus across the fields of a form.

/// A focus move, reported so the parent can send `Blur` to the field that
/// lost focus and `Focus` to the one that gained it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub blurred: usize,
    pub focused: usize,
}

/// Tracks which of `len` fields holds focus. Moves wrap around.
#[derive(Debug, Clone)]
pub struct FocusRing {
    len: usize,
    focused: usize,
}

impl FocusRing {
    /// A ring over `len` fields, focused on the first. A ring of zero
    /// fields never moves.
    pub fn new(len: usize) -> Self {
        Self { len, focused: 0 }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == index
    }

    pub fn next(&mut self) -> Option<FocusChange> {
        self.move_to((self.focused + 1) % self.len.max(1))
    }

    pub fn prev(&mut self) -> Option<FocusChange> {
        let len = self.len.max(1);
        self.move_to((self.focused + len - 1) % len)
    }

    /// Focus `index`, clamped to the last field. `None` when focus stays
    /// where it was.
    pub fn focus(&mut self, index: usize) -> Option<FocusChange> {
        self.move_to(index.min(self.len.saturating_sub(1)))
    }

    fn move_to(&mut self, index: usize) -> Option<FocusChange> {
        if index == self.focused {
            return None;
        }
        let change = FocusChange {
            blurred: self.focused,
            focused: index,
        };
        self.focused = index;
        Some(change)
    }
}
