/// Scroll offset and in-window selection for one list.
///
/// `start` is the first visible index and `pos` the selected row inside the
/// visible window, so the selected task is `start + pos`. Every operation
/// saturates at the boundaries instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub start: usize,
    pub pos: usize,
}

impl ListCursor {
    /// Absolute index of the selected task.
    pub const fn index(&self) -> usize {
        self.start + self.pos
    }

    pub fn move_up(&mut self, len: usize, window: usize) {
        self.clamp(len, window);
        if self.pos > 0 {
            self.pos -= 1;
        } else if self.start > 0 {
            self.start -= 1;
        }
    }

    pub fn move_down(&mut self, len: usize, window: usize) {
        self.clamp(len, window);
        let window = window.max(1);
        let last_row = (window - 1).min(len.saturating_sub(self.start + 1));
        if self.pos < last_row {
            self.pos += 1;
        } else if self.start + window < len {
            self.start += 1;
        }
    }

    /// Fits the cursor to a list of `len` tasks shown `window` rows at a
    /// time: `start` stays within `0..=len - window` and the selected index
    /// is kept when it still exists, otherwise it falls back to the last task.
    pub fn clamp(&mut self, len: usize, window: usize) {
        if len == 0 {
            *self = Self::default();
            return;
        }
        let last_row = window.max(1) - 1;
        let index = self.index().min(len - 1);
        self.start = self.start.min(len.saturating_sub(last_row + 1));
        self.pos = index - self.start;
        if self.pos > last_row {
            self.start = index - last_row;
            self.pos = last_row;
        }
    }
}
