use crate::tasks::{ListKind, TaskStore};

use super::cursor::ListCursor;

/// The task lists plus everything needed to point at one task: which list is
/// active and where each list's cursor sits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub tasks: TaskStore,
    pub active: ListKind,
    todo_cursor: ListCursor,
    done_cursor: ListCursor,
}

impl Board {
    pub fn new(tasks: TaskStore) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub const fn cursor(&self, kind: ListKind) -> &ListCursor {
        match kind {
            ListKind::Todo => &self.todo_cursor,
            ListKind::Done => &self.done_cursor,
        }
    }

    fn cursor_mut(&mut self, kind: ListKind) -> &mut ListCursor {
        match kind {
            ListKind::Todo => &mut self.todo_cursor,
            ListKind::Done => &mut self.done_cursor,
        }
    }

    /// Absolute index of the highlighted task in the active list, if any.
    pub fn selected(&self) -> Option<usize> {
        let index = self.cursor(self.active).index();
        (index < self.tasks.len(self.active)).then_some(index)
    }

    pub fn move_up(&mut self, window: usize) {
        let len = self.tasks.len(self.active);
        self.cursor_mut(self.active).move_up(len, window);
    }

    pub fn move_down(&mut self, window: usize) {
        let len = self.tasks.len(self.active);
        self.cursor_mut(self.active).move_down(len, window);
    }

    /// Re-clamps both cursors; bulk actions can shrink the inactive list too.
    pub fn reclamp(&mut self, window: usize) {
        let (todo, done) = (self.tasks.todo.len(), self.tasks.done.len());
        self.todo_cursor.clamp(todo, window);
        self.done_cursor.clamp(done, window);
    }

    #[cfg(test)]
    pub fn set_cursor(&mut self, kind: ListKind, cursor: ListCursor) {
        *self.cursor_mut(kind) = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board;

    #[test]
    fn cursors_move_independently() {
        let mut board = board(&["A", "B", "C"], &["X", "Y"]);
        board.move_down(5);
        board.move_down(5);
        board.active = ListKind::Done;
        board.move_down(5);

        assert_eq!(board.cursor(ListKind::Todo).index(), 2);
        assert_eq!(board.cursor(ListKind::Done).index(), 1);
        assert_eq!(board.selected(), Some(1));
    }

    #[test]
    fn nothing_selected_in_an_empty_list() {
        let mut board = board(&["A"], &[]);
        board.active = ListKind::Done;
        board.move_down(5);
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn reclamp_covers_the_inactive_list() {
        let mut board = board(&["A", "B", "C"], &[]);
        board.move_down(5);
        board.move_down(5);
        board.active = ListKind::Done;
        board.tasks.mark_all_done();
        board.reclamp(5);
        assert_eq!(*board.cursor(ListKind::Todo), ListCursor::default());
        assert_eq!(board.selected(), Some(0));
    }
}
