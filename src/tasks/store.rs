use serde::{Deserialize, Serialize};

/// Which of the two lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    #[default]
    Todo,
    Done,
}

impl ListKind {
    pub const fn other(self) -> Self {
        match self {
            ListKind::Todo => ListKind::Done,
            ListKind::Done => ListKind::Todo,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ListKind::Todo => "Todo",
            ListKind::Done => "Done",
        }
    }
}

/// The pending and completed task lists, in display order.
///
/// A task lives in exactly one of the two lists; moves take it out of one
/// list before pushing it onto the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStore {
    #[serde(default)]
    pub todo: Vec<String>,
    #[serde(default)]
    pub done: Vec<String>,
}

impl TaskStore {
    pub fn list(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Todo => &self.todo,
            ListKind::Done => &self.done,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Todo => &mut self.todo,
            ListKind::Done => &mut self.done,
        }
    }

    pub fn len(&self, kind: ListKind) -> usize {
        self.list(kind).len()
    }

    /// New tasks always go to the end of `todo`.
    pub fn add(&mut self, title: impl Into<String>) {
        self.todo.push(title.into());
    }

    /// Moves the task at `index` to the end of the other list.
    /// Returns `false` when there is no such task.
    pub fn toggle(&mut self, kind: ListKind, index: usize) -> bool {
        match self.remove(kind, index) {
            Some(task) => {
                self.list_mut(kind.other()).push(task);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, kind: ListKind, index: usize) -> Option<String> {
        let list = self.list_mut(kind);
        (index < list.len()).then(|| list.remove(index))
    }

    /// Returns how many tasks were discarded.
    pub fn clear_done(&mut self) -> usize {
        let cleared = self.done.len();
        self.done.clear();
        cleared
    }

    /// Appends every pending task to `done`, keeping their order.
    /// Returns how many tasks moved.
    pub fn mark_all_done(&mut self) -> usize {
        let moved = self.todo.len();
        self.done.append(&mut self.todo);
        moved
    }
}
