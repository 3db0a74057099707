/// Entries of the action menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuAction {
    #[default]
    AddTask,
    ToggleDone,
    DeleteTask,
    ClearDone,
    MarkAllDone,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::AddTask,
        MenuAction::ToggleDone,
        MenuAction::DeleteTask,
        MenuAction::ClearDone,
        MenuAction::MarkAllDone,
        MenuAction::Quit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MenuAction::AddTask => "Add Task",
            MenuAction::ToggleDone => "Mark Done/Not Done",
            MenuAction::DeleteTask => "Delete Task",
            MenuAction::ClearDone => "Clear Done",
            MenuAction::MarkAllDone => "Mark All Done",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// How Up, Down and Enter are interpreted.
///
/// Both states carry the menu selection so closing and reopening the menu
/// lands on the entry that was highlighted last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Arrow keys move through the active list and switch lists.
    Browsing { menu: MenuAction },
    /// Up and Down cycle the menu, Enter runs the selected action.
    Menu { selected: MenuAction },
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Browsing {
            menu: MenuAction::default(),
        }
    }
}

impl Mode {
    pub const fn is_menu(self) -> bool {
        matches!(self, Mode::Menu { .. })
    }

    pub const fn selection(self) -> MenuAction {
        match self {
            Mode::Browsing { menu } => menu,
            Mode::Menu { selected } => selected,
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Mode::Browsing { menu } => Mode::Menu { selected: menu },
            Mode::Menu { selected } => Mode::Browsing { menu: selected },
        }
    }

    pub const fn close(self) -> Self {
        Mode::Browsing {
            menu: self.selection(),
        }
    }

    /// Moves the menu highlight; outside the menu this is a no-op.
    pub fn menu_up(self) -> Self {
        match self {
            Mode::Menu { selected } => Mode::Menu {
                selected: selected.prev(),
            },
            browsing => browsing,
        }
    }

    pub fn menu_down(self) -> Self {
        match self {
            Mode::Menu { selected } => Mode::Menu {
                selected: selected.next(),
            },
            browsing => browsing,
        }
    }
}
