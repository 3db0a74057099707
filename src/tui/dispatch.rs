use anyhow::Result;
use log::debug;

use super::{board::Board, menu::MenuAction, prompt::TextPrompt};

/// What running a menu action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The task lists changed.
    Applied,
    /// Nothing to act on; the lists are untouched.
    Unchanged,
    /// The session should end.
    Quit,
}

impl Outcome {
    fn from_changed(changed: bool) -> Self {
        if changed {
            Outcome::Applied
        } else {
            Outcome::Unchanged
        }
    }
}

/// Runs `action` against the active list and its selected task, then pulls
/// both cursors back inside their lists as shown `window` rows at a time.
pub fn dispatch(
    action: MenuAction,
    board: &mut Board,
    window: usize,
    prompt: &mut impl TextPrompt,
) -> Result<Outcome> {
    let active = board.active;
    let outcome = match action {
        MenuAction::AddTask => {
            let line = prompt.read_line(board)?;
            let title = line.trim();
            if !title.is_empty() {
                board.tasks.add(title);
            }
            Outcome::from_changed(!title.is_empty())
        }
        MenuAction::ToggleDone => Outcome::from_changed(
            board
                .selected()
                .is_some_and(|index| board.tasks.toggle(active, index)),
        ),
        MenuAction::DeleteTask => Outcome::from_changed(
            board
                .selected()
                .and_then(|index| board.tasks.remove(active, index))
                .is_some(),
        ),
        MenuAction::ClearDone => Outcome::from_changed(board.tasks.clear_done() > 0),
        MenuAction::MarkAllDone => Outcome::from_changed(board.tasks.mark_all_done() > 0),
        MenuAction::Quit => Outcome::Quit,
    };
    board.reclamp(window);
    debug!("{} on {}: {outcome:?}", action.label(), active.label());
    Ok(outcome)
}
