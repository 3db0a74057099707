use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::tasks::ListKind;

use super::{
    board::Board,
    menu::{MenuAction, Mode},
};

const TITLE: &str = "TO-DO LIST APP";
const BROWSE_HINT: &str = "M: Menu, ←/→: Switch Lists, ↑/↓: Navigate";
const MENU_HINT: &str = "↑/↓: Navigate, Enter: Select, M: Exit Menu";
pub const ENTRY_LABEL: &str = "Enter task: ";

const BOLD: Style = Style::new().add_modifier(Modifier::BOLD);
const ACTIVE_HEADER_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::White)
    .add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
const MENU_TARGET_STYLE: Style = Style::new().fg(Color::Black).bg(Color::White);

/// Rows given to each list panel on a terminal `height` rows tall.
pub const fn visible_rows(height: u16) -> usize {
    height.saturating_sub(8) as usize
}

/// Window height used for cursor movement; never zero.
pub const fn list_window(height: u16) -> usize {
    let rows = visible_rows(height);
    if rows == 0 {
        1
    } else {
        rows
    }
}

/// One full frame: title, both list panels, the action menu and the status
/// line. All geometry comes from the area handed in, so a resize between
/// frames needs no bookkeeping.
pub struct Screen<'a> {
    board: &'a Board,
    mode: Mode,
}

impl<'a> Screen<'a> {
    pub const fn new(board: &'a Board, mode: Mode) -> Self {
        Self { board, mode }
    }

    fn render_list(&self, kind: ListKind, x: u16, area: Rect, buf: &mut Buffer) {
        let active = self.board.active == kind;
        let in_menu = self.mode.is_menu();
        let header_style = if active && !in_menu {
            ACTIVE_HEADER_STYLE
        } else {
            BOLD
        };
        put(buf, area, x, 2, &format!("{}:", kind.label()), header_style);

        let cursor = self.board.cursor(kind);
        let room = usize::from(area.width / 2).saturating_sub(6);
        let visible = self
            .board
            .tasks
            .list(kind)
            .iter()
            .enumerate()
            .skip(cursor.start)
            .take(visible_rows(area.height));
        for (row, (index, task)) in visible.enumerate() {
            let style = match (active && row == cursor.pos, in_menu) {
                (false, _) => Style::default(),
                (true, false) => SELECTED_STYLE,
                (true, true) => MENU_TARGET_STYLE,
            };
            let title: String = task.chars().take(room).collect();
            let y = 3 + row as u16;
            put(buf, area, x, y, &format!("{}. {title}", index + 1), style);
        }
    }

    fn render_menu(&self, area: Rect, buf: &mut Buffer) {
        let top = i32::from(area.height) - MenuAction::ALL.len() as i32 - 1;
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            let Ok(y) = u16::try_from(top + i as i32) else {
                continue;
            };
            let label = action.label();
            let x = (area.width / 2).saturating_sub(label.len() as u16 / 2);
            let style = if self.mode == (Mode::Menu { selected: *action }) {
                SELECTED_STYLE
            } else {
                Style::default()
            };
            put(buf, area, x, y, label, style);
        }
    }
}

impl Widget for Screen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        put(buf, area, (area.width / 2).saturating_sub(10), 0, TITLE, BOLD);
        self.render_list(ListKind::Todo, 2, area, buf);
        self.render_list(ListKind::Done, area.width / 2 + 2, area, buf);
        self.render_menu(area, buf);

        let hint = if self.mode.is_menu() {
            MENU_HINT
        } else {
            BROWSE_HINT
        };
        if let Some(y) = area.height.checked_sub(1) {
            put(buf, area, 2, y, hint, Style::default());
        }
    }
}

/// Draws the task entry line over the frame and returns where the terminal
/// cursor belongs.
pub fn render_entry(area: Rect, buf: &mut Buffer, text: &str) -> Option<Position> {
    let y = area.height.checked_sub(3)?;
    let row = Rect::new(area.x, area.y + y, area.width, 1);
    let blank = " ".repeat(usize::from(row.width));
    buf.set_stringn(row.x, row.y, blank, usize::from(row.width), Style::reset());
    put(buf, area, 2, y, ENTRY_LABEL, Style::default())?;
    let (x, y) = put(buf, area, 2 + ENTRY_LABEL.len() as u16, y, text, Style::default())
        .unwrap_or((area.right(), area.y + y));
    Some(Position::new(x.min(area.right().saturating_sub(1)), y))
}

/// Writes `text` at `(x, y)` relative to `area`, clipped to the area.
/// Returns the absolute position just past the text, or `None` when the
/// start point is off-screen.
fn put(
    buf: &mut Buffer,
    area: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) -> Option<(u16, u16)> {
    if x >= area.width || y >= area.height {
        return None;
    }
    let room = usize::from(area.width - x);
    Some(buf.set_stringn(area.x + x, area.y + y, text, room, style))
}
