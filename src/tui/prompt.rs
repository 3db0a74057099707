use anyhow::Result;
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal,
};

use super::{
    board::Board,
    menu::Mode,
    render::{render_entry, Screen},
};

/// Longest task title the entry line accepts.
pub const MAX_TITLE_LEN: usize = 50;

/// Blocking single-line text entry.
pub trait TextPrompt {
    /// Returns once the user submits; `board` is what the prompt is drawn
    /// over while typing.
    fn read_line(&mut self, board: &Board) -> Result<String>;
}

/// Entry line drawn on top of the normal frame, with the terminal cursor
/// shown while typing and hidden again once the line is submitted.
pub struct TerminalPrompt<'a> {
    terminal: &'a mut DefaultTerminal,
    mode: Mode,
}

impl<'a> TerminalPrompt<'a> {
    pub fn new(terminal: &'a mut DefaultTerminal, mode: Mode) -> Self {
        Self { terminal, mode }
    }
}

impl TextPrompt for TerminalPrompt<'_> {
    fn read_line(&mut self, board: &Board) -> Result<String> {
        let mode = self.mode;
        let mut line = String::new();
        loop {
            self.terminal.draw(|frame| {
                let area = frame.area();
                frame.render_widget(Screen::new(board, mode), area);
                if let Some(cursor) = render_entry(area, frame.buffer_mut(), &line) {
                    frame.set_cursor_position(cursor);
                }
            })?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if edit_line(&mut line, key) {
                        return Ok(line);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Applies one key press to the line being typed. Returns `true` once the
/// line is submitted. Control and Alt chords are not text and are dropped.
fn edit_line(line: &mut String, key: KeyEvent) -> bool {
    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
    match key.code {
        KeyCode::Enter => return true,
        KeyCode::Backspace => {
            line.pop();
        }
        KeyCode::Char(c) if plain && line.chars().count() < MAX_TITLE_LEN => line.push(c),
        _ => {}
    }
    false
}
