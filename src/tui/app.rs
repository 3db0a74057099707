use anyhow::{Context, Result};
use crossterm::event::Event;
use log::{debug, info};
use ratatui::{
    crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind},
    DefaultTerminal, Frame,
};

use crate::tasks::{ListKind, Storage};

use super::{
    board::Board,
    dispatch::{dispatch, Outcome},
    menu::Mode,
    prompt::{TerminalPrompt, TextPrompt},
    render::{list_window, Screen},
};

/// Keys the app reacts to; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    ToggleMenu,
    Up,
    Down,
    Left,
    Right,
    Confirm,
}

impl Command {
    fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('q' | 'Q') => Some(Command::Quit),
            KeyCode::Char('m' | 'M') => Some(Command::ToggleMenu),
            KeyCode::Up => Some(Command::Up),
            KeyCode::Down => Some(Command::Down),
            KeyCode::Left => Some(Command::Left),
            KeyCode::Right => Some(Command::Right),
            KeyCode::Enter => Some(Command::Confirm),
            _ => None,
        }
    }
}

pub struct App<S: Storage> {
    board: Board,
    mode: Mode,
    storage: S,
    exit: bool,
}

impl<S: Storage> App<S> {
    pub fn new(storage: S) -> Result<Self> {
        let tasks = storage.load().context("could not load tasks")?;
        Ok(Self {
            board: Board::new(tasks),
            mode: Mode::default(),
            storage,
            exit: false,
        })
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events(terminal)?;
        }
        info!("Leaving the main loop");
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        frame.render_widget(Screen::new(&self.board, self.mode), frame.area());
    }

    fn handle_events(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                let window = list_window(terminal.size()?.height);
                let mut prompt = TerminalPrompt::new(terminal, self.mode);
                self.handle_key_event(key_event, window, &mut prompt)
            }
            _ => Ok(()),
        }
    }

    /// Applies one key press, then writes the lists back to storage unless
    /// the key was ignored or ended the session.
    fn handle_key_event(
        &mut self,
        key_event: KeyEvent,
        window: usize,
        prompt: &mut impl TextPrompt,
    ) -> Result<()> {
        let Some(command) = Command::from_key(key_event.code) else {
            return Ok(());
        };
        debug!("{command:?} in {:?}", self.mode);

        match (command, self.mode.is_menu()) {
            (Command::Quit, _) => self.exit = true,
            (Command::ToggleMenu, _) => self.mode = self.mode.toggle(),
            (Command::Up, true) => self.mode = self.mode.menu_up(),
            (Command::Down, true) => self.mode = self.mode.menu_down(),
            (Command::Up, false) => self.board.move_up(window),
            (Command::Down, false) => self.board.move_down(window),
            (Command::Left, false) => self.board.active = ListKind::Todo,
            (Command::Right, false) => self.board.active = ListKind::Done,
            (Command::Confirm, true) => {
                let outcome = dispatch(self.mode.selection(), &mut self.board, window, prompt)?;
                if outcome == Outcome::Quit {
                    self.exit = true;
                } else {
                    self.mode = self.mode.close();
                }
            }
            (Command::Left | Command::Right, true) | (Command::Confirm, false) => {}
        }

        if self.exit {
            return Ok(());
        }
        self.storage
            .save(&self.board.tasks)
            .context("could not save tasks")
    }
}
