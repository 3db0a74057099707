//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;

use anyhow::Result;

use crate::tasks::{storage::StorageError, Storage, TaskStore};
use crate::tui::board::Board;
use crate::tui::prompt::TextPrompt;

pub fn tasks(todo: &[&str], done: &[&str]) -> TaskStore {
    TaskStore {
        todo: todo.iter().map(|s| s.to_string()).collect(),
        done: done.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn board(todo: &[&str], done: &[&str]) -> Board {
    Board::new(tasks(todo, done))
}

/// Answers prompts from a fixed script; an exhausted script submits an
/// empty line.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            asked: 0,
        }
    }
}

impl TextPrompt for ScriptedPrompt {
    fn read_line(&mut self, _board: &Board) -> Result<String> {
        self.asked += 1;
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}

/// Keeps the last saved record in memory and counts writes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub record: Option<TaskStore>,
    pub saves: usize,
}

impl MemoryStorage {
    pub fn with(tasks: TaskStore) -> Self {
        Self {
            record: Some(tasks),
            saves: 0,
        }
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<TaskStore, StorageError> {
        Ok(self.record.clone().unwrap_or_default())
    }

    fn save(&mut self, tasks: &TaskStore) -> Result<(), StorageError> {
        self.record = Some(tasks.clone());
        self.saves += 1;
        Ok(())
    }
}
