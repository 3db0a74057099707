pub mod storage;
pub mod store;

pub use storage::{JsonFile, Storage};
pub use store::{ListKind, TaskStore};
