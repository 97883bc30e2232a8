// Utils compartidos

pub mod constants;
pub mod files;
pub mod format;
pub mod storage;

pub use constants::*;
pub use format::*;
pub use storage::{BrowserStorage, KeyValueStore};
