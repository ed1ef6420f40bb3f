#![forbid(unsafe_code)]
//! gdtree: pretty-printed directory trees with plain or fancy box drawing.

pub mod cli;
pub mod error;
pub mod history;
pub mod output;
pub mod render;
pub mod settings;
pub mod tree;

pub use error::{Result, TreeError};
pub use history::{EndStateHistory, MAX_DEPTH};
pub use settings::Settings;
pub use tree::{EntryType, TreeEntry};
