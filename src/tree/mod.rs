//! Directory walking, entry classification, and the per-entry record the
//! walk yields.

mod classify;
pub(crate) mod walk;

use std::path::PathBuf;

use crate::error::TreeError;
use crate::history::EndStateHistory;

pub use classify::{classify, FsNode};
pub use walk::{reverse_traverse, traverse, walk_tree, Traversal};

/// Kind of a filesystem entry, as shown in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Directory,
    File,
    Executable,
    Symlink,
}

impl EntryType {
    /// Stable numeric code (Directory=1, File=2, Executable=3, Symlink=4).
    ///
    /// The walk never needs it; it exists for library callers that store or
    /// exchange entry types as integers. [`EntryType::try_from`] is the
    /// inverse and rejects unknown codes with
    /// [`TreeError::InvalidEntryType`].
    pub fn code(self) -> u8 {
        match self {
            EntryType::Directory => 1,
            EntryType::File => 2,
            EntryType::Executable => 3,
            EntryType::Symlink => 4,
        }
    }
}

impl TryFrom<u8> for EntryType {
    type Error = TreeError;

    fn try_from(code: u8) -> Result<Self, TreeError> {
        match code {
            1 => Ok(EntryType::Directory),
            2 => Ok(EntryType::File),
            3 => Ok(EntryType::Executable),
            4 => Ok(EntryType::Symlink),
            other => Err(TreeError::InvalidEntryType(other)),
        }
    }
}

/// A single entry produced by a directory walk.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    /// Display name (filename component only).
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    /// Classification of the entry.
    pub entry_type: EntryType,
    /// End states from the walk root down to this entry.
    pub history: EndStateHistory,
}

impl TreeEntry {
    /// Nesting depth (1 = direct child of the walk root).
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Whether this is the last sibling in its parent group.
    pub fn is_last(&self) -> bool {
        self.history.is_last().unwrap_or(true)
    }
}

/// Options that shape a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Deepest level that is listed; directories at this level are not
    /// expanded. Clamped to [`MAX_DEPTH`](crate::history::MAX_DEPTH).
    pub max_depth: usize,
    /// Sort every directory in descending name order.
    pub reverse: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: crate::history::MAX_DEPTH,
            reverse: false,
        }
    }
}
