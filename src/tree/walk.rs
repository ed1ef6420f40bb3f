use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::classify::classify;
use super::{EntryType, TreeConfig, TreeEntry};
use crate::history::{EndStateHistory, MAX_DEPTH};

/// Lazy, depth-first, pre-order walk below a root directory.
///
/// The root itself is never yielded. Each directory is listed only when the
/// walk first needs its children, and the listing handle is closed before
/// any child is yielded, so dropping the iterator early leaves nothing open.
pub struct Traversal {
    stack: Vec<Frame>,
    /// Directory whose children are listed on the next call to `next`.
    pending: Option<(PathBuf, EndStateHistory)>,
    config: TreeConfig,
}

/// Remaining children of one directory level.
struct Frame {
    children: std::vec::IntoIter<DirEntry>,
    history: EndStateHistory,
}

impl Traversal {
    pub fn new(root: &Path, config: TreeConfig) -> Self {
        Self {
            stack: Vec::new(),
            pending: Some((root.to_path_buf(), EndStateHistory::new())),
            config: TreeConfig {
                max_depth: config.max_depth.min(MAX_DEPTH),
                ..config
            },
        }
    }
}

impl Iterator for Traversal {
    type Item = TreeEntry;

    fn next(&mut self) -> Option<TreeEntry> {
        if let Some((dir, history)) = self.pending.take() {
            if let Some(children) = list_children(&dir, self.config.reverse) {
                self.stack.push(Frame {
                    children: children.into_iter(),
                    history,
                });
            }
        }

        loop {
            let frame = self.stack.last_mut()?;
            let Some(child) = frame.children.next() else {
                self.stack.pop();
                continue;
            };
            let is_last = frame.children.len() == 0;
            let history = match frame.history.child(is_last) {
                Ok(history) => history,
                Err(err) => {
                    // Unreachable while max_depth <= MAX_DEPTH; stop this level.
                    debug!(path = %child.path().display(), "not descending: {err}");
                    self.stack.pop();
                    continue;
                }
            };

            let entry_type = classify(&child);
            let name = child.file_name().to_string_lossy().into_owned();
            let path = child.into_path();

            if entry_type == EntryType::Directory {
                if history.len() < self.config.max_depth {
                    self.pending = Some((path.clone(), history));
                } else {
                    debug!(path = %path.display(), depth = history.len(), "depth limit reached");
                }
            }

            return Some(TreeEntry {
                name,
                path,
                entry_type,
                history,
            });
        }
    }
}

/// List the visible children of `dir`, sorted by name.
///
/// Hidden entries (leading `.`) are dropped before anything else sees them.
/// Returns `None`, after logging, when the directory cannot be read.
fn list_children(dir: &Path, reverse: bool) -> Option<Vec<DirEntry>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by(move |a, b| {
            let ord = a.file_name().cmp(b.file_name());
            if reverse {
                ord.reverse()
            } else {
                ord
            }
        });

    let mut children = Vec::new();
    for result in walker {
        match result {
            Ok(entry) => {
                if !is_hidden(&entry) {
                    children.push(entry);
                }
            }
            Err(err) => {
                let reason = match err.io_error() {
                    Some(io_err) => io_err.to_string(),
                    None => err.to_string(),
                };
                warn!(path = %dir.display(), "cannot list directory: {reason}");
                return None;
            }
        }
    }
    Some(children)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Walk `root` with the given options.
pub fn walk_tree(root: &Path, config: &TreeConfig) -> Traversal {
    Traversal::new(root, *config)
}

/// Walk `root` in ascending name order.
pub fn traverse(root: &Path) -> Traversal {
    walk_tree(root, &TreeConfig::default())
}

/// Walk `root` in descending name order.
pub fn reverse_traverse(root: &Path) -> Traversal {
    walk_tree(
        root,
        &TreeConfig {
            reverse: true,
            ..TreeConfig::default()
        },
    )
}
