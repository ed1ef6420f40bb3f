#![allow(dead_code)]

use gdtree::tree::{walk_tree, TreeConfig};
use gdtree::TreeEntry;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Walk with default options and collect every entry.
pub fn collect(root: &Path) -> Vec<TreeEntry> {
    walk_tree(root, &TreeConfig::default()).collect()
}

/// Walk with the given options and collect every entry.
pub fn collect_with(root: &Path, config: TreeConfig) -> Vec<TreeEntry> {
    walk_tree(root, &config).collect()
}

/// Names of all entries, in walk order.
pub fn names(entries: &[TreeEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

/// Build a chain of `depth` nested directories `d0/d1/...` under `root`
/// and return the deepest one.
pub fn nested_dirs(root: &Path, depth: usize) -> std::path::PathBuf {
    let mut path = root.to_path_buf();
    for i in 0..depth {
        path = path.join(format!("d{i}"));
    }
    fs::create_dir_all(&path).unwrap();
    path
}
