//! Assembles full tree listings: root line, one line per entry, and the
//! directory/file summary.

use std::fmt;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use crate::render::{line_builder, render_entry, root_line, RenderConfig};
use crate::tree::{walk_tree, EntryType, TreeConfig};

/// Running totals printed after the tree.
///
/// Files and executables share the file bucket. Symlinks are never followed
/// and are counted in neither bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub directories: usize,
    pub files: usize,
}

impl Counts {
    pub fn record(&mut self, entry_type: EntryType) {
        match entry_type {
            EntryType::Directory => self.directories += 1,
            EntryType::File | EntryType::Executable => self.files += 1,
            EntryType::Symlink => {}
        }
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dirs = if self.directories == 1 {
            "directory"
        } else {
            "directories"
        };
        let files = if self.files == 1 { "file" } else { "files" };
        write!(f, "{} {}, {} {}", self.directories, dirs, self.files, files)
    }
}

/// Name shown on the first line: the last path component, or the whole
/// path when there is none (e.g. `/`).
pub fn root_display_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}

/// Lazily produce every display line for `root`, root line first.
pub fn generate_tree(
    root: &Path,
    tree: &TreeConfig,
    render: &RenderConfig,
) -> impl Iterator<Item = String> {
    let render = *render;
    let first = root_line(&root_display_name(root), &render);
    let lines = walk_tree(root, tree).map(move |entry| render_entry(&entry, &render));
    std::iter::once(first).chain(lines)
}

/// Write the full listing for `root` followed by a blank line and the
/// summary. Returns the totals.
pub fn write_tree<W: Write>(
    writer: &mut W,
    root: &Path,
    tree: &TreeConfig,
    render: &RenderConfig,
) -> io::Result<Counts> {
    let mut counts = Counts::default();
    let build = line_builder(*render);
    writeln!(writer, "{}", root_line(&root_display_name(root), render))?;
    for entry in walk_tree(root, tree) {
        counts.record(entry.entry_type);
        writeln!(writer, "{}", build(&entry.name, entry.entry_type, &entry.history))?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", counts)?;
    writer.flush()?;
    Ok(counts)
}

/// Create a BufWriter wrapping stdout with a generous buffer.
pub fn buffered_stdout() -> BufWriter<Stdout> {
    BufWriter::with_capacity(64 * 1024, io::stdout())
}
