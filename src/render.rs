//! Line rendering: box-drawing prefixes and ANSI-colored names.

use std::borrow::Cow;
use std::fmt::Write as _;

use crossterm::style::{Color, SetForegroundColor};

use crate::history::EndStateHistory;
use crate::tree::{EntryType, TreeEntry};

/// Configuration for the rendering pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether to emit color escapes around names.
    pub colorize: bool,
    /// Whether to use the double-line glyph set.
    pub fancy: bool,
}

impl RenderConfig {
    pub fn glyphs(&self) -> &'static GlyphSet {
        if self.fancy {
            &FANCY_GLYPHS
        } else {
            &PLAIN_GLYPHS
        }
    }
}

/// The four 4-column pieces a prefix is assembled from.
#[derive(Debug, PartialEq, Eq)]
pub struct GlyphSet {
    /// Ancestor level with more siblings below it.
    pub limb: &'static str,
    /// Ancestor level that was the last sibling.
    pub spacer: &'static str,
    /// Entry that has further siblings.
    pub tee: &'static str,
    /// Entry that is the last sibling.
    pub end: &'static str,
}

pub static PLAIN_GLYPHS: GlyphSet = GlyphSet {
    limb: "\u{2502}   ",               // │
    spacer: "    ",
    tee: "\u{251c}\u{2500}\u{2500} ", // ├──
    end: "\u{2514}\u{2500}\u{2500} ", // └──
};

pub static FANCY_GLYPHS: GlyphSet = GlyphSet {
    limb: "\u{2551}   ",               // ║
    spacer: "    ",
    tee: "\u{2560}\u{2550}\u{2550} ", // ╠══
    end: "\u{255a}\u{2550}\u{2550} ", // ╚══
};

/// Build the prefix for an entry from its end state history.
///
/// Every level above the entry contributes a limb or a spacer; the entry's
/// own level contributes a tee or an end branch. An empty history yields an
/// empty prefix.
pub fn build_prefix(history: &EndStateHistory, glyphs: &GlyphSet) -> String {
    let last = history.len().saturating_sub(1);
    let mut prefix = String::with_capacity(history.len() * 12);
    for (depth, is_last) in history.iter().enumerate() {
        let glyph = match (depth == last, is_last) {
            (false, false) => glyphs.limb,
            (false, true) => glyphs.spacer,
            (true, false) => glyphs.tee,
            (true, true) => glyphs.end,
        };
        prefix.push_str(glyph);
    }
    prefix
}

/// Foreground color for an entry type; `None` means the terminal default.
pub fn entry_color(entry_type: EntryType) -> Option<Color> {
    match entry_type {
        EntryType::Directory => Some(Color::DarkCyan),
        EntryType::Symlink => Some(Color::DarkGreen),
        EntryType::Executable => Some(Color::DarkRed),
        EntryType::File => None,
    }
}

/// Wrap `text` in the color for `entry_type` followed by a reset to the
/// default foreground. Default-colored types come back unchanged.
pub fn colorize(text: &str, entry_type: EntryType) -> String {
    match entry_color(entry_type) {
        Some(color) => format!(
            "{}{}{}",
            SetForegroundColor(color),
            text,
            SetForegroundColor(Color::Reset)
        ),
        None => text.to_string(),
    }
}

/// Escape control characters in a file name so it cannot drive the
/// terminal. Names without any come back borrowed.
pub fn escape_control_chars(name: &str) -> Cow<'_, str> {
    if !name.chars().any(char::is_control) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && (c as u32) <= 0xFF => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:X}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render one display line: prefix followed by the (optionally colored) name.
pub fn render_line(
    name: &str,
    entry_type: EntryType,
    history: &EndStateHistory,
    config: &RenderConfig,
) -> String {
    let mut line = build_prefix(history, config.glyphs());
    let safe_name = escape_control_chars(name);
    if config.colorize {
        line.push_str(&colorize(&safe_name, entry_type));
    } else {
        line.push_str(&safe_name);
    }
    line
}

/// Render a walk entry.
pub fn render_entry(entry: &TreeEntry, config: &RenderConfig) -> String {
    render_line(&entry.name, entry.entry_type, &entry.history, config)
}

/// Render the line for the walk root: no prefix, colored as a directory.
pub fn root_line(name: &str, config: &RenderConfig) -> String {
    render_line(name, EntryType::Directory, &EndStateHistory::new(), config)
}

/// Bind a configuration into a reusable line builder.
/// [`write_tree`](crate::output::write_tree) formats its entries through one.
pub fn line_builder(
    config: RenderConfig,
) -> impl Fn(&str, EntryType, &EndStateHistory) -> String {
    move |name: &str, entry_type: EntryType, history: &EndStateHistory| {
        render_line(name, entry_type, history, &config)
    }
}
