//! Output settings shared by the walker and the line renderer.

use crate::history::MAX_DEPTH;
use crate::render::RenderConfig;
use crate::tree::TreeConfig;

/// Independent, freely combinable output switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Wrap entry names in ANSI color escapes by type.
    pub colorize: bool,
    /// Use double-line box drawing glyphs.
    pub fancy: bool,
    /// Sort every directory in descending name order.
    pub reverse: bool,
}

impl Settings {
    /// The part of the settings the line renderer consumes.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            colorize: self.colorize,
            fancy: self.fancy,
        }
    }

    /// The part of the settings the walker consumes, with an optional
    /// depth limit below [`MAX_DEPTH`].
    pub fn tree_config(&self, level: Option<usize>) -> TreeConfig {
        TreeConfig {
            max_depth: level.map_or(MAX_DEPTH, |l| l.min(MAX_DEPTH)),
            reverse: self.reverse,
        }
    }
}
