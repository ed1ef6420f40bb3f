use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::settings::Settings;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gdtree",
    version,
    about = "Produces a pretty-printed directory tree",
    after_help = "Examples:\n  gdtree .\n  gdtree --fancy --reverse ~/projects\n  gdtree -n -L 2 /etc"
)]
pub struct Args {
    /// Path to the top-level directory to generate a tree from. Can be absolute or relative
    pub directory: PathBuf,

    /// Disable output colorization
    #[arg(short = 'n', long = "dncolorize")]
    pub no_color: bool,

    /// Print the tree with fancy box characters (╠══ instead of ├──)
    #[arg(short = 'f', long = "fancy")]
    pub fancy: bool,

    /// Reverse the alphabetical order at every level
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Max display depth
    #[arg(short = 'L', long = "level", value_parser = clap::value_parser!(u32).range(1..))]
    pub level: Option<u32>,

    /// Increase diagnostic output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    pub fn settings(&self) -> Settings {
        Settings {
            colorize: !self.no_color,
            fancy: self.fancy,
            reverse: self.reverse,
        }
    }

    pub fn level(&self) -> Option<usize> {
        self.level.map(|l| l as usize)
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
