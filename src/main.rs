#![forbid(unsafe_code)]

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use gdtree::cli::Args;
use gdtree::output::{buffered_stdout, write_tree};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("gdtree: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(&args);

    let path = args
        .directory
        .canonicalize()
        .with_context(|| format!("{}: failed to resolve path", args.directory.display()))?;

    anyhow::ensure!(path.is_dir(), "{}: Not a directory", path.display());

    let settings = args.settings();
    info!(
        path = %path.display(),
        colorize = settings.colorize,
        fancy = settings.fancy,
        reverse = settings.reverse,
        "generating tree"
    );

    let tree_config = settings.tree_config(args.level());
    let render_config = settings.render_config();

    let mut stdout = buffered_stdout();
    match write_tree(&mut stdout, &path, &tree_config, &render_config) {
        Ok(counts) => {
            info!(
                directories = counts.directories,
                files = counts.files,
                "done"
            );
            Ok(())
        }
        // `gdtree big/ | head` closes the pipe early
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("failed to write tree"),
    }
}
