//! End-to-end walk + render over a realistic project layout.
//!
//! Run with tracing output:
//!   RUST_LOG=debug cargo test --test integration -- --nocapture

use gdtree::output::{root_display_name, write_tree, Counts};
use gdtree::{EntryType, Settings};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tracing::{debug, info, span, Level};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_test_writer()
        .try_init();
}

fn create_project_fixture(root: &Path) {
    info!("Creating project fixture at {}", root.display());
    for dir in ["src", "src/tree", "tests", ".git", "docs"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in [
        "Cargo.toml",
        "src/lib.rs",
        "src/main.rs",
        "src/tree/mod.rs",
        "src/tree/walk.rs",
        "tests/cli.rs",
        ".git/HEAD",
        ".gitignore",
    ] {
        fs::write(root.join(file), "").unwrap();
    }
}

fn render(root: &Path, settings: Settings) -> (String, Counts) {
    let mut buf = Vec::new();
    let counts = write_tree(
        &mut buf,
        root,
        &settings.tree_config(None),
        &settings.render_config(),
    )
    .unwrap();
    (String::from_utf8(buf).unwrap(), counts)
}

#[test]
fn test_project_tree_plain() {
    init_tracing();
    let _span = span!(Level::INFO, "project_tree_plain").entered();

    let tmp = TempDir::new().unwrap();
    create_project_fixture(tmp.path());

    let (text, counts) = render(tmp.path(), Settings::default());
    debug!("rendered:\n{text}");

    let expected = format!(
        "{}
├── Cargo.toml
├── docs
├── src
│   ├── lib.rs
│   ├── main.rs
│   └── tree
│       ├── mod.rs
│       └── walk.rs
└── tests
    └── cli.rs

4 directories, 6 files
",
        root_display_name(tmp.path())
    );
    assert_eq!(text, expected);
    assert_eq!(
        counts,
        Counts {
            directories: 4,
            files: 6
        }
    );
}

#[test]
fn test_project_tree_fancy_reverse() {
    init_tracing();
    let _span = span!(Level::INFO, "project_tree_fancy_reverse").entered();

    let tmp = TempDir::new().unwrap();
    create_project_fixture(tmp.path());

    let settings = Settings {
        colorize: false,
        fancy: true,
        reverse: true,
    };
    let (text, _) = render(tmp.path(), settings);
    debug!("rendered:\n{text}");

    let body: Vec<&str> = text.lines().skip(1).take(10).collect();
    assert_eq!(
        body,
        vec![
            "╠══ tests",
            "║   ╚══ cli.rs",
            "╠══ src",
            "║   ╠══ tree",
            "║   ║   ╠══ walk.rs",
            "║   ║   ╚══ mod.rs",
            "║   ╠══ main.rs",
            "║   ╚══ lib.rs",
            "╠══ docs",
            "╚══ Cargo.toml",
        ]
    );
}

#[test]
fn test_project_tree_colorized() {
    init_tracing();

    let tmp = TempDir::new().unwrap();
    create_project_fixture(tmp.path());

    let settings = Settings {
        colorize: true,
        ..Settings::default()
    };
    let (text, _) = render(tmp.path(), settings);

    let dir = gdtree::render::colorize("src", EntryType::Directory);
    assert!(text.contains(&format!("├── {dir}\n")));
    assert!(text.contains("│   ├── lib.rs\n"));
    // The summary line is never colored.
    assert!(text.ends_with("\n4 directories, 6 files\n"));
}
