use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::DirEntry;

use super::EntryType;

/// The type tests a listed filesystem node must answer.
///
/// Implemented for `walkdir::DirEntry`; tests substitute their own nodes.
pub trait FsNode {
    /// Path used in diagnostics.
    fn node_path(&self) -> &Path;
    /// Whether the node itself is a symbolic link (links are not followed).
    fn is_symlink(&self) -> io::Result<bool>;
    /// Whether the node is a directory.
    fn is_dir(&self) -> io::Result<bool>;
    /// Whether the current user may execute the node.
    fn is_executable(&self) -> io::Result<bool>;
}

impl FsNode for DirEntry {
    fn node_path(&self) -> &Path {
        self.path()
    }

    fn is_symlink(&self) -> io::Result<bool> {
        Ok(self.path_is_symlink())
    }

    fn is_dir(&self) -> io::Result<bool> {
        Ok(self.file_type().is_dir())
    }

    fn is_executable(&self) -> io::Result<bool> {
        is_executable(self.path())
    }
}

/// Asks the kernel whether the current user may execute `path`. A refusal
/// of any kind reads as "not executable".
#[cfg(unix)]
fn is_executable(path: &Path) -> io::Result<bool> {
    use rustix::fs::{access, Access};

    Ok(access(path, Access::EXEC_OK).is_ok())
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> io::Result<bool> {
    Ok(false)
}

/// Classify a node. The symlink test runs first, so a link to a directory
/// is reported as `Symlink`. A failing test counts as `false`.
pub fn classify<N: FsNode>(node: &N) -> EntryType {
    if check(node, "symlink", N::is_symlink) {
        EntryType::Symlink
    } else if check(node, "directory", N::is_dir) {
        EntryType::Directory
    } else if check(node, "executable", N::is_executable) {
        EntryType::Executable
    } else {
        EntryType::File
    }
}

fn check<N: FsNode>(node: &N, test: &str, f: fn(&N) -> io::Result<bool>) -> bool {
    match f(node) {
        Ok(result) => result,
        Err(err) => {
            debug!(path = %node.node_path().display(), test, "type test failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct FakeNode {
        path: PathBuf,
        symlink: io::Result<bool>,
        dir: io::Result<bool>,
        exec: io::Result<bool>,
    }

    fn copy(result: &io::Result<bool>) -> io::Result<bool> {
        match result {
            Ok(v) => Ok(*v),
            Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
        }
    }

    impl FsNode for FakeNode {
        fn node_path(&self) -> &Path {
            &self.path
        }
        fn is_symlink(&self) -> io::Result<bool> {
            copy(&self.symlink)
        }
        fn is_dir(&self) -> io::Result<bool> {
            copy(&self.dir)
        }
        fn is_executable(&self) -> io::Result<bool> {
            copy(&self.exec)
        }
    }

    fn node(symlink: bool, dir: bool, exec: bool) -> FakeNode {
        FakeNode {
            path: PathBuf::from("/fake"),
            symlink: Ok(symlink),
            dir: Ok(dir),
            exec: Ok(exec),
        }
    }

    fn denied() -> io::Result<bool> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }

    #[test]
    fn test_plain_kinds() {
        assert_eq!(classify(&node(false, true, false)), EntryType::Directory);
        assert_eq!(classify(&node(false, false, true)), EntryType::Executable);
        assert_eq!(classify(&node(false, false, false)), EntryType::File);
    }

    #[test]
    fn test_symlink_wins_over_directory() {
        assert_eq!(classify(&node(true, true, true)), EntryType::Symlink);
    }

    #[test]
    fn test_directory_wins_over_executable() {
        assert_eq!(classify(&node(false, true, true)), EntryType::Directory);
    }

    #[test]
    fn test_failed_tests_fall_through() {
        let mut n = node(false, true, false);
        n.symlink = denied();
        assert_eq!(classify(&n), EntryType::Directory);

        let mut n = node(false, false, true);
        n.dir = denied();
        assert_eq!(classify(&n), EntryType::Executable);

        let n = FakeNode {
            path: PathBuf::from("/fake"),
            symlink: denied(),
            dir: denied(),
            exec: denied(),
        };
        assert_eq!(classify(&n), EntryType::File);
    }
}
