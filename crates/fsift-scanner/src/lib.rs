//! fsift-scanner: Recursive file enumeration.

use fsift_core::config::TraversalConfig;
use fsift_core::{Error, Result};
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Walks a directory tree and lists every non-directory entry.
pub struct Scanner {
    config: TraversalConfig,
}

impl Scanner {
    /// Create a new scanner with the given traversal settings.
    pub fn new(config: TraversalConfig) -> Self {
        Self { config }
    }

    /// List every file below `root`, joined onto `root` (or relative to it
    /// when `relative_paths` is set).
    ///
    /// Order is top-down: a directory's files in OS listing order, then each
    /// subdirectory's contents, subdirectories also in listing order. Names
    /// are never sorted.
    pub fn scan(&self, root: &Path) -> Result<Vec<String>> {
        check_root(root)?;
        info!("Scanning root: {}", root.display());

        let mut files = Vec::new();
        // Files of a directory come before anything below its subdirectories.
        // The sort is stable, so listing order holds within each group.
        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.handle_walk_error(root, err)?;
                    continue;
                }
            };

            if is_directory(&entry) {
                continue;
            }
            let path = if self.config.relative_paths {
                entry.path().strip_prefix(root).unwrap_or(entry.path())
            } else {
                entry.path()
            };
            files.push(path.to_string_lossy().into_owned());
        }

        info!("Scan complete: {} files under {}", files.len(), root.display());
        Ok(files)
    }

    /// Errors at the root are fatal; below it they are skipped unless the
    /// config says otherwise.
    fn handle_walk_error(&self, root: &Path, err: walkdir::Error) -> Result<()> {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());

        if err.depth() == 0 || !self.config.skip_unreadable {
            return Err(Error::FileSystem {
                path,
                source: err.into(),
            });
        }

        warn!("Skipping unreadable entry {}: {}", path.display(), err);
        Ok(())
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(TraversalConfig::default())
    }
}

/// List every file below `root` with default traversal settings.
pub fn scan(root: &Path) -> Result<Vec<String>> {
    Scanner::default().scan(root)
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = std::fs::metadata(root).map_err(|source| Error::FileSystem {
        path: root.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Directories, including symlinks that resolve to one, are never emitted.
fn is_directory(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return true;
    }
    if entry.path_is_symlink() {
        let resolves_to_dir = entry.path().is_dir();
        if resolves_to_dir {
            debug!("Not descending into symlinked dir {}", entry.path().display());
        }
        return resolves_to_dir;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_root_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let err = scan(&temp.path().join("absent")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }

    #[test]
    fn test_file_root_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        let err = scan(&file).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
        assert!(err.is_filesystem());
    }

    #[test]
    fn test_empty_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
        assert!(scan(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_paths_are_root_joined() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/b.log"), "").unwrap();

        let files = scan(temp.path()).unwrap();
        let expected = temp.path().join("sub").join("b.log");
        assert_eq!(files, vec![expected.to_string_lossy().into_owned()]);
    }

    #[test]
    fn test_relative_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/b.log"), "").unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();

        let scanner = Scanner::new(TraversalConfig {
            relative_paths: true,
            ..Default::default()
        });
        let mut files = scanner.scan(temp.path()).unwrap();
        files.sort();

        let nested = Path::new("sub").join("b.log");
        assert_eq!(
            files,
            vec!["a.txt".to_string(), nested.to_string_lossy().into_owned()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let root = temp.path().join("root");
        let outside = temp.path().join("outside");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("hidden.txt"), "").unwrap();
        fs::write(root.join("real.txt"), "").unwrap();

        symlink(&outside, root.join("dir_link")).unwrap();
        symlink(root.join("real.txt"), root.join("file_link")).unwrap();
        symlink(root.join("gone.txt"), root.join("dangling")).unwrap();

        let mut files = scan(&root).unwrap();
        files.sort();

        let expected: Vec<String> = ["dangling", "file_link", "real.txt"]
            .iter()
            .map(|n| root.join(n).to_string_lossy().into_owned())
            .collect();
        assert_eq!(files, expected);

        let following = Scanner::new(TraversalConfig {
            follow_links: true,
            ..Default::default()
        });
        let files = following.scan(&root).unwrap();
        let through_link = root.join("dir_link").join("hidden.txt");
        assert!(files.contains(&through_link.to_string_lossy().into_owned()));
    }
}
