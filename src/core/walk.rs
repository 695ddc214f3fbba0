//! Directory traversal and the rename primitive.
//!
//! `FileTree` is the seam between the rename workflow and the filesystem:
//! the workflow only sees `FileEntry` values and asks for renames, so it can
//! run against an in-memory tree in tests.

use chrono::{DateTime, Local};
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::stamp;

/// A non-directory entry found during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    /// Last-modified time, local zone, whole seconds.
    pub modified: DateTime<Local>,
}

/// Lazy sequence of traversed files. The first `Err` ends the sequence.
pub type Files<'a> = Box<dyn Iterator<Item = Result<FileEntry>> + 'a>;

/// Trait for the file operations the renamer needs.
pub trait FileTree {
    /// Files directly inside `dir`.
    fn children<'a>(&'a self, dir: &Path) -> Files<'a>;

    /// Files anywhere below `root`, descending into sub-directories.
    fn descendants<'a>(&'a self, root: &Path) -> Files<'a>;

    fn exists(&self, path: &Path) -> bool;

    /// Move `from` to `to`. Both paths share a parent directory.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    fn files<'a>(&'a self, root: &Path, recursive: bool) -> Files<'a> {
        if recursive {
            self.descendants(root)
        } else {
            self.children(root)
        }
    }
}

/// Local filesystem implementation
pub struct LocalTree;

impl LocalTree {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTree for LocalTree {
    fn children<'a>(&'a self, dir: &Path) -> Files<'a> {
        Box::new(Walk::new(dir, false))
    }

    fn descendants<'a>(&'a self, root: &Path) -> Files<'a> {
        Box::new(Walk::new(root, true))
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(|e| Error::rename_failed(from, to, &e))
    }
}

/// Depth-first walk over directory snapshots.
///
/// Each directory is listed in full (sorted by name) when the walk reaches
/// it, so renames made while walking never feed back into the listing.
/// Entries are stated lazily with `lstat`: a symlink is a file, never a
/// directory to descend into.
struct Walk {
    pending_root: Option<PathBuf>,
    stack: Vec<std::vec::IntoIter<DirEntry>>,
    recursive: bool,
    failed: bool,
}

impl Walk {
    fn new(root: &Path, recursive: bool) -> Self {
        Self {
            pending_root: Some(root.to_path_buf()),
            stack: Vec::new(),
            recursive,
            failed: false,
        }
    }

    fn fail(&mut self, err: Error) -> Option<Result<FileEntry>> {
        self.failed = true;
        self.stack.clear();
        Some(Err(err))
    }
}

fn snapshot(dir: &Path) -> Result<std::vec::IntoIter<DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| Error::traversal_failed(dir, "open", &e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::traversal_failed(dir, "readdir", &e))?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries.into_iter())
}

/// `./name` is reported as `name`.
fn child_path(entry: &DirEntry) -> PathBuf {
    let path = entry.path();
    match path.strip_prefix(".") {
        Ok(stripped) if !stripped.as_os_str().is_empty() => stripped.to_path_buf(),
        _ => path,
    }
}

impl Iterator for Walk {
    type Item = Result<FileEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        if let Some(root) = self.pending_root.take() {
            match snapshot(&root) {
                Ok(entries) => self.stack.push(entries),
                Err(err) => return self.fail(err),
            }
        }

        loop {
            let entry = match self.stack.last_mut()?.next() {
                Some(entry) => entry,
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let path = child_path(&entry);
            let meta = match entry.metadata() {
                Ok(meta) => meta,
                Err(e) => return self.fail(Error::traversal_failed(&path, "lstat", &e)),
            };

            if meta.is_dir() {
                if self.recursive {
                    match snapshot(&path) {
                        Ok(entries) => self.stack.push(entries),
                        Err(err) => return self.fail(err),
                    }
                }
                continue;
            }

            let modified = match meta.modified() {
                Ok(time) => stamp::local_time(time),
                Err(e) => return self.fail(Error::traversal_failed(&path, "lstat", &e)),
            };

            return Some(Ok(FileEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                modified,
            }));
        }
    }
}
