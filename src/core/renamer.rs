//! Rename engine: walk, filter, stamp, confirm, rename.
//!
//! Traversal and renaming are interleaved in one pass. Each matched file is
//! settled before the next one is read:
//!
//! 1. name already stamped with its own mtime → "no change needed"
//! 2. dry run → "would rename" preview
//! 3. force, or a `y` answer at the prompt → rename
//! 4. any other answer → skipped
//!
//! The first error of any kind stops the run.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::defaults::AFFIRMATIVE_ANSWER;
use crate::error::{Error, Result};
use crate::output::{FileOutcome, Outcome, RunReport};
use crate::pattern::NamePattern;
use crate::stamp;
use crate::walk::{FileEntry, FileTree};

// ============================================================================
// Types
// ============================================================================

/// Mode flags for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameMode {
    pub dry_run: bool,
    pub force: bool,
    pub recursive: bool,
}

/// Everything a run needs besides the filesystem and the console.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub root: PathBuf,
    pub pattern: String,
    pub mode: RenameMode,
}

impl RenameRequest {
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>, mode: RenameMode) -> Self {
        Self {
            root: root.into(),
            pattern: pattern.into(),
            mode,
        }
    }
}

/// A matched file and the name it should carry.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    pub entry: FileEntry,
    pub new_name: String,
}

impl RenamePlan {
    pub fn new(entry: FileEntry) -> Self {
        let new_name = stamp::compute_new_name(&entry.name, &entry.modified);
        Self { entry, new_name }
    }

    pub fn is_noop(&self) -> bool {
        self.new_name == self.entry.name
    }

    /// Same directory, new base name.
    pub fn target(&self) -> PathBuf {
        self.entry.path.with_file_name(&self.new_name)
    }

    fn outcome(&self, outcome: Outcome) -> FileOutcome {
        FileOutcome {
            path: self.entry.path.display().to_string(),
            old_name: self.entry.name.clone(),
            new_name: self.new_name.clone(),
            outcome,
        }
    }
}

// ============================================================================
// Renamer
// ============================================================================

pub struct Renamer<T, C> {
    tree: T,
    console: C,
}

impl<T: FileTree, C: Console> Renamer<T, C> {
    pub fn new(tree: T, console: C) -> Self {
        Self { tree, console }
    }

    pub fn into_parts(self) -> (T, C) {
        (self.tree, self.console)
    }

    /// Process every file under the request root whose base name matches.
    pub fn run(&mut self, request: &RenameRequest) -> Result<RunReport> {
        let pattern = NamePattern::new(&request.pattern)?;
        let mode = request.mode;

        log_status!(
            "walk",
            "Scanning {} for '{}'{}",
            request.root.display(),
            pattern.as_str(),
            if mode.recursive { " (recursive)" } else { "" }
        );

        let Self { tree, console } = self;
        let mut report = RunReport::new();

        for entry in tree.files(&request.root, mode.recursive) {
            let entry = entry?;
            if !pattern.matches(&entry.name) {
                continue;
            }

            let plan = RenamePlan::new(entry);
            let outcome = settle(&*tree, &mut *console, &plan, mode)?;
            report.record(plan.outcome(outcome));
        }

        log_status!(
            "rename",
            "{} matched, {} renamed, {} unchanged, {} declined, {} previewed",
            report.matched,
            report.renamed,
            report.unchanged,
            report.declined,
            report.would_rename
        );

        Ok(report)
    }

    /// Drive a single plan to its terminal state.
    pub fn process(&mut self, plan: &RenamePlan, mode: RenameMode) -> Result<Outcome> {
        settle(&self.tree, &mut self.console, plan, mode)
    }
}

fn settle<T: FileTree, C: Console>(
    tree: &T,
    console: &mut C,
    plan: &RenamePlan,
    mode: RenameMode,
) -> Result<Outcome> {
    let entry = &plan.entry;

    if plan.is_noop() {
        console.say(&format!(
            "Skipped: {} (no change needed)",
            entry.path.display()
        ))?;
        return Ok(Outcome::Unchanged);
    }

    let target = plan.target();

    if mode.dry_run {
        console.say(&format!(
            "Would rename: {} -> {}",
            entry.path.display(),
            target.display()
        ))?;
        return Ok(Outcome::WouldRename);
    }

    if !mode.force && !confirm(console, &entry.name, &plan.new_name)? {
        console.say(&format!("⨯ Skipped \"{}\"", entry.name))?;
        return Ok(Outcome::Declined);
    }

    rename(tree, &entry.path, &target)?;
    console.say(&format!("✓ Renamed to \"{}\"", plan.new_name))?;
    Ok(Outcome::Renamed)
}

fn confirm<C: Console>(console: &mut C, old: &str, new: &str) -> Result<bool> {
    let answer = console.prompt(&format!("Rename \"{}\" to \"{}\"? [y/N]: ", old, new))?;
    Ok(is_affirmative(&answer))
}

/// `y` in any case, surrounding whitespace ignored.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(AFFIRMATIVE_ANSWER)
}

fn rename<T: FileTree>(tree: &T, from: &Path, to: &Path) -> Result<()> {
    if tree.exists(to) {
        return Err(Error::rename_target_exists(from, to));
    }
    tree.rename(from, to)
}
