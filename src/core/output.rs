//! Public output types for rename runs.

use serde::Serialize;

/// Terminal state of one matched file.
///
/// A failed rename is not an outcome: it aborts the run as an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Name already carries the right timestamp.
    Unchanged,
    /// Dry run preview.
    WouldRename,
    /// The user answered anything but `y`.
    Declined,
    Renamed,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Unchanged => "unchanged",
            Outcome::WouldRename => "would_rename",
            Outcome::Declined => "declined",
            Outcome::Renamed => "renamed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    pub path: String,
    pub old_name: String,
    pub new_name: String,
    pub outcome: Outcome,
}

/// Summary of a rename run, in traversal order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub matched: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub would_rename: usize,
    pub declined: usize,
    pub files: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: FileOutcome) {
        self.matched += 1;
        match item.outcome {
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::WouldRename => self.would_rename += 1,
            Outcome::Declined => self.declined += 1,
            Outcome::Renamed => self.renamed += 1,
        }
        self.files.push(item);
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }
}
