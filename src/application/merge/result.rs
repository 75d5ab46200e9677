//! Merge Result

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::SpliceAction;

/// What happened to a single target
#[derive(Debug, Clone, Serialize)]
pub struct TargetOutcome {
    pub path: PathBuf,
    pub action: SpliceAction,
    /// Whether the merged content differs from what was on disk
    pub changed: bool,
    /// Bytes before the merge
    #[serde(skip)]
    pub previous: Vec<u8>,
    /// Bytes after the merge
    #[serde(skip)]
    pub merged: Vec<u8>,
}

/// Result of a merge operation
#[derive(Debug, Clone, Serialize)]
pub struct MergeResult {
    pub base: PathBuf,
    pub dry_run: bool,
    pub targets: Vec<TargetOutcome>,
}

impl MergeResult {
    pub fn new(base: PathBuf, dry_run: bool) -> Self {
        Self {
            base,
            dry_run,
            targets: Vec::new(),
        }
    }

    pub fn changed_count(&self) -> usize {
        self.targets.iter().filter(|t| t.changed).count()
    }

    pub fn has_changes(&self) -> bool {
        self.changed_count() > 0
    }

    /// `Concatenated "base.toml" to the files "a.toml", "b.toml"`
    pub fn summary_line(&self) -> String {
        let files = self
            .targets
            .iter()
            .map(|t| format!("\"{}\"", t.path.display()))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Concatenated \"{}\" to the files {}",
            self.base.display(),
            files
        )
    }

    /// NDJSON line with `"command": "merge"` included
    pub fn to_json(&self) -> String {
        let mut value = serde_json::to_value(self)
            .unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("event".to_string(), serde_json::json!("merge_complete"));
            obj.insert("command".to_string(), serde_json::json!("merge"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
