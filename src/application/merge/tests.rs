//! Tests for the merge use case

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::{MergeOptions, MergeUseCase};
use crate::domain::ports::{FileSystem, FsError, FsResult};
use crate::domain::{MarkerError, SpliceAction};
use crate::error::ConcatError;
use crate::infrastructure::LocalFs;

/// In-memory file system that can refuse writes to chosen paths
#[derive(Default)]
struct MemoryFs {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    read_only: Vec<PathBuf>,
}

impl MemoryFs {
    fn with_file(self, path: &str, content: impl AsRef<[u8]>) -> Self {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), content.as_ref().to_vec());
        self
    }

    fn read_only(mut self, path: &str) -> Self {
        self.read_only.push(PathBuf::from(path));
        self
    }

    fn get(&self, path: &str) -> Option<String> {
        self.get_bytes(path)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    fn get_bytes(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl FileSystem for &MemoryFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or(FsError::NotFound)
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if self.read_only.iter().any(|p| p == path) {
            return Err(FsError::PermissionDenied);
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }
}

fn targets(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

#[test]
fn merge_appends_block_to_target_without_markers() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("main.toml", "");

    let result = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new("base.toml", targets(&["main.toml"])))
        .unwrap();

    assert_eq!(
        fs.get("main.toml").unwrap(),
        "\n# Begining of base.toml\nx = 1\n# End of base.toml"
    );
    assert_eq!(result.targets[0].action, SpliceAction::Appended);
    assert!(result.targets[0].changed);
}

#[test]
fn merge_processes_every_target_in_order() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("transient.toml", "t = true\n")
        .with_file("main.toml", "m = true\n");

    let result = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new(
            "base.toml",
            targets(&["transient.toml", "main.toml"]),
        ))
        .unwrap();

    let paths: Vec<_> = result.targets.iter().map(|t| t.path.clone()).collect();
    assert_eq!(paths, targets(&["transient.toml", "main.toml"]));
    assert!(fs.get("transient.toml").unwrap().starts_with("t = true\n\n# Begining"));
    assert!(fs.get("main.toml").unwrap().starts_with("m = true\n\n# Begining"));
}

#[test]
fn merge_twice_is_idempotent() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1\ny = 2")
        .with_file("main.toml", "a = 0\n");
    let use_case = MergeUseCase::new(&fs);
    let options = MergeOptions::new("base.toml", targets(&["main.toml"]));

    use_case.execute(&options).unwrap();
    let once = fs.get("main.toml").unwrap();
    let second = use_case.execute(&options).unwrap();

    assert_eq!(fs.get("main.toml").unwrap(), once);
    assert_eq!(second.targets[0].action, SpliceAction::Replaced);
    assert!(!second.targets[0].changed);
    assert!(!second.has_changes());
}

#[test]
fn merge_reflects_new_base_contents() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("main.toml", "");
    let use_case = MergeUseCase::new(&fs);
    let options = MergeOptions::new("base.toml", targets(&["main.toml"]));

    use_case.execute(&options).unwrap();
    fs.files
        .borrow_mut()
        .insert(PathBuf::from("base.toml"), b"x = 2".to_vec());
    use_case.execute(&options).unwrap();

    let merged = fs.get("main.toml").unwrap();
    assert!(merged.contains("\nx = 2\n"));
    assert!(!merged.contains("x = 1"));
}

#[test]
fn missing_base_is_base_unreadable() {
    let fs = MemoryFs::default().with_file("main.toml", "");

    let err = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new("base.toml", targets(&["main.toml"])))
        .unwrap_err();

    assert!(matches!(err, ConcatError::BaseUnreadable { .. }));
    assert_eq!(fs.get("main.toml").unwrap(), "");
}

#[test]
fn missing_target_stops_the_run() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("first.toml", "")
        .with_file("third.toml", "");

    let err = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new(
            "base.toml",
            targets(&["first.toml", "second.toml", "third.toml"]),
        ))
        .unwrap_err();

    match err {
        ConcatError::TargetUnreadable { path, source } => {
            assert_eq!(path, PathBuf::from("second.toml"));
            assert!(matches!(source, FsError::NotFound));
        }
        other => panic!("unexpected error: {other}"),
    }
    // Targets before the failure keep their merge, later ones are untouched
    assert!(fs.get("first.toml").unwrap().contains("x = 1"));
    assert_eq!(fs.get("third.toml").unwrap(), "");
}

#[test]
fn unwritable_target_is_target_unwritable() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("main.toml", "")
        .read_only("main.toml");

    let err = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new("base.toml", targets(&["main.toml"])))
        .unwrap_err();

    assert!(matches!(
        err,
        ConcatError::TargetUnwritable {
            source: FsError::PermissionDenied,
            ..
        }
    ));
}

#[test]
fn lone_marker_is_rejected_and_target_untouched() {
    let original = "a = 1\n# Begining of base.toml\nstale = true\n";
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("main.toml", original);

    let err = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new("base.toml", targets(&["main.toml"])))
        .unwrap_err();

    assert!(matches!(
        err,
        ConcatError::MalformedMarkers {
            problem: MarkerError::MissingEnd,
            ..
        }
    ));
    assert_eq!(fs.get("main.toml").unwrap(), original);
}

#[test]
fn dry_run_does_not_write() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("main.toml", "a = 0\n");

    let result = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new("base.toml", targets(&["main.toml"])).with_dry_run(true))
        .unwrap();

    assert_eq!(fs.get("main.toml").unwrap(), "a = 0\n");
    assert!(result.dry_run);
    assert!(result.targets[0].changed);
    assert_eq!(result.targets[0].previous, b"a = 0\n");
    assert!(result.targets[0].merged.ends_with(b"# End of base.toml"));
}

#[test]
fn markers_follow_custom_base_name() {
    let fs = MemoryFs::default()
        .with_file("shared/common.toml", "c = 1")
        .with_file("main.toml", "");

    MergeUseCase::new(&fs)
        .execute(&MergeOptions::new("shared/common.toml", targets(&["main.toml"])))
        .unwrap();

    assert_eq!(
        fs.get("main.toml").unwrap(),
        "\n# Begining of common.toml\nc = 1\n# End of common.toml"
    );
}

#[test]
fn summary_line_quotes_base_and_targets() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("transient.toml", "")
        .with_file("main.toml", "");

    let result = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new(
            "base.toml",
            targets(&["transient.toml", "main.toml"]),
        ))
        .unwrap();

    assert_eq!(
        result.summary_line(),
        "Concatenated \"base.toml\" to the files \"transient.toml\", \"main.toml\""
    );
}

#[test]
fn result_to_json_includes_command_and_outcomes() {
    let fs = MemoryFs::default()
        .with_file("base.toml", "x = 1")
        .with_file("main.toml", "");

    let result = MergeUseCase::new(&fs)
        .execute(&MergeOptions::new("base.toml", targets(&["main.toml"])))
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json()).unwrap();

    assert_eq!(json["command"], "merge");
    assert_eq!(json["event"], "merge_complete");
    assert_eq!(json["base"], "base.toml");
    assert_eq!(json["targets"][0]["path"], "main.toml");
    assert_eq!(json["targets"][0]["action"], "appended");
    assert_eq!(json["targets"][0]["changed"], true);
    assert!(json["targets"][0].get("previous").is_none());
}

#[test]
fn non_utf8_target_and_base_are_spliced_as_bytes() {
    let fs = MemoryFs::default()
        .with_file("base.toml", b"name = \"caf\xe9\"")
        .with_file("main.toml", b"# caf\xe9\n");

    MergeUseCase::new(&fs)
        .execute(&MergeOptions::new("base.toml", targets(&["main.toml"])))
        .unwrap();

    assert_eq!(
        fs.get_bytes("main.toml").unwrap(),
        b"# caf\xe9\n\n# Begining of base.toml\nname = \"caf\xe9\"\n# End of base.toml".to_vec()
    );
}

#[test]
fn merge_on_disk_preserves_surrounding_text() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let target = dir.path().join("main.toml");
    fs::write(&base, "[shared]\nkey = \"new\"").unwrap();
    fs::write(
        &target,
        "[local]\nport = 8080\n# Begining of base.toml\n[shared]\nkey = \"old\"\n# End of base.toml\n\n[tail]\nx = 1\n",
    )
    .unwrap();

    MergeUseCase::new(LocalFs::new())
        .execute(&MergeOptions::new(&base, vec![target.clone()]))
        .unwrap();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "[local]\nport = 8080\n# Begining of base.toml\n[shared]\nkey = \"new\"\n# End of base.toml\n\n[tail]\nx = 1\n"
    );
}
