mod common;

use std::fs;

use common::{listing, local, march_fifth, touch, ScriptedConsole};
use stampr::walk::LocalTree;
use stampr::{ErrorCode, Outcome, RenameMode, RenameRequest, Renamer};
use tempfile::tempdir;

fn force() -> RenameMode {
    RenameMode {
        force: true,
        ..RenameMode::default()
    }
}

#[test]
fn force_mode_prefixes_plain_name() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "report.txt", march_fifth());

    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    let report = renamer
        .run(&RenameRequest::new(dir.path(), "*.txt", force()))
        .unwrap();

    assert_eq!(report.renamed, 1);
    assert_eq!(listing(dir.path()), vec!["20240305T143000_report.txt"]);
}

#[test]
fn matching_stamp_is_left_alone() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "20240305T143000_report.txt", march_fifth());

    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    let report = renamer
        .run(&RenameRequest::new(dir.path(), "*.txt", force()))
        .unwrap();

    assert_eq!(report.unchanged, 1);
    assert_eq!(report.renamed, 0);
    assert_eq!(listing(dir.path()), vec!["20240305T143000_report.txt"]);

    let (_, console) = renamer.into_parts();
    assert!(console.lines[0].ends_with("(no change needed)"));
}

#[test]
fn stale_stamp_is_replaced_not_stacked() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "20240101T000000_report.txt", march_fifth());

    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    renamer
        .run(&RenameRequest::new(dir.path(), "*.txt", force()))
        .unwrap();

    assert_eq!(listing(dir.path()), vec!["20240305T143000_report.txt"]);
}

#[test]
fn dry_run_leaves_disk_untouched() {
    let dir = tempdir().unwrap();
    let photo = touch(dir.path(), "photo.png", march_fifth());
    let before = fs::metadata(&photo).unwrap().modified().unwrap();

    let mode = RenameMode {
        dry_run: true,
        ..RenameMode::default()
    };
    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    let report = renamer
        .run(&RenameRequest::new(dir.path(), "*.png", mode))
        .unwrap();

    assert_eq!(report.files[0].outcome, Outcome::WouldRename);
    assert_eq!(listing(dir.path()), vec!["photo.png"]);
    assert_eq!(fs::metadata(&photo).unwrap().modified().unwrap(), before);

    let (_, console) = renamer.into_parts();
    assert!(console.prompts.is_empty());
    assert!(console.lines[0].starts_with("Would rename: "));
    assert!(console.lines[0].ends_with("20240305T143000_photo.png"));
}

#[test]
fn interactive_no_then_capital_yes() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "a.txt", march_fifth());
    touch(dir.path(), "b.txt", local(2023, 7, 1, 8, 5, 9));

    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::answering(&["n", "Y"]));
    let report = renamer
        .run(&RenameRequest::new(dir.path(), "*.txt", RenameMode::default()))
        .unwrap();

    assert_eq!(report.declined, 1);
    assert_eq!(report.renamed, 1);
    assert_eq!(listing(dir.path()), vec!["20230701T080509_b.txt", "a.txt"]);

    let (_, console) = renamer.into_parts();
    assert_eq!(
        console.prompts,
        vec![
            "Rename \"a.txt\" to \"20240305T143000_a.txt\"? [y/N]: ",
            "Rename \"b.txt\" to \"20230701T080509_b.txt\"? [y/N]: ",
        ]
    );
    assert_eq!(
        console.lines,
        vec![
            "⨯ Skipped \"a.txt\"",
            "✓ Renamed to \"20230701T080509_b.txt\"",
        ]
    );
}

#[test]
fn recursion_is_opt_in() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "top.log", march_fifth());
    let nested = touch(&dir.path().join("nested"), "inner.log", march_fifth());

    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    renamer
        .run(&RenameRequest::new(dir.path(), "*.log", force()))
        .unwrap();
    assert!(nested.exists());

    let recursive = RenameMode {
        recursive: true,
        ..force()
    };
    let report = renamer
        .run(&RenameRequest::new(dir.path(), "*.log", recursive))
        .unwrap();

    assert_eq!(report.unchanged, 1);
    assert_eq!(report.renamed, 1);
    assert_eq!(
        listing(&dir.path().join("nested")),
        vec!["20240305T143000_inner.log"]
    );
}

#[test]
fn pattern_applies_to_base_name_only() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "keep.md", march_fifth());
    touch(dir.path(), "notes.txt", march_fifth());

    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    let report = renamer
        .run(&RenameRequest::new(dir.path(), "n?tes.*", force()))
        .unwrap();

    assert_eq!(report.matched, 1);
    assert_eq!(
        listing(dir.path()),
        vec!["20240305T143000_notes.txt", "keep.md"]
    );
}

#[test]
fn collision_aborts_without_overwriting() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "a.txt", march_fifth());
    touch(dir.path(), "20240305T143000_a.txt", local(2020, 1, 1, 0, 0, 0));

    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    let err = renamer
        .run(&RenameRequest::new(dir.path(), "a.txt", force()))
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::RenameTargetExists);
    assert_eq!(
        fs::read_to_string(dir.path().join("20240305T143000_a.txt")).unwrap(),
        "20240305T143000_a.txt"
    );
}

#[test]
fn missing_root_is_a_traversal_error() {
    let dir = tempdir().unwrap();
    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    let err = renamer
        .run(&RenameRequest::new(dir.path().join("nope"), "*", force()))
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::TraversalFailed);
}

#[test]
fn closed_input_is_an_error_not_a_no() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "a.txt", march_fifth());

    let mut renamer = Renamer::new(LocalTree::new(), ScriptedConsole::default());
    let err = renamer
        .run(&RenameRequest::new(dir.path(), "*.txt", RenameMode::default()))
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ConsoleReadFailed);
    assert_eq!(listing(dir.path()), vec!["a.txt"]);
}
