//! End-to-end sync pipeline integration tests.
//!
//! These cases cover the engine's core guarantees: idempotence across runs,
//! monotonic index assignment, normalization-based dedup, per-destination
//! isolation, and exact dry-run reporting.

use sequin::commands::sync::run;
use sequin::index::DestinationIndex;
use sequin::planner::build_plan;
use sequin::{Config, CopyPair, SequinError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_for(pairs: Vec<CopyPair>) -> Config {
    Config {
        pairs,
        ignore: Vec::new(),
        dry_run: false,
        silent: true,
    }
}

fn entry_names(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(folder)
        .expect("read folder")
        .map(|e| {
            e.expect("read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

#[test]
fn test_sync_into_empty_destination() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    fs::write(src.path().join("b.jpg"), b"bb").expect("write source file");
    fs::write(src.path().join("a.jpg"), b"aa").expect("write source file");

    run(config_for(vec![CopyPair::new(src.path(), dst.path())])).expect("sync should succeed");

    let names = entry_names(dst.path());
    assert_eq!(names.len(), 2);
    // Listing order decides which file takes which index; both indices must
    // be handed out exactly once.
    assert!(
        names == vec!["00001__a.jpg", "00002__b.jpg"]
            || names == vec!["00001__b.jpg", "00002__a.jpg"],
        "unexpected destination contents: {names:?}"
    );
}

#[test]
fn test_second_run_is_a_no_op() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    fs::write(src.path().join("a.jpg"), b"aa").expect("write source file");
    fs::write(src.path().join("b.jpg"), b"bb").expect("write source file");

    let pairs = vec![CopyPair::new(src.path(), dst.path())];
    run(config_for(pairs.clone())).expect("first run should succeed");
    let after_first = entry_names(dst.path());

    // The replanned second run must come out empty.
    let mut index = DestinationIndex::scan(&pairs).expect("scan destinations");
    let second_plan = build_plan(&pairs, &[], &mut index).expect("build second plan");
    assert!(second_plan.is_empty(), "second run must plan nothing");

    run(config_for(pairs)).expect("second run should succeed");
    assert_eq!(entry_names(dst.path()), after_first);
}

#[test]
fn test_indices_continue_above_existing_entries() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    fs::write(dst.path().join("00001__a.jpg"), b"old").expect("write dst entry");
    fs::write(dst.path().join("00002__c.jpg"), b"old").expect("write dst entry");
    fs::write(src.path().join("a.jpg"), b"aa").expect("write source file");
    fs::write(src.path().join("b.jpg"), b"bb").expect("write source file");

    run(config_for(vec![CopyPair::new(src.path(), dst.path())])).expect("sync should succeed");

    assert_eq!(
        entry_names(dst.path()),
        vec!["00001__a.jpg", "00002__c.jpg", "00003__b.jpg"]
    );
    assert_eq!(
        fs::read(dst.path().join("00001__a.jpg")).expect("read dst entry"),
        b"old",
        "existing entries must never be overwritten"
    );
}

#[test]
fn test_space_normalized_duplicates_are_skipped() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    fs::write(dst.path().join("00001__My_Song.flac"), b"old").expect("write dst entry");
    fs::write(src.path().join("My Song.flac"), b"new").expect("write source file");

    run(config_for(vec![CopyPair::new(src.path(), dst.path())])).expect("sync should succeed");

    assert_eq!(entry_names(dst.path()), vec!["00001__My_Song.flac"]);
}

#[test]
fn test_destinations_keep_independent_counters() {
    let src_a = TempDir::new().expect("create src tempdir");
    let src_b = TempDir::new().expect("create src tempdir");
    let dst_a = TempDir::new().expect("create dst tempdir");
    let dst_b = TempDir::new().expect("create dst tempdir");

    fs::write(dst_a.path().join("00041__old.jpg"), b"x").expect("write dst entry");
    fs::write(src_a.path().join("new.jpg"), b"a").expect("write source file");
    fs::write(src_b.path().join("new.jpg"), b"b").expect("write source file");

    run(config_for(vec![
        CopyPair::new(src_a.path(), dst_a.path()),
        CopyPair::new(src_b.path(), dst_b.path()),
    ]))
    .expect("sync should succeed");

    assert_eq!(
        entry_names(dst_a.path()),
        vec!["00041__old.jpg", "00042__new.jpg"]
    );
    assert_eq!(entry_names(dst_b.path()), vec!["00001__new.jpg"]);
}

#[test]
fn test_sources_sharing_a_destination_share_one_sequence() {
    let src_a = TempDir::new().expect("create src tempdir");
    let src_b = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    fs::write(src_a.path().join("one.jpg"), b"1").expect("write source file");
    fs::write(src_b.path().join("two.jpg"), b"2").expect("write source file");

    run(config_for(vec![
        CopyPair::new(src_a.path(), dst.path()),
        CopyPair::new(src_b.path(), dst.path()),
    ]))
    .expect("sync should succeed");

    assert_eq!(
        entry_names(dst.path()),
        vec!["00001__one.jpg", "00002__two.jpg"]
    );
}

#[test]
fn test_dry_run_makes_no_changes() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    fs::write(src.path().join("a.jpg"), b"aa").expect("write source file");

    let mut config = config_for(vec![CopyPair::new(src.path(), dst.path())]);
    config.dry_run = true;
    run(config).expect("dry-run should succeed");

    assert!(
        entry_names(dst.path()).is_empty(),
        "dry-run must not copy anything"
    );
}

#[test]
fn test_dry_run_reports_exactly_what_execution_does() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    fs::write(dst.path().join("00002__kept.jpg"), b"x").expect("write dst entry");
    fs::write(src.path().join("kept.jpg"), b"k").expect("write source file");
    fs::write(src.path().join("fresh one.jpg"), b"f").expect("write source file");

    let pairs = vec![CopyPair::new(src.path(), dst.path())];

    // Same snapshot, planned twice: the dry-run plan and the plan that a
    // real run would execute must match task for task.
    let mut dry_index = DestinationIndex::scan(&pairs).expect("scan for dry-run");
    let dry_plan = build_plan(&pairs, &[], &mut dry_index).expect("build dry-run plan");

    let mut real_index = DestinationIndex::scan(&pairs).expect("scan for real run");
    let real_plan = build_plan(&pairs, &[], &mut real_index).expect("build real plan");

    assert_eq!(dry_plan, real_plan);

    run(config_for(pairs)).expect("real run should succeed");
    for task in &real_plan.tasks {
        assert!(
            task.destination.exists(),
            "planned destination missing after execution: {}",
            task.destination.display()
        );
    }
    assert_eq!(
        entry_names(dst.path()),
        vec!["00002__kept.jpg", "00003__fresh_one.jpg"]
    );
}

#[test]
fn test_ignore_list_applies_to_every_source() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    fs::write(src.path().join("photo.jpg"), b"p").expect("write source file");
    fs::write(src.path().join("Thumbs.db"), b"junk").expect("write junk file");

    let mut config = config_for(vec![CopyPair::new(src.path(), dst.path())]);
    config.ignore = vec!["Thumbs.db".to_string()];
    run(config).expect("sync should succeed");

    assert_eq!(entry_names(dst.path()), vec!["00001__photo.jpg"]);
}

#[test]
fn test_missing_source_folder_aborts_before_any_copy() {
    let dst = TempDir::new().expect("create dst tempdir");
    let missing = dst.path().join("no-such-source");

    let error = run(config_for(vec![CopyPair::new(&missing, dst.path())]))
        .expect_err("missing folder must abort the run");

    match error {
        SequinError::MissingFolder { path } => assert_eq!(path, missing),
        other => panic!("expected MissingFolder, got {other:?}"),
    }
    assert!(entry_names(dst.path()).is_empty());
}

#[test]
fn test_unmanaged_destination_entries_do_not_block_sync() {
    let src = TempDir::new().expect("create src tempdir");
    let dst = TempDir::new().expect("create dst tempdir");

    // A plain (unindexed) copy of the same name is inert: it neither blocks
    // the new copy nor feeds the dedup set.
    fs::write(dst.path().join("a.jpg"), b"stray").expect("write stray dst entry");
    fs::write(src.path().join("a.jpg"), b"aa").expect("write source file");

    run(config_for(vec![CopyPair::new(src.path(), dst.path())])).expect("sync should succeed");

    assert_eq!(entry_names(dst.path()), vec!["00001__a.jpg", "a.jpg"]);
}
