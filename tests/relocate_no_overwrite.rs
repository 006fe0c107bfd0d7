//! A file that is already correctly named must never be clobbered, even by
//! the direct attempt (std's rename overwrites on Unix).

use std::fs;
use tempfile::tempdir;
use unaccent::Relocator;

#[test]
fn existing_destination_blocks_the_rename_and_leaves_both_files() {
    let td = tempdir().unwrap();
    let old = td.path().join("ääkkönen.jpg");
    let new = td.path().join("aakkonen.jpg");
    fs::write(&old, b"accented original").unwrap();
    fs::write(&new, b"someone else's file").unwrap();

    assert!(!Relocator::default().relocate(&old, &new));

    assert_eq!(fs::read(&old).unwrap(), b"accented original");
    assert_eq!(fs::read(&new).unwrap(), b"someone else's file");
}

#[test]
fn existing_destination_also_blocks_candidate_renames() {
    let td = tempdir().unwrap();
    // Source only exists under its decomposed spelling.
    let on_disk = td.path().join("a\u{0308}.jpg");
    let old = td.path().join("\u{00E4}.jpg");
    let new = td.path().join("a.jpg");
    fs::write(&on_disk, b"decomposed").unwrap();
    fs::write(&new, b"already clean").unwrap();

    assert!(!Relocator::default().relocate(&old, &new));

    assert!(on_disk.exists(), "candidate source must stay in place");
    assert_eq!(fs::read(&new).unwrap(), b"already clean");
}
