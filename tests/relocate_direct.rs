use std::fs;
use tempfile::tempdir;
use unaccent::{RenameSource, Relocator};

#[test]
fn direct_rename_succeeds_and_moves_the_file() {
    let td = tempdir().unwrap();
    let old = td.path().join("ääkkönen.jpg");
    let new = td.path().join("aakkonen.jpg");
    fs::write(&old, b"pixels").unwrap();

    let relocator = Relocator::default();
    let outcome = relocator.relocate_with_outcome(&old, &new);

    assert!(outcome.succeeded);
    assert_eq!(outcome.source, Some(RenameSource::Direct));
    assert!(new.is_file(), "file should exist at the new path");
    assert!(!old.exists(), "file should be gone from the old path");
    assert_eq!(fs::read(&new).unwrap(), b"pixels");
}

#[test]
fn bool_facade_matches_the_outcome() {
    let td = tempdir().unwrap();
    let old = td.path().join("café.txt");
    let new = td.path().join("cafe.txt");
    fs::write(&old, b"x").unwrap();

    assert!(Relocator::default().relocate(&old, &new));
    assert!(new.exists());
}
