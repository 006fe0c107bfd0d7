use assert_fs::prelude::*;
use unaccent::{sanitize_tree, Config, Relocator, Transliterator};

#[test]
fn dry_run_reports_plans_but_touches_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("ääkkönen.jpg").write_str("a").unwrap();
    temp.child("straße.pdf").write_str("b").unwrap();
    temp.child("plain.txt").write_str("c").unwrap();

    let cfg = Config { dry_run: true, ..Default::default() };
    let rules = cfg.rules();
    let translit = Transliterator::new(rules.clone());
    let relocator = Relocator::new(rules);

    let summary = sanitize_tree(&cfg, &translit, &relocator, temp.path()).unwrap();

    assert_eq!(summary.renamed, 2, "dry-run counts what would be renamed");
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.failed, 0);

    // Nothing moved.
    assert!(temp.path().join("ääkkönen.jpg").is_file());
    assert!(temp.path().join("straße.pdf").is_file());
    assert!(!temp.path().join("aakkonen.jpg").exists());
    assert!(!temp.path().join("strasse.pdf").exists());
}
