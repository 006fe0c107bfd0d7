use assert_fs::prelude::*;
use unaccent::{sanitize_tree, Config, Relocator, Transliterator};

fn engines(cfg: &Config) -> (Transliterator, Relocator) {
    let rules = cfg.rules();
    (Transliterator::new(rules.clone()), Relocator::new(rules))
}

#[test]
fn renames_every_accented_file_in_the_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("2014/05/ääkkönen.jpg").write_str("a").unwrap();
    temp.child("2014/05/straße.pdf").write_str("b").unwrap();
    temp.child("2014/06/plain.txt").write_str("c").unwrap();

    let cfg = Config::default();
    let (translit, relocator) = engines(&cfg);
    let summary = sanitize_tree(&cfg, &translit, &relocator, temp.path()).unwrap();

    assert_eq!(summary.renamed, 2);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.failed, 0);

    assert!(temp.path().join("2014/05/aakkonen.jpg").is_file());
    assert!(temp.path().join("2014/05/strasse.pdf").is_file());
    assert!(temp.path().join("2014/06/plain.txt").is_file());
    assert!(!temp.path().join("2014/05/ääkkönen.jpg").exists());
}

#[test]
fn a_single_file_target_works_too() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("Пример.jpg");
    file.write_str("x").unwrap();

    let cfg = Config::default();
    let (translit, relocator) = engines(&cfg);
    let summary = sanitize_tree(&cfg, &translit, &relocator, file.path()).unwrap();

    assert_eq!(summary.renamed, 1);
    assert!(temp.path().join("Primer.jpg").is_file());
}

#[test]
fn colliding_destinations_keep_the_second_source_in_place() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("ä.txt").write_str("first").unwrap();
    temp.child("á.txt").write_str("second").unwrap();

    let cfg = Config::default();
    let (translit, relocator) = engines(&cfg);
    let summary = sanitize_tree(&cfg, &translit, &relocator, temp.path()).unwrap();

    assert_eq!(summary.renamed, 1);
    assert_eq!(summary.failed, 1);
    assert!(temp.path().join("a.txt").is_file());
    // Exactly one of the sources remains under its original name.
    let remaining = ["ä.txt", "á.txt"]
        .iter()
        .filter(|n| temp.path().join(n).exists())
        .count();
    assert_eq!(remaining, 1);
}

#[test]
fn lowercase_config_folds_case_as_well() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Ääkkönen.JPG").write_str("x").unwrap();

    let cfg = Config { lowercase: true, ..Default::default() };
    let (translit, relocator) = engines(&cfg);
    let summary = sanitize_tree(&cfg, &translit, &relocator, temp.path()).unwrap();

    assert_eq!(summary.renamed, 1);
    assert!(temp.path().join("aakkonen.jpg").is_file());
}

#[test]
fn max_depth_limits_the_walk() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("ä-top.txt").write_str("x").unwrap();
    temp.child("deep/nested/ä-deep.txt").write_str("y").unwrap();

    let cfg = Config { max_depth: Some(1), ..Default::default() };
    let (translit, relocator) = engines(&cfg);
    let summary = sanitize_tree(&cfg, &translit, &relocator, temp.path()).unwrap();

    assert_eq!(summary.renamed, 1);
    assert!(temp.path().join("a-top.txt").is_file());
    assert!(temp.path().join("deep/nested/ä-deep.txt").is_file());
}

#[test]
fn missing_target_is_a_typed_error() {
    let cfg = Config::default();
    let (translit, relocator) = engines(&cfg);
    let err = sanitize_tree(
        &cfg,
        &translit,
        &relocator,
        std::path::Path::new("/nonexistent/unaccent-target"),
    )
    .unwrap_err();
    let ue = err.downcast_ref::<unaccent::UnaccentError>().unwrap();
    assert_eq!(ue.code(), "target_not_found");
}
