// Integration testing drives the compiled binary as a subprocess, rooted in
// a temp directory so the real working directory is never touched.
use std::fs;

const EXPECTED_LISTING: &str = "scss
  --index.scss
  --abstracts
    ----_variables.scss
    ----_mixins.scss
  --base
    ----_reset.scss
    ----_fonts.scss
    ----_tags.scss
  --components
    ----_button.scss
  --layout
    ----_header.scss
    ----_footer.scss
";

#[test]
fn generates_the_skeleton_and_prints_the_listing() {
    let temp = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("sassling").unwrap();

    cmd.current_dir(temp.path());

    cmd.assert()
        .success()
        .stdout(predicates::str::diff(EXPECTED_LISTING));

    assert!(temp.path().join("scss").is_dir());
    assert!(temp.path().join("scss/abstracts").is_dir());
    assert!(temp.path().join("scss/base").is_dir());
    assert!(temp.path().join("scss/components").is_dir());
    assert!(temp.path().join("scss/layout").is_dir());

    let index = fs::read_to_string(temp.path().join("scss/index.scss")).unwrap();
    assert!(index.contains("@use 'abstracts/variables';"));

    let button = fs::read_to_string(temp.path().join("scss/components/_button.scss")).unwrap();
    assert!(button.contains(".button"));
}

#[test]
fn refuses_to_overwrite_an_existing_skeleton() {
    let temp = tempfile::tempdir().unwrap();

    fs::create_dir(temp.path().join("scss")).unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("sassling").unwrap();

    cmd.current_dir(temp.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("cannot overwrite existing entry at 'scss'"));

    // the pre-existing directory is untouched
    let entries: Vec<_> = fs::read_dir(temp.path().join("scss")).unwrap().collect();
    assert!(entries.is_empty());
}

#[test]
fn a_second_run_fails_without_disturbing_the_first() {
    let temp = tempfile::tempdir().unwrap();

    let mut first = assert_cmd::Command::cargo_bin("sassling").unwrap();
    first.current_dir(temp.path());
    first.assert().success();

    let index_before = fs::read_to_string(temp.path().join("scss/index.scss")).unwrap();

    let mut second = assert_cmd::Command::cargo_bin("sassling").unwrap();
    second.current_dir(temp.path());
    second.assert().failure().code(1);

    let index_after = fs::read_to_string(temp.path().join("scss/index.scss")).unwrap();
    assert_eq!(index_before, index_after);
}
