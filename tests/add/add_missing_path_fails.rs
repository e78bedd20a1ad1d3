use crate::common;
use crate::common::command::{init_repository_dir, repository_dir, run_cvs_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_missing_path_fails(init_repository_dir: TempDir) {
    let index_before = common::read_metadata(init_repository_dir.path(), "index");

    run_cvs_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid path"));

    assert_eq!(
        common::read_metadata(init_repository_dir.path(), "index"),
        index_before
    );
}

#[rstest]
fn add_outside_repository_fails(init_repository_dir: TempDir) {
    run_cvs_command(init_repository_dir.path(), &["add", ".."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid path"));
}

#[rstest]
fn add_without_repository_fails(repository_dir: TempDir) {
    let dir = repository_dir;
    std::fs::write(dir.path().join("1.txt"), "one").unwrap();

    run_cvs_command(dir.path(), &["add", "1.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find a repository"));
}
