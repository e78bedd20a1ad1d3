use crate::common;
use crate::common::command::{repository_dir, run_cvs_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_twice_fails(repository_dir: TempDir) {
    run_cvs_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    std::fs::write(repository_dir.path().join(".cvs/HEAD"), "elsewhere").unwrap();

    run_cvs_command(repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));

    // the existing metadata is left untouched
    assert_eq!(common::read_metadata(repository_dir.path(), "HEAD"), "elsewhere");
}
