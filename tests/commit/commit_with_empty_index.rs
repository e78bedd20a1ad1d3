use crate::common;
use crate::common::command::{cvs_commit, repository_dir, run_cvs_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_with_empty_index(repository_dir: TempDir) {
    run_cvs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    cvs_commit(repository_dir.path(), "nothing")
        .assert()
        .success()
        .stdout("Nothing to commit - index is empty\n");

    assert_eq!(common::read_metadata(repository_dir.path(), "refs/master"), "root");
    let commits = std::fs::read_dir(repository_dir.path().join(".cvs/objects/commits"))
        .unwrap()
        .count();
    assert_eq!(commits, 0);
}
