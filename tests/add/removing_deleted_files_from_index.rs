use crate::common;
use crate::common::command::{init_repository_dir, run_cvs_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn removing_deleted_files_from_index(init_repository_dir: TempDir) {
    std::fs::remove_file(init_repository_dir.path().join("a/2.txt")).unwrap();

    run_cvs_command(init_repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    let index = common::read_metadata(init_repository_dir.path(), "index");
    let paths = index
        .lines()
        .map(|line| line.rsplit_once(' ').unwrap().0)
        .collect::<Vec<_>>();

    assert_eq!(paths, vec!["1.txt", "a/b/3.txt"]);
}
