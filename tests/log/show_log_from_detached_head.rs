use crate::common::command::{init_repository_dir, run_cvs_command, stdout_of};
use crate::common;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_from_detached_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = common::read_metadata(dir, "refs/master");

    std::fs::write(dir.join("1.txt"), "uno").unwrap();
    run_cvs_command(dir, &["add", "."]).assert().success();
    common::command::cvs_commit(dir, "Second commit")
        .assert()
        .success();

    run_cvs_command(dir, &["checkout", &first])
        .assert()
        .success();

    let output = stdout_of(&mut run_cvs_command(dir, &["log"]));
    let listed = output
        .lines()
        .filter_map(|line| line.strip_prefix("Commit - "))
        .collect::<Vec<_>>();

    assert_eq!(listed, vec![first.as_str()]);
}
