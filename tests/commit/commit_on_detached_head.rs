use crate::common;
use crate::common::command::{commit_and_get_hash, repository_dir, run_cvs_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

// A detached HEAD resolves its parent through the commit it names, and the new
// commit lands in a ref file named after that hash while HEAD stays put.
#[rstest]
fn commit_on_detached_head(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_cvs_command(dir, &["init"]).assert().success();

    std::fs::write(dir.join("a.txt"), "1").unwrap();
    run_cvs_command(dir, &["add", "."]).assert().success();
    let first = commit_and_get_hash(dir, "first");

    std::fs::write(dir.join("a.txt"), "2").unwrap();
    run_cvs_command(dir, &["add", "."]).assert().success();
    let second = commit_and_get_hash(dir, "second");

    run_cvs_command(dir, &["checkout", &second])
        .assert()
        .success();
    std::fs::write(dir.join("a.txt"), "3").unwrap();
    run_cvs_command(dir, &["add", "."]).assert().success();
    let third = commit_and_get_hash(dir, "third");

    let content = common::read_metadata(dir, &format!("objects/commits/{third}"));
    assert_eq!(content.lines().nth(1).unwrap(), format!("parent {first}"));
    assert_eq!(common::read_metadata(dir, "HEAD"), second);
    assert_eq!(common::read_metadata(dir, &format!("refs/{second}")), third);
    assert_eq!(common::read_metadata(dir, "refs/master"), second);
}
