use crate::common;
use crate::common::command::{
    commit_and_get_hash, init_repository_dir, repository_dir, run_cvs_command, stdout_of,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use cvs::artifacts::objects::blob::Blob;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn checkout_commit_restores_files(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_cvs_command(dir, &["init"]).assert().success();

    std::fs::write(dir.join("a.txt"), "1")?;
    run_cvs_command(dir, &["add", "a.txt"]).assert().success();
    let first = commit_and_get_hash(dir, "first");

    std::fs::write(dir.join("a.txt"), "2")?;
    run_cvs_command(dir, &["add", "a.txt"]).assert().success();
    commit_and_get_hash(dir, "second");

    let output = stdout_of(&mut run_cvs_command(dir, &["checkout", &first]));
    assert_eq!(output, format!("HEAD is now at {}\n", &first[..7]));

    assert_eq!(read_file(&dir.join("a.txt")), "1");
    assert_eq!(common::read_metadata(dir, "HEAD"), first);

    let blob = Blob::from_content(Path::new("a.txt"), b"1")?;
    assert_eq!(common::read_metadata(dir, "index"), blob.index_line());

    Ok(())
}

#[rstest]
fn checkout_recreates_nested_directories(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = common::read_metadata(dir, "refs/master");

    std::fs::remove_dir_all(dir.join("a")).unwrap();
    std::fs::write(dir.join("untracked.txt"), "keep me").unwrap();

    run_cvs_command(dir, &["checkout", &first])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a/2.txt")), "two");
    assert_eq!(read_file(&dir.join("a/b/3.txt")), "three");
    assert_eq!(read_file(&dir.join("untracked.txt")), "keep me");

    let index = common::read_metadata(dir, "index");
    let paths = index
        .lines()
        .map(|line| line.rsplit_once(' ').unwrap().0)
        .collect::<Vec<_>>();
    assert_eq!(paths, vec!["1.txt", "a/2.txt", "a/b/3.txt"]);
}
