use crate::common;
use crate::common::command::{repository_dir, run_cvs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ignored_files_are_not_staged(repository_dir: TempDir) {
    run_cvs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    for (path, content) in [
        (".ignore", "# build output\nbuild/\n*.log\n"),
        ("main.rs", "fn main() {}"),
        ("debug.log", "noise"),
        ("build/out.bin", "binary"),
        ("nested/trace.log", "nested noise"),
    ] {
        write_file(FileSpec::new(
            repository_dir.path().join(path),
            content.to_string(),
        ));
    }

    run_cvs_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    let index = common::read_metadata(repository_dir.path(), "index");
    let paths = index
        .lines()
        .map(|line| line.rsplit_once(' ').unwrap().0)
        .collect::<Vec<_>>();

    // `*` does not cross `/`, so the nested log file is still staged
    assert_eq!(paths, vec![".ignore", "main.rs", "nested/trace.log"]);
}
