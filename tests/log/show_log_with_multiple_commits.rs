use crate::common::command::{
    COMMIT_DATE, commit_and_get_hash, repository_dir, run_cvs_command, stdout_of,
};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_with_multiple_commits(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_cvs_command(dir, &["init"]).assert().success();

    let mut commits = Vec::new();
    for message in ["First commit", "Second commit", "Third commit"] {
        write_generated_files(dir, 1);
        run_cvs_command(dir, &["add", "."]).assert().success();
        commits.push(commit_and_get_hash(dir, message));
    }

    let output = stdout_of(&mut run_cvs_command(dir, &["log"]));
    let listed = output
        .lines()
        .filter_map(|line| line.strip_prefix("Commit - "))
        .collect::<Vec<_>>();

    let newest_first = commits.iter().rev().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(listed, newest_first);

    assert!(output.contains(&format!("parent {}\n", commits[1])));
    assert!(output.contains("parent root\n"));
    assert!(output.contains(&format!("date {COMMIT_DATE}\n\nFirst commit\n")));
}
