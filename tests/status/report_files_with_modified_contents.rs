use crate::common::command::{init_repository_dir, run_cvs_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join("a/b/3.txt"), "drei").unwrap();
    std::fs::write(dir.join("4.txt"), "four").unwrap();

    let expected_output = "HEAD -> master\n\
        Changes not staged for commit:\n\
        new file: 4.txt\n\
        modified: a/b/3.txt\n\
        \n\
        Index contents:\n\
        1.txt\n\
        a/2.txt\n\
        a/b/3.txt\n";
    let actual_output = stdout_of(&mut run_cvs_command(dir, &["status"]));

    assert_eq!(actual_output, expected_output);
}
