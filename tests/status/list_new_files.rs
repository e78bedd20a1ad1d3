use crate::common::command::{repository_dir, run_cvs_command, stdout_of};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_new_files(repository_dir: TempDir) {
    run_cvs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let mut files = write_generated_files(repository_dir.path(), 2);
    files.sort_by(|a, b| a.path.cmp(&b.path));
    let names = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();

    let expected_output = format!(
        "HEAD -> master\nChanges not staged for commit:\nnew file: {}\nnew file: {}\n\nIndex contents:\n",
        names[0], names[1]
    );
    let actual_output = stdout_of(&mut run_cvs_command(repository_dir.path(), &["status"]));

    assert_eq!(actual_output, expected_output);
}
