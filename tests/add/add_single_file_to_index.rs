use crate::common;
use crate::common::command::{repository_dir, run_cvs_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use cvs::artifacts::objects::blob::Blob;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn add_single_file_to_index(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_cvs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = write_generated_files(repository_dir.path(), 2);
    let staged = &files[0];
    let file_name = staged.path.file_name().unwrap().to_string_lossy().to_string();

    run_cvs_command(repository_dir.path(), &["add", &file_name])
        .assert()
        .success();

    let expected = Blob::from_content(Path::new(&file_name), staged.content.as_bytes())?;
    assert_eq!(
        common::read_metadata(repository_dir.path(), "index"),
        expected.index_line()
    );

    let stored = std::fs::read(
        repository_dir
            .path()
            .join(".cvs/objects")
            .join(expected.oid().as_ref()),
    )?;
    assert_eq!(stored.as_slice(), expected.compressed().as_ref());

    Ok(())
}
