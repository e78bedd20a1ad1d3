use crate::common;
use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;

#[test]
fn init_repository_successfully() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("cvs")?;

    sut.arg("init").arg(dir.path());

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert_eq!(common::read_metadata(dir.path(), "HEAD"), "master");
    assert_eq!(common::read_metadata(dir.path(), "refs/master"), "root");
    assert_eq!(common::read_metadata(dir.path(), "index"), "");
    assert!(dir.path().join(".cvs/objects/commits").is_dir());
    assert!(dir.path().join(".cvs/objects/trees").is_dir());

    Ok(())
}
