use crate::common::command::{init_repository_dir, prompt_stdout, run_git_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_nothing_for_detached_head(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_git_command(repository_dir.path(), &["checkout", "--quiet", "--detach"])
        .assert()
        .success();
    // a dirty tree does not matter once HEAD has no branch
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));

    assert_eq!(prompt_stdout(repository_dir.path())?, "");

    Ok(())
}
