use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

const DEFAULT_BRANCH: &str = "main";

// keeps the user's global and system git configuration out of the tests
const ISOLATED_GIT_ENV: [(&str, &str); 2] =
    [("GIT_CONFIG_GLOBAL", "/dev/null"), ("GIT_CONFIG_NOSYSTEM", "1")];

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "--quiet"])
        .assert()
        .success();

    run_git_command(
        repository_dir.path(),
        &["symbolic-ref", "HEAD", &format!("refs/heads/{DEFAULT_BRANCH}")],
    )
    .assert()
    .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_git_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    git_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_prompt_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("git-prompt").expect("Failed to find git-prompt binary");
    cmd.envs(ISOLATED_GIT_ENV);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.envs(ISOLATED_GIT_ENV);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "--quiet", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_AUTHOR_DATE", "2023-01-01 12:00:00 +0000"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_DATE", "2023-01-01 12:00:00 +0000"),
    ]);
    cmd
}

/// Run the prompt inside `dir` and return its stdout
pub fn prompt_stdout(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let assert = run_prompt_command(dir, &[]).assert().success();
    let stdout = assert.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}
