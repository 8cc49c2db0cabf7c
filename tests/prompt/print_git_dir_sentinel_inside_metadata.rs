use crate::common::command::{init_repository_dir, prompt_stdout};
use crate::common::prompt_output;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(&[".git"])]
#[case(&[".git", "refs", "heads"])]
#[case(&[".git", "objects"])]
fn print_git_dir_sentinel_inside_metadata(
    init_repository_dir: TempDir,
    #[case] components: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let metadata_dir = components
        .iter()
        .fold(repository_dir.path().to_path_buf(), |path, component| {
            path.join(component)
        });

    assert_eq!(prompt_stdout(&metadata_dir)?, prompt_output(".git", false));

    Ok(())
}
