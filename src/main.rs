use clap::Parser;
use git_prompt::artifacts::status::status_probe::StatusProbe;
use git_prompt::commands::prompt::Prompt;
use std::ffi::OsString;

/// The prompt takes no options: whatever the shell passes is accepted and
/// ignored, so the output is always the prompt line or nothing.
#[derive(Parser)]
#[command(
    name = "git-prompt",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Print a colorized zsh prompt segment with the current git branch",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(
        index = 1,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    ignored: Vec<OsString>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match Cli::try_parse() {
        Ok(cli) if !cli.ignored.is_empty() => {
            git_prompt::debug_log!("ignoring arguments: {:?}", cli.ignored);
        }
        Ok(_) => {}
        // a prompt must never print an error into the shell
        Err(e) => {
            git_prompt::debug_log!("ignoring unparsable arguments: {}", e);
        }
    }

    let working_path = match std::env::current_dir() {
        Ok(path) => path,
        Err(e) => {
            git_prompt::debug_log!("failed to read the working directory: {}", e);
            return;
        }
    };

    let mut prompt = Prompt::new(Box::new(std::io::stdout()), StatusProbe::default());
    if let Err(e) = prompt.run(&working_path).await {
        git_prompt::debug_log!("no prompt for {:?}: {:#}", working_path, e);
    }
}
