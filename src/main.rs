use anyhow::Result;
use clap::{Parser, Subcommand};
use cvs::areas::repository::Repository;
use cvs::logging::init_tracing;
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cvs",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal local version control system",
    long_about = "Stages files into an index, snapshots them into commits identified by \
    a Merkle tree hash, and restores any commit back into the working tree.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage a file or directory",
        long_about = "This command stages a file, or every file beneath a directory, \
        then drops index entries whose file is gone or ignored."
    )]
    Add {
        #[arg(index = 1, help = "The file or directory to stage")]
        path: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command snapshots the index into a new commit with the specified message."
    )]
    Commit {
        #[arg(index = 1, required_unless_present = "message", help = "The commit message")]
        text: Option<String>,
        #[arg(short, long, conflicts_with = "text", help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "log", about = "Show the commit history from HEAD")]
    Log,
    #[command(name = "status", about = "Compare the working tree with the index")]
    Status,
    #[command(
        name = "checkout",
        about = "Restore a commit into the working tree",
        long_about = "This command restores the files of a commit, replaces the index \
        with them and detaches HEAD onto the commit."
    )]
    Checkout {
        #[arg(index = 1, help = "The full hash of the commit")]
        hash: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;
    colored::control::set_override(std::io::stdout().is_terminal());

    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => {
                    let path = PathBuf::from(path);
                    std::fs::create_dir_all(&path)?;
                    path
                }
                None => pwd,
            };

            open_repository(&path)?.init()?
        }
        Commands::Add { path } => open_repository(&pwd)?.stage(Path::new(path))?,
        Commands::Commit { text, message } => {
            let message = message.as_deref().or(text.as_deref()).unwrap_or_default();

            open_repository(&pwd)?.commit(message)?;
        }
        Commands::Log => {
            open_repository(&pwd)?.log()?;
        }
        Commands::Status => {
            open_repository(&pwd)?.status()?;
        }
        Commands::Checkout { hash } => {
            open_repository(&pwd)?.checkout(hash)?;
        }
    }

    Ok(())
}

fn open_repository(path: &Path) -> Result<Repository> {
    Ok(Repository::new(path, Box::new(std::io::stdout()))?)
}
