//! Command dispatch trait for keeping main.rs small
//!
//! Every command resolves to exactly one handler in `cmd`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

use crate::cli::{
    join_words, AddCommands, AskCommands, Cli, CodingCommands, Commands, GetCommands,
    GitCommands, RemoveCommands, RepoCommands, TaskCommands,
};
use crate::cmd;

/// Trait for executing CLI commands
pub trait Execute {
    /// Execute the command and return a result
    fn execute(self) -> Result<()>;
}

impl Execute for Commands {
    fn execute(self) -> Result<()> {
        match self {
            Commands::Git { command } => match command {
                GitCommands::Repo {
                    command: RepoCommands::Here,
                } => cmd::git::cmd_repo_here(),
                GitCommands::Add => cmd::git::cmd_add(),
                GitCommands::Commit { message } => cmd::git::cmd_commit(message),
                GitCommands::Push => cmd::git::cmd_push(),
            },
            Commands::Task {
                command: TaskCommands::List,
            } => cmd::task::cmd_list(),
            Commands::Add {
                command: AddCommands::Task { text },
            } => cmd::task::cmd_add(join_words(text)),
            Commands::Remove {
                command: RemoveCommands::Task { index },
            } => cmd::task::cmd_remove(index),
            Commands::Get {
                command:
                    GetCommands::Coding {
                        command: CodingCommands::Time,
                    },
            } => cmd::stats::cmd_coding_time(),
            Commands::Ask {
                command: AskCommands::Ai { question },
            } => cmd::ai::cmd_ask(join_words(question)),
            Commands::Completion { shell } => {
                let mut command = Cli::command();
                generate(shell, &mut command, "helper", &mut io::stdout());
                Ok(())
            }
            Commands::Version { verbose } => cmd_version(verbose),
        }
    }
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("helper {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}
