//! CLI argument definitions for helper.
//!
//! Commands read as short phrases (`helper git repo here`,
//! `helper add task ...`), so each word after the first is a nested
//! subcommand.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "helper")]
#[command(version)]
#[command(about = "Everyday developer shortcuts: git, tasks, coding time, AI", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    helper git repo here        Initialize git and connect GitHub\n    helper add task buy milk    Add a task\n    helper task list            Show tasks\n    helper ask ai               Ask a question"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print debug logs to stderr (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Git shortcuts for the current directory
    Git {
        #[command(subcommand)]
        command: GitCommands,
    },
    /// Show tasks
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Add a task
    Add {
        #[command(subcommand)]
        command: AddCommands,
    },
    /// Remove a task
    Remove {
        #[command(subcommand)]
        command: RemoveCommands,
    },
    /// Fetch coding statistics
    Get {
        #[command(subcommand)]
        command: GetCommands,
    },
    /// Ask a question
    Ask {
        #[command(subcommand)]
        command: AskCommands,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Show commit and build date
        #[arg(long)]
        verbose: bool,
    },
}

#[derive(Subcommand)]
pub enum GitCommands {
    /// Repository setup
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
    /// Choose which files in this directory to stage
    Add,
    /// Stage everything and commit (offers to ignore .env first)
    Commit {
        /// Commit message (prompted for when omitted)
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Push the current branch to origin and set upstream
    Push,
}

#[derive(Subcommand)]
pub enum RepoCommands {
    /// Initialize git here and connect a GitHub origin
    Here,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List all tasks
    List,
}

#[derive(Subcommand)]
pub enum AddCommands {
    /// Append a task to the list
    Task {
        /// Task text (prompted for when omitted)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum RemoveCommands {
    /// Remove a task by its number in `task list`
    Task {
        /// 1-based task number (prompted for when omitted)
        index: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum GetCommands {
    /// Coding statistics
    Coding {
        #[command(subcommand)]
        command: CodingCommands,
    },
}

#[derive(Subcommand)]
pub enum CodingCommands {
    /// Total coding time from WakaTime
    Time,
}

#[derive(Subcommand)]
pub enum AskCommands {
    /// Ask the chat-completion API
    Ai {
        /// Question text (prompted for when omitted)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        question: Vec<String>,
    },
}

/// Join positional words back into one string; `None` when there were none.
pub fn join_words(words: Vec<String>) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
