//! # helper - a personal developer command line
//!
//! Small everyday shortcuts bundled in one binary:
//!
//! - git: initialize a repository and connect a GitHub `origin`, pick files to
//!   stage, commit everything behind a `.env` guard, push the current branch
//! - a flat to-do list stored as JSON in the home directory
//! - total coding time from a WakaTime-compatible API
//! - one-shot questions to an OpenAI-compatible chat API
//!
//! ## Modules
//!
//! - [`operations`] - business logic for every subcommand
//! - [`repository`] - task list storage
//! - [`credentials`] - API keys in INI config files
//! - [`shell`] - external command runner
//! - [`git_ops`] - low-level git wrappers
//! - [`prompt`] - interactive input
//! - [`wakatime`] / [`provider`] - remote clients
//!
//! ## Example
//!
//! ```no_run
//! use helper::config::Config;
//! use helper::operations;
//! use helper::repository::FileTaskRepository;
//!
//! let config = Config::load().expect("Failed to load config");
//! let repo = FileTaskRepository::new(config.tasks_file.clone());
//!
//! operations::add_task(&repo, "buy milk").expect("Failed to add task");
//! for line in helper::ui::format::numbered(&operations::list_tasks(&repo).unwrap()) {
//!     println!("{}", line);
//! }
//! ```

pub mod config;
pub mod credentials;
pub mod git_ops;
pub mod http;
pub mod operations;
pub mod prompt;
pub mod provider;
pub mod repository;
pub mod shell;
pub mod ui;
pub mod validation;
pub mod wakatime;
