//! External command execution.
//!
//! Every git call goes through a [`Runner`] so the workflow logic can be
//! exercised without spawning real processes. Arguments are always handed to
//! the OS as a discrete list; nothing is ever interpolated into a shell string.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured result of a command whose output the caller needs to inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful result with the given stdout.
    pub fn ok(stdout: &str) -> Self {
        Self {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// A failed result with the given stderr.
    pub fn failed(stderr: &str) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

/// Trait for running external programs.
pub trait Runner {
    /// Run a program with the terminal's stdio attached.
    ///
    /// A non-zero exit status is an error.
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()>;

    /// Run a program and capture its output.
    ///
    /// A non-zero exit status is reported through [`CommandOutput::success`],
    /// only a failure to spawn is an error.
    fn capture(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput>;
}

fn describe(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()> {
        let description = describe(program, args);
        log::debug!("running `{}` in {}", description, dir.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to run {}", description))?;

        if !status.success() {
            anyhow::bail!("{} failed: {}", description, status);
        }

        Ok(())
    }

    fn capture(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput> {
        let description = describe(program, args);
        log::debug!("capturing `{}` in {}", description, dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .with_context(|| format!("Failed to run {}", description))?;

        log::debug!("`{}` exited with {}", description, output.status);

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// A single recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub dir: PathBuf,
    /// True when the call went through [`Runner::run`] rather than `capture`.
    pub inherited: bool,
}

impl Invocation {
    /// The command line as a single string, for assertions.
    pub fn command_line(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        describe(&self.program, &args)
    }
}

/// Runner that records invocations and replays scripted results.
///
/// Results are consumed in call order. When the script runs out, `run`
/// succeeds and `capture` returns a successful empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    results: RefCell<VecDeque<CommandOutput>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that replays the given results in order.
    pub fn with_results(results: Vec<CommandOutput>) -> Self {
        Self {
            invocations: RefCell::new(Vec::new()),
            results: RefCell::new(results.into()),
        }
    }

    /// All invocations seen so far.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Command lines of all invocations seen so far.
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }

    fn record(&self, program: &str, args: &[&str], dir: &Path, inherited: bool) -> CommandOutput {
        self.invocations.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            dir: dir.to_path_buf(),
            inherited,
        });
        self.results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| CommandOutput::ok(""))
    }
}

impl Runner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()> {
        let output = self.record(program, args, dir, true);
        if !output.success {
            anyhow::bail!("{} failed: {}", describe(program, args), output.stderr);
        }
        Ok(())
    }

    fn capture(&self, program: &str, args: &[&str], dir: &Path) -> Result<CommandOutput> {
        Ok(self.record(program, args, dir, false))
    }
}
