use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated home directory and working tree.
///
/// The binary is always run with `HELPER_HOME` pointing at the temp home, so
/// the real dotfiles are never touched.
pub struct TestHarness {
    pub home: TempDir,
    pub work: TempDir,
    #[allow(dead_code)]
    pub helper_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            home: TempDir::new().expect("Failed to create temp home"),
            work: TempDir::new().expect("Failed to create temp work dir"),
            helper_binary: PathBuf::from(env!("CARGO_BIN_EXE_helper")),
        }
    }

    pub fn home_path(&self) -> &Path {
        self.home.path()
    }

    pub fn work_path(&self) -> &Path {
        self.work.path()
    }

    #[allow(dead_code)]
    pub fn tasks_file(&self) -> PathBuf {
        self.home_path().join(".helper-tasks.json")
    }

    /// Write an INI key file into the temp home.
    #[allow(dead_code)]
    pub fn write_key(&self, file_name: &str, key: &str) {
        fs::write(
            self.home_path().join(file_name),
            format!("[settings]\napi_key = {}\n", key),
        )
        .expect("Failed to write key file");
    }

    /// Run the helper binary with the given arguments and extra environment.
    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(&self.helper_binary);
        cmd.args(args)
            .current_dir(self.work_path())
            .env("HELPER_HOME", self.home_path())
            .env("NO_COLOR", "1")
            .env_remove("HELPER_QUIET")
            .env_remove("RUST_LOG");
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to run helper binary")
    }

    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Initialize a git repository in the work dir with a local identity.
    #[allow(dead_code)]
    pub fn init_git_repo(&self) {
        let dir = self.work_path();
        git(dir, &["init"]);
        git(dir, &["config", "user.email", "test@example.com"]);
        git(dir, &["config", "user.name", "Test User"]);
        git(dir, &["config", "commit.gpgsign", "false"]);
    }
}

/// Run git in `dir`, panicking on failure, and return stdout.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
