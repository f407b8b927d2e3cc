//! API key storage in INI config files.
//!
//! Each file holds at most one key: `api_key` under `[settings]`.

use anyhow::{Context, Result};
use ini::Ini;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

pub const SETTINGS_SECTION: &str = "settings";
pub const API_KEY: &str = "api_key";

/// One INI file holding a single API key.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored key.
    ///
    /// A missing file, section or key, or a blank value, all yield `None`.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            log::debug!("no credential file at {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config from {}", self.path.display()))?;
        let ini = Ini::load_from_str(&content)
            .with_context(|| format!("Failed to parse config {}", self.path.display()))?;

        let key = ini
            .section(Some(SETTINGS_SECTION))
            .and_then(|settings| settings.get(API_KEY))
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        log::debug!(
            "credential file {} {} an api key",
            self.path.display(),
            if key.is_some() { "has" } else { "lacks" }
        );
        Ok(key)
    }

    /// Write `key` as the only content of the file, replacing anything there.
    ///
    /// The file is owner-readable only before the key is written.
    pub fn save(&self, key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut ini = Ini::new();
        ini.with_section(Some(SETTINGS_SECTION)).set(API_KEY, key);

        let mut file = create_private(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        ini.write_to(&mut file)
            .with_context(|| format!("Failed to write config to {}", self.path.display()))?;

        Ok(())
    }
}

/// Create or truncate `path` with mode 0600, tightening an existing file too.
#[cfg(unix)]
fn create_private(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> io::Result<File> {
    File::create(path)
}
