use crate::error::{Result, SwError};
use directories::BaseDirs;
use std::env;
use std::path::PathBuf;

const DATA_DIR: &str = ".sw";
const KEYRING_FILENAME: &str = "keyring.json";
const DEFAULT_SSH_PROGRAM: &str = "ssh";

/// Overrides the storage directory (the keyring lives at `$SW_HOME/keyring.json`).
pub const HOME_ENV: &str = "SW_HOME";
/// Overrides the ssh client program.
pub const SSH_ENV: &str = "SW_SSH";

/// Where the keyring lives and which ssh client to call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwConfig {
    pub keyring_path: PathBuf,
    pub ssh_program: String,
}

impl SwConfig {
    pub fn new(keyring_path: PathBuf, ssh_program: impl Into<String>) -> Self {
        Self {
            keyring_path,
            ssh_program: ssh_program.into(),
        }
    }

    /// Resolve from `SW_HOME` / `SW_SSH`, falling back to `~/.sw/keyring.json`
    /// and `ssh`.
    pub fn from_env() -> Result<Self> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::resolve(
            non_empty_var(HOME_ENV).map(PathBuf::from),
            non_empty_var(SSH_ENV),
            home,
        )
    }

    fn resolve(
        data_dir_override: Option<PathBuf>,
        ssh_override: Option<String>,
        home: Option<PathBuf>,
    ) -> Result<Self> {
        let data_dir = match data_dir_override {
            Some(dir) => dir,
            None => home
                .ok_or_else(|| SwError::Config("Could not determine home directory".to_string()))?
                .join(DATA_DIR),
        };

        Ok(Self::new(
            data_dir.join(KEYRING_FILENAME),
            ssh_override.unwrap_or_else(|| DEFAULT_SSH_PROGRAM.to_string()),
        ))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
