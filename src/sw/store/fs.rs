use super::KeyringStore;
use crate::error::{Result, SwError};
use crate::model::Keyring;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Keyring stored as a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(SwError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyringStore for FileStore {
    fn load(&self) -> Result<Keyring> {
        self.ensure_dir()?;

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no keyring at {}, starting empty", self.path.display());
                return Ok(Keyring::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::debug!("keyring at {} is not UTF-8, ignoring it", self.path.display());
                return Ok(Keyring::new());
            }
            Err(e) => return Err(SwError::Io(e)),
        };

        match serde_json::from_str::<Keyring>(&content) {
            Ok(keyring) => {
                tracing::debug!(
                    "loaded {} entries from {}",
                    keyring.len(),
                    self.path.display()
                );
                Ok(keyring)
            }
            Err(e) => {
                tracing::debug!(
                    "keyring at {} is malformed ({}), ignoring it",
                    self.path.display(),
                    e
                );
                Ok(Keyring::new())
            }
        }
    }

    fn save(&mut self, keyring: Keyring) -> Result<Keyring> {
        self.ensure_dir()?;

        // Write beside the target and rename over it so a failed write never
        // leaves a truncated keyring behind.
        let content = serde_json::to_string(&keyring).map_err(SwError::Serialization)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(SwError::Io)?;
        fs::rename(&tmp, &self.path).map_err(SwError::Io)?;

        tracing::debug!("saved {} entries to {}", keyring.len(), self.path.display());
        Ok(keyring)
    }
}
