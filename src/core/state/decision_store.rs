use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::{SelectorError, SelectorResult};
use crate::core::java::RuntimeName;

use super::JarChecksum;

/// Raw MD5 of the jar the user was last asked about.
pub const DECISION_FILE: &str = "disable_prompt_for_java_version";
/// Runtime label the user picked over the detected one.
pub const OVERRIDE_FILE: &str = ".docker_overwrite";

/// The two files that remember a user's answer between boots.
#[derive(Debug, Clone)]
pub struct DecisionStore {
    dir: PathBuf,
}

impl DecisionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn decision_path(&self) -> PathBuf {
        self.dir.join(DECISION_FILE)
    }

    pub fn override_path(&self) -> PathBuf {
        self.dir.join(OVERRIDE_FILE)
    }

    /// True unless the stored checksum equals `checksum`.
    pub fn needs_prompt(&self, checksum: &JarChecksum) -> SelectorResult<bool> {
        match read_optional(&self.decision_path())? {
            Some(stored) => Ok(stored.as_slice() != checksum.as_bytes()),
            None => Ok(true),
        }
    }

    pub fn record_decision(&self, checksum: &JarChecksum) -> SelectorResult<()> {
        debug!("Recording decision for jar {}", checksum);
        write(&self.decision_path(), checksum.as_bytes())
    }

    /// Raw override text, trimmed. Not validated against known runtimes.
    pub fn read_override(&self) -> SelectorResult<Option<String>> {
        let bytes = read_optional(&self.override_path())?;
        Ok(bytes.map(|b| String::from_utf8_lossy(&b).trim().to_string()))
    }

    pub fn write_override(&self, name: RuntimeName) -> SelectorResult<()> {
        write(&self.override_path(), name.label().as_bytes())
    }

    pub fn clear_override(&self) -> SelectorResult<()> {
        let path = self.override_path();
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SelectorError::Io { path, source }),
        }
    }
}

fn read_optional(path: &Path) -> SelectorResult<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SelectorError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write(path: &Path, bytes: &[u8]) -> SelectorResult<()> {
    std::fs::write(path, bytes).map_err(|source| SelectorError::Io {
        path: path.to_path_buf(),
        source,
    })
}
