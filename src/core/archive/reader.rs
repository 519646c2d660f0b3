use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::core::error::{SelectorError, SelectorResult};

/// An opened jar. The file handle lives exactly as long as this value.
pub struct JarArchive {
    path: PathBuf,
    inner: ZipArchive<File>,
}

impl JarArchive {
    pub fn open(path: &Path) -> SelectorResult<Self> {
        let file = File::open(path).map_err(|source| SelectorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let inner = ZipArchive::new(file)?;
        debug!("Opened {} with {} entries", path.display(), inner.len());

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_names(&self) -> Vec<String> {
        self.inner.file_names().map(str::to_string).collect()
    }

    pub fn read_entry(&mut self, name: &str) -> SelectorResult<Vec<u8>> {
        self.with_entry(name, |entry| {
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            Ok(bytes)
        })
    }

    /// Reads the entry as UTF-8 text. Invalid bytes are an error, not replaced.
    pub fn read_entry_text(&mut self, name: &str) -> SelectorResult<String> {
        let bytes = self.read_entry(name)?;
        String::from_utf8(bytes).map_err(|source| SelectorError::InvalidText {
            entry: name.to_string(),
            source,
        })
    }

    /// Reads exactly `N` bytes from the start of the entry.
    pub fn read_entry_prefix<const N: usize>(&mut self, name: &str) -> SelectorResult<[u8; N]> {
        self.with_entry(name, |entry| {
            let mut buf = [0u8; N];
            entry.read_exact(&mut buf)?;
            Ok(buf)
        })
    }

    fn with_entry<T>(
        &mut self,
        name: &str,
        read: impl FnOnce(&mut dyn Read) -> std::io::Result<T>,
    ) -> SelectorResult<T> {
        let mut entry = self.inner.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => SelectorError::EntryNotFound(name.to_string()),
            other => SelectorError::Zip(other),
        })?;

        read(&mut entry).map_err(|source| SelectorError::Io {
            path: self.path.join(name),
            source,
        })
    }
}
