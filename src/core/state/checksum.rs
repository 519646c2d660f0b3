use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::{Digest, Md5};

use crate::core::error::{SelectorError, SelectorResult};

const CHUNK_SIZE: usize = 8192;

/// MD5 of a jar's full contents, stored raw in the decision file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JarChecksum([u8; 16]);

impl JarChecksum {
    pub fn of_file(path: &Path) -> SelectorResult<Self> {
        let io_err = |source| SelectorError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::open(path).map_err(io_err)?;
        let mut hasher = Md5::new();
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let read = file.read(&mut chunk).map_err(io_err)?;
            if read == 0 {
                break;
            }
            hasher.update(&chunk[..read]);
        }

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&hasher.finalize());
        Ok(Self(bytes))
    }

    #[cfg(test)]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for JarChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
