use tracing::debug;

use crate::core::error::{SelectorError, SelectorResult};

use super::JarArchive;

const CLASS_MAGIC: [u8; 4] = [0xCA, 0xFE, 0xBA, 0xBE];

/// Version pair from the fixed header of a compiled class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassVersion {
    pub major: u16,
    pub minor: u16,
}

impl ClassVersion {
    /// Parses the 8-byte header: magic, then minor, then major (both big-endian).
    pub fn from_header(entry: &str, header: [u8; 8]) -> SelectorResult<Self> {
        let magic = [header[0], header[1], header[2], header[3]];
        if magic != CLASS_MAGIC {
            return Err(SelectorError::InvalidMagic {
                entry: entry.to_string(),
                found: magic,
            });
        }

        Ok(Self {
            minor: u16::from_be_bytes([header[4], header[5]]),
            major: u16::from_be_bytes([header[6], header[7]]),
        })
    }
}

pub fn probe_class_version(archive: &mut JarArchive, entry: &str) -> SelectorResult<ClassVersion> {
    let header = archive.read_entry_prefix::<8>(entry)?;
    let version = ClassVersion::from_header(entry, header)?;
    debug!(
        "{} compiled for class version {}.{}",
        entry, version.major, version.minor
    );
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{class_bytes, JarBuilder};

    #[test]
    fn reads_major_from_last_two_bytes() {
        let header = [0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x03, 0x00, 0x3D];
        let version = ClassVersion::from_header("A.class", header).unwrap();
        assert_eq!(version, ClassVersion { major: 61, minor: 3 });
    }

    #[test]
    fn major_is_unsigned_big_endian() {
        let header = [0xCA, 0xFE, 0xBA, 0xBE, 0xFF, 0xFF, 0x80, 0x01];
        let version = ClassVersion::from_header("A.class", header).unwrap();
        assert_eq!(version.major, 0x8001);
        assert_eq!(version.minor, 0xFFFF);
    }

    #[test]
    fn wrong_magic_is_rejected() {
        for magic in [[0xCA, 0xFE, 0xBA, 0xBF], [0, 0, 0, 0], [0xBE, 0xBA, 0xFE, 0xCA]] {
            let mut header = [0u8; 8];
            header[..4].copy_from_slice(&magic);
            header[7] = 52;
            match ClassVersion::from_header("A.class", header) {
                Err(SelectorError::InvalidMagic { entry, found }) => {
                    assert_eq!(entry, "A.class");
                    assert_eq!(found, magic);
                }
                other => panic!("expected InvalidMagic, got {other:?}"),
            }
        }
    }

    #[test]
    fn probes_class_inside_jar() {
        let dir = tempfile::tempdir().unwrap();
        let jar = JarBuilder::new()
            .entry("org/example/Main.class", class_bytes(52))
            .write_to(dir.path(), "server.jar");

        let mut archive = JarArchive::open(&jar).unwrap();
        let version = probe_class_version(&mut archive, "org/example/Main.class").unwrap();
        assert_eq!(version.major, 52);
        assert_eq!(version.minor, 0);
    }

    #[test]
    fn probing_missing_class_fails() {
        let dir = tempfile::tempdir().unwrap();
        let jar = JarBuilder::new()
            .entry("a.txt", "a")
            .write_to(dir.path(), "server.jar");

        let mut archive = JarArchive::open(&jar).unwrap();
        assert!(matches!(
            probe_class_version(&mut archive, "Main.class"),
            Err(SelectorError::EntryNotFound(_))
        ));
    }
}
