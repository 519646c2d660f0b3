// ─── Paper Version Heuristic ───
// Paperclip-style jars bundle the game version they patch. When present it
// says more about the runtime the server needs than any class header does.

use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, info};

use crate::core::archive::manifest::property_value;
use crate::core::archive::JarArchive;
use crate::core::error::{SelectorError, SelectorResult};

use super::RuntimeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl FromStr for SemanticVersion {
    type Err = SelectorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || SelectorError::InvalidVersion(raw.to_string());
        // `1.17.1-R0.1-SNAPSHOT` carries a build suffix after the release.
        let release = raw.trim().split('-').next().unwrap_or_default();
        let mut parts = release.split('.');

        let number = |part: Option<&str>| -> Result<u32, SelectorError> {
            part.and_then(|p| p.parse::<u32>().ok()).ok_or_else(invalid)
        };

        let major = number(parts.next())?;
        let minor = number(parts.next())?;
        let patch = match parts.next() {
            Some(p) => Some(number(Some(p))?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

#[derive(Debug, Deserialize)]
struct PatchJson {
    version: String,
}

#[derive(Debug, Deserialize)]
struct VersionJson {
    id: String,
}

type VersionSource = fn(&mut JarArchive) -> SelectorResult<String>;

/// Metadata sources, most specific first.
const VERSION_SOURCES: [(&str, VersionSource); 3] = [
    ("patch.properties", version_from_patch_properties),
    ("patch.json", version_from_patch_json),
    ("version.json", id_from_version_json),
];

fn version_from_patch_properties(archive: &mut JarArchive) -> SelectorResult<String> {
    let text = archive.read_entry_text("patch.properties")?;
    property_value(&text, "version")
        .ok_or_else(|| SelectorError::HeaderNotFound("version".into()))
}

fn version_from_patch_json(archive: &mut JarArchive) -> SelectorResult<String> {
    let bytes = archive.read_entry("patch.json")?;
    let patch: PatchJson = serde_json::from_slice(&bytes)?;
    Ok(patch.version)
}

fn id_from_version_json(archive: &mut JarArchive) -> SelectorResult<String> {
    let bytes = archive.read_entry("version.json")?;
    let version: VersionJson = serde_json::from_slice(&bytes)?;
    Ok(version.id)
}

/// First game version any metadata source yields. Failing sources are skipped.
pub fn bundled_game_version(archive: &mut JarArchive) -> Option<SemanticVersion> {
    VERSION_SOURCES.iter().find_map(|(entry, source)| {
        match source(&mut *archive).and_then(|raw| raw.parse::<SemanticVersion>()) {
            Ok(version) => {
                debug!("{} declares game version {:?}", entry, version);
                Some(version)
            }
            Err(e) => {
                debug!("No usable version in {}: {}", entry, e);
                None
            }
        }
    })
}

/// Runtime recommended by bundled paper metadata, if the jar has any.
pub fn recommended_runtime(archive: &mut JarArchive) -> Option<RuntimeName> {
    let version = bundled_game_version(archive)?;
    let runtime = RuntimeName::for_game_version(&version);
    if let Some(name) = runtime {
        info!(
            "Paper metadata recommends {} for game version {}.{}",
            name, version.major, version.minor
        );
    }
    runtime
}
