// ─── Version Name Resolver ───
// Picks the runtime for a jar: paper metadata first, then the highest class
// version among embedded game classes, then the manifest's main class.

use tracing::{debug, info, warn};

use crate::core::archive::{main_class_entry, probe_class_version, JarArchive};
use crate::core::error::SelectorResult;

use super::{paper, RuntimeName};

/// Package prefixes of the game server classes shipped inside wrapper jars.
const EMBEDDED_SERVER_PREFIXES: [&str; 2] = ["net/minecraft/", "com/mojang/"];

/// Resolves the runtime for an opened jar, or `None` if nothing could be read.
///
/// Callers substitute their configured default for `None`.
pub fn resolve_runtime_name(archive: &mut JarArchive) -> Option<RuntimeName> {
    if let Some(name) = paper::recommended_runtime(archive) {
        return Some(name);
    }

    match required_class_major(archive) {
        Ok(major) => {
            let name = RuntimeName::for_class_major(major);
            info!(
                "{} needs class version {} -> {}",
                archive.path().display(),
                major,
                name
            );
            Some(name)
        }
        Err(e) => {
            warn!(
                "Couldn't read class versions from {}: {}",
                archive.path().display(),
                e
            );
            None
        }
    }
}

/// Highest class major version the jar needs.
///
/// Embedded game classes are preferred over the wrapper's own main class,
/// since wrappers are often built with an older toolchain than what they launch.
pub fn required_class_major(archive: &mut JarArchive) -> SelectorResult<u16> {
    if let Some(major) = embedded_server_major(archive)? {
        return Ok(major);
    }

    let entry = main_class_entry(archive)?;
    debug!("No embedded server classes, probing main class {}", entry);
    Ok(probe_class_version(archive, &entry)?.major)
}

fn embedded_server_major(archive: &mut JarArchive) -> SelectorResult<Option<u16>> {
    let entries: Vec<String> = archive
        .entry_names()
        .into_iter()
        .filter(|name| is_embedded_server_class(name))
        .collect();
    debug!("Found {} embedded server classes", entries.len());

    let mut highest: Option<u16> = None;
    for entry in &entries {
        let major = probe_class_version(archive, entry)?.major;
        highest = Some(highest.map_or(major, |current| current.max(major)));
    }

    Ok(highest)
}

fn is_embedded_server_class(name: &str) -> bool {
    name.ends_with(".class")
        && EMBEDDED_SERVER_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
}
