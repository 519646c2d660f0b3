use crate::core::error::{SelectorError, SelectorResult};

use super::JarArchive;

pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";
const MAIN_CLASS_HEADER: &str = "Main-Class";

/// Declared `Main-Class` of the jar, in dotted form.
pub fn main_class(archive: &mut JarArchive) -> SelectorResult<String> {
    let text = archive.read_entry_text(MANIFEST_ENTRY)?;
    manifest_header(&text, MAIN_CLASS_HEADER)
        .ok_or_else(|| SelectorError::HeaderNotFound(MAIN_CLASS_HEADER.to_string()))
}

/// Entry path of the declared main class, e.g. `org/example/Main.class`.
pub fn main_class_entry(archive: &mut JarArchive) -> SelectorResult<String> {
    let class_name = main_class(archive)?;
    Ok(class_entry_path(&class_name))
}

pub fn class_entry_path(class_name: &str) -> String {
    format!("{}.class", class_name.replace('.', "/"))
}

/// Looks up a manifest header by case-insensitive name.
///
/// Lines starting with a single space continue the previous header's value,
/// which is how long class names get wrapped at 72 bytes.
pub fn manifest_header(text: &str, key: &str) -> Option<String> {
    let mut found: Option<String> = None;
    let mut in_match = false;

    for line in text.lines() {
        if let Some(rest) = line.strip_prefix(' ') {
            if in_match {
                if let Some(value) = &mut found {
                    value.push_str(rest.trim_end());
                }
            }
            continue;
        }

        if found.is_some() {
            break;
        }

        in_match = false;
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case(key) {
                found = Some(value.trim().to_string());
                in_match = true;
            }
        }
    }

    found
}

/// Looks up a `key=value` property by case-insensitive key.
pub fn property_value(text: &str, key: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| line.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case(key))
        .map(|(_, value)| value.trim().to_string())
}
