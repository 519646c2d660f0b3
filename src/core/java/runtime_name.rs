use std::fmt;
use std::str::FromStr;

use super::paper::SemanticVersion;

/// The Java runtimes the container image ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuntimeName {
    Java8,
    /// Used whenever detection fails.
    #[default]
    Java11,
    Java16,
    Java17,
}

impl RuntimeName {
    /// Every runtime, in the order the prompt lists them.
    pub const ALL: [RuntimeName; 4] = [
        RuntimeName::Java8,
        RuntimeName::Java11,
        RuntimeName::Java16,
        RuntimeName::Java17,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RuntimeName::Java8 => "Java 8",
            RuntimeName::Java11 => "Java 11",
            RuntimeName::Java16 => "Java 16",
            RuntimeName::Java17 => "Java 17",
        }
    }

    /// Token that replaces the first word of the startup command.
    pub fn entrypoint(self) -> &'static str {
        match self {
            RuntimeName::Java8 => "java8",
            RuntimeName::Java11 => "java11",
            RuntimeName::Java16 => "java16",
            RuntimeName::Java17 => "java17",
        }
    }

    /// Runtime needed for a class file of the given major version.
    pub fn for_class_major(major: u16) -> Self {
        if major >= 61 {
            RuntimeName::Java17
        } else if major >= 60 {
            RuntimeName::Java16
        } else if major >= 55 {
            RuntimeName::Java11
        } else {
            RuntimeName::Java8
        }
    }

    /// Runtime recommended for a game version such as `1.16.5`.
    pub fn for_game_version(version: &SemanticVersion) -> Option<Self> {
        if version.major < 1 {
            return None;
        }

        if version.minor >= 17 {
            Some(RuntimeName::Java17)
        } else if version.minor >= 16 {
            Some(RuntimeName::Java16)
        } else if version.minor >= 12 {
            Some(RuntimeName::Java11)
        } else if version.minor >= 8 {
            Some(RuntimeName::Java8)
        } else {
            None
        }
    }
}

impl fmt::Display for RuntimeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRuntime(pub String);

impl fmt::Display for UnknownRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown java runtime '{}'", self.0)
    }
}

impl std::error::Error for UnknownRuntime {}

impl FromStr for RuntimeName {
    type Err = UnknownRuntime;

    /// Accepts exactly the labels shown to users (`Java 8`, `Java 11`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuntimeName::ALL
            .into_iter()
            .find(|name| name.label() == s)
            .ok_or_else(|| UnknownRuntime(s.to_string()))
    }
}
