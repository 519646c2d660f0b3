/// The container's startup command, as found in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupCommand {
    raw: String,
}

impl StartupCommand {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// First space-separated token ending in `.jar`.
    pub fn jar_path(&self) -> Option<&str> {
        self.raw
            .split(' ')
            .map(str::trim)
            .find(|token| token.ends_with(".jar"))
    }

    /// The command with its first token replaced by `entrypoint`.
    pub fn with_entrypoint(&self, entrypoint: &str) -> String {
        let mut tokens: Vec<&str> = self.raw.split(' ').collect();
        tokens[0] = entrypoint;
        tokens.join(" ")
    }
}
