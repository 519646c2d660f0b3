// Fixture jars built on the fly for unit and end-to-end tests.

use std::collections::VecDeque;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::core::prompt::PromptInput;

/// Class-file bytes with the given major version and a few trailing constant-pool bytes.
pub fn class_bytes(major: u16) -> Vec<u8> {
    let mut bytes = vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00];
    bytes.extend_from_slice(&major.to_be_bytes());
    bytes.extend_from_slice(&[0x00, 0x1D, 0x0A, 0x00]);
    bytes
}

pub fn manifest_for(main_class: &str) -> String {
    format!("Manifest-Version: 1.0\r\nMain-Class: {main_class}\r\nCreated-By: 17 (Test)\r\n\r\n")
}

#[derive(Default)]
pub struct JarBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl JarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.push((name.to_string(), bytes.into()));
        self
    }

    pub fn main_class(self, class_name: &str, major: u16) -> Self {
        let entry = format!("{}.class", class_name.replace('.', "/"));
        self.entry("META-INF/MANIFEST.MF", manifest_for(class_name))
            .entry(&entry, class_bytes(major))
    }

    pub fn write_to(self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        let file = std::fs::File::create(&path).expect("create fixture jar");
        let mut writer = ZipWriter::new(file);
        for (name, bytes) in self.entries {
            writer
                .start_file(name, SimpleFileOptions::default())
                .expect("start fixture entry");
            writer.write_all(&bytes).expect("write fixture entry");
        }
        writer.finish().expect("finish fixture jar");
        path
    }
}

/// Canned prompt answers; `None` entries behave like a timeout.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<Option<String>>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[async_trait]
impl PromptInput for ScriptedInput {
    async fn read_line(&mut self, _timeout: Duration) -> Option<String> {
        self.answers.pop_front().flatten()
    }
}
