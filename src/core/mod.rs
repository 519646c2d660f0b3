// ─── Java Selector Core ───
// Works out which Java runtime a server jar needs.
//
// Architecture:
//   core/
//     archive/  — Jar reader, class header probe, manifest lookup
//     java/     — Runtime names, paper metadata heuristic, resolver
//     state/    — Jar checksum + persisted decision/override files
//     prompt/   — Timed stdin input + runtime menu
//     selector  — Decision flow and output for echo/env modes

pub mod archive;
pub mod config;
pub mod error;
pub mod java;
pub mod prompt;
pub mod selector;
pub mod startup;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
