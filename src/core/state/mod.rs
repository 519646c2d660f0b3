pub mod checksum;
pub mod decision_store;

pub use checksum::JarChecksum;
pub use decision_store::{DecisionStore, DECISION_FILE, OVERRIDE_FILE};
