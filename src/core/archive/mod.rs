pub mod class_file;
pub mod manifest;
pub mod reader;

pub use class_file::{probe_class_version, ClassVersion};
pub use manifest::{main_class, main_class_entry};
pub use reader::JarArchive;
