pub mod paper;
pub mod resolver;
pub mod runtime_name;

pub use paper::{recommended_runtime, SemanticVersion};
pub use resolver::resolve_runtime_name;
pub use runtime_name::RuntimeName;
