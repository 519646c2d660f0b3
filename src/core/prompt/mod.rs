pub mod input;
pub mod menu;

pub use input::{PromptInput, StdinInput};
pub use menu::{ask_for_runtime, PromptChoice};
