pub mod extract;
pub mod generator;
pub mod openrouter;
pub mod prompts;

pub mod mock;

pub use generator::{GeneratorConfig, QuestionGenerator};
pub use openrouter::{OpenRouterConfig, OpenRouterModel};
