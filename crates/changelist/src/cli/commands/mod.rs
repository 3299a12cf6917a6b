//! CLI commands

mod completions;
mod generate;

pub use completions::CompletionsCommand;
pub use generate::GenerateCommand;
