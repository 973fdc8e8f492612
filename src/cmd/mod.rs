/// Built-in fixture command.
pub mod fixture;
/// Shared inspection flags and output formatting.
pub mod output;
/// JSON document render command.
pub mod render;
