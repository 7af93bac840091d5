//! Terminal output for chat messages.

pub mod render;

pub use render::TerminalRenderer;
