//! nixchat is a terminal chat assistant for Gemini with slash commands,
//! persisted chat sessions and English/Arabic localization.
//!
//! The crate is organized in layers:
//! - [`i18n`] holds the locale tables and placeholder substitution.
//! - [`commands`] parses `/word args` invocations and builds the localized
//!   command table.
//! - [`core`] owns the message model, sessions, the prompt dispatcher, the
//!   response splitter, key resolution, persistence and the chat controller.
//! - [`api`] defines the Gemini wire types and the HTTP client implementing
//!   [`core::gateway::Gateway`].
//! - [`ui`] renders message parts for a plain terminal.
//!
//! The binary (`src/main.rs`) routes through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod i18n;
pub mod ui;
pub mod utils;
