//! # polyglot-locale
//!
//! Loads per-language `*.lang` TOML files into typed command and text trees,
//! and merges every locale's command aliases so a chat-bot framework can
//! register each command once under all of its localized names.

mod aliases;
mod command;
pub mod global;
mod locale;
mod manager;
mod parse;
mod registration;
mod text;

// Re-export public API: all consumers use `polyglot_locale::*` paths.
pub use aliases::AliasTable;
pub use command::{CommandInfo, CommandNode};
pub use locale::Locale;
pub use manager::LocaleManager;
pub use registration::CommandRegistration;
pub use text::TextNode;
