//! A single loaded locale.

use crate::command::CommandNode;
use crate::parse::as_table;
use crate::text::TextNode;
use polyglot_core::error::PolyglotError;
use std::collections::BTreeMap;
use std::fmt;
use toml::Table;

const COMMANDS: &str = "commands";
const TEXTS: &str = "texts";

/// Translated commands and texts for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub name: String,
    pub commands: BTreeMap<String, CommandNode>,
    pub texts: BTreeMap<String, TextNode>,
}

impl Locale {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: BTreeMap::new(),
            texts: BTreeMap::new(),
        }
    }

    /// Build a locale from a decoded document.
    pub fn from_document(name: impl Into<String>, document: &Table) -> Result<Self, PolyglotError> {
        let mut locale = Self::new(name);
        locale.load(document)?;
        Ok(locale)
    }

    /// Build a locale from TOML source text.
    pub fn from_toml_str(name: impl Into<String>, content: &str) -> Result<Self, PolyglotError> {
        let document = decode(content, "<inline>")?;
        Self::from_document(name, &document)
    }

    /// Parse the `commands` and `texts` sections of `document`.
    ///
    /// Both sections are required. Nothing is replaced unless every entry
    /// parses.
    pub fn load(&mut self, document: &Table) -> Result<(), PolyglotError> {
        let mut commands = BTreeMap::new();
        for (key, value) in self.section(document, COMMANDS)? {
            commands.insert(key.clone(), CommandNode::parse(key, as_table(key, value)?)?);
        }

        let mut texts = BTreeMap::new();
        for (key, value) in self.section(document, TEXTS)? {
            texts.insert(key.clone(), TextNode::parse(key, value)?);
        }

        self.commands = commands;
        self.texts = texts;
        Ok(())
    }

    fn section<'a>(&self, document: &'a Table, field: &str) -> Result<&'a Table, PolyglotError> {
        let value = document
            .get(field)
            .ok_or_else(|| PolyglotError::missing_field(&self.name, field))?;
        as_table(field, value)
    }

    pub fn get_translated_command(&self, key: &str) -> Option<&CommandNode> {
        self.commands.get(key)
    }

    pub fn get_translated_text(&self, key: &str) -> Option<&TextNode> {
        self.texts.get(key)
    }

    /// Resolve a dotted command path (`"user.info"`) through groups.
    pub fn find_command(&self, path: &str) -> Option<&CommandNode> {
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        self.commands.get(head)?.find(rest)
    }

    /// Resolve a dotted text path (`"user.info"`) down to its string.
    /// Returns `None` if the path is missing or ends on a group.
    pub fn get_text_value(&self, path: &str) -> Option<&str> {
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        self.texts.get(head)?.get(rest)?.value()
    }

    pub fn command_keys(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn text_keys(&self) -> impl Iterator<Item = &str> {
        self.texts.keys().map(String::as_str)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} commands, {} texts)",
            self.name,
            self.commands.len(),
            self.texts.len()
        )
    }
}

/// Decode TOML source into a table. `origin` names the source in errors.
pub(crate) fn decode(content: &str, origin: &str) -> Result<Table, PolyglotError> {
    toml::from_str(content).map_err(|source| PolyglotError::Decode {
        path: origin.to_string(),
        source,
    })
}
