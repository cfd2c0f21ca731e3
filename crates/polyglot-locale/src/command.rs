//! Localized command definitions.

use crate::parse::{as_table, check_key, optional_str, required_str, required_str_list};
use polyglot_core::error::PolyglotError;
use serde::Serialize;
use std::collections::BTreeMap;
use toml::Table;

pub(crate) const NAME: &str = "name";
pub(crate) const ALIASES: &str = "aliases";
pub(crate) const DESCRIPTION: &str = "description";

/// Fields shared by every command node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    /// Stable key the command is filed under (e.g. `"info"` inside `user`).
    pub key: String,
    /// Display name in this locale.
    pub name: String,
    /// Alternate invocation names. Never deduplicated.
    pub aliases: Vec<String>,
    pub description: Option<String>,
}

/// A parsed command: a terminal command or a group of subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CommandNode {
    Leaf(CommandInfo),
    Group {
        info: CommandInfo,
        subcommands: BTreeMap<String, CommandNode>,
    },
}

impl CommandNode {
    /// Parse one command entry.
    ///
    /// `name` and `aliases` are required, `description` is optional. Every
    /// other key in `table` is a subcommand, and its presence turns the node
    /// into a group. Keys containing `.` are rejected.
    pub fn parse(key: &str, table: &Table) -> Result<Self, PolyglotError> {
        check_key(key)?;
        let info = CommandInfo {
            key: key.to_string(),
            name: required_str(table, key, NAME)?,
            aliases: required_str_list(table, key, ALIASES)?,
            description: optional_str(table, key, DESCRIPTION)?,
        };

        let mut subcommands = BTreeMap::new();
        for (child_key, value) in table {
            if matches!(child_key.as_str(), NAME | ALIASES | DESCRIPTION) {
                continue;
            }
            let child = CommandNode::parse(child_key, as_table(child_key, value)?)?;
            subcommands.insert(child_key.clone(), child);
        }

        if subcommands.is_empty() {
            Ok(Self::Leaf(info))
        } else {
            Ok(Self::Group { info, subcommands })
        }
    }

    pub fn info(&self) -> &CommandInfo {
        match self {
            Self::Leaf(info) | Self::Group { info, .. } => info,
        }
    }

    pub fn key(&self) -> &str {
        &self.info().key
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn aliases(&self) -> &[String] {
        &self.info().aliases
    }

    pub fn description(&self) -> Option<&str> {
        self.info().description.as_deref()
    }

    /// Child commands, or `None` for a leaf.
    pub fn subcommands(&self) -> Option<&BTreeMap<String, CommandNode>> {
        match self {
            Self::Leaf(_) => None,
            Self::Group { subcommands, .. } => Some(subcommands),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Descend through subcommands along a dotted path relative to this node
    /// (`"profile.edit"`). An empty path returns `self`.
    pub fn find(&self, path: &str) -> Option<&CommandNode> {
        if path.is_empty() {
            return Some(self);
        }
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        self.subcommands()?.get(head)?.find(rest)
    }
}
