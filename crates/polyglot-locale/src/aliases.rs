//! Cross-locale alias aggregation.
//!
//! Every locale names the same logical command differently. Merging appends
//! each locale's aliases under the command's key so a host framework can
//! register one command reachable through every language's names.

use crate::command::CommandNode;
use crate::locale::Locale;
use polyglot_core::config::FlattenMode;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Flattened command key → aliases from every merged locale, in merge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    mode: FlattenMode,
    entries: HashMap<String, Vec<String>>,
    /// Flattened key → full dotted paths of the commands filed under it.
    paths: HashMap<String, BTreeSet<String>>,
    /// Full dotted path → flattened key.
    flattened: HashMap<String, String>,
}

impl AliasTable {
    pub fn new(mode: FlattenMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> FlattenMode {
        self.mode
    }

    /// Append every command alias in `locale`, including subcommands.
    pub fn merge_command_aliases(&mut self, locale: &Locale) {
        for (command_key, command) in &locale.commands {
            self.append(command_key, command_key, command);
            if let Some(subcommands) = command.subcommands() {
                self.flatten_group_command_aliases(command_key, subcommands);
            }
        }
    }

    /// Append subcommand aliases under `parent_key.child_key`.
    ///
    /// In [`FlattenMode::Parent`] a nested group recurses with its own key as
    /// the prefix, so `user > profile > edit` is filed as `profile.edit`.
    /// [`FlattenMode::FullPath`] keeps the whole path (`user.profile.edit`).
    pub fn flatten_group_command_aliases(
        &mut self,
        parent_key: &str,
        subcommands: &BTreeMap<String, CommandNode>,
    ) {
        self.flatten_group(parent_key, parent_key, subcommands);
    }

    fn flatten_group(
        &mut self,
        parent_key: &str,
        parent_path: &str,
        subcommands: &BTreeMap<String, CommandNode>,
    ) {
        for (subcommand_key, subcommand) in subcommands {
            let flattened = format!("{parent_key}.{subcommand_key}");
            let path = format!("{parent_path}.{subcommand_key}");
            self.append(&flattened, &path, subcommand);
            if let Some(children) = subcommand.subcommands() {
                let next_parent = match self.mode {
                    FlattenMode::Parent => subcommand_key.as_str(),
                    FlattenMode::FullPath => flattened.as_str(),
                };
                self.flatten_group(next_parent, &path, children);
            }
        }
    }

    fn append(&mut self, key: &str, path: &str, command: &CommandNode) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .extend(command.aliases().iter().cloned());
        self.paths
            .entry(key.to_string())
            .or_default()
            .insert(path.to_string());
        self.flattened.insert(path.to_string(), key.to_string());
    }

    /// Full dotted paths (`user.profile.edit`) of the commands merged under
    /// the flattened `key`. More than one path appears when
    /// [`FlattenMode::Parent`] files different commands under the same key.
    pub fn full_paths(&self, key: &str) -> impl Iterator<Item = &str> {
        self.paths
            .get(key)
            .into_iter()
            .flat_map(|paths| paths.iter().map(String::as_str))
    }

    /// The key a command is filed under, given its full dotted path.
    pub fn flattened_key(&self, path: &str) -> Option<&str> {
        self.flattened.get(path).map(String::as_str)
    }

    /// Aliases accumulated for `key`; empty if nothing was merged under it.
    pub fn get_command_aliases(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All entries, sorted by key.
    pub fn entries(&self) -> Vec<(&str, &[String])> {
        let mut entries: Vec<(&str, &[String])> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
