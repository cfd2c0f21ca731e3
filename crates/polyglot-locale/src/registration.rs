//! Descriptors handed to a command framework.

use crate::aliases::AliasTable;
use crate::locale::Locale;
use serde::Serialize;
use std::collections::BTreeMap;

/// One command as a framework should register it: a canonical key, the
/// aliases merged from every locale, and the per-locale display names and
/// descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRegistration {
    pub key: String,
    pub aliases: Vec<String>,
    /// Locale name → display name.
    pub names: BTreeMap<String, String>,
    /// Locale name → description, for locales that have one.
    pub descriptions: BTreeMap<String, String>,
}

impl CommandRegistration {
    /// Gather `key` from `locales`. `key` may be either the alias-table key
    /// (`profile.edit` under [`FlattenMode::Parent`]) or the full dotted path
    /// (`user.profile.edit`); both resolve to the same registration, filed
    /// under the alias-table key. Returns `None` when neither the alias table
    /// nor any locale knows the key.
    ///
    /// [`FlattenMode::Parent`]: polyglot_core::config::FlattenMode::Parent
    pub fn collect<'a>(
        key: &str,
        locales: impl IntoIterator<Item = &'a Locale>,
        aliases: &AliasTable,
    ) -> Option<Self> {
        let alias_key = if aliases.contains_key(key) {
            key
        } else {
            aliases.flattened_key(key).unwrap_or(key)
        };
        let mut paths = vec![key];
        paths.extend(aliases.full_paths(alias_key).filter(|p| *p != key));

        let mut names = BTreeMap::new();
        let mut descriptions = BTreeMap::new();
        for locale in locales {
            let Some(command) = paths.iter().find_map(|p| locale.find_command(p)) else {
                continue;
            };
            names.insert(locale.name.clone(), command.name().to_string());
            if let Some(description) = command.description() {
                descriptions.insert(locale.name.clone(), description.to_string());
            }
        }

        if names.is_empty() && !aliases.contains_key(alias_key) {
            return None;
        }

        Some(Self {
            key: alias_key.to_string(),
            aliases: aliases.get_command_aliases(alias_key).to_vec(),
            names,
            descriptions,
        })
    }
}
