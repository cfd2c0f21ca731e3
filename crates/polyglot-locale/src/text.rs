//! Localized text strings.

use crate::parse::{as_table, check_key};
use polyglot_core::error::PolyglotError;
use serde::Serialize;
use std::collections::BTreeMap;
use toml::Value;

pub(crate) const VALUE: &str = "value";

/// A parsed text entry: a translated string or a group of nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TextNode {
    Leaf {
        key: String,
        value: String,
    },
    Group {
        key: String,
        items: BTreeMap<String, TextNode>,
    },
}

impl TextNode {
    /// Parse one text entry. A table with a `value` field is a leaf (other
    /// keys beside it are ignored); any other table is a group whose entries
    /// are parsed recursively. Keys containing `.` are rejected.
    pub fn parse(key: &str, value: &Value) -> Result<Self, PolyglotError> {
        check_key(key)?;
        let table = as_table(key, value)?;

        if let Some(v) = table.get(VALUE) {
            let value = v
                .as_str()
                .ok_or_else(|| PolyglotError::type_mismatch(key, "string", v.type_str()))?;
            return Ok(Self::Leaf {
                key: key.to_string(),
                value: value.to_string(),
            });
        }

        let mut items = BTreeMap::new();
        for (child_key, child) in table {
            items.insert(child_key.clone(), TextNode::parse(child_key, child)?);
        }

        Ok(Self::Group {
            key: key.to_string(),
            items,
        })
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Leaf { key, .. } | Self::Group { key, .. } => key,
        }
    }

    /// The translated string, or `None` for a group.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Leaf { value, .. } => Some(value),
            Self::Group { .. } => None,
        }
    }

    /// Nested entries, or `None` for a leaf.
    pub fn items(&self) -> Option<&BTreeMap<String, TextNode>> {
        match self {
            Self::Leaf { .. } => None,
            Self::Group { items, .. } => Some(items),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Descend through groups along a dotted path relative to this node.
    pub fn get(&self, path: &str) -> Option<&TextNode> {
        if path.is_empty() {
            return Some(self);
        }
        let (head, rest) = path.split_once('.').unwrap_or((path, ""));
        self.items()?.get(head)?.get(rest)
    }
}
