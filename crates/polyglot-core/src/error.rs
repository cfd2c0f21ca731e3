use thiserror::Error;

/// Top-level error type for polyglot.
#[derive(Debug, Error)]
pub enum PolyglotError {
    /// A required key is absent from a command entry or a locale document.
    #[error("missing field `{field}` in `{key}`")]
    MissingField { key: String, field: String },

    /// A value has the wrong type for the slot it occupies.
    #[error("type mismatch in `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Malformed TOML content.
    #[error("decode error in {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PolyglotError {
    pub fn missing_field(key: &str, field: &str) -> Self {
        Self::MissingField {
            key: key.to_string(),
            field: field.to_string(),
        }
    }

    pub fn type_mismatch(key: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        }
    }
}
