//! Default value functions for serde.

pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_lang_dir() -> String {
    "./lang".to_string()
}
pub(super) fn default_extension() -> String {
    "lang".to_string()
}
pub(super) fn default_true() -> bool {
    true
}
