//! Process-wide locale manager.
//!
//! The manager is built and loaded once, then published behind a
//! [`OnceLock`]. After publication it is read-only, so lookups need no
//! locking. The first successful call wins; later calls return the same
//! instance and ignore their arguments.

use crate::manager::LocaleManager;
use polyglot_core::config::LocalesConfig;
use polyglot_core::error::PolyglotError;
use std::sync::OnceLock;
use tracing::{info, warn};

static MANAGER: OnceLock<LocaleManager> = OnceLock::new();

/// Load every locale described by `config`, merge their aliases and publish
/// the manager.
///
/// If a manager is already published it is returned unchanged; a differing
/// `config` is logged and ignored. A failed load publishes nothing.
pub fn init(config: LocalesConfig) -> Result<&'static LocaleManager, PolyglotError> {
    if let Some(existing) = MANAGER.get() {
        warn_if_differs(existing, &config);
        return Ok(existing);
    }

    let mut manager = LocaleManager::new(config);
    manager.load()?;
    manager.merge_all_command_aliases();
    Ok(install(manager))
}

/// Publish a manager that was built by hand. If one is already published,
/// `manager` is dropped and the existing instance is returned.
pub fn install(manager: LocaleManager) -> &'static LocaleManager {
    let mut candidate = Some(manager);
    let published = MANAGER.get_or_init(|| {
        let manager = candidate.take().unwrap_or_default();
        info!("locales: published {} locales", manager.len());
        manager
    });
    if let Some(ignored) = candidate {
        warn_if_differs(published, ignored.config());
    }
    published
}

/// The published manager, if any.
pub fn instance() -> Option<&'static LocaleManager> {
    MANAGER.get()
}

fn warn_if_differs(existing: &LocaleManager, config: &LocalesConfig) {
    if existing.config() != config {
        warn!("locales: already initialized, ignoring new configuration");
    }
}
