//! Locale registry: discovery, loading and lookups.

use crate::aliases::AliasTable;
use crate::locale::{decode, Locale};
use crate::registration::CommandRegistration;
use polyglot_core::config::{shellexpand, LocalesConfig};
use polyglot_core::error::PolyglotError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Owns every loaded locale and the merged alias table.
#[derive(Debug, Clone)]
pub struct LocaleManager {
    config: LocalesConfig,
    locales: HashMap<String, Locale>,
    /// Locale names in registration order.
    order: Vec<String>,
    aliases: AliasTable,
}

impl Default for LocaleManager {
    fn default() -> Self {
        Self::new(LocalesConfig::default())
    }
}

impl LocaleManager {
    pub fn new(config: LocalesConfig) -> Self {
        let aliases = AliasTable::new(config.flatten);
        Self {
            config,
            locales: HashMap::new(),
            order: Vec::new(),
            aliases,
        }
    }

    pub fn config(&self) -> &LocalesConfig {
        &self.config
    }

    /// Add a locale, replacing any locale with the same name. A replaced
    /// locale keeps its original position in the registration order.
    pub fn register(&mut self, locale: Locale) {
        if self.locales.contains_key(&locale.name) {
            debug!("locales: replacing {}", locale.name);
        } else {
            self.order.push(locale.name.clone());
        }
        self.locales.insert(locale.name.clone(), locale);
    }

    /// Load every locale file from the configured directory.
    pub fn load(&mut self) -> Result<usize, PolyglotError> {
        let dir = shellexpand(&self.config.dir);
        self.load_all(Path::new(&dir))
    }

    /// Load every `*.{extension}` file in `dir` and register the results.
    ///
    /// Files are processed in file-name order. With `fail_fast` the first bad
    /// file aborts the call and nothing is registered; otherwise bad files are
    /// skipped with a warning. Returns the number of locales registered.
    pub fn load_all(&mut self, dir: &Path) -> Result<usize, PolyglotError> {
        let mut loaded = Vec::new();
        for path in self.locale_files(dir)? {
            match load_locale_file(&path) {
                Ok(locale) => loaded.push(locale),
                Err(e) if self.config.fail_fast => return Err(e),
                Err(e) => warn!("locales: skipping {}: {e}", path.display()),
            }
        }

        let count = loaded.len();
        for locale in loaded {
            info!("locales: loaded {locale}");
            self.register(locale);
        }
        Ok(count)
    }

    fn locale_files(&self, dir: &Path) -> Result<Vec<PathBuf>, PolyglotError> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            // A file named exactly `.lang` has no extension and is not loaded.
            let matches = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == self.config.extension);
            if matches {
                files.push(path);
            } else {
                debug!("locales: ignoring {}", path.display());
            }
        }
        files.sort();
        Ok(files)
    }

    pub fn get_locale(&self, name: &str) -> Option<&Locale> {
        self.locales.get(name)
    }

    /// Registered locales in registration order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.order.iter().filter_map(|name| self.locales.get(name))
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Merge one registered locale's aliases. Returns `false` if no locale
    /// is registered under `name`.
    pub fn merge_command_aliases(&mut self, name: &str) -> bool {
        match self.locales.get(name) {
            Some(locale) => {
                self.aliases.merge_command_aliases(locale);
                true
            }
            None => false,
        }
    }

    /// Merge every registered locale's aliases in registration order.
    pub fn merge_all_command_aliases(&mut self) {
        for name in &self.order {
            if let Some(locale) = self.locales.get(name) {
                self.aliases.merge_command_aliases(locale);
            }
        }
    }

    pub fn get_command_aliases(&self, key: &str) -> &[String] {
        self.aliases.get_command_aliases(key)
    }

    pub fn alias_table(&self) -> &AliasTable {
        &self.aliases
    }

    /// Everything a command framework needs to register `key` once with
    /// every locale's names attached. `None` if no locale knows the key.
    pub fn command(&self, key: &str) -> Option<CommandRegistration> {
        CommandRegistration::collect(key, self.locales(), &self.aliases)
    }
}

/// Read, decode and parse one locale file. The locale is named after the
/// file stem (`en-US.lang` → `en-US`).
fn load_locale_file(path: &Path) -> Result<Locale, PolyglotError> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| PolyglotError::Config(format!("bad locale file name: {}", path.display())))?;
    let content = std::fs::read_to_string(path)?;
    let document = decode(&content, &path.display().to_string())?;
    Locale::from_document(name, &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    /// Create an empty, unique temp directory.
    fn test_dir(tag: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "__polyglot_test_{tag}_{}_{}__",
            std::process::id(),
            id
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    const EN_US: &str = r#"
        [commands.hello]
        name = "hello"
        aliases = ["hi"]

        [commands.user]
        name = "user"
        aliases = []

        [commands.user.info]
        name = "info"
        aliases = ["i"]
        description = "Show user info"

        [texts.hello]
        value = "Hello!"
    "#;

    const FR_FR: &str = r#"
        [commands.hello]
        name = "bonjour"
        aliases = ["salut"]

        [commands.user]
        name = "utilisateur"
        aliases = ["util"]

        [commands.user.info]
        name = "infos"
        aliases = ["inf"]

        [texts.hello]
        value = "Bonjour !"
    "#;

    const BAD: &str = r#"
        [commands.hello]
        name = "hello"

        [texts]
    "#;

    #[test]
    fn test_load_all_registers_locales() {
        let dir = test_dir("load_all");
        std::fs::write(dir.join("en-US.lang"), EN_US).unwrap();
        std::fs::write(dir.join("fr-FR.lang"), FR_FR).unwrap();

        let mut manager = LocaleManager::default();
        assert_eq!(manager.load_all(&dir).unwrap(), 2);
        assert_eq!(manager.len(), 2);

        let en = manager.get_locale("en-US").unwrap();
        assert_eq!(en.get_translated_text("hello").unwrap().value(), Some("Hello!"));
        let fr = manager.get_locale("fr-FR").unwrap();
        assert_eq!(fr.get_translated_command("hello").unwrap().name(), "bonjour");
        assert!(manager.get_locale("de-DE").is_none());

        let names: Vec<&str> = manager.locales().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["en-US", "fr-FR"]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_all_filters_extension() {
        let dir = test_dir("extension");
        std::fs::write(dir.join("en-US.lang"), EN_US).unwrap();
        std::fs::write(dir.join("README.md"), "not a locale").unwrap();
        std::fs::write(dir.join("fr-FR.toml"), FR_FR).unwrap();
        std::fs::create_dir_all(dir.join("nested.lang")).unwrap();
        std::fs::write(dir.join(".lang"), FR_FR).unwrap();

        let mut manager = LocaleManager::default();
        assert_eq!(manager.load_all(&dir).unwrap(), 1);
        assert!(manager.get_locale("en-US").is_some());
        assert!(manager.get_locale("fr-FR").is_none());
        assert!(manager.get_locale(".lang").is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_all_custom_extension() {
        let dir = test_dir("custom_ext");
        std::fs::write(dir.join("fr-FR.toml"), FR_FR).unwrap();

        let mut manager = LocaleManager::new(LocalesConfig {
            extension: "toml".into(),
            ..Default::default()
        });
        assert_eq!(manager.load_all(&dir).unwrap(), 1);
        assert!(manager.get_locale("fr-FR").is_some());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_all_fail_fast_registers_nothing() {
        let dir = test_dir("fail_fast");
        std::fs::write(dir.join("a-good.lang"), EN_US).unwrap();
        std::fs::write(dir.join("b-bad.lang"), BAD).unwrap();

        let mut manager = LocaleManager::default();
        let err = manager.load_all(&dir).unwrap_err();
        assert!(matches!(
            err,
            PolyglotError::MissingField { ref field, .. } if field == "aliases"
        ));
        assert!(manager.is_empty(), "no locale should be registered");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_all_skip_invalid() {
        let dir = test_dir("skip_invalid");
        std::fs::write(dir.join("a-good.lang"), EN_US).unwrap();
        std::fs::write(dir.join("b-bad.lang"), BAD).unwrap();
        std::fs::write(dir.join("c-broken.lang"), "[commands").unwrap();

        let mut manager = LocaleManager::new(LocalesConfig {
            fail_fast: false,
            ..Default::default()
        });
        assert_eq!(manager.load_all(&dir).unwrap(), 1);
        assert!(manager.get_locale("a-good").is_some());
        assert!(manager.get_locale("b-bad").is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_all_decode_error_names_file() {
        let dir = test_dir("decode");
        std::fs::write(dir.join("en-US.lang"), "[commands").unwrap();

        let mut manager = LocaleManager::default();
        let err = manager.load_all(&dir).unwrap_err();
        match err {
            PolyglotError::Decode { path, .. } => assert!(path.ends_with("en-US.lang")),
            other => panic!("expected decode error, got {other:?}"),
        }
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_all_missing_dir() {
        let mut manager = LocaleManager::default();
        let err = manager
            .load_all(Path::new("/tmp/__polyglot_test_no_such_lang_dir__"))
            .unwrap_err();
        assert!(matches!(err, PolyglotError::Io(_)));
    }

    #[test]
    fn test_load_uses_configured_dir() {
        let dir = test_dir("configured");
        std::fs::write(dir.join("en-US.lang"), EN_US).unwrap();

        let mut manager = LocaleManager::new(LocalesConfig {
            dir: dir.to_string_lossy().to_string(),
            ..Default::default()
        });
        assert_eq!(manager.load().unwrap(), 1);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_register_overwrites() {
        let mut manager = LocaleManager::default();
        manager.register(Locale::from_toml_str("en-US", EN_US).unwrap());
        manager.register(Locale::from_toml_str("fr-FR", FR_FR).unwrap());
        manager.register(Locale::from_toml_str("en-US", FR_FR).unwrap());

        assert_eq!(manager.len(), 2);
        let en = manager.get_locale("en-US").unwrap();
        assert_eq!(en.get_translated_command("hello").unwrap().name(), "bonjour");
        let names: Vec<&str> = manager.locales().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["en-US", "fr-FR"]);
    }

    #[test]
    fn test_merge_all_command_aliases() {
        let mut manager = LocaleManager::default();
        manager.register(Locale::from_toml_str("en-US", EN_US).unwrap());
        manager.register(Locale::from_toml_str("fr-FR", FR_FR).unwrap());
        manager.merge_all_command_aliases();

        assert_eq!(manager.get_command_aliases("hello"), ["hi", "salut"]);
        assert_eq!(manager.get_command_aliases("user"), ["util"]);
        assert_eq!(manager.get_command_aliases("user.info"), ["i", "inf"]);
        assert!(manager.get_command_aliases("missing").is_empty());
    }

    #[test]
    fn test_merge_single_locale() {
        let mut manager = LocaleManager::default();
        manager.register(Locale::from_toml_str("fr-FR", FR_FR).unwrap());
        assert!(manager.merge_command_aliases("fr-FR"));
        assert!(!manager.merge_command_aliases("de-DE"));
        assert_eq!(manager.get_command_aliases("hello"), ["salut"]);
    }

    #[test]
    fn test_command_registration() {
        let mut manager = LocaleManager::default();
        manager.register(Locale::from_toml_str("en-US", EN_US).unwrap());
        manager.register(Locale::from_toml_str("fr-FR", FR_FR).unwrap());
        manager.merge_all_command_aliases();

        let reg = manager.command("user.info").unwrap();
        assert_eq!(reg.key, "user.info");
        assert_eq!(reg.aliases, ["i", "inf"]);
        assert_eq!(reg.names["en-US"], "info");
        assert_eq!(reg.names["fr-FR"], "infos");
        assert_eq!(reg.descriptions["en-US"], "Show user info");
        assert!(!reg.descriptions.contains_key("fr-FR"));

        assert!(manager.command("missing").is_none());
    }

    #[test]
    fn test_command_registration_three_levels_deep() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../lang");
        let mut manager = LocaleManager::default();
        manager.load_all(&dir).unwrap();
        manager.merge_all_command_aliases();

        let reg = manager.command("profile.edit").unwrap();
        assert_eq!(reg.key, "profile.edit");
        assert_eq!(reg.aliases, ["e", "편집"]);
        assert_eq!(reg.names.len(), 2);
        assert_eq!(reg.names["en-US"], "edit");
        assert_eq!(reg.names["ko-KR"], "수정");

        assert_eq!(manager.command("user.profile.edit"), Some(reg));
    }

    #[test]
    fn test_load_bundled_lang_dir() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../lang");
        let mut manager = LocaleManager::default();
        assert_eq!(manager.load_all(&dir).unwrap(), 2);
        manager.merge_all_command_aliases();

        assert_eq!(
            manager.get_command_aliases("hello"),
            ["hi", "ㅎㅇ", "안녕하세요"]
        );
        assert_eq!(manager.get_command_aliases("user.info"), ["i", "ㅈㅂ"]);
        assert_eq!(manager.get_command_aliases("profile.edit"), ["e", "편집"]);
        let ko = manager.get_locale("ko-KR").unwrap();
        assert_eq!(ko.get_text_value("user.not_found"), Some("해당 유저가 없습니다."));
    }
}
