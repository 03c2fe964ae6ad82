//! Localized reply strings.
//!
//! Translations live in `<locales_dir>/<code>.json` as nested objects and are looked up
//! with dotted keys such as `"welcome.set_enabled"`. The `Translator` is built once at
//! startup and shared read-only through the poise `Data`.

use std::{collections::HashMap, path::Path};

use serde_json::Value;

use crate::model::guild_config::Language;

#[derive(Debug, Default)]
pub struct Translator {
    tables: HashMap<Language, Value>,
}

impl Translator {
    /// Loads every `<code>.json` file in `dir` whose stem is a supported language.
    ///
    /// Unreadable or invalid files are logged and skipped, unknown stems are ignored and
    /// a missing directory yields an empty translator that returns keys verbatim.
    ///
    /// # Arguments
    /// - `dir` - Directory containing the locale files
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut translator = Self::default();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to read locales directory {}: {}", dir.display(), e);
                return translator;
            }
        };

        for path in entries.filter_map(Result::ok).map(|entry| entry.path()) {
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let Some(language) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(Language::from_code)
            else {
                tracing::debug!("Skipping locale file {} with unknown language", path.display());
                continue;
            };

            let table = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|raw| serde_json::from_str::<Value>(&raw).map_err(|e| e.to_string()));

            match table {
                Ok(table) => {
                    tracing::info!("Loaded locale {}", language.code());
                    translator.tables.insert(language, table);
                }
                Err(e) => {
                    tracing::error!("Failed to load locale file {}: {}", path.display(), e);
                }
            }
        }

        translator
    }

    /// Adds or replaces the table for one language.
    pub fn with_table(mut self, language: Language, table: Value) -> Self {
        self.tables.insert(language, table);
        self
    }

    /// Looks up a dotted key for the given language.
    ///
    /// Falls back to the English table when the language has no table loaded, then to
    /// the literal key when the key is missing or not a string.
    pub fn translate(&self, language: Language, key: &str) -> String {
        let table = self
            .tables
            .get(&language)
            .or_else(|| self.tables.get(&Language::En));

        let value = table.and_then(|table| {
            key.split('.')
                .try_fold(table, |node, segment| node.get(segment))
        });

        match value.and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(
                    "Translation key '{}' not found for language {}",
                    key,
                    language.code()
                );
                key.to_string()
            }
        }
    }

    /// Looks up a key and substitutes `{name}` placeholders with the given arguments.
    pub fn translate_with(&self, language: Language, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(language, key), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}
