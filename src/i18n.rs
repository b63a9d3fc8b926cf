use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde_json::Value;

/// Translation keys used by the block panel.
pub mod keys {
    pub const CONTRACT_MESSAGES_LABEL: &str = "blockView.content.contractMessages.label";
    pub const CONTRACT_MESSAGES_TEXT: &str = "blockView.content.contractMessages.text";
    pub const TX_TRIE_LABEL: &str = "blockView.content.txTrie.label";
    pub const SHA3_UNCLES_LABEL: &str = "blockView.content.sha3Uncles.label";
    pub const BENEFICIARY_LABEL: &str = "blockView.content.beneficiary.label";
    pub const BENEFICIARY_MINE_TIME: &str = "blockView.content.beneficiary.mineTime";
    pub const BENEFICIARY_REWARD_LABEL: &str = "blockView.content.beneficiary.reward.label";
    pub const GAS_LIMIT: &str = "general.gasLimit";
    pub const GAS_USED: &str = "general.gasUsed";
    pub const DIFFICULTY_LABEL: &str = "blockView.content.difficulty.label";
    pub const EXTRA_DATA_LABEL: &str = "blockView.content.extraData.label";
    pub const MIX_HASH_LABEL: &str = "blockView.content.mixHash.label";
    pub const RECEIPTS_TRIE_LABEL: &str = "blockView.content.receiptsTrie.label";
}

const BUNDLED_EN_US: &str = include_str!("../locales/en-US.json");
const BUNDLED_DE_DE: &str = include_str!("../locales/de-DE.json");

/// Looks up display text by key.
pub trait Translation {
    fn get(&self, key: &str) -> String;
}

/// A flat key/value translation table with the bundled English table as
/// fallback.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    locale: String,
    entries: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translations {
    /// Bundled table for `locale`, English when none is bundled.
    pub fn bundled(locale: &str) -> Self {
        let source = match locale.split(['-', '_']).next() {
            Some("de") => BUNDLED_DE_DE,
            _ => BUNDLED_EN_US,
        };
        Self {
            locale: locale.to_string(),
            entries: parse_bundled(source),
            fallback: parse_bundled(BUNDLED_EN_US),
        }
    }

    /// Parse a translation document, flat (`{"a.b": "x"}`) or nested
    /// (`{"a": {"b": "x"}}`).
    pub fn from_json_str(locale: &str, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let mut entries = HashMap::new();
        flatten("", &value, &mut entries);
        Ok(Self {
            locale: locale.to_string(),
            entries,
            fallback: parse_bundled(BUNDLED_EN_US),
        })
    }

    /// Resolve the table for `locale`: an explicit file, then the user's
    /// config directory, then the bundled tables.
    pub fn load(path: Option<&Path>, locale: &str) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => user_locale_file(locale).filter(|p| p.is_file()),
        };

        match path {
            Some(path) => {
                let json = fs::read_to_string(&path).wrap_err_with(|| {
                    format!("Failed to read translations {}", path.display())
                })?;
                let translations = Self::from_json_str(locale, &json).wrap_err_with(|| {
                    format!("Failed to parse translations {}", path.display())
                })?;
                tracing::info!(
                    path = %path.display(),
                    entries = translations.len(),
                    "loaded translations"
                );
                Ok(translations)
            }
            None => Ok(Self::bundled(locale)),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Translation for Translations {
    fn get(&self, key: &str) -> String {
        if let Some(text) = self.entries.get(key).or_else(|| self.fallback.get(key)) {
            return text.clone();
        }
        tracing::debug!(key, locale = %self.locale, "missing translation");
        key.to_string()
    }
}

/// `<config dir>/eth-block-panel/locales/<locale>.json`
fn user_locale_file(locale: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join("eth-block-panel")
            .join("locales")
            .join(format!("{locale}.json"))
    })
}

fn parse_bundled(source: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    if let Ok(value) = serde_json::from_str::<Value>(source) {
        flatten("", &value, &mut entries);
    }
    entries
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [&str; 13] = [
        keys::CONTRACT_MESSAGES_LABEL,
        keys::CONTRACT_MESSAGES_TEXT,
        keys::TX_TRIE_LABEL,
        keys::SHA3_UNCLES_LABEL,
        keys::BENEFICIARY_LABEL,
        keys::BENEFICIARY_MINE_TIME,
        keys::BENEFICIARY_REWARD_LABEL,
        keys::GAS_LIMIT,
        keys::GAS_USED,
        keys::DIFFICULTY_LABEL,
        keys::EXTRA_DATA_LABEL,
        keys::MIX_HASH_LABEL,
        keys::RECEIPTS_TRIE_LABEL,
    ];

    #[test]
    fn test_bundled_tables_cover_all_keys() {
        for locale in ["en-US", "de-DE"] {
            let tr = Translations::bundled(locale);
            for key in ALL_KEYS {
                assert!(tr.entries.contains_key(key), "{locale} is missing {key}");
            }
        }
    }

    #[test]
    fn test_bundled_lookup() {
        let tr = Translations::bundled("en-US");
        assert_eq!(tr.get(keys::GAS_LIMIT), "Gas Limit");
        assert_eq!(tr.get(keys::BENEFICIARY_REWARD_LABEL), "Reward");
        assert_eq!(Translations::bundled("de_AT").get(keys::DIFFICULTY_LABEL), "Schwierigkeit");
    }

    #[test]
    fn test_unknown_locale_uses_english() {
        let tr = Translations::bundled("tlh");
        assert_eq!(tr.get(keys::MIX_HASH_LABEL), "Mix Hash");
        assert_eq!(tr.locale(), "tlh");
    }

    #[test]
    fn test_flat_and_nested_documents() {
        let flat = Translations::from_json_str("xx", r#"{"general.gasUsed": "Used"}"#).unwrap();
        assert_eq!(flat.get(keys::GAS_USED), "Used");

        let nested =
            Translations::from_json_str("xx", r#"{"general": {"gasUsed": "Spent", "n": 3}}"#)
                .unwrap();
        assert_eq!(nested.get(keys::GAS_USED), "Spent");
        assert_eq!(nested.get("general.n"), "3");
    }

    #[test]
    fn test_missing_key_falls_back() {
        let tr = Translations::from_json_str("xx", "{}").unwrap();
        assert_eq!(tr.get(keys::GAS_LIMIT), "Gas Limit");
        assert_eq!(tr.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_invalid_document() {
        assert!(Translations::from_json_str("xx", "[1, 2").is_err());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = Translations::load(Some(Path::new("/nonexistent/xx.json")), "xx");
        assert!(result.is_err());
    }

    #[test]
    fn test_translation_trait_object() {
        let tr = Translations::bundled("de-DE");
        let dynamic: &dyn Translation = &tr;
        assert_eq!(dynamic.get(keys::DIFFICULTY_LABEL), "Schwierigkeit");
        assert_eq!(dynamic.get("no.such.key"), "no.such.key");
    }
}
