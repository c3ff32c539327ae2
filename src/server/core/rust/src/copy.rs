/* src/server/core/rust/src/copy.rs */

use std::collections::BTreeMap;

use serde::Deserialize;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Localized page copy keyed by language, then by copy key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CopyTable {
  langs: BTreeMap<String, BTreeMap<String, String>>,
}

impl CopyTable {
  /// `key` in `lang`, else in English.
  pub fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
    self.entry(lang, key).or_else(|| self.entry(DEFAULT_LANGUAGE, key))
  }

  fn entry(&self, lang: &str, key: &str) -> Option<&str> {
    self.langs.get(lang)?.get(key).map(String::as_str)
  }

  pub fn has_language(&self, lang: &str) -> bool {
    self.langs.contains_key(lang)
  }

  pub fn languages(&self) -> impl Iterator<Item = &str> {
    self.langs.keys().map(String::as_str)
  }

  /// English keys `lang` does not translate; those render in English.
  pub fn missing_keys(&self, lang: &str) -> Vec<&str> {
    let Some(english) = self.langs.get(DEFAULT_LANGUAGE) else {
      return Vec::new();
    };
    let translated = self.langs.get(lang);
    english
      .keys()
      .filter(|k| translated.is_none_or(|t| !t.contains_key(*k)))
      .map(String::as_str)
      .collect()
  }
}
