//! Localized resource strings.
//!
//! This module provides the resource-provider abstraction used to build menu
//! text, a TOML-backed string table with an embedded en-US default, and
//! `%1`-style template formatting.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Source of localized display strings.
pub trait ResourceProvider {
    /// Returns the string for `key`, or an empty string if the key is unknown.
    fn resource_string(&self, key: &str) -> String;
}

/// Strings file schema.
#[derive(Debug, Clone, Deserialize)]
struct StringFile {
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// Resource strings keyed by resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    locale: String,
    strings: HashMap<String, String>,
}

impl StringTable {
    /// Loads the built-in en-US table.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(include_str!("en-US.toml"))
            .context("Failed to parse embedded en-US.toml")
    }

    /// Parses a strings file.
    ///
    /// A file without a `locale` field is labelled `und`.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: StringFile = toml::from_str(content).context("Invalid strings file")?;
        Ok(Self {
            locale: file.locale.unwrap_or_else(|| "und".to_string()),
            strings: file.strings,
        })
    }

    /// Reads a strings file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read strings file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .context(format!("Failed to parse strings file: {}", path.display()))
    }

    /// Loads the embedded table, then applies `overrides` on top if given.
    pub fn embedded_with_overrides(overrides: Option<&Path>) -> Result<Self> {
        let base = Self::embedded()?;
        match overrides {
            Some(path) => Ok(base.overlay(Self::load(path)?)),
            None => Ok(base),
        }
    }

    /// Replaces entries with those from `other`; keys only present here are kept.
    #[must_use]
    pub fn overlay(mut self, other: Self) -> Self {
        self.locale = other.locale;
        self.strings.extend(other.strings);
        self
    }

    /// Locale tag of the table.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true when the table has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl ResourceProvider for StringTable {
    fn resource_string(&self, key: &str) -> String {
        if let Some(value) = self.strings.get(key) {
            return value.clone();
        }
        debug!("Missing resource string '{}' ({})", key, self.locale);
        String::new()
    }
}

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(\d+)").expect("placeholder pattern is valid"));

/// Substitutes `%1`, `%2`, ... in `template` with the matching argument.
///
/// Placeholders without a matching argument are left as written.
///
/// # Examples
///
/// ```
/// use calcmodes::localization::format_localized;
///
/// assert_eq!(format_localized("%1 %2", &["Standard", "Calculator"]), "Standard Calculator");
/// assert_eq!(format_localized("%1 list", &[]), "%1 list");
/// ```
#[must_use]
pub fn format_localized(template: &str, args: &[&str]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| args.get(i))
                .map_or_else(|| caps[0].to_string(), |arg| (*arg).to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_table() {
        let table = StringTable::embedded().unwrap();
        assert_eq!(table.locale(), "en-US");
        assert!(!table.is_empty());
        assert_eq!(table.resource_string("StandardModeText"), "Standard");
        assert_eq!(table.resource_string("CalculatorModeTextCaps"), "CALCULATOR");
    }

    #[test]
    fn test_missing_key_is_empty() {
        let table = StringTable::embedded().unwrap();
        assert_eq!(table.resource_string("NoSuchKey"), "");
    }

    #[test]
    fn test_from_toml_without_locale() {
        let table = StringTable::from_toml_str("[strings]\nStandardModeText = \"Standard\"\n").unwrap();
        assert_eq!(table.locale(), "und");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(StringTable::from_toml_str("strings = 5").is_err());
    }

    #[test]
    fn test_overlay_keeps_unreplaced_keys() {
        let base = StringTable::embedded().unwrap();
        let de = StringTable::from_toml_str(
            "locale = \"de-DE\"\n[strings]\nStandardModeText = \"Standardrechner\"\n",
        )
        .unwrap();

        let merged = base.overlay(de);
        assert_eq!(merged.locale(), "de-DE");
        assert_eq!(merged.resource_string("StandardModeText"), "Standardrechner");
        assert_eq!(merged.resource_string("ScientificModeText"), "Scientific");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fr.toml");
        fs::write(&path, "locale = \"fr-FR\"\n[strings]\nAngle = \"Angle\"\n").unwrap();

        let table = StringTable::load(&path).unwrap();
        assert_eq!(table.locale(), "fr-FR");

        assert!(StringTable::load(&temp_dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_format_localized() {
        assert_eq!(format_localized("%1 list", &["Calculators"]), "Calculators list");
        assert_eq!(format_localized("%2, %1", &["a", "b"]), "b, a");
        assert_eq!(format_localized("%1 and %3", &["a", "b"]), "a and %3");
        assert_eq!(format_localized("%0", &["a"]), "%0");
        assert_eq!(format_localized("no placeholders", &["a"]), "no placeholders");
        assert_eq!(format_localized("100%", &["a"]), "100%");
    }
}
