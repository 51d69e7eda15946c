//! Configuration sections: ordered string key/value groups.
//!
//! A [`ConfigSection`] is what the translator reads. It can be built directly
//! from pairs, or read out of INI or YAML text:
//!
//! ```rust
//! use helpcfg::ConfigSection;
//!
//! let section = ConfigSection::parse_ini(
//!     "[CLI_CTX]\nWidth = 100\ntheme = dark\n",
//!     "CLI_CTX",
//! ).unwrap();
//!
//! assert_eq!(section.get("width"), Some("100"));
//! assert_eq!(section.get("THEME"), Some("dark"));
//! ```
//!
//! Keys are case-insensitive and stored lowercased. Values are kept verbatim
//! apart from surrounding whitespace.

use std::path::Path;

use crate::error::SettingsError;

/// Name of the section the shipped defaults live in.
pub const DEFAULT_SECTION: &str = "CLI_CTX";

const DEFAULT_CONFIG: &str = include_str!("default.cfg");

/// An ordered mapping from lowercased keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSection {
    name: Option<String>,
    entries: Vec<(String, String)>,
}

impl ConfigSection {
    /// Creates an empty section with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            entries: Vec::new(),
        }
    }

    /// Creates a section from key/value pairs. Later duplicates replace earlier ones.
    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut section = Self::new(name);
        for (key, value) in pairs {
            section.insert(key.as_ref(), value);
        }
        section
    }

    /// Returns the section name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Inserts or replaces a value, keeping the original position on replace.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let key = key.trim().to_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up a value by key, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the key is present (even with an empty value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `[CLI_CTX]` section shipped with the crate.
    pub fn defaults() -> Self {
        Self::embedded(DEFAULT_CONFIG)
    }

    /// Parses shipped configuration text. A failure is a packaging defect:
    /// it is logged and an empty section is returned, so callers see
    /// `MissingKey` for the keys the file should have provided.
    fn embedded(text: &str) -> Self {
        match Self::parse_ini(text, DEFAULT_SECTION) {
            Ok(section) => section,
            Err(e) => {
                log::error!("shipped [{}] defaults are unreadable: {}", DEFAULT_SECTION, e);
                Self::new(DEFAULT_SECTION)
            }
        }
    }

    /// Fills keys missing from this section with the shipped defaults.
    ///
    /// Keys that are present, even with an empty value, are left untouched.
    pub fn with_defaults(mut self) -> Self {
        for (key, value) in Self::defaults().entries {
            if !self.contains_key(&key) {
                self.entries.push((key, value));
            }
        }
        self
    }

    /// Reads one section out of INI text.
    ///
    /// - `[name]` headers; section names are case-sensitive
    /// - `key = value` or `key: value`; keys are lowercased
    /// - `#` and `;` start comment lines
    /// - indented lines continue the previous value
    ///
    /// # Errors
    ///
    /// [`SettingsError::Syntax`] for malformed lines,
    /// [`SettingsError::SectionNotFound`] if `section` never appears.
    pub fn parse_ini(text: &str, section: &str) -> Result<Self, SettingsError> {
        let mut result = Self::new(section);
        let mut current: Option<String> = None;
        let mut last_key: Option<String> = None;
        let mut found = false;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end();
            let trimmed = line.trim_start();

            if trimmed.is_empty() {
                last_key = None;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if trimmed.starts_with('[') {
                let name = trimmed
                    .strip_prefix('[')
                    .and_then(|s| s.strip_suffix(']'))
                    .ok_or_else(|| SettingsError::syntax(Some(line_no), "unterminated section header"))?
                    .trim();
                found |= name == section;
                current = Some(name.to_string());
                last_key = None;
                continue;
            }

            let in_target = current.as_deref() == Some(section);

            if line.len() != trimmed.len() {
                if let Some(ref key) = last_key {
                    if in_target {
                        let previous = result.get(key).unwrap_or_default();
                        let joined = if previous.is_empty() {
                            trimmed.to_string()
                        } else {
                            format!("{}\n{}", previous, trimmed)
                        };
                        result.insert(key, joined);
                    }
                    continue;
                }
            }

            let split_at = trimmed
                .find(['=', ':'])
                .ok_or_else(|| SettingsError::syntax(Some(line_no), "expected 'key = value'"))?;
            if current.is_none() {
                return Err(SettingsError::syntax(
                    Some(line_no),
                    "key/value pair before any section header",
                ));
            }

            let key = trimmed[..split_at].trim();
            if key.is_empty() {
                return Err(SettingsError::syntax(Some(line_no), "empty key"));
            }
            let value = trimmed[split_at + 1..].trim();

            if in_target {
                result.insert(key, value);
            }
            last_key = Some(key.to_lowercase());
        }

        if !found {
            return Err(SettingsError::SectionNotFound(section.to_string()));
        }

        log::debug!("read {} keys from INI section [{}]", result.len(), section);
        Ok(result)
    }

    /// Reads one top-level mapping out of YAML text.
    ///
    /// Scalar values are stringified (`true`, `80`, `~` becomes empty).
    ///
    /// # Errors
    ///
    /// [`SettingsError::Syntax`] for invalid YAML or nested values,
    /// [`SettingsError::SectionNotFound`] if the key is missing.
    pub fn parse_yaml(text: &str, section: &str) -> Result<Self, SettingsError> {
        use serde_yaml::Value;

        let root: Value = serde_yaml::from_str(text).map_err(|e| {
            SettingsError::syntax(e.location().map(|l| l.line()), e.to_string())
        })?;

        let mapping = root
            .as_mapping()
            .ok_or_else(|| SettingsError::syntax(None, "top level must be a mapping"))?;
        let body = mapping
            .get(section)
            .ok_or_else(|| SettingsError::SectionNotFound(section.to_string()))?;

        let mut result = Self::new(section);
        let entries = match body {
            Value::Mapping(m) => m,
            Value::Null => {
                return Ok(result);
            }
            _ => {
                return Err(SettingsError::syntax(
                    None,
                    format!("section '{}' must be a mapping", section),
                ))
            }
        };

        for (key, value) in entries {
            let key = scalar_to_string(key).ok_or_else(|| {
                SettingsError::syntax(None, format!("non-scalar key in '{}': {:?}", section, key))
            })?;
            let value = scalar_to_string(value).ok_or_else(|| {
                SettingsError::syntax(None, format!("value for '{}' must be a scalar", key))
            })?;
            result.insert(&key, value);
        }

        log::debug!("read {} keys from YAML section '{}'", result.len(), section);
        Ok(result)
    }

    /// Loads a section from a file, choosing YAML for `.yaml`/`.yml` and INI otherwise.
    pub fn load<P: AsRef<Path>>(path: P, section: &str) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("loading section [{}] from {}", section, path.display());

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::parse_yaml(&content, section),
            _ => Self::parse_ini(&content, section),
        }
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}
