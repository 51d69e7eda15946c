//! Help formatter settings: layout geometry plus the resolved theme.

use serde::Serialize;

use crate::error::SettingsError;
use crate::section::ConfigSection;
use crate::theme::HelpTheme;

/// Layout parameters and theme used to render help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatterSettings {
    /// Indentation added per nesting level.
    pub indent_increment: i64,
    /// Total line width, wrapping happens past this column.
    pub width: i64,
    /// Column 1 never grows beyond this.
    pub col1_max_width: i64,
    /// Below this much room for column 2, rows switch to a linear layout.
    pub col2_min_width: i64,
    /// Blanks between column 1 and column 2.
    pub col_spacing: i64,
    /// Extra line emitted between definition-list rows. `None` means no separator.
    pub row_sep: Option<String>,
    pub theme: HelpTheme,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            indent_increment: 2,
            width: 80,
            col1_max_width: 30,
            col2_min_width: 35,
            col_spacing: 2,
            row_sep: None,
            theme: HelpTheme::new(),
        }
    }
}

impl FormatterSettings {
    /// Reads the geometry keys from a section; the theme is left empty.
    pub(crate) fn geometry_from_section(section: &ConfigSection) -> Result<Self, SettingsError> {
        Ok(Self {
            indent_increment: parse_int(section, "indent_increment")?,
            width: parse_int(section, "width")?,
            col1_max_width: parse_int(section, "col1_max_width")?,
            col2_min_width: parse_int(section, "col2_min_width")?,
            col_spacing: parse_int(section, "col_spacing")?,
            row_sep: section
                .get("row_sep")
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            theme: HelpTheme::new(),
        })
    }

    /// Returns these settings with `theme` in place of the current one.
    pub fn with_theme(mut self, theme: HelpTheme) -> Self {
        self.theme = theme;
        self
    }
}

/// Values are kept as configured, sign included. The renderer clamps them.
fn parse_int(section: &ConfigSection, key: &str) -> Result<i64, SettingsError> {
    let value = section.get(key).ok_or_else(|| SettingsError::MissingKey {
        key: key.to_string(),
    })?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| SettingsError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(pairs: &[(&str, &str)]) -> Result<FormatterSettings, SettingsError> {
        let mut section = ConfigSection::from_pairs(
            "t",
            [
                ("indent_increment", "2"),
                ("width", "80"),
                ("col1_max_width", "30"),
                ("col2_min_width", "10"),
                ("col_spacing", "2"),
                ("row_sep", ""),
            ],
        );
        for (k, v) in pairs {
            section.insert(k, *v);
        }
        FormatterSettings::geometry_from_section(&section)
    }

    #[test]
    fn test_geometry_parsed() {
        let settings = geometry(&[]).unwrap();
        assert_eq!(settings.indent_increment, 2);
        assert_eq!(settings.width, 80);
        assert_eq!(settings.col1_max_width, 30);
        assert_eq!(settings.col2_min_width, 10);
        assert_eq!(settings.col_spacing, 2);
        assert_eq!(settings.row_sep, None);
    }

    #[test]
    fn test_integers_tolerate_surrounding_whitespace() {
        assert_eq!(geometry(&[("width", " 120 ")]).unwrap().width, 120);
    }

    #[test]
    fn test_row_sep_passed_through() {
        let settings = geometry(&[("row_sep", "-")]).unwrap();
        assert_eq!(settings.row_sep.as_deref(), Some("-"));
    }

    #[test]
    fn test_non_numeric_width_fails() {
        let err = geometry(&[("width", "abc")]).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidInteger { ref key, .. } if key == "width"));
    }

    #[test]
    fn test_negative_kept_as_configured() {
        let settings = geometry(&[("col_spacing", "-1"), ("indent_increment", "-4")]).unwrap();
        assert_eq!(settings.col_spacing, -1);
        assert_eq!(settings.indent_increment, -4);
    }

    #[test]
    fn test_out_of_range_is_invalid_integer() {
        let err = geometry(&[("width", "99999999999999999999")]).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidInteger { ref key, .. } if key == "width"));
    }

    #[test]
    fn test_missing_key() {
        let section = ConfigSection::from_pairs("t", [("width", "80")]);
        let err = FormatterSettings::geometry_from_section(&section).unwrap_err();
        assert!(matches!(err, SettingsError::MissingKey { ref key } if key == "indent_increment"));
    }
}
