//! Translation of a configuration section into [`ContextSettings`].
//!
//! [`parse_cli_ctx`] is the entry point. It is pure: the same section always
//! produces an equal result and nothing outside the return value changes.
//!
//! ```rust
//! use helpcfg::{parse_cli_ctx, ConfigSection, ThemeSlot};
//!
//! let section = ConfigSection::from_pairs("CLI_CTX", [
//!     ("indent_increment", "2"),
//!     ("width", "80"),
//!     ("col1_max_width", "30"),
//!     ("col2_min_width", "10"),
//!     ("col_spacing", "2"),
//!     ("row_sep", ""),
//!     ("theme", "Dark"),
//!     ("align_option_groups", "TRUE"),
//!     ("align_sections", "no"),
//!     ("heading", "bold"),
//! ]);
//!
//! let ctx = parse_cli_ctx(&section).unwrap();
//! assert!(ctx.align_option_groups);
//! assert!(!ctx.align_sections);
//! assert!(ctx.show_constraints);
//! assert_eq!(ctx.formatter_settings.width, 80);
//! let heading = ctx.formatter_settings.theme.get(ThemeSlot::Heading).unwrap();
//! assert_eq!(heading.to_string(), "bold");
//! ```

use helpcfg_style::StyleDescriptor;
use serde::Serialize;

use crate::error::SettingsError;
use crate::formatter::FormatterSettings;
use crate::section::ConfigSection;
use crate::theme::{HelpTheme, ThemeSettings, ThemeSlot};

/// Which preset the theme starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeSelector {
    /// No preset; only configured slots are styled.
    #[default]
    Unset,
    Dark,
    Light,
}

impl ThemeSelector {
    /// Parses the `theme` value. Empty means [`ThemeSelector::Unset`].
    ///
    /// # Errors
    ///
    /// [`SettingsError::UnknownTheme`] for anything other than `dark`/`light`
    /// in any letter case.
    pub fn parse(value: &str) -> Result<Self, SettingsError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(ThemeSelector::Unset);
        }
        match value.to_lowercase().as_str() {
            "dark" => Ok(ThemeSelector::Dark),
            "light" => Ok(ThemeSelector::Light),
            _ => Err(SettingsError::UnknownTheme(value.to_string())),
        }
    }

    /// Builds the theme for this selector with `settings` layered on top.
    pub fn resolve(self, settings: &ThemeSettings) -> HelpTheme {
        match self {
            ThemeSelector::Unset => HelpTheme::from_settings(settings),
            ThemeSelector::Dark => HelpTheme::dark().with_overrides(settings),
            ThemeSelector::Light => HelpTheme::light().with_overrides(settings),
        }
    }
}

/// Top-level help rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSettings {
    /// Share one column 1 width across all option groups of a command.
    pub align_option_groups: bool,
    /// Share one column 1 width across every section of a command.
    pub align_sections: bool,
    /// Render constraint markers and the constraints section. Always true
    /// when produced by [`parse_cli_ctx`].
    pub show_constraints: bool,
    pub formatter_settings: FormatterSettings,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            align_option_groups: false,
            align_sections: false,
            show_constraints: true,
            formatter_settings: FormatterSettings::default(),
        }
    }
}

/// Translates a configuration section into help rendering settings.
///
/// Required keys: `indent_increment`, `width`, `col1_max_width`,
/// `col2_min_width`, `col_spacing`. Optional keys: `row_sep`, `theme`,
/// `align_option_groups`, `align_sections`, and one key per [`ThemeSlot`].
///
/// # Errors
///
/// - [`SettingsError::MissingKey`] / [`SettingsError::InvalidInteger`] for geometry keys
/// - [`SettingsError::InvalidStyle`] for a malformed slot style
/// - [`SettingsError::UnknownTheme`] for a `theme` other than `dark`/`light`/empty
pub fn parse_cli_ctx(section: &ConfigSection) -> Result<ContextSettings, SettingsError> {
    let geometry = FormatterSettings::geometry_from_section(section)?;
    let theme_settings = parse_theme_settings(section)?;
    let selector = ThemeSelector::parse(section.get("theme").unwrap_or_default())?;

    log::debug!(
        "translating section {}: theme {:?} with {} slot override(s)",
        section.name().unwrap_or("<unnamed>"),
        selector,
        theme_settings.len()
    );

    let formatter_settings = geometry.with_theme(selector.resolve(&theme_settings));

    Ok(ContextSettings {
        align_option_groups: parse_flag(section, "align_option_groups"),
        align_sections: parse_flag(section, "align_sections"),
        show_constraints: true,
        formatter_settings,
    })
}

/// Collects every non-empty slot key of the section into [`ThemeSettings`].
pub fn parse_theme_settings(section: &ConfigSection) -> Result<ThemeSettings, SettingsError> {
    let mut settings = ThemeSettings::new();

    for (key, value) in section.iter() {
        let Some(slot) = ThemeSlot::from_key(key) else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }

        let style = StyleDescriptor::parse(value).map_err(|source| SettingsError::InvalidStyle {
            key: key.to_string(),
            source,
        })?;
        log::trace!("slot {} = {}", slot, style);
        settings.set(slot, style);
    }

    Ok(settings)
}

fn parse_flag(section: &ConfigSection, key: &str) -> bool {
    section
        .get(key)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(extra: &[(&str, &str)]) -> ConfigSection {
        let mut section = ConfigSection::from_pairs(
            "CLI_CTX",
            [
                ("indent_increment", "2"),
                ("width", "80"),
                ("col1_max_width", "30"),
                ("col2_min_width", "10"),
                ("col_spacing", "2"),
                ("row_sep", ""),
                ("theme", ""),
                ("align_option_groups", "false"),
                ("align_sections", "false"),
            ],
        );
        for (k, v) in extra {
            section.insert(k, *v);
        }
        section
    }

    fn style(s: &str) -> StyleDescriptor {
        StyleDescriptor::parse(s).unwrap()
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(ThemeSelector::parse("").unwrap(), ThemeSelector::Unset);
        assert_eq!(ThemeSelector::parse("  ").unwrap(), ThemeSelector::Unset);
        for v in ["dark", "Dark", "DARK"] {
            assert_eq!(ThemeSelector::parse(v).unwrap(), ThemeSelector::Dark);
        }
        for v in ["light", "LiGhT"] {
            assert_eq!(ThemeSelector::parse(v).unwrap(), ThemeSelector::Light);
        }
    }

    #[test]
    fn test_selector_unknown_fails() {
        let err = ThemeSelector::parse("solarized").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownTheme(ref t) if t == "solarized"));
    }

    #[test]
    fn test_theme_settings_skip_empty_and_unknown_keys() {
        let s = section(&[("heading", "bold"), ("col2", ""), ("epilog", "dim italic")]);
        let settings = parse_theme_settings(&s).unwrap();
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get(ThemeSlot::Heading), Some(&style("bold")));
        assert_eq!(settings.get(ThemeSlot::Epilog), Some(&style("dim italic")));
        assert!(settings.get(ThemeSlot::Col2).is_none());
    }

    #[test]
    fn test_invalid_style_reports_key() {
        let err = parse_cli_ctx(&section(&[("col1", "bold sparkly")])).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidStyle { ref key, .. } if key == "col1"));
    }

    #[test]
    fn test_unset_theme_has_no_preset() {
        let ctx = parse_cli_ctx(&section(&[("col1", "green")])).unwrap();
        let theme = &ctx.formatter_settings.theme;
        assert_eq!(theme, &HelpTheme::new().with(ThemeSlot::Col1, style("green")));
    }

    #[test]
    fn test_light_theme_with_override() {
        let ctx = parse_cli_ctx(&section(&[("theme", "light"), ("col1", "green")])).unwrap();
        let expected = HelpTheme::light().with(ThemeSlot::Col1, style("green"));
        assert_eq!(ctx.formatter_settings.theme, expected);
    }

    #[test]
    fn test_flags_case_insensitive() {
        for v in ["true", "True", "TRUE"] {
            let ctx = parse_cli_ctx(&section(&[("align_option_groups", v)])).unwrap();
            assert!(ctx.align_option_groups, "{v}");
        }
        for v in ["false", "yes", "1", ""] {
            let ctx = parse_cli_ctx(&section(&[("align_sections", v)])).unwrap();
            assert!(!ctx.align_sections, "{v}");
        }
    }

    #[test]
    fn test_absent_optional_keys() {
        let s = ConfigSection::from_pairs(
            "t",
            [
                ("indent_increment", "2"),
                ("width", "80"),
                ("col1_max_width", "30"),
                ("col2_min_width", "10"),
                ("col_spacing", "2"),
            ],
        );
        let ctx = parse_cli_ctx(&s).unwrap();
        assert!(!ctx.align_option_groups);
        assert!(!ctx.align_sections);
        assert!(ctx.show_constraints);
        assert_eq!(ctx.formatter_settings.row_sep, None);
        assert!(ctx.formatter_settings.theme.is_empty());
    }

    #[test]
    fn test_unknown_theme_produces_no_settings() {
        assert!(matches!(
            parse_cli_ctx(&section(&[("theme", "blue")])),
            Err(SettingsError::UnknownTheme(_))
        ));
    }
}
