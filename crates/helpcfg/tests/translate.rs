//! Integration tests for translating configuration sections into context settings.

use helpcfg::{
    parse_cli_ctx, parse_theme_settings, ConfigSection, HelpTheme, SettingsError,
    StyleDescriptor, ThemeSlot, DEFAULT_SECTION,
};
use proptest::prelude::*;

fn base_section() -> ConfigSection {
    ConfigSection::from_pairs(
        DEFAULT_SECTION,
        [
            ("indent_increment", "2"),
            ("width", "80"),
            ("col1_max_width", "30"),
            ("col2_min_width", "10"),
            ("col_spacing", "2"),
            ("row_sep", ""),
            ("theme", "dark"),
            ("align_option_groups", "true"),
            ("align_sections", "false"),
            ("heading", "bold"),
        ],
    )
}

fn style(s: &str) -> StyleDescriptor {
    StyleDescriptor::parse(s).unwrap()
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn dark_theme_with_heading_override() {
    let ctx = parse_cli_ctx(&base_section()).unwrap();

    assert!(ctx.align_option_groups);
    assert!(!ctx.align_sections);
    assert!(ctx.show_constraints);

    let fmt = &ctx.formatter_settings;
    assert_eq!(fmt.indent_increment, 2);
    assert_eq!(fmt.width, 80);
    assert_eq!(fmt.col1_max_width, 30);
    assert_eq!(fmt.col2_min_width, 10);
    assert_eq!(fmt.col_spacing, 2);
    assert_eq!(fmt.row_sep, None);
    assert_eq!(
        fmt.theme,
        HelpTheme::dark().with(ThemeSlot::Heading, style("bold"))
    );
}

#[test]
fn non_numeric_width_fails() {
    let mut section = base_section();
    section.insert("width", "abc");

    let err = parse_cli_ctx(&section).unwrap_err();
    match err {
        SettingsError::InvalidInteger { key, value, .. } => {
            assert_eq!(key, "width");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_theme_fails() {
    let mut section = base_section();
    section.insert("theme", "solarized");

    assert!(matches!(
        parse_cli_ctx(&section),
        Err(SettingsError::UnknownTheme(name)) if name == "solarized"
    ));
}

#[test]
fn bad_style_names_the_slot() {
    let mut section = base_section();
    section.insert("col1", "bold notacolor");

    let err = parse_cli_ctx(&section).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidStyle { ref key, .. } if key == "col1"));
    assert!(err.to_string().contains("col1"), "{err}");
}

// ============================================================================
// Case-insensitivity and defaults
// ============================================================================

#[test]
fn theme_selector_ignores_case() {
    let themes: Vec<HelpTheme> = ["Dark", "dark", "DARK"]
        .iter()
        .map(|name| {
            let mut section = base_section();
            section.insert("theme", *name);
            parse_cli_ctx(&section).unwrap().formatter_settings.theme
        })
        .collect();

    assert_eq!(themes[0], themes[1]);
    assert_eq!(themes[1], themes[2]);
}

#[test]
fn light_preset_is_distinct() {
    let mut section = base_section();
    section.insert("theme", "light");
    section.insert("heading", "");

    let ctx = parse_cli_ctx(&section).unwrap();
    assert_eq!(ctx.formatter_settings.theme, HelpTheme::light());
    assert_ne!(HelpTheme::light(), HelpTheme::dark());
}

#[test]
fn empty_theme_has_no_preset() {
    let mut section = base_section();
    section.insert("theme", "");

    let ctx = parse_cli_ctx(&section).unwrap();
    assert_eq!(
        ctx.formatter_settings.theme,
        HelpTheme::new().with(ThemeSlot::Heading, style("bold"))
    );
}

#[test]
fn flags_only_accept_true() {
    for (value, expected) in [
        ("True", true),
        ("true", true),
        ("TRUE", true),
        ("false", false),
        ("yes", false),
        ("1", false),
        ("", false),
    ] {
        let mut section = base_section();
        section.insert("align_sections", value);
        let ctx = parse_cli_ctx(&section).unwrap();
        assert_eq!(ctx.align_sections, expected, "value {value:?}");
    }
}

#[test]
fn show_constraints_is_always_set() {
    let mut section = base_section();
    section.insert("show_constraints", "false");
    assert!(parse_cli_ctx(&section).unwrap().show_constraints);
}

#[test]
fn row_sep_passes_through_verbatim() {
    let mut section = base_section();
    section.insert("row_sep", "--");
    let ctx = parse_cli_ctx(&section).unwrap();
    assert_eq!(ctx.formatter_settings.row_sep.as_deref(), Some("--"));
}

#[test]
fn empty_slots_are_left_out() {
    let mut section = base_section();
    section.insert("col1", "");
    section.insert("col2", "dim");

    let settings = parse_theme_settings(&section).unwrap();
    assert_eq!(settings.len(), 2);
    assert!(settings.get(ThemeSlot::Col1).is_none());
    assert_eq!(settings.get(ThemeSlot::Col2), Some(&style("dim")));
    assert_eq!(settings.get(ThemeSlot::Heading), Some(&style("bold")));
}

#[test]
fn shipped_defaults_translate() {
    let ctx = parse_cli_ctx(&ConfigSection::defaults()).unwrap();
    let fmt = &ctx.formatter_settings;

    assert_eq!(fmt.width, 80);
    assert_eq!(fmt.col1_max_width, 30);
    assert_eq!(fmt.col2_min_width, 35);
    assert!(fmt.theme.is_empty());
    assert!(ctx.align_option_groups);
    assert!(ctx.align_sections);
}

#[test]
fn partial_section_filled_from_defaults() {
    let section = ConfigSection::from_pairs(DEFAULT_SECTION, [("width", "100"), ("theme", "light")]);

    assert!(matches!(
        parse_cli_ctx(&section),
        Err(SettingsError::MissingKey { .. })
    ));

    let ctx = parse_cli_ctx(&section.with_defaults()).unwrap();
    assert_eq!(ctx.formatter_settings.width, 100);
    assert_eq!(ctx.formatter_settings.indent_increment, 2);
    assert_eq!(ctx.formatter_settings.theme, HelpTheme::light());
}

#[test]
fn negative_geometry_is_an_integer() {
    let mut section = base_section();
    section.insert("indent_increment", "-1");
    section.insert("col_spacing", " -3 ");

    let fmt = parse_cli_ctx(&section).unwrap().formatter_settings;
    assert_eq!(fmt.indent_increment, -1);
    assert_eq!(fmt.col_spacing, -3);
}

#[test]
fn fractional_width_fails() {
    let mut section = base_section();
    section.insert("width", "80.5");
    assert!(matches!(
        parse_cli_ctx(&section),
        Err(SettingsError::InvalidInteger { .. })
    ));
}

#[test]
fn translation_is_idempotent() {
    let section = base_section();
    assert_eq!(parse_cli_ctx(&section).unwrap(), parse_cli_ctx(&section).unwrap());
}

// ============================================================================
// Loading from files
// ============================================================================

#[test]
fn ini_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.cfg");
    std::fs::write(
        &path,
        "[other]\nwidth = 1\n\n[CLI_CTX]\n; layout\nWidth = 72\ntheme = Light\ncol1 = cyan\n",
    )
    .unwrap();

    let section = ConfigSection::load(&path, DEFAULT_SECTION).unwrap();
    let ctx = parse_cli_ctx(&section.with_defaults()).unwrap();

    assert_eq!(ctx.formatter_settings.width, 72);
    assert_eq!(
        ctx.formatter_settings.theme,
        HelpTheme::light().with(ThemeSlot::Col1, style("cyan"))
    );
}

#[test]
fn yaml_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("help.yaml");
    std::fs::write(
        &path,
        "CLI_CTX:\n  width: 90\n  align_sections: false\n  row_sep: \"\"\n  heading: bold underline\n",
    )
    .unwrap();

    let section = ConfigSection::load(&path, DEFAULT_SECTION).unwrap();
    let ctx = parse_cli_ctx(&section.with_defaults()).unwrap();

    assert_eq!(ctx.formatter_settings.width, 90);
    assert!(!ctx.align_sections);
    assert_eq!(ctx.formatter_settings.row_sep, None);
    assert_eq!(
        ctx.formatter_settings.theme.get(ThemeSlot::Heading),
        Some(&style("bold underline"))
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ConfigSection::load(dir.path().join("nope.cfg"), DEFAULT_SECTION).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Geometry values come back exactly as configured.
    #[test]
    fn geometry_echoes_input(
        indent in any::<i64>(),
        width in -1000i64..1000,
        col1 in -200i64..200,
        col2 in -200i64..200,
        spacing in -16i64..16,
    ) {
        let mut section = base_section();
        section.insert("indent_increment", indent.to_string());
        section.insert("width", width.to_string());
        section.insert("col1_max_width", col1.to_string());
        section.insert("col2_min_width", col2.to_string());
        section.insert("col_spacing", spacing.to_string());

        let fmt = parse_cli_ctx(&section).unwrap().formatter_settings;
        prop_assert_eq!(fmt.indent_increment, indent);
        prop_assert_eq!(fmt.width, width);
        prop_assert_eq!(fmt.col1_max_width, col1);
        prop_assert_eq!(fmt.col2_min_width, col2);
        prop_assert_eq!(fmt.col_spacing, spacing);
    }

    /// Flags are true exactly when the value is "true" in some letter case.
    #[test]
    fn flag_matches_true_ignoring_case(value in "[a-zA-Z]{0,6}") {
        let mut section = base_section();
        section.insert("align_option_groups", value.clone());
        let ctx = parse_cli_ctx(&section).unwrap();
        prop_assert_eq!(ctx.align_option_groups, value.eq_ignore_ascii_case("true"));
        prop_assert!(ctx.show_constraints);
    }
}
