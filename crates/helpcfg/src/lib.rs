//! # helpcfg - configuration-driven help styling for clap CLIs
//!
//! `helpcfg` reads a flat, string-typed configuration section (typically the
//! `[CLI_CTX]` section of an INI file) and translates it into
//! [`ContextSettings`]: help layout geometry, a themed set of slot styles, and
//! alignment flags. [`help::render_help`] then uses those settings to render
//! the help of any `clap::Command`.
//!
//! ## Quick Start
//!
//! ```rust
//! use clap::{Arg, Command};
//! use helpcfg::help::{render_help, HelpConfig};
//! use helpcfg::{parse_cli_ctx, ConfigSection, OutputMode};
//!
//! let section = ConfigSection::parse_ini(r#"
//! [CLI_CTX]
//! indent_increment = 2
//! width = 60
//! col1_max_width = 20
//! col2_min_width = 20
//! col_spacing = 3
//! row_sep =
//! theme = dark
//! align_option_groups = true
//! align_sections = false
//! heading = bold underline
//! "#, "CLI_CTX").unwrap();
//!
//! let ctx = parse_cli_ctx(&section).unwrap();
//!
//! let cmd = Command::new("greet").arg(Arg::new("name").long("name").help("Who to greet"));
//! let config = HelpConfig { output_mode: Some(OutputMode::Text), ..Default::default() };
//! let help = render_help(&cmd, &ctx, Some(config));
//! assert!(help.contains("--name <NAME>   Who to greet"));
//! ```
//!
//! ## Configuration keys
//!
//! | Key | Meaning |
//! |---|---|
//! | `indent_increment`, `width`, `col1_max_width`, `col2_min_width`, `col_spacing` | required integers |
//! | `row_sep` | line written between rows; empty for none |
//! | `theme` | `dark`, `light` or empty (no preset) |
//! | `align_option_groups`, `align_sections` | `true` (any case) to enable |
//! | `command_help`, `invoked_command`, `heading`, `constraint`, `section_help`, `col1`, `col2`, `epilog` | style shorthand, e.g. `cyan bold` |
//!
//! Missing keys can be filled from the shipped defaults with
//! [`ConfigSection::with_defaults`].

mod context;
mod error;
mod formatter;
pub mod help;
mod output;
mod section;
mod theme;

pub use context::{parse_cli_ctx, parse_theme_settings, ContextSettings, ThemeSelector};
pub use error::SettingsError;
pub use formatter::FormatterSettings;
pub use output::OutputMode;
pub use section::{ConfigSection, DEFAULT_SECTION};
pub use theme::{HelpTheme, ThemeSettings, ThemeSlot};

pub use helpcfg_style::{ColorDef, StyleDescriptor, StyleError};
