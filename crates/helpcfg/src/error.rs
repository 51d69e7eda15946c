//! Error types for settings translation and section loading.

use std::io;
use std::num::ParseIntError;

use helpcfg_style::StyleError;

/// Errors that can occur while loading a section or translating it to settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A required key is absent from the section.
    #[error("missing required key '{key}'")]
    MissingKey { key: String },

    /// A geometry key holds something that is not an integer.
    #[error("invalid integer for '{key}': '{value}' ({source})")]
    InvalidInteger {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A style slot holds an invalid style description.
    #[error("invalid style for '{key}': {source}")]
    InvalidStyle {
        key: String,
        #[source]
        source: StyleError,
    },

    /// The `theme` key is neither empty, `dark` nor `light`.
    #[error("unknown theme '{0}' (expected 'dark', 'light' or empty)")]
    UnknownTheme(String),

    /// The requested section does not exist in the configuration text.
    #[error("section [{0}] not found")]
    SectionNotFound(String),

    /// The configuration text is malformed.
    #[error("syntax error{}: {message}", line_suffix(.line))]
    Syntax {
        line: Option<usize>,
        message: String,
    },

    /// Reading a configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),

    /// Command groups reference commands that don't exist.
    #[error("command group validation failed:\n  {0}")]
    CommandGroups(String),
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|n| format!(" on line {}", n)).unwrap_or_default()
}

impl SettingsError {
    /// Create a syntax error, optionally tied to a line number.
    pub fn syntax(line: Option<usize>, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}
