//! Style descriptor error types.

/// Error returned when a style descriptor string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A token looked like a color but is not one.
    InvalidColor {
        /// The offending token.
        value: String,
        /// What was wrong with it.
        message: String,
    },

    /// The descriptor as a whole is malformed (empty, two colors, dangling `on`).
    InvalidShorthand {
        /// The full descriptor text.
        value: String,
        /// What was wrong with it.
        message: String,
    },
}

impl StyleError {
    pub(crate) fn color(value: &str, message: impl Into<String>) -> Self {
        StyleError::InvalidColor {
            value: value.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn shorthand(value: &str, message: impl Into<String>) -> Self {
        StyleError::InvalidShorthand {
            value: value.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::InvalidColor { value, message } => {
                write!(f, "invalid color '{}': {}", value, message)
            }
            StyleError::InvalidShorthand { value, message } => {
                write!(f, "invalid style '{}': {}", value, message)
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = StyleError::color("purple", "unknown color name");
        let msg = err.to_string();
        assert!(msg.contains("purple"));
        assert!(msg.contains("unknown color name"));
    }

    #[test]
    fn test_invalid_shorthand_display() {
        let err = StyleError::shorthand("", "empty style");
        assert_eq!(err.to_string(), "invalid style '': empty style");
    }
}
