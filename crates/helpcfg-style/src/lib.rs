//! # helpcfg-style - textual style descriptors
//!
//! Parses short human-written style specifications, as found in configuration
//! files, into structured descriptors that convert to `console::Style`.
//!
//! ```rust
//! use helpcfg_style::StyleDescriptor;
//!
//! let heading = StyleDescriptor::parse("bright_white bold").unwrap();
//! let styled = heading.to_style().force_styling(true).apply_to("Options:");
//! assert!(styled.to_string().contains("Options:"));
//! ```
//!
//! Grammar, in order of precedence per token:
//!
//! 1. attribute words: `bold dim italic underline blink reverse hidden strikethrough`
//! 2. `on <color>`: background color
//! 3. anything else is a foreground color (see [`ColorDef`]); only one is allowed

mod color;
mod descriptor;
mod error;

pub use color::{rgb_to_ansi256, ColorDef};
pub use descriptor::StyleDescriptor;
pub use error::StyleError;
