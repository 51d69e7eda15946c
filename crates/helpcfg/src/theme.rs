//! Help themes: styles for the semantic slots of rendered help.
//!
//! A [`HelpTheme`] assigns an optional [`StyleDescriptor`] to each
//! [`ThemeSlot`]. Slots without a style render as plain text.
//!
//! Two presets exist, [`HelpTheme::dark`] and [`HelpTheme::light`], tuned for
//! dark and light terminal backgrounds. User overrides from configuration are
//! collected into [`ThemeSettings`] and layered on top:
//!
//! ```rust
//! use helpcfg::{HelpTheme, ThemeSettings, ThemeSlot};
//! use helpcfg_style::StyleDescriptor;
//!
//! let mut overrides = ThemeSettings::new();
//! overrides.set(ThemeSlot::Heading, StyleDescriptor::parse("bold").unwrap());
//!
//! let theme = HelpTheme::dark().with_overrides(&overrides);
//! assert_eq!(theme.get(ThemeSlot::Heading).unwrap().to_string(), "bold");
//! // Untouched preset slots survive
//! assert!(theme.get(ThemeSlot::Col1).is_some());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use helpcfg_style::{ColorDef, StyleDescriptor};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A semantic position in rendered help output that can carry a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThemeSlot {
    /// The command's own description (about text).
    CommandHelp,
    /// The program name in the usage line.
    InvokedCommand,
    /// Section titles ("Options:", "Commands:").
    Heading,
    /// Constraint markers such as `[required]`.
    Constraint,
    /// Help text shown under a section title.
    SectionHelp,
    /// First column of definition lists (names).
    Col1,
    /// Second column of definition lists (descriptions).
    Col2,
    /// Text after the last section.
    Epilog,
}

impl ThemeSlot {
    /// Every slot, in declaration order.
    pub const ALL: [ThemeSlot; 8] = [
        ThemeSlot::CommandHelp,
        ThemeSlot::InvokedCommand,
        ThemeSlot::Heading,
        ThemeSlot::Constraint,
        ThemeSlot::SectionHelp,
        ThemeSlot::Col1,
        ThemeSlot::Col2,
        ThemeSlot::Epilog,
    ];

    /// The configuration key for this slot.
    pub fn key(self) -> &'static str {
        match self {
            ThemeSlot::CommandHelp => "command_help",
            ThemeSlot::InvokedCommand => "invoked_command",
            ThemeSlot::Heading => "heading",
            ThemeSlot::Constraint => "constraint",
            ThemeSlot::SectionHelp => "section_help",
            ThemeSlot::Col1 => "col1",
            ThemeSlot::Col2 => "col2",
            ThemeSlot::Epilog => "epilog",
        }
    }

    /// Maps a configuration key to a slot. Exact, lowercase match.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }
}

impl fmt::Display for ThemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Slot styles collected from configuration.
///
/// Only slots given a non-empty value appear here; everything else means
/// "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSettings {
    styles: BTreeMap<ThemeSlot, StyleDescriptor>,
}

impl ThemeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: ThemeSlot, style: StyleDescriptor) {
        self.styles.insert(slot, style);
    }

    pub fn get(&self, slot: ThemeSlot) -> Option<&StyleDescriptor> {
        self.styles.get(&slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeSlot, &StyleDescriptor)> {
        self.styles.iter().map(|(slot, style)| (*slot, style))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// The resolved style of every slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpTheme {
    styles: BTreeMap<ThemeSlot, StyleDescriptor>,
}

impl HelpTheme {
    /// A theme with no styles at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A theme made only of the given settings, with no preset underneath.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        Self::new().with_overrides(settings)
    }

    /// Preset for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self::new()
            .with(ThemeSlot::InvokedCommand, fg(ColorDef::Color256(11)))
            .with(ThemeSlot::Heading, fg(ColorDef::Color256(15)).bold())
            .with(ThemeSlot::Constraint, fg(ColorDef::Named(console::Color::Magenta)))
            .with(ThemeSlot::Col1, fg(ColorDef::Color256(11)))
    }

    /// Preset for light terminal backgrounds.
    pub fn light() -> Self {
        Self::new()
            .with(ThemeSlot::InvokedCommand, fg(ColorDef::Named(console::Color::Yellow)))
            .with(ThemeSlot::Heading, fg(ColorDef::Color256(12)))
            .with(ThemeSlot::Constraint, fg(ColorDef::Named(console::Color::Red)))
            .with(ThemeSlot::Col1, fg(ColorDef::Named(console::Color::Yellow)))
    }

    /// Sets one slot, returning `self` for chaining.
    pub fn with(mut self, slot: ThemeSlot, style: StyleDescriptor) -> Self {
        self.styles.insert(slot, style);
        self
    }

    /// Replaces every slot present in `settings`; other slots are kept.
    pub fn with_overrides(mut self, settings: &ThemeSettings) -> Self {
        for (slot, style) in settings.iter() {
            self.styles.insert(slot, style.clone());
        }
        self
    }

    /// The style for a slot, if any.
    pub fn get(&self, slot: ThemeSlot) -> Option<&StyleDescriptor> {
        self.styles.get(&slot)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Serializes as a map over all slots, with `null` for unstyled ones.
impl Serialize for HelpTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ThemeSlot::ALL.len()))?;
        for slot in ThemeSlot::ALL {
            map.serialize_entry(slot.key(), &self.get(slot))?;
        }
        map.end()
    }
}

fn fg(color: ColorDef) -> StyleDescriptor {
    StyleDescriptor::new().fg(color)
}
