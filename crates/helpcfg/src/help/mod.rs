//! Styled help rendering for clap commands, driven by [`ContextSettings`](crate::ContextSettings).
//!
//! - [`render_help`]: Render help for a command
//! - [`HelpConfig`]: Output mode and subcommand grouping
//! - [`CommandGroup`]: Define subcommand groups for organized help display
//! - [`validate_command_groups`]: Validate group config against a clap Command tree
//!
//! Layout rules, all taken from [`FormatterSettings`](crate::FormatterSettings):
//!
//! - rows are indented by `indent_increment`
//! - column 1 is as wide as its widest entry, capped at `col1_max_width`; a
//!   longer entry pushes its description to the next line
//! - column 2 starts `col_spacing` blanks later and wraps at `width`
//! - if column 2 would be narrower than `col2_min_width`, rows fall back to a
//!   linear layout with the description on its own line
//! - `row_sep`, when set, is written between rows

mod config;
pub(crate) mod data;
mod render;
mod text;

pub use config::{validate_command_groups, CommandGroup, HelpConfig};
pub use render::render_help;
