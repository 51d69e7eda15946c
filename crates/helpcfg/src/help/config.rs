//! Help rendering configuration.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use clap::Command;

use crate::error::SettingsError;
use crate::output::OutputMode;

/// Defines a group of subcommands for help display.
///
/// When provided via [`HelpConfig::command_groups`], subcommands are organized
/// into named sections instead of appearing in a single "Commands" section.
/// The group's `help` is rendered under the title with the `section_help` style.
///
/// Use `None` entries in [`commands`](CommandGroup::commands) to insert blank
/// line separators for visual sub-grouping within a section.
#[derive(Debug, Clone, Default)]
pub struct CommandGroup {
    /// Section title (e.g., "Commands", "Maintenance").
    pub title: String,
    /// Optional help text displayed below the title, before the command list.
    pub help: Option<String>,
    /// Command names in display order. `None` inserts a blank line.
    pub commands: Vec<Option<String>>,
}

/// Per-call options for [`render_help`](super::render_help).
///
/// Layout and styling come from [`ContextSettings`](crate::ContextSettings);
/// this only carries what configuration files don't describe.
#[derive(Debug, Clone, Default)]
pub struct HelpConfig {
    /// Output mode. If None, uses Auto (auto-detects).
    pub output_mode: Option<OutputMode>,
    /// Subcommand grouping. If None, all subcommands appear under "Commands".
    pub command_groups: Option<Vec<CommandGroup>>,
}

/// Checks group configuration against the visible subcommands of `cmd`.
///
/// Reported, one line each:
///
/// - names that are not a visible subcommand
/// - a command listed more than once, in the same group or another one
/// - groups with no commands, which would render nothing
///
/// Ungrouped commands are fine; they end up in an "Other" section.
///
/// ```rust,ignore
/// #[test]
/// fn help_groups_match_commands() {
///     validate_command_groups(&Cli::command(), &my_command_groups()).unwrap();
/// }
/// ```
pub fn validate_command_groups(
    cmd: &Command,
    groups: &[CommandGroup],
) -> Result<(), SettingsError> {
    let visible: HashSet<&str> = cmd
        .get_subcommands()
        .filter(|s| !s.is_hide_set())
        .map(|s| s.get_name())
        .collect();

    let mut listed_in: HashMap<&str, &str> = HashMap::new();
    let mut problems = Vec::new();

    for group in groups {
        let title = group.title.as_str();
        let mut names = group.commands.iter().flatten().peekable();
        if names.peek().is_none() {
            problems.push(format!("{}: group lists no commands", title));
        }

        for name in names {
            let name = name.as_str();
            if !visible.contains(name) {
                problems.push(format!("{}: no visible command '{}'", title, name));
                continue;
            }
            match listed_in.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(title);
                }
                Entry::Occupied(first) => problems.push(format!(
                    "{}: '{}' is already listed under {}",
                    title,
                    name,
                    first.get()
                )),
            }
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(SettingsError::CommandGroups(problems.join("\n  ")))
    }
}
