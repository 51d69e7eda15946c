//! Help data extraction from clap commands.
//!
//! Turns a `clap::Command` into plain, unstyled sections of two-column rows.
//! Layout and styling happen in [`render`](super::render).

use std::collections::HashMap;

use clap::{Arg, Command};

use super::config::CommandGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionKind {
    Arguments,
    Options,
    Commands,
    Constraints,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Row {
    pub col1: String,
    pub col2: String,
    pub required: bool,
    /// Blank spacer line; col1/col2 are empty.
    pub separator: bool,
}

impl Row {
    fn new(col1: impl Into<String>, col2: impl Into<String>) -> Self {
        Self {
            col1: col1.into(),
            col2: col2.into(),
            required: false,
            separator: false,
        }
    }

    fn separator() -> Self {
        Self {
            separator: true,
            ..Self::new("", "")
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Section {
    pub title: String,
    pub help: Option<String>,
    pub kind: SectionKind,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone)]
pub(crate) struct HelpData {
    /// Program name as it appears at the start of the usage line.
    pub name: String,
    /// Usage line after the program name.
    pub usage: String,
    pub about: String,
    pub sections: Vec<Section>,
    pub epilog: String,
}

pub(crate) fn extract_help_data(cmd: &Command, command_groups: Option<&[CommandGroup]>) -> HelpData {
    let mut cmd = cmd.clone();
    cmd.build();

    let name = cmd
        .get_bin_name()
        .unwrap_or_else(|| cmd.get_name())
        .to_string();
    let full_usage = cmd.render_usage().to_string();
    let full_usage = full_usage
        .strip_prefix("Usage: ")
        .unwrap_or(&full_usage)
        .trim_end()
        .to_string();
    let (name, usage) = match full_usage.strip_prefix(name.as_str()) {
        Some(rest) => (name.clone(), rest.to_string()),
        None => (String::new(), full_usage.clone()),
    };

    let about = cmd
        .get_long_about()
        .or_else(|| cmd.get_about())
        .map(|s| s.to_string())
        .unwrap_or_default();
    let epilog = cmd
        .get_after_long_help()
        .or_else(|| cmd.get_after_help())
        .map(|s| s.to_string())
        .unwrap_or_default();

    let args: Vec<&Arg> = cmd.get_arguments().filter(|a| !a.is_hide_set()).collect();

    let mut sections = Vec::new();

    let positionals: Vec<Row> = args
        .iter()
        .filter(|a| a.is_positional())
        .map(|a| arg_row(a, positional_label(a)))
        .collect();
    if !positionals.is_empty() {
        sections.push(Section {
            title: "Arguments".to_string(),
            help: None,
            kind: SectionKind::Arguments,
            rows: positionals,
        });
    }

    sections.extend(extract_option_sections(&args));

    let mut subs: Vec<&Command> = cmd.get_subcommands().filter(|s| !s.is_hide_set()).collect();
    subs.sort_by_key(|s| s.get_display_order());
    match command_groups {
        Some(groups) => sections.extend(extract_grouped_subcommands(&subs, groups)),
        None if !subs.is_empty() => sections.push(Section {
            title: "Commands".to_string(),
            help: None,
            kind: SectionKind::Commands,
            rows: subs.iter().map(|s| subcommand_row(s)).collect(),
        }),
        None => {}
    }

    if let Some(constraints) = extract_constraints(&cmd) {
        sections.push(constraints);
    }

    HelpData {
        name,
        usage,
        about,
        sections,
        epilog,
    }
}

/// Options grouped by `help_heading`, in order of first appearance.
fn extract_option_sections(args: &[&Arg]) -> Vec<Section> {
    let mut options: Vec<&Arg> = args.iter().copied().filter(|a| !a.is_positional()).collect();
    options.sort_by_key(|a| a.get_display_order());

    let mut groups: Vec<(Option<String>, Vec<Row>)> = Vec::new();
    for arg in options {
        let heading = arg.get_help_heading().map(|s| s.to_string());
        let row = arg_row(arg, option_label(arg));
        match groups.iter_mut().find(|(h, _)| *h == heading) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((heading, vec![row])),
        }
    }

    groups
        .into_iter()
        .map(|(heading, rows)| Section {
            title: heading.unwrap_or_else(|| "Options".to_string()),
            help: None,
            kind: SectionKind::Options,
            rows,
        })
        .collect()
}

fn extract_grouped_subcommands(subs: &[&Command], groups: &[CommandGroup]) -> Vec<Section> {
    let mut sub_map: HashMap<&str, &Command> = subs.iter().map(|s| (s.get_name(), *s)).collect();
    let mut sections = Vec::new();

    for group in groups {
        let mut rows = Vec::new();
        for entry in &group.commands {
            match entry {
                None => rows.push(Row::separator()),
                Some(cmd_name) => {
                    // Unknown names are skipped; validate_command_groups reports them.
                    if let Some(sub) = sub_map.remove(cmd_name.as_str()) {
                        rows.push(subcommand_row(sub));
                    }
                }
            }
        }
        if rows.iter().any(|r| !r.separator) {
            sections.push(Section {
                title: group.title.clone(),
                help: group.help.clone(),
                kind: SectionKind::Commands,
                rows,
            });
        }
    }

    if !sub_map.is_empty() {
        let mut remaining: Vec<&Command> = sub_map.into_values().collect();
        remaining.sort_by_key(|s| (s.get_display_order(), s.get_name().to_string()));
        sections.push(Section {
            title: "Other".to_string(),
            help: None,
            kind: SectionKind::Commands,
            rows: remaining.iter().map(|s| subcommand_row(s)).collect(),
        });
    }

    sections
}

/// Lists arg groups that restrict usage: mutually exclusive and/or required.
fn extract_constraints(cmd: &Command) -> Option<Section> {
    let mut rows = Vec::new();

    for group in cmd.get_groups() {
        let exclusive = !group.clone().is_multiple();
        let required = group.is_required_set();
        let description = match (exclusive, required) {
            (true, true) => "mutually exclusive, required",
            (true, false) => "mutually exclusive",
            (false, true) => "at least one required",
            (false, false) => continue,
        };

        let members: Vec<String> = group
            .get_args()
            .filter_map(|id| cmd.get_arguments().find(|a| a.get_id() == id))
            .map(short_label)
            .collect();
        if members.is_empty() {
            continue;
        }
        rows.push(Row::new(members.join(", "), description));
    }

    if rows.is_empty() {
        None
    } else {
        Some(Section {
            title: "Constraints".to_string(),
            help: None,
            kind: SectionKind::Constraints,
            rows,
        })
    }
}

fn arg_row(arg: &Arg, label: String) -> Row {
    let help = arg
        .get_help()
        .or_else(|| arg.get_long_help())
        .map(|s| s.to_string())
        .unwrap_or_default();
    Row {
        required: arg.is_required_set(),
        ..Row::new(label, help)
    }
}

fn subcommand_row(sub: &Command) -> Row {
    Row::new(
        sub.get_name(),
        sub.get_about().map(|s| s.to_string()).unwrap_or_default(),
    )
}

fn option_label(arg: &Arg) -> String {
    let mut name = String::new();
    if let Some(short) = arg.get_short() {
        name.push('-');
        name.push(short);
    }
    if let Some(long) = arg.get_long() {
        if !name.is_empty() {
            name.push_str(", ");
        }
        name.push_str("--");
        name.push_str(long);
    }
    if name.is_empty() {
        name = arg.get_id().to_string();
    }
    if arg.get_action().takes_values() {
        name.push(' ');
        name.push_str(&value_placeholder(arg));
    }
    name
}

fn positional_label(arg: &Arg) -> String {
    let names = value_names(arg).join(" ");
    if arg.is_required_set() {
        format!("<{}>", names)
    } else {
        format!("[{}]", names)
    }
}

fn value_placeholder(arg: &Arg) -> String {
    value_names(arg)
        .iter()
        .map(|n| format!("<{}>", n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn value_names(arg: &Arg) -> Vec<String> {
    match arg.get_value_names() {
        Some(names) if !names.is_empty() => names.iter().map(|n| n.to_string()).collect(),
        _ => vec![arg.get_id().as_str().to_uppercase()],
    }
}

/// Compact name for constraint listings: `--long`, `-s`, or `<ID>`.
fn short_label(arg: &Arg) -> String {
    if let Some(long) = arg.get_long() {
        format!("--{}", long)
    } else if let Some(short) = arg.get_short() {
        format!("-{}", short)
    } else {
        format!("<{}>", arg.get_id().as_str().to_uppercase())
    }
}
