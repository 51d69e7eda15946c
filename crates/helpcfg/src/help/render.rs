//! Help layout and styling.

use clap::Command;

use crate::context::ContextSettings;
use crate::formatter::FormatterSettings;
use crate::output::OutputMode;
use crate::theme::ThemeSlot;

use super::config::HelpConfig;
use super::data::{extract_help_data, HelpData, Row, Section, SectionKind};
use super::text::{display_width, wrap};

const REQUIRED_MARKER: &str = "[required]";

/// Renders the help for a clap command, laid out and styled by `ctx`.
///
/// ```rust
/// use clap::{Arg, Command};
/// use helpcfg::help::{render_help, HelpConfig};
/// use helpcfg::{ContextSettings, OutputMode};
///
/// let cmd = Command::new("app")
///     .about("Does things")
///     .arg(Arg::new("name").long("name").help("Who to greet"));
///
/// let config = HelpConfig { output_mode: Some(OutputMode::Text), ..Default::default() };
/// let help = render_help(&cmd, &ContextSettings::default(), Some(config));
///
/// assert!(help.starts_with("Usage: app [OPTIONS]"));
/// assert!(help.contains("  --name <NAME>  Who to greet"));
/// ```
pub fn render_help(cmd: &Command, ctx: &ContextSettings, config: Option<HelpConfig>) -> String {
    let config = config.unwrap_or_default();
    let mode = config.output_mode.unwrap_or(OutputMode::Auto);
    let data = extract_help_data(cmd, config.command_groups.as_deref());

    log::debug!(
        "rendering help for '{}' ({} sections, mode {:?})",
        cmd.get_name(),
        data.sections.len(),
        mode
    );

    HelpWriter::new(ctx, mode).write(&data)
}

/// Geometry in terminal columns. Configured values are clamped to
/// `0..=u16::MAX`, the range `console` reports terminal sizes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    indent: usize,
    width: usize,
    col1_max_width: usize,
    col2_min_width: usize,
    col_spacing: usize,
}

impl Layout {
    fn new(fmt: &FormatterSettings) -> Self {
        Self {
            indent: columns(fmt.indent_increment),
            width: columns(fmt.width),
            col1_max_width: columns(fmt.col1_max_width),
            col2_min_width: columns(fmt.col2_min_width),
            col_spacing: columns(fmt.col_spacing),
        }
    }
}

fn columns(value: i64) -> usize {
    value.clamp(0, i64::from(u16::MAX)) as usize
}

struct HelpWriter<'a> {
    ctx: &'a ContextSettings,
    fmt: &'a FormatterSettings,
    layout: Layout,
    mode: OutputMode,
    color: bool,
    lines: Vec<String>,
}

impl<'a> HelpWriter<'a> {
    fn new(ctx: &'a ContextSettings, mode: OutputMode) -> Self {
        Self {
            ctx,
            fmt: &ctx.formatter_settings,
            layout: Layout::new(&ctx.formatter_settings),
            mode,
            color: mode.should_use_color(),
            lines: Vec::new(),
        }
    }

    fn write(mut self, data: &HelpData) -> String {
        self.write_usage(data);

        if !data.about.is_empty() {
            self.lines.push(String::new());
            self.write_paragraph(&data.about, ThemeSlot::CommandHelp);
        }

        let widths = self.col1_widths(&data.sections);
        for (section, col1_width) in data.sections.iter().zip(widths) {
            self.write_section(section, col1_width);
        }

        if !data.epilog.is_empty() {
            self.lines.push(String::new());
            self.write_paragraph(&data.epilog, ThemeSlot::Epilog);
        }

        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn write_usage(&mut self, data: &HelpData) {
        let heading = self.paint(ThemeSlot::Heading, "Usage:");
        let line = if data.name.is_empty() {
            format!("{} {}", heading, data.usage.trim_start())
        } else {
            format!(
                "{} {}{}",
                heading,
                self.paint(ThemeSlot::InvokedCommand, &data.name),
                data.usage
            )
        };
        self.lines.push(line);
    }

    /// Wrapped, indented free text (about, section help, epilog).
    fn write_paragraph(&mut self, text: &str, slot: ThemeSlot) {
        let indent = self.layout.indent;
        for line in wrap(text, self.layout.width.saturating_sub(indent)) {
            if line.is_empty() {
                self.lines.push(String::new());
            } else {
                let painted = self.paint(slot, &line);
                self.lines.push(format!("{}{}", self.pad(indent), painted));
            }
        }
    }

    /// Column 1 width per section, honoring the alignment flags.
    fn col1_widths(&self, sections: &[Section]) -> Vec<usize> {
        let natural: Vec<usize> = sections
            .iter()
            .map(|s| {
                s.rows
                    .iter()
                    .filter(|r| !r.separator)
                    .map(|r| display_width(&r.col1))
                    .max()
                    .unwrap_or(0)
                    .min(self.layout.col1_max_width)
            })
            .collect();

        if self.ctx.align_sections {
            let shared = natural.iter().copied().max().unwrap_or(0);
            return vec![shared; sections.len()];
        }

        if self.ctx.align_option_groups {
            let shared = sections
                .iter()
                .zip(&natural)
                .filter(|(s, _)| s.kind == SectionKind::Options)
                .map(|(_, w)| *w)
                .max()
                .unwrap_or(0);
            return sections
                .iter()
                .zip(natural)
                .map(|(s, w)| if s.kind == SectionKind::Options { shared } else { w })
                .collect();
        }

        natural
    }

    fn write_section(&mut self, section: &Section, col1_width: usize) {
        self.lines.push(String::new());
        let title = self.paint(ThemeSlot::Heading, &format!("{}:", section.title));
        self.lines.push(title);

        if let Some(help) = section.help.as_deref().filter(|h| !h.is_empty()) {
            self.write_paragraph(help, ThemeSlot::SectionHelp);
        }

        let col2_slot = match section.kind {
            SectionKind::Constraints => ThemeSlot::Constraint,
            _ => ThemeSlot::Col2,
        };

        for (i, row) in section.rows.iter().enumerate() {
            if row.separator {
                self.lines.push(String::new());
                continue;
            }
            self.write_row(row, col1_width, col2_slot);

            let next_is_row = section.rows.get(i + 1).is_some_and(|r| !r.separator);
            if let (true, Some(sep)) = (next_is_row, self.fmt.row_sep.as_ref()) {
                self.lines.push(sep.clone());
            }
        }
    }

    fn write_row(&mut self, row: &Row, col1_width: usize, col2_slot: ThemeSlot) {
        let Layout {
            indent,
            width,
            col2_min_width,
            col_spacing,
            ..
        } = self.layout;
        let marked = self.ctx.show_constraints && row.required;
        let col2_text = match (marked, row.col2.is_empty()) {
            (true, true) => REQUIRED_MARKER.to_string(),
            (true, false) => format!("{} {}", row.col2, REQUIRED_MARKER),
            (false, _) => row.col2.clone(),
        };

        let col1 = self.paint(ThemeSlot::Col1, &row.col1);
        let col1_len = display_width(&row.col1);
        let col2_start = indent.saturating_add(col1_width).saturating_add(col_spacing);
        let col2_room = width.saturating_sub(col2_start);

        if col2_room < col2_min_width {
            // Linear layout: names, then help one level deeper.
            self.lines.push(format!("{}{}", self.pad(indent), col1));
            let nested = indent.saturating_add(indent);
            for line in wrap(&col2_text, width.saturating_sub(nested)) {
                let painted = self.paint_col2(&line, col2_slot, marked);
                self.lines.push(format!("{}{}", self.pad(nested), painted));
            }
            return;
        }

        let col2_lines = wrap(&col2_text, col2_room);
        let mut rest = col2_lines.iter();

        if col1_len > col1_width || col2_lines.is_empty() {
            self.lines.push(format!("{}{}", self.pad(indent), col1));
        } else if let Some(first) = rest.next() {
            let gap = (col1_width - col1_len).saturating_add(col_spacing);
            let painted = self.paint_col2(first, col2_slot, marked);
            self.lines.push(format!(
                "{}{}{}{}",
                self.pad(indent),
                col1,
                self.pad(gap),
                painted
            ));
        }

        for line in rest {
            let painted = self.paint_col2(line, col2_slot, marked);
            self.lines.push(format!("{}{}", self.pad(col2_start), painted));
        }
    }

    /// Paints a column 2 line, giving a trailing required marker its own style.
    fn paint_col2(&self, line: &str, slot: ThemeSlot, marked: bool) -> String {
        match line.strip_suffix(REQUIRED_MARKER).filter(|_| marked) {
            Some("") => self.paint(ThemeSlot::Constraint, REQUIRED_MARKER),
            Some(text) => format!(
                "{} {}",
                self.paint(slot, text.trim_end()),
                self.paint(ThemeSlot::Constraint, REQUIRED_MARKER)
            ),
            None => self.paint(slot, line),
        }
    }

    /// Blanks, never wider than the configured line width.
    fn pad(&self, n: usize) -> String {
        " ".repeat(n.min(self.layout.width))
    }

    fn paint(&self, slot: ThemeSlot, text: &str) -> String {
        let Some(style) = self.fmt.theme.get(slot) else {
            return text.to_string();
        };
        if text.is_empty() {
            return String::new();
        }
        if self.mode.is_debug() {
            return format!("[{}]{}[/{}]", slot, text, slot);
        }
        if self.color {
            style
                .to_style()
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text.to_string()
        }
    }
}
