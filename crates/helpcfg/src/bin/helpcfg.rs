//! Loads a `[CLI_CTX]` section and shows what it translates to.
//!
//! With `--json` the resolved [`ContextSettings`] are printed as JSON.
//! Otherwise this command's own help is rendered with them, which makes it a
//! quick way to preview a theme or layout change.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, CommandFactory, Parser, ValueEnum};
use helpcfg::help::{render_help, HelpConfig};
use helpcfg::{parse_cli_ctx, ConfigSection, ContextSettings, OutputMode, DEFAULT_SECTION};

/// Preview help settings read from a configuration file
#[derive(Parser, Debug)]
#[command(name = "helpcfg", version)]
#[command(after_help = "Set RUST_LOG=debug to trace how each key is translated.")]
#[command(group(ArgGroup::new("output").args(["json", "mode"])))]
struct Cli {
    /// INI or YAML file holding the settings section
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Section to read from the file
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_SECTION)]
    section: String,

    /// Print the resolved settings as JSON
    #[arg(long, help_heading = "Output")]
    json: bool,

    /// How to render the help preview
    #[arg(long, value_enum, help_heading = "Output")]
    mode: Option<Mode>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Auto,
    Term,
    Text,
    Debug,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Auto => OutputMode::Auto,
            Mode::Term => OutputMode::Term,
            Mode::Text => OutputMode::Text,
            Mode::Debug => OutputMode::TermDebug,
        }
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<ContextSettings> {
    let section = match &cli.config {
        Some(path) => ConfigSection::load(path, &cli.section)
            .with_context(|| format!("failed to read [{}] from {}", cli.section, path.display()))?,
        None => ConfigSection::defaults(),
    };

    let ctx = parse_cli_ctx(&section.with_defaults()).context("invalid help settings")?;
    Ok(ctx)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let ctx = load_settings(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
        return Ok(());
    }

    let config = HelpConfig {
        output_mode: cli.mode.map(OutputMode::from),
        ..Default::default()
    };
    print!("{}", render_help(&Cli::command(), &ctx, Some(config)));
    Ok(())
}
