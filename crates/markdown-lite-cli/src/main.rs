use anyhow::{Context, Result};
use clap::Parser;
use markdown_lite_config::Config;
use markdown_lite_engine::{Converter, HeaderLimits, io};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Convert restricted Markdown (headers, paragraphs, links) into an HTML fragment.
#[derive(Debug, Parser)]
#[command(name = "markdown-lite", version)]
struct Cli {
    /// Markdown file to convert; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Write `<input stem>.html` into this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Deepest heading level to emit (1-6)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    max_header_level: Option<u8>,

    /// Config file to use instead of ~/.config/markdown-lite/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Store the resolved settings in the config file and exit
    #[arg(long, conflicts_with_all = ["input", "output"])]
    save_config: bool,
}

/// Where the converted fragment goes.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    Stdout,
    File(PathBuf),
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(Config::config_path)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = config_path(cli);
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config: {config:?}");
            Ok(config)
        }
        None if cli.config.is_some() && !cli.save_config => {
            anyhow::bail!("config file not found: {}", config_path.display())
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn resolve_target(cli: &Cli, config: &Config) -> Result<Target> {
    if let Some(output) = &cli.output {
        return Ok(Target::File(output.clone()));
    }

    let Some(out_dir) = cli.out_dir.as_ref().or(config.out_dir.as_ref()) else {
        return Ok(Target::Stdout);
    };

    match cli.input.as_deref() {
        Some(input) if input != Path::new("-") => Ok(Target::File(io::html_path_for(input, out_dir))),
        _ => anyhow::bail!("--out-dir needs an input file to name the output after"),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => io::read_document(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut markdown = String::new();
            std::io::stdin()
                .read_to_string(&mut markdown)
                .context("failed to read stdin")?;
            Ok(markdown)
        }
    }
}

/// Config file values overridden by command-line flags.
fn resolve_settings(cli: &Cli, config: Config) -> Config {
    Config {
        max_header_level: cli
            .max_header_level
            .map(usize::from)
            .unwrap_or(config.max_header_level),
        out_dir: cli.out_dir.clone().or(config.out_dir),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_settings(&cli, load_config(&cli)?);

    if cli.save_config {
        let config_path = config_path(&cli);
        config
            .save_to_path(&config_path)
            .with_context(|| format!("failed to save {}", config_path.display()))?;
        log::info!("Saved config to {}", config_path.display());
        return Ok(());
    }

    let max_level = config.max_header_level;
    let converter = Converter::with_limits(HeaderLimits { max_level });

    let target = resolve_target(&cli, &config)?;
    let markdown = read_input(cli.input.as_deref())?;
    let html = converter.convert(&markdown);

    match target {
        Target::Stdout => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{html}").context("failed to write stdout")?;
        }
        Target::File(path) => {
            io::write_html(&path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
