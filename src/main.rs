#![forbid(unsafe_code)]

mod commands;
mod config;
mod context;
mod logging;

use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use config::{DEFAULT_CONFIG_FILE, ServerConfig};
use context::StartupContext;

#[derive(Parser, Debug)]
#[command(name = "cobalt", version, about = "Inspect and validate the block variant registry")]
struct Cli {
    /// Configuration file (defaults to ./cobalt.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Extra extension files, applied after those listed in the config
    #[arg(long = "extensions", value_name = "FILE")]
    extensions: Vec<PathBuf>,
    /// Overrides `[log] level`
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every family with its block ids, variant count and capabilities
    Families,
    /// List the variants of one family
    List { family: String },
    /// Resolve a stored (block id, data value) pair
    Decode {
        block_id: u16,
        #[arg(value_parser = clap::value_parser!(u8).range(0..16))]
        data: u8,
    },
    /// Resolve a variant by family and name (case-insensitive)
    Lookup { family: String, name: String },
    /// Check codec round trips, injectivity and index identity for all families
    Validate {
        #[arg(long)]
        threads: Option<usize>,
    },
}

fn load_config(path: Option<&Path>) -> Result<ServerConfig, Box<dyn Error>> {
    match path {
        Some(path) => ServerConfig::load_from_path(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            ServerConfig::load_from_path(DEFAULT_CONFIG_FILE)
        }
        None => Ok(ServerConfig::default()),
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let cfg = load_config(cli.config.as_deref())?;
    let level = logging::parse_level(cli.log_level.as_deref().unwrap_or(&cfg.log.level))?;
    logging::init(level, cfg.log.file.as_deref())?;

    let mut ctx = StartupContext::new();
    ctx.load_extensions(&cfg.registry.extensions)?;
    ctx.load_extensions(&cli.extensions)?;
    let registry = ctx.freeze();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Families => commands::families(&registry, &mut out)?,
        Command::List { family } => commands::list(&registry, &family, &mut out)?,
        Command::Decode { block_id, data } => {
            commands::decode(&registry, block_id, data, &mut out)?
        }
        Command::Lookup { family, name } => commands::lookup(&registry, &family, &name, &mut out)?,
        Command::Validate { threads } => {
            let violations = commands::validate(&registry, threads)?;
            for v in &violations {
                log::error!(target: "validate", "{v}");
            }
            if !violations.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            writeln!(
                out,
                "ok: {} families, {} variants",
                registry.family_count(),
                registry.len()
            )?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_and_subcommand() {
        let cli = Cli::try_parse_from([
            "cobalt",
            "--log-level",
            "debug",
            "--extensions",
            "a.toml",
            "--extensions",
            "b.toml",
            "decode",
            "182",
            "8",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.extensions.len(), 2);
        assert!(matches!(cli.command, Command::Decode { block_id: 182, data: 8 }));
    }

    #[test]
    fn data_value_must_fit_four_bits() {
        assert!(Cli::try_parse_from(["cobalt", "decode", "35", "16"]).is_err());
    }
}
