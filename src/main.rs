//! alias-router command-line tool.
//!
//! Loads an alias file, reports malformed definitions, prints the route
//! rules each alias produces and ranks the rules matching a path.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use alias_router::config::{read_config, validate_config, AliasRouterConfig, LogFormat};
use alias_router::definition::{format_primary_alias_line, parse_alias_definition, summarize_definition_lines};
use alias_router::observability::init_logging;
use alias_router::pattern::MatchType;
use alias_router::routing::RouteTable;

#[derive(Parser)]
#[command(name = "alias-router")]
#[command(about = "Compile and evaluate URL alias definitions", long_about = None)]
struct Cli {
    /// Log filter directive, overrides the alias file's [logging] level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every alias definition in a file
    Check { config: PathBuf },
    /// Print the route rules produced by each alias
    Routes {
        config: PathBuf,
        /// Only this alias
        #[arg(long)]
        alias: Option<String>,
    },
    /// Print the per-line summary of one alias definition
    Lines {
        config: PathBuf,
        #[arg(long)]
        alias: String,
    },
    /// Rank the rules matching a request path
    Match { config: PathBuf, path: String },
    /// Render a canonical primary definition line
    Format {
        #[arg(long = "type", default_value = "literal")]
        match_type: MatchType,
        #[arg(long, default_value = "")]
        pattern: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        ignore_case: bool,
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => {
            let config = open(&config, cli.log_level.as_deref())?;
            match validate_config(&config) {
                Ok(()) => {
                    println!("{} aliases OK", config.aliases.len());
                    Ok(ExitCode::SUCCESS)
                }
                Err(errors) => {
                    for err in &errors {
                        println!("{}", err);
                    }
                    tracing::warn!(problems = errors.len(), "Alias file has problems");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Routes { config, alias } => {
            let config = open(&config, cli.log_level.as_deref())?;
            let rules: Vec<_> = config
                .sources()
                .iter()
                .filter(|s| alias.as_deref().is_none_or(|a| s.name().trim() == a.trim()))
                .flat_map(|s| s.routes())
                .collect();
            println!("{}", serde_json::to_string_pretty(&rules)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lines { config, alias } => {
            let config = open(&config, cli.log_level.as_deref())?;
            let Some(record) = config.alias(&alias) else {
                eprintln!("Error: no alias named '{}'", alias);
                return Ok(ExitCode::FAILURE);
            };
            let summaries = summarize_definition_lines(
                record.definition.as_deref().unwrap_or_default(),
                Some(record.name.as_str()),
            );
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Match { config, path } => {
            let config = open(&config, cli.log_level.as_deref())?;
            let sources = config.sources();
            let table = RouteTable::from_aliases(&sources);
            let candidates = table.candidates(&path);
            tracing::info!(path = %path, candidates = candidates.len(), "Path evaluated");
            println!("{}", serde_json::to_string_pretty(&candidates)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Format {
            match_type,
            pattern,
            target,
            ignore_case,
            name,
        } => {
            init_logging(cli.log_level.as_deref().unwrap_or("warn"), LogFormat::Pretty);
            let line = format_primary_alias_line(match_type, &pattern, &target, ignore_case, name.as_deref());
            // Refuse to print a line that would not parse back.
            if let Err(err) = parse_alias_definition(&line, name.as_deref()) {
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", line);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read the alias file and install logging from its settings.
fn open(path: &Path, log_level: Option<&str>) -> Result<AliasRouterConfig, Box<dyn std::error::Error>> {
    let config = read_config(path)?;
    init_logging(
        log_level.unwrap_or(&config.logging.level),
        config.logging.format,
    );
    tracing::debug!(path = %path.display(), "Alias file loaded");
    Ok(config)
}
