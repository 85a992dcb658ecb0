//! lexlink CLI entry point.
//!
//! `serve` runs the stdio JSON-RPC server for tool clients; `tools` and
//! `call` exercise the same catalogue from a shell.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use lexlink_server::Catalogue;

/// Link resolver for UK legal sources.
///
/// Builds deep links into legislation.gov.uk, the National Archives case law
/// service, BAILII, and the rest of the official UK legal web, and serves
/// them as tools over JSON-RPC on stdio.
#[derive(Parser, Debug)]
#[command(name = "lexlink", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the tool catalogue over JSON-RPC on stdin/stdout.
    Serve,

    /// List every tool in the catalogue, one per line.
    Tools,

    /// Call one tool and print its response text.
    Call {
        /// Tool name, e.g. get_judgment.
        tool: String,

        /// Tool argument as KEY=VALUE; repeat for more arguments.
        #[arg(long = "arg", value_name = "KEY=VALUE")]
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    // stdout carries the protocol when serving, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve => lexlink_server::serve().await,
        Commands::Tools => {
            for def in lexlink_server::tools::definitions() {
                println!("{:<36} {}", def.name, def.description);
            }
            Ok(())
        }
        Commands::Call { tool, args } => {
            let arguments = parse_args(&args)?;
            let catalogue = Catalogue::new().context("failed to build the HTTP client")?;
            let text = catalogue.call(&tool, &arguments).await?;
            println!("{text}");
            Ok(())
        }
    }
}

/// Turn repeated `--arg KEY=VALUE` pairs into a tool-call argument object.
///
/// Every value goes through as a string; the catalogue itself coerces years
/// and flags, so `--arg year=2024` and `--arg title_only=true` mean what
/// an RPC client's typed JSON would.
fn parse_args(pairs: &[String]) -> anyhow::Result<Map<String, Value>> {
    let mut arguments = Map::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("argument '{pair}' is not KEY=VALUE"))?;
        arguments.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_serve() {
        let cli = Cli::try_parse_from(["lexlink", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_counts_verbosity() {
        let cli = Cli::try_parse_from(["lexlink", "-vv", "tools"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Tools));
    }

    #[test]
    fn cli_parse_call_collects_repeated_args() {
        let cli = Cli::try_parse_from([
            "lexlink",
            "call",
            "get_judgment",
            "--arg",
            "citation=[2024] EWCOP 15",
        ])
        .unwrap();
        if let Commands::Call { tool, args } = cli.command {
            assert_eq!(tool, "get_judgment");
            assert_eq!(args, vec!["citation=[2024] EWCOP 15"]);
        } else {
            panic!("expected call");
        }
    }

    #[test]
    fn cli_parse_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["lexlink"]).is_err());
    }

    #[test]
    fn arg_pairs_split_on_the_first_equals() {
        let arguments = parse_args(&["query=s21A=deprivation".to_string()]).unwrap();
        assert_eq!(arguments["query"], "s21A=deprivation");
    }

    #[test]
    fn arg_without_equals_is_rejected() {
        let err = parse_args(&["citation".to_string()]).unwrap_err();
        assert!(err.to_string().contains("citation"));
    }
}
