//! OpenAPI refs CLI
//!
//! Command-line interface for resolving pointers and removing unused components.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use openapi_refs::{cleanup, ensure_resolved, load_document, usage_report, LoadError};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "openapi-refs")]
#[command(about = "Resolve local $ref pointers and remove unused OpenAPI components")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove components not reachable from paths or webhooks
    Cleanup {
        /// OpenAPI document (JSON)
        document: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List reachable references and unused components
    Refs {
        /// OpenAPI document (JSON)
        document: PathBuf,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the value a local pointer resolves to, following alias chains
    Resolve {
        /// OpenAPI document (JSON)
        document: PathBuf,

        /// Local pointer, e.g. "#/components/schemas/Pet"
        pointer: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cleanup {
            document,
            output,
            pretty,
        } => run_cleanup(&document, output, pretty),

        Commands::Refs { document, format } => run_refs(&document, &format),

        Commands::Resolve {
            document,
            pointer,
            pretty,
        } => run_resolve(&document, &pointer, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_cleanup(document_path: &Path, output: Option<PathBuf>, pretty: bool) -> Result<(), u8> {
    let document = load(document_path)?;

    let cleaned = cleanup(&document).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let json_output = to_json(&cleaned, pretty)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

fn run_refs(document_path: &Path, format: &str) -> Result<(), u8> {
    let document = load(document_path)?;

    let report = usage_report(&document).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    if format == "json" {
        let value = serde_json::to_value(&report).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?;
        println!("{}", to_json(&value, true)?);
        return Ok(());
    }

    println!("Used references ({}):", report.used.len());
    for reference in &report.used {
        println!("  {}", reference);
    }

    println!();
    if report.is_clean() {
        println!("\x1b[32m✓ no unused components\x1b[0m");
    } else {
        println!("Unused components ({}):", report.unused.len());
        for address in &report.unused {
            println!("  \x1b[33m{}\x1b[0m", address);
        }
    }

    Ok(())
}

fn run_resolve(document_path: &Path, pointer: &str, pretty: bool) -> Result<(), u8> {
    let document = load(document_path)?;

    let reference = serde_json::json!({ "$ref": pointer });
    let resolved = ensure_resolved(&document, &reference).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    println!("{}", to_json(resolved, pretty)?);
    Ok(())
}

fn load(path: &Path) -> Result<Value, u8> {
    load_document(path).map_err(|e: LoadError| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })
}

fn to_json(value: &Value, pretty: bool) -> Result<String, u8> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })
}
