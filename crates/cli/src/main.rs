//! Specscout CLI
//!
//! Command-line interface for detecting API specification formats and
//! listing the gateway endpoints derived from them.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use specscout_common::{FormatTag, ServicePortTable};
use specscout_parser::{ParsedSpec, SpecParser};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Spec documents above this size are refused before parsing
const MAX_SPEC_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "specscout")]
#[command(version, about = "Detect API spec formats and extract gateway endpoints", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a spec file and display the extracted endpoints
    #[command(after_help = "EXAMPLES:\n  \
        # Auto-detect format\n  \
        specscout parse --spec petstore.yaml\n\n  \
        # Force a format\n  \
        specscout parse --spec calculator.wsdl --format wsdl\n\n  \
        # Use extra protocol ports\n  \
        specscout parse --spec streetlights.yaml --ports ports.yaml")]
    Parse {
        /// Path to the spec file
        #[arg(short, long)]
        spec: PathBuf,

        /// Spec format (auto-detected if not specified)
        #[arg(short, long)]
        format: Option<String>,

        /// YAML file with protocol ports merged over the well-known table
        #[arg(long)]
        ports: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the recognized format tokens
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse {
            spec,
            format,
            ports,
            json,
        } => {
            parse_command(
                spec.as_path(),
                format.as_deref(),
                ports.as_deref(),
                json,
                cli.verbose,
            )?;
        }
        Commands::Formats => formats_command(),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn parse_command(
    spec_path: &Path,
    format: Option<&str>,
    ports_path: Option<&Path>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let bytes = read_spec(spec_path)?;

    let parser = match ports_path {
        Some(path) => {
            let table = ServicePortTable::load(path)
                .with_context(|| format!("Failed to load port table {}", path.display()))?;
            tracing::debug!(path = %path.display(), entries = table.len(), "Loaded port table");
            SpecParser::with_ports(table)
        }
        None => SpecParser::new(),
    };

    let parsed = parser
        .parse_with_hint_token(&bytes, format.unwrap_or_default())
        .with_context(|| format!("Failed to parse {}", spec_path.display()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&parsed).context("Failed to serialize result")?
        );
        return Ok(());
    }

    print_parsed(spec_path, &parsed, verbose);
    Ok(())
}

/// Read the whole file, refusing anything above [`MAX_SPEC_SIZE`]
fn read_spec(path: &Path) -> Result<Vec<u8>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open spec {}", path.display()))?;

    let mut bytes = Vec::new();
    file.take(MAX_SPEC_SIZE + 1)
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read spec {}", path.display()))?;

    if bytes.len() as u64 > MAX_SPEC_SIZE {
        bail!(
            "{} is larger than the {} MB spec limit",
            path.display(),
            MAX_SPEC_SIZE / (1024 * 1024)
        );
    }
    Ok(bytes)
}

fn print_parsed(spec_path: &Path, parsed: &ParsedSpec, verbose: bool) {
    println!("{} Parsed spec file: {}", "→".cyan(), spec_path.display());
    println!("  Format: {}", parsed.format.to_string().yellow());
    if !parsed.title.is_empty() {
        println!("  Title: {}", parsed.title.yellow());
    }
    if !parsed.version.is_empty() {
        println!("  Version: {}", parsed.version);
    }
    if verbose {
        if let Some(content_type) = parsed.content_type {
            println!("  Content type: {}", content_type.mime());
        }
        if !parsed.description.is_empty() {
            println!("  Description: {}", parsed.description);
        }
    }

    if parsed.endpoints.is_empty() {
        println!("\n{}", "No endpoints found".yellow());
        return;
    }

    println!("\n{}", format!("Endpoints ({}):", parsed.endpoints.len()).bold());
    for endpoint in &parsed.endpoints {
        let port = if endpoint.port == 0 {
            "?".red().to_string()
        } else {
            endpoint.port.to_string()
        };
        println!(
            "  • {}://{}:{}{}",
            endpoint.protocol.cyan(),
            endpoint.host.green(),
            port,
            endpoint.base_path
        );
        if verbose {
            for (key, value) in &endpoint.details {
                println!("      {}: {}", key, value);
            }
        }
    }
    if parsed.format == FormatTag::AsyncApi {
        println!("\n  {}", "(AsyncAPI server order is unspecified)".dimmed());
    }
}

fn formats_command() {
    println!("{}", "Recognized formats:".bold());
    for format in FormatTag::ALL {
        println!("  • {}", format.to_string().cyan());
    }
    println!("\nOmit --format to auto-detect.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_spec_within_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"swagger: '2.0'\n").unwrap();

        let bytes = read_spec(file.path()).unwrap();
        assert_eq!(bytes, b"swagger: '2.0'\n");
    }

    #[test]
    fn test_read_spec_missing_file() {
        let err = read_spec(Path::new("/nonexistent/spec.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to open spec"));
    }

    #[test]
    fn test_cli_parses_arguments() {
        let cli = Cli::try_parse_from([
            "specscout",
            "parse",
            "--spec",
            "petstore.yaml",
            "--format",
            "oas3",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Parse { spec, format, .. } => {
                assert_eq!(spec, PathBuf::from("petstore.yaml"));
                assert_eq!(format.as_deref(), Some("oas3"));
            }
            Commands::Formats => panic!("expected parse command"),
        }
    }
}
