//! JSON:API Document CLI
//!
//! Command-line interface for validating and inspecting JSON:API documents.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use jsonapi_document::{parse_file, to_value, Accessable, Direction, Document, InputError, Member};
use tracing::Level;

#[derive(Parser)]
#[command(name = "jsonapi-document")]
#[command(about = "Validate and inspect JSON:API documents")]
#[command(version)]
struct Cli {
    /// Log construction details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a document against the JSON:API structural rules
    Validate {
        /// Document file to validate
        document: PathBuf,

        /// Treat the document as a request (a new resource may omit its id)
        #[arg(long)]
        request: bool,

        /// Output results as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Print the accepted members of a document
    Export {
        /// Document file to export
        document: PathBuf,

        /// Treat the document as a request (a new resource may omit its id)
        #[arg(long)]
        request: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the member at a dotted path (e.g. data.0.attributes.title)
    Get {
        /// Document file to read
        document: PathBuf,

        /// Dotted member path
        path: String,

        /// Treat the document as a request (a new resource may omit its id)
        #[arg(long)]
        request: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Validate {
            document,
            request,
            json,
        } => run_validate(&document, request, json),

        Commands::Export {
            document,
            request,
            output,
            pretty,
        } => run_export(&document, request, output, pretty),

        Commands::Get {
            document,
            path,
            request,
        } => run_get(&document, &path, request),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn load(path: &Path, request: bool) -> Result<Document, InputError> {
    parse_file(path, Direction::from_request_flag(request))
}

fn run_validate(path: &Path, request: bool, json_output: bool) -> Result<(), u8> {
    match load(path, request) {
        Ok(_) => {
            if json_output {
                println!(r#"{{"valid":true}}"#);
            } else {
                println!("Valid");
            }
            Ok(())
        }
        Err(e) => {
            if json_output {
                let output = serde_json::json!({
                    "valid": false,
                    "error": e.to_string()
                });
                println!("{}", output);
            } else {
                eprintln!("Error: {}", e);
            }
            Err(e.exit_code() as u8)
        }
    }
}

fn run_export(
    path: &Path,
    request: bool,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), u8> {
    let document = load(path, request).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let exported = to_value(&document);
    let json_output = if pretty {
        serde_json::to_string_pretty(&exported)
    } else {
        serde_json::to_string(&exported)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

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

fn run_get(path: &Path, member_path: &str, request: bool) -> Result<(), u8> {
    let document = load(path, request).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let member = document.get(member_path).map_err(|e| {
        eprintln!("Error: {}", e);
        1u8
    })?;

    match member {
        Member::Value(serde_json::Value::String(s)) => println!("{}", s),
        Member::Value(value) => println!("{}", value),
        Member::Node(node) => println!("{}", to_value(node.as_ref())),
    }

    Ok(())
}
