use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use pksnap_core::oracle::ReplayDecoder;
use pksnap_core::pipeline::Extractor;
use pksnap_render::{JsonStyle, render_json, render_text};
use serde_json::Value as JsonValue;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Oracle capture to extract (JSON, optionally gzip-compressed)
    #[arg(value_name = "CAPTURE.json")]
    path: PathBuf,
    /// Print the canonical saveData document instead of the text report
    #[arg(long)]
    json: bool,
    /// Print the unnormalized master dump of every oracle query
    #[arg(long, conflicts_with = "json")]
    dump: bool,
    /// Write the output to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let bytes = match fs::read(&cli.path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", cli.path.display());
            process::exit(2);
        }
    };

    let extractor = Extractor::new(ReplayDecoder::new());
    let rendered = if cli.dump {
        match extractor.dump(&bytes) {
            Ok(doc) => pretty(&doc),
            Err(e) => fail(&e),
        }
    } else {
        match extractor.extract(&bytes) {
            Ok(snapshot) if cli.json => pretty(&render_json(&snapshot, JsonStyle::SaveDataV1)),
            Ok(snapshot) => render_text(&snapshot),
            Err(e) => fail(&e),
        }
    };

    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, rendered) {
                eprintln!("error: failed to write {}: {e}", path.display());
                process::exit(2);
            }
        }
        None => print!("{rendered}"),
    }
}

fn pretty(doc: &JsonValue) -> String {
    let mut text = serde_json::to_string_pretty(doc).unwrap_or_else(|_| doc.to_string());
    text.push('\n');
    text
}

fn fail(error: &dyn std::error::Error) -> ! {
    eprintln!("error: {error}");
    process::exit(1);
}
