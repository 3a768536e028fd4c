use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use toyasm_rs::{AsmConfig, Assembler};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble toy 5-bit ISA source into binary machine-code text")]
struct Opts {
    /// Input assembly file (stdin when omitted)
    #[arg(value_name = "SRCFILE")]
    input: Option<PathBuf>,
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// JSON config file (AsmConfig)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output format: machine code text or a JSON listing
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Fail when the source is empty
    #[arg(long)]
    reject_empty: bool,
    /// End the output with a newline
    #[arg(long)]
    trailing_newline: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn read_source(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let mut cfg = match &opts.config {
        Some(path) => AsmConfig::load(path)?,
        None => AsmConfig::default(),
    };
    cfg.reject_empty |= opts.reject_empty;
    cfg.trailing_newline |= opts.trailing_newline;

    let text = read_source(opts.input.as_ref())?;
    let asm = Assembler::new(cfg);
    let out = match opts.format {
        OutputFormat::Text => asm.assemble(&text)?,
        OutputFormat::Json => serde_json::to_string_pretty(&asm.listing(&text)?)?,
    };

    if let Some(path) = &opts.output {
        std::fs::write(path, out).with_context(|| format!("writing {}", path.display()))?;
    } else if out.is_empty() || out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
    Ok(())
}
