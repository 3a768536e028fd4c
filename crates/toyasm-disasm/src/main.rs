use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use toyasm_disasm::{disassemble, load_code};

#[derive(Parser, Debug)]
#[command(author, version, about = "Disassembler for toyasm machine-code text", long_about=None)]
struct Cli {
    /// Machine-code text file, one instruction per line
    #[arg(value_name = "CODEFILE")]
    input: String,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Show the instruction bits next to each line (text format only)
    #[arg(long)]
    show_bits: bool,
    /// Print operands with the register marker (R<n>)
    #[arg(long)]
    regs: bool,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let img = load_code(Path::new(&cli.input))?;
    let lines = disassemble(&img, cli.regs);

    let buf = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&lines)? + "\n",
        OutputFormat::Text => {
            let mut buf = String::new();
            for l in &lines {
                if cli.show_bits {
                    let _ = writeln!(buf, "{:>4}: {:<30}  {}", l.line, l.bits, l.text);
                } else {
                    let _ = writeln!(buf, "{:>4}: {}", l.line, l.text);
                }
            }
            buf
        }
    };

    if let Some(path) = cli.out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
    Ok(())
}
