use serde::Serialize;
use tracing::{debug, trace};

use crate::config::AsmConfig;
use crate::encoder::{encode, EncodeError};
use crate::parser::{parse_line, ParsedLine};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("line {line}: {source} in `{content}`")]
    Line {
        line: usize,
        content: String,
        #[source]
        source: EncodeError,
    },
    #[error("no assembly source given")]
    EmptyInput,
}

impl AsmError {
    /// The encoder failure behind a line error.
    pub fn encode_error(&self) -> Option<&EncodeError> {
        match self {
            AsmError::Line { source, .. } => Some(source),
            AsmError::EmptyInput => None,
        }
    }
}

/// One parsed source line and what it assembled to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub line: usize,
    pub label: Option<String>,
    pub source: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    pub cfg: AsmConfig,
}

impl Assembler {
    pub fn new(cfg: AsmConfig) -> Self {
        Self { cfg }
    }

    /// Assemble a whole source text into newline-joined machine code.
    /// The first failing line aborts the run.
    pub fn assemble(&self, source: &str) -> Result<String, AsmError> {
        self.check_empty(source)?;
        let mut out = Vec::new();
        for (no, line) in source.lines().enumerate() {
            let Some(parsed) = parse_line(line) else {
                trace!(line = no + 1, "blank or comment");
                continue;
            };
            if let Some(code) = encode_parsed(no + 1, line, &parsed)? {
                out.push(code);
            }
        }
        let mut text = out.join("\n");
        if self.cfg.trailing_newline && !text.is_empty() {
            text.push('\n');
        }
        Ok(text)
    }

    /// Per-line view of an assembly: labels and instructions with their code.
    pub fn listing(&self, source: &str) -> Result<Vec<ListingEntry>, AsmError> {
        self.check_empty(source)?;
        let mut entries = Vec::new();
        for (no, line) in source.lines().enumerate() {
            let Some(parsed) = parse_line(line) else { continue };
            let code = encode_parsed(no + 1, line, &parsed)?;
            entries.push(ListingEntry {
                line: no + 1,
                label: parsed.label.map(str::to_string),
                source: line.trim().to_string(),
                code,
            });
        }
        Ok(entries)
    }

    fn check_empty(&self, source: &str) -> Result<(), AsmError> {
        if self.cfg.reject_empty && source.trim().is_empty() {
            return Err(AsmError::EmptyInput);
        }
        Ok(())
    }
}

fn encode_parsed(line: usize, content: &str, parsed: &ParsedLine<'_>) -> Result<Option<String>, AsmError> {
    let Some(command) = parsed.command else {
        trace!(line, label = ?parsed.label, "label only");
        return Ok(None);
    };
    let code = encode(command, parsed.arguments.as_slice()).map_err(|source| AsmError::Line {
        line,
        content: content.trim().to_string(),
        source,
    })?;
    debug!(line, mnemonic = command, operands = parsed.arguments.len(), %code, "encoded");
    Ok(Some(code))
}

/// Assemble with the default configuration.
pub fn assemble(source: &str) -> Result<String, AsmError> {
    Assembler::default().assemble(source)
}
