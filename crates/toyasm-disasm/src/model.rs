use anyhow::Result;
use std::path::Path;

/// One non-blank line of machine-code text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub line: usize, // 1-based line in the source file
    pub bits: String,
}

#[derive(Debug, Clone, Default)]
pub struct Image {
    pub lines: Vec<CodeLine>,
}

impl Image {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total encoded bits across all lines.
    pub fn bit_count(&self) -> usize {
        self.lines.iter().map(|l| l.bits.len()).sum()
    }
}

pub fn parse_code(text: &str) -> Result<Image> {
    let mut lines = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let bits = raw.trim();
        if bits.is_empty() {
            continue;
        }
        anyhow::ensure!(
            bits.bytes().all(|b| b == b'0' || b == b'1'),
            "line {}: expected only 0/1 digits, got `{}`",
            i + 1,
            bits
        );
        lines.push(CodeLine { line: i + 1, bits: bits.to_string() });
    }
    Ok(Image { lines })
}

pub fn load_code(path: &Path) -> Result<Image> {
    let text = std::fs::read_to_string(path)?;
    parse_code(&text)
}
