pub mod model;

use serde::Serialize;

use toyasm_rs::decoder::Decoder;
use toyasm_rs::disasm::{fmt_decoded, fmt_decoded_regs};
use toyasm_rs::isa::toy5::Toy5Decoder;

pub use model::{load_code, parse_code, CodeLine, Image};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOut {
    pub line: usize,
    pub bits: String,
    pub mnemonic: Option<&'static str>,
    pub fields: Vec<u8>,
    pub text: String,
}

/// Decode every line of an image. Lines that do not decode are kept as
/// `.bits` pseudo-ops with no mnemonic.
pub fn disassemble(img: &Image, regs: bool) -> Vec<LineOut> {
    let dec = Toy5Decoder::new();
    img.lines
        .iter()
        .map(|l| match dec.decode(&l.bits) {
            Some(d) => LineOut {
                line: l.line,
                bits: l.bits.clone(),
                mnemonic: Some(d.op.mnemonic()),
                text: if regs { fmt_decoded_regs(&d) } else { fmt_decoded(&d) },
                fields: d.fields,
            },
            None => LineOut {
                line: l.line,
                bits: l.bits.clone(),
                mnemonic: None,
                fields: Vec::new(),
                text: format!(".bits {}", l.bits),
            },
        })
        .collect()
}
