use crate::decoder::{Decoded, Decoder};
use crate::instructions::{by_opcode, FIELD_BITS};

/// Decoder for the 5-bit opcode / 5-bit field encoding.
/// Input is one machine-code line of `0`/`1` digits as the assembler emits it.
pub struct Toy5Decoder;

impl Toy5Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Toy5Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for Toy5Decoder {
    fn decode(&self, bits: &str) -> Option<Decoded> {
        let bits = bits.trim();
        if bits.len() < FIELD_BITS || bits.len() % FIELD_BITS != 0 {
            return None;
        }
        if !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return None;
        }

        let (opcode, rest) = bits.split_at(FIELD_BITS);
        let desc = by_opcode(opcode)?;

        let mut fields = Vec::with_capacity(rest.len() / FIELD_BITS);
        for chunk in rest.as_bytes().chunks(FIELD_BITS) {
            // chunk is ASCII binary, checked above
            let v = chunk.iter().fold(0u8, |acc, b| (acc << 1) | (b - b'0'));
            fields.push(v);
        }

        Some(Decoded { op: desc.op, width: bits.len(), fields })
    }
}
