use crate::decoder::Decoded;

/// Render a decoded line as source text.
///
/// Register and immediate operands share one encoding, so every field is
/// printed as a plain decimal. Feeding the result back to the assembler
/// reproduces the same bits.
pub fn fmt_decoded(d: &Decoded) -> String {
    let mn = d.op.mnemonic();
    if d.fields.is_empty() {
        return mn.to_string();
    }
    let args = d.fields.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", ");
    format!("{mn} {args}")
}

/// Like `fmt_decoded` but prints each field with the register marker.
pub fn fmt_decoded_regs(d: &Decoded) -> String {
    let mn = d.op.mnemonic();
    if d.fields.is_empty() {
        return mn.to_string();
    }
    let args = d.fields.iter().map(|f| format!("R{f}")).collect::<Vec<_>>().join(", ");
    format!("{mn} {args}")
}
