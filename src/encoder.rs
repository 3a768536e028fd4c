use crate::instructions::{lookup, FIELD_BITS};

/// Largest value a single operand field can hold.
pub const FIELD_MAX: u32 = (1 << FIELD_BITS) - 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OperandFault {
    #[error("not a non-negative integer")]
    NotANumber,
    #[error("value {digits} does not fit in 5 bits")]
    OutOfRange { digits: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { mnemonic: String },
    #[error("invalid operand `{operand}`: {fault}")]
    InvalidOperand { operand: String, fault: OperandFault },
}

/// Encode one instruction: opcode followed by one 5-bit field per argument.
///
/// Arguments are raw tokens as the line parser returns them; a single
/// trailing comma is dropped before the value is read.
pub fn encode<S: AsRef<str>>(command: &str, arguments: &[S]) -> Result<String, EncodeError> {
    let desc = lookup(command).ok_or_else(|| EncodeError::UnknownMnemonic {
        mnemonic: command.to_string(),
    })?;

    let mut out = String::with_capacity(FIELD_BITS * (1 + arguments.len()));
    out.push_str(desc.opcode);
    for arg in arguments {
        let v = encode_operand(arg.as_ref())?;
        out.push_str(&format!("{v:0width$b}", width = FIELD_BITS));
    }
    Ok(out)
}

/// Read a register (`R<n>`) or immediate (`<n>`) operand.
pub fn encode_operand(token: &str) -> Result<u8, EncodeError> {
    let arg = token.strip_suffix(',').unwrap_or(token);
    let digits = arg.strip_prefix('R').unwrap_or(arg);
    let invalid = |fault| EncodeError::InvalidOperand { operand: arg.to_string(), fault };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(OperandFault::NotANumber));
    }
    // all digits, so a parse failure is overflow
    match digits.parse::<u32>() {
        Ok(v) if v <= FIELD_MAX => Ok(v as u8),
        _ => Err(invalid(OperandFault::OutOfRange { digits: digits.to_string() })),
    }
}
