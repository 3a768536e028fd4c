use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    And,
    Or,
    Xor,
    Not,
    Mov,
    Lsl,
    Lsr,
    Asr,
    Cmp,
    Jmp,
    Jeq,
    Jne,
    Ld,
    St,
    B,
    Bl,
    Ret,
    Push,
    Pop,
}

impl Op {
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Add => "ADD",
            Op::Sub => "SUB",
            Op::And => "AND",
            Op::Or => "OR",
            Op::Xor => "XOR",
            Op::Not => "NOT",
            Op::Mov => "MOV",
            Op::Lsl => "LSL",
            Op::Lsr => "LSR",
            Op::Asr => "ASR",
            Op::Cmp => "CMP",
            Op::Jmp => "JMP",
            Op::Jeq => "JEQ",
            Op::Jne => "JNE",
            Op::Ld => "LD",
            Op::St => "ST",
            Op::B => "B",
            Op::Bl => "BL",
            Op::Ret => "RET",
            Op::Push => "PUSH",
            Op::Pop => "POP",
        }
    }
}

/// One machine-code line split back into its opcode and operand fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub op: Op,
    pub width: usize, // total bits, 5 + 5 * fields.len()
    pub fields: Vec<u8>,
}

pub trait Decoder {
    fn decode(&self, bits: &str) -> Option<Decoded>;
}
