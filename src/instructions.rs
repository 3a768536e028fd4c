use crate::decoder::Op;

/// Width in bits of the opcode prefix and of every operand field.
pub const FIELD_BITS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    pub opcode: &'static str,
}

pub const TABLE: &[InstrDesc] = &[
    InstrDesc { op: Op::Add, mnemonic: "ADD", opcode: "00000" },
    InstrDesc { op: Op::Sub, mnemonic: "SUB", opcode: "00001" },
    InstrDesc { op: Op::And, mnemonic: "AND", opcode: "00010" },
    InstrDesc { op: Op::Or, mnemonic: "OR", opcode: "00011" },
    InstrDesc { op: Op::Xor, mnemonic: "XOR", opcode: "00100" },
    InstrDesc { op: Op::Not, mnemonic: "NOT", opcode: "00101" },
    InstrDesc { op: Op::Mov, mnemonic: "MOV", opcode: "00110" },
    InstrDesc { op: Op::Lsl, mnemonic: "LSL", opcode: "00111" },
    InstrDesc { op: Op::Lsr, mnemonic: "LSR", opcode: "01000" },
    InstrDesc { op: Op::Asr, mnemonic: "ASR", opcode: "01001" },
    InstrDesc { op: Op::Cmp, mnemonic: "CMP", opcode: "01010" },
    InstrDesc { op: Op::Jmp, mnemonic: "JMP", opcode: "01011" },
    InstrDesc { op: Op::Jeq, mnemonic: "JEQ", opcode: "01100" },
    InstrDesc { op: Op::Jne, mnemonic: "JNE", opcode: "01101" },
    InstrDesc { op: Op::Ld, mnemonic: "LD", opcode: "01110" },
    InstrDesc { op: Op::St, mnemonic: "ST", opcode: "01111" },
    // 10000..10011 are unassigned
    InstrDesc { op: Op::B, mnemonic: "B", opcode: "10100" },
    InstrDesc { op: Op::Bl, mnemonic: "BL", opcode: "10101" },
    InstrDesc { op: Op::Ret, mnemonic: "RET", opcode: "10110" },
    InstrDesc { op: Op::Push, mnemonic: "PUSH", opcode: "10111" },
    InstrDesc { op: Op::Pop, mnemonic: "POP", opcode: "11000" },
];

/// Exact, case-sensitive mnemonic lookup.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic)
}

pub fn by_opcode(bits: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.opcode == bits)
}
