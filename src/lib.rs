pub mod assembler;
pub mod config;
pub mod decoder;
pub mod disasm;
pub mod encoder;
pub mod instructions;
pub mod parser;

pub mod isa {
    pub mod toy5; // 5-bit opcode, 5-bit field encoding
}

pub use assembler::{assemble, AsmError, Assembler, ListingEntry};
pub use config::AsmConfig;
pub use encoder::{encode, EncodeError, OperandFault};
pub use parser::{parse_line, ParsedLine};
