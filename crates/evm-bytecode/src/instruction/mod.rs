//! Bytecode instructions.
//!
//! Layout: `<opcode byte><argument payload>`. The opcode selects an
//! [`InstructionKind`], and the kind's descriptor lays out the arguments.

mod args;
mod opcode;

use evm_common::{LoadSave, OPCODE_SIZE, Result, ensure_len};

pub use args::InstructionArgs;
pub use opcode::{InstructionKind, Opcode};

/// An opcode and its arguments.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Instruction {
    pub opcode: Opcode,
    pub args: InstructionArgs,
}

impl Instruction {
    /// Instruction with zeroed arguments of the opcode's shape.
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            args: opcode.kind().default_args(),
        }
    }
}

impl LoadSave for Instruction {
    fn load_size(buffer: &[u8]) -> Result<usize> {
        let opcode = Opcode::load(buffer)?;
        let args = opcode.kind().args_descriptor().load_size(&buffer[OPCODE_SIZE..])?;
        Ok(OPCODE_SIZE + args)
    }

    fn save_size(&self) -> usize {
        OPCODE_SIZE + self.opcode.kind().args_descriptor().save_size(&self.args)
    }

    fn load(buffer: &[u8]) -> Result<Self> {
        let opcode = Opcode::load(buffer)?;
        let args = opcode.kind().args_descriptor().load(&buffer[OPCODE_SIZE..])?;
        Ok(Self { opcode, args })
    }

    fn save(&self, buffer: &mut [u8]) -> Result<()> {
        debug_assert_eq!(self.args.kind(), self.opcode.kind());
        ensure_len(buffer, self.save_size())?;
        self.opcode.save(buffer)?;
        self.opcode
            .kind()
            .args_descriptor()
            .save(&self.args, &mut buffer[OPCODE_SIZE..])
    }
}
