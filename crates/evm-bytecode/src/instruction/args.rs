//! Instruction argument shapes and their descriptors.

use evm_common::{Descriptor, Result};

use super::InstructionKind;

/// Decoded instruction arguments. One variant per [`InstructionKind`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum InstructionArgs {
    /// No arguments.
    #[default]
    Lonely,
}

impl InstructionArgs {
    pub fn kind(&self) -> InstructionKind {
        match self {
            Self::Lonely => InstructionKind::Lonely,
        }
    }
}

impl InstructionKind {
    /// Descriptor for the argument payload of this shape.
    pub fn args_descriptor(self) -> Descriptor<InstructionArgs> {
        match self {
            Self::Lonely => LONELY,
        }
    }

    /// Arguments of this shape with every field zeroed.
    pub fn default_args(self) -> InstructionArgs {
        match self {
            Self::Lonely => InstructionArgs::Lonely,
        }
    }
}

const LONELY: Descriptor<InstructionArgs> =
    Descriptor::new(lonely_size, lonely_save_size, lonely_load, lonely_save);

fn lonely_size(_buffer: &[u8]) -> Result<usize> {
    Ok(0)
}

fn lonely_save_size(_args: &InstructionArgs) -> usize {
    0
}

fn lonely_load(_buffer: &[u8]) -> Result<InstructionArgs> {
    Ok(InstructionArgs::Lonely)
}

fn lonely_save(_args: &InstructionArgs, _buffer: &mut [u8]) -> Result<()> {
    Ok(())
}
