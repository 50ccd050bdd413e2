//! Opcodes and the argument shape each one takes.

use std::fmt;

use evm_common::{Error, LoadSave, OPCODE_SIZE, Result};

/// Operation codes. Encoded as a single untagged byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Opcode {
    /// No operation.
    Nop = 0x00,
}

/// Instruction kinds, grouped by the arguments they take.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum InstructionKind {
    /// Takes no arguments.
    Lonely = 0,
}

impl Opcode {
    /// All opcodes, in byte order.
    pub const ALL: [Self; 1] = [Self::Nop];

    pub const fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x00 => Some(Self::Nop),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Argument shape that follows this opcode.
    pub fn kind(self) -> InstructionKind {
        match self {
            Self::Nop => InstructionKind::Lonely,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "nop",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = Error;

    fn try_from(v: u8) -> std::result::Result<Self, Error> {
        Self::from_u8(v).ok_or_else(|| {
            tracing::debug!(opcode = v, "invalid opcode");
            Error::InvalidDiscriminant {
                what: "opcode",
                value: v,
            }
        })
    }
}

impl LoadSave for Opcode {
    fn load_size(_buffer: &[u8]) -> Result<usize> {
        Ok(OPCODE_SIZE)
    }

    fn save_size(&self) -> usize {
        OPCODE_SIZE
    }

    fn load(buffer: &[u8]) -> Result<Self> {
        Self::try_from(u8::load(buffer)?)
    }

    fn save(&self, buffer: &mut [u8]) -> Result<()> {
        self.to_u8().save(buffer)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}
