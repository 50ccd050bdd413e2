//! Instruction encoding and bytecode streams for the evm bytecode VM.
//!
//! This crate contains:
//! - Opcodes and instruction argument shapes, each with its load/save descriptor
//! - Stream writer/reader that lay descriptor-encoded values out back to back
//! - Human-readable dumps of primitive and instruction streams
//!
//! Everything here is built on the [`evm_common::LoadSave`] protocol and
//! reports [`evm_common::Error`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod dump;
pub mod instruction;
pub mod stream;

pub use dump::{dump_instructions, dump_primitives};
pub use evm_common::{Error, Result};
pub use instruction::{Instruction, InstructionArgs, InstructionKind, Opcode};
pub use stream::{StreamReader, StreamWriter};
