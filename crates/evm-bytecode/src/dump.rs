//! Human-readable dumps of encoded streams, for debugging and tests.
//!
//! Each section starts with a `[name]` header followed by one line per
//! decoded item, prefixed with its byte offset in hex.

use evm_common::{PrimitiveValue, Result};

use crate::instruction::Instruction;
use crate::stream::StreamReader;

/// Render a stream of fat-encoded primitives.
///
/// Fails on the first value that does not decode.
pub fn dump_primitives(bytes: &[u8]) -> Result<String> {
    let mut out = String::from("[primitives]\n");
    let mut reader = StreamReader::new(bytes);

    while !reader.is_empty() {
        let offset = reader.offset();
        let value: PrimitiveValue = reader.read_fat()?;
        out.push_str(&format!("{offset:04x}  {:<3}  {value:#}\n", value.kind()));
    }

    Ok(out)
}

/// Render a stream of instructions as offset and mnemonic.
pub fn dump_instructions(bytes: &[u8]) -> Result<String> {
    let mut out = String::from("[code]\n");
    let mut reader = StreamReader::new(bytes);

    while !reader.is_empty() {
        let offset = reader.offset();
        let instr: Instruction = reader.read()?;
        out.push_str(&format!("{offset:04x}  {}\n", instr.opcode));
    }

    Ok(out)
}
