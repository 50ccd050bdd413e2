//! Wire format constants.

/// Byte order of multi-byte scalars on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ByteOrder {
    Little,
    Big,
}

/// Canonical byte order for every scalar payload and length prefix.
pub const BYTE_ORDER: ByteOrder = ByteOrder::Little;

/// Size of the kind tag that prefixes a fat primitive.
pub const TAG_SIZE: usize = 1;

/// Size of the length header of variable-length values.
pub const LENGTH_PREFIX_SIZE: usize = 8;

/// Width of the widest primitive kind (i64, u64, f64).
///
/// A fat primitive never exceeds `TAG_SIZE + MAX_PRIMITIVE_WIDTH` bytes.
pub const MAX_PRIMITIVE_WIDTH: usize = 8;

/// Number of kinds in the primitive registry. Valid tags are `0..PRIMITIVE_KIND_COUNT`.
pub const PRIMITIVE_KIND_COUNT: u8 = 10;

/// Size of an encoded opcode.
pub const OPCODE_SIZE: usize = 1;
