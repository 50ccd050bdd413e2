//! Binary load/save protocol and primitive values for the evm bytecode VM.
//!
//! This crate contains:
//! - The load/save descriptor protocol ([`LoadSave`], [`Descriptor`])
//! - Fixed-width scalar and length-prefixed string descriptors
//! - The closed primitive registry ([`PrimitiveKind`]) and tagged values
//!   ([`PrimitiveValue`]) with thin and fat wire layouts
//!
//! All multi-byte quantities on the wire are little-endian.
//!
//! # Example
//!
//! ```
//! use evm_common::{Layout, PrimitiveKind, PrimitiveValue};
//!
//! let value = PrimitiveValue::make(45000u16);
//! let bytes = value.encode_to_vec(Layout::Fat);
//! assert_eq!(bytes, [PrimitiveKind::U16.to_u8(), 0xc8, 0xaf]);
//!
//! let decoded = PrimitiveValue::decode_fat(&bytes).unwrap();
//! assert_eq!(decoded.get::<u16>(), Some(45000));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod constants;
pub mod loading;
pub mod primitive;

pub use constants::{
    BYTE_ORDER, ByteOrder, LENGTH_PREFIX_SIZE, MAX_PRIMITIVE_WIDTH, OPCODE_SIZE,
    PRIMITIVE_KIND_COUNT, TAG_SIZE,
};
pub use loading::{Descriptor, FixedWidth, LoadSave};
pub use primitive::{Layout, Primitive, PrimitiveKind, PrimitiveValue, type_name};

/// Errors produced while loading or saving values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Tag byte or kind ordinal outside the primitive registry.
    #[error("invalid type specifier: {0} (expected 0..{PRIMITIVE_KIND_COUNT})")]
    InvalidType(u8),

    /// Raw discriminant of an enum-like extension type (such as an opcode)
    /// that names no variant.
    #[error("invalid {what}: {value:#04x}")]
    InvalidDiscriminant { what: &'static str, value: u8 },

    /// The type cannot be decoded from raw bytes.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// The buffer is shorter than the bytes the operation must touch.
    #[error("buffer too short: needed {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    /// A length-prefixed payload is not valid UTF-8.
    #[error("string payload is not valid UTF-8")]
    InvalidUtf8,

    /// A length prefix does not fit in the address space.
    #[error("length prefix {0} exceeds addressable size")]
    LengthOverflow(u64),
}

/// Result type for load/save operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Check that `buffer` holds at least `needed` bytes.
///
/// Descriptors call this before writing anything so that a failed save
/// leaves the buffer untouched.
#[inline]
pub fn ensure_len(buffer: &[u8], needed: usize) -> Result<()> {
    if buffer.len() < needed {
        tracing::debug!(needed, actual = buffer.len(), "buffer too short");
        return Err(Error::Truncated {
            needed,
            actual: buffer.len(),
        });
    }
    Ok(())
}
