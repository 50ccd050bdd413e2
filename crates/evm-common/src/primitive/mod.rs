//! Primitive values: the ten numeric kinds a VM operates on.
//!
//! A [`PrimitiveValue`] holds exactly one scalar. It has two wire layouts:
//! - **thin**: the scalar's little-endian bytes, nothing else. The reader
//!   must know the kind from context.
//! - **fat**: one tag byte (the kind's ordinal) followed by the thin payload.

mod kind;
mod registry;
mod value;

use crate::loading::FixedWidth;

pub use registry::{PrimitiveKind, PrimitiveValue};
pub use value::Layout;

mod sealed {
    pub trait Sealed {}
}

/// Native scalar types that back a primitive kind.
///
/// Implemented for exactly the ten registry scalars. The association is what
/// makes [`PrimitiveValue::make`] and [`PrimitiveValue::get`] kind-checked at
/// compile time.
pub trait Primitive: FixedWidth + Copy + sealed::Sealed {
    /// Kind backed by this scalar.
    const KIND: PrimitiveKind;

    /// Wrap the scalar.
    fn into_value(self) -> PrimitiveValue;

    /// Unwrap the scalar if `value` holds this kind.
    fn from_value(value: PrimitiveValue) -> Option<Self>;
}

/// Display name for a raw kind ordinal, or `""` if the ordinal is out of range.
pub fn type_name(ordinal: u8) -> &'static str {
    PrimitiveKind::from_u8(ordinal).map_or("", PrimitiveKind::name)
}

#[cfg(test)]
mod value_tests;
