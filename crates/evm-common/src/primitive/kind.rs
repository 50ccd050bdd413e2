//! Primitive kind classification and conversions.

use std::fmt;

use super::PrimitiveKind;
use crate::Error;

impl PrimitiveKind {
    /// Raw ordinal, which doubles as the fat wire tag.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Whether this is a signed integer kind.
    pub fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Whether this is an unsigned integer kind.
    pub fn is_unsigned(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    /// Whether this is a floating-point kind.
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl TryFrom<u8> for PrimitiveKind {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        Self::from_u8(v).ok_or_else(|| {
            tracing::debug!(tag = v, "invalid primitive type specifier");
            Error::InvalidType(v)
        })
    }
}

impl From<PrimitiveKind> for u8 {
    fn from(kind: PrimitiveKind) -> Self {
        kind.to_u8()
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
