//! The primitive registry table.
//!
//! Every per-kind fact (ordinal, native type, display name) is written once,
//! here. The kind enum, the value enum and the native-type bindings are all
//! generated from this table, so a kind's ordinal, its value discriminant and
//! its wire tag cannot drift apart.

use std::fmt;

use super::{Primitive, sealed};
use crate::constants::PRIMITIVE_KIND_COUNT;
use crate::loading::{FixedWidth, LoadSave};
use crate::Result;

macro_rules! primitive_registry {
    ($($kind:ident = $ordinal:literal => $ty:ty, $name:literal;)*) => {
        /// The closed set of primitive kinds.
        ///
        /// The ordinal is the wire tag of a fat primitive.
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[repr(u8)]
        pub enum PrimitiveKind {
            $(
                #[doc = concat!("`", $name, "`")]
                $kind = $ordinal,
            )*
        }

        impl PrimitiveKind {
            /// All kinds, in ordinal order.
            pub const ALL: [Self; PRIMITIVE_KIND_COUNT as usize] = [$(Self::$kind),*];

            /// Convert from a raw ordinal.
            pub const fn from_u8(v: u8) -> Option<Self> {
                match v {
                    $($ordinal => Some(Self::$kind),)*
                    _ => None,
                }
            }

            /// Native width of the kind's scalar, which is also its thin size.
            pub const fn width(self) -> usize {
                match self {
                    $(Self::$kind => <$ty as FixedWidth>::WIDTH,)*
                }
            }

            /// Display name, spelled like the Rust scalar type.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$kind => $name,)*
                }
            }
        }

        /// A single tagged scalar.
        ///
        /// The active variant always corresponds to [`PrimitiveValue::kind`].
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub enum PrimitiveValue {
            $($kind($ty),)*
        }

        impl PrimitiveValue {
            /// Kind of the held scalar. Reads the discriminant only.
            pub const fn kind(&self) -> PrimitiveKind {
                match self {
                    $(Self::$kind(_) => PrimitiveKind::$kind,)*
                }
            }

            pub(super) fn load_payload(kind: PrimitiveKind, buffer: &[u8]) -> Result<Self> {
                match kind {
                    $(PrimitiveKind::$kind => <$ty>::load(buffer).map(Self::$kind),)*
                }
            }

            pub(super) fn save_payload(&self, buffer: &mut [u8]) -> Result<()> {
                match self {
                    $(Self::$kind(v) => v.save(buffer),)*
                }
            }

            pub(super) fn extend_payload(&self, out: &mut Vec<u8>) {
                match self {
                    $(Self::$kind(v) => v.extend_le(out),)*
                }
            }
        }

        /// Renders as a suffixed literal (`54i8`); the alternate form (`{:#}`)
        /// renders the bare scalar.
        impl fmt::Display for PrimitiveValue {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(
                        Self::$kind(v) if f.alternate() => write!(f, "{v}"),
                        Self::$kind(v) => write!(f, "{v}{}", $name),
                    )*
                }
            }
        }

        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const KIND: PrimitiveKind = PrimitiveKind::$kind;

                #[inline]
                fn into_value(self) -> PrimitiveValue {
                    PrimitiveValue::$kind(self)
                }

                #[inline]
                fn from_value(value: PrimitiveValue) -> Option<Self> {
                    match value {
                        PrimitiveValue::$kind(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for PrimitiveValue {
                #[inline]
                fn from(v: $ty) -> Self {
                    Self::$kind(v)
                }
            }
        )*
    };
}

primitive_registry! {
    I8 = 0 => i8, "i8";
    I16 = 1 => i16, "i16";
    I32 = 2 => i32, "i32";
    I64 = 3 => i64, "i64";
    U8 = 4 => u8, "u8";
    U16 = 5 => u16, "u16";
    U32 = 6 => u32, "u32";
    U64 = 7 => u64, "u64";
    F32 = 8 => f32, "f32";
    F64 = 9 => f64, "f64";
}
