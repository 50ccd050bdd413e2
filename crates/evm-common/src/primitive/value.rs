//! Thin and fat encoding of primitive values.

use super::{Primitive, PrimitiveKind, PrimitiveValue};
use crate::constants::TAG_SIZE;
use crate::loading::LoadSave;
use crate::{Result, ensure_len};

/// Wire layout of an encoded primitive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Layout {
    /// Payload only; the kind comes from context.
    #[default]
    Thin,
    /// Tag byte followed by the payload.
    Fat,
}

impl Layout {
    pub fn from_fat(fat: bool) -> Self {
        if fat { Self::Fat } else { Self::Thin }
    }

    pub fn is_fat(self) -> bool {
        self == Self::Fat
    }

    /// Bytes the layout adds in front of the payload.
    pub fn tag_size(self) -> usize {
        match self {
            Self::Thin => 0,
            Self::Fat => TAG_SIZE,
        }
    }
}

/// Read the kind tag at the start of a fat buffer.
fn read_tag(buffer: &[u8]) -> Result<PrimitiveKind> {
    ensure_len(buffer, TAG_SIZE)?;
    PrimitiveKind::try_from(buffer[0])
}

impl PrimitiveValue {
    /// Wrap a native scalar; the kind follows from its type.
    #[inline]
    pub fn make<T: Primitive>(value: T) -> Self {
        value.into_value()
    }

    /// The held scalar if this value is of `T`'s kind, else `None`.
    #[inline]
    pub fn get<T: Primitive>(self) -> Option<T> {
        T::from_value(self)
    }

    /// Whether this value is of kind `kind`.
    #[inline]
    pub fn is(&self, kind: PrimitiveKind) -> bool {
        self.kind() == kind
    }

    /// Bytes needed to decode a thin value of `kind`.
    #[inline]
    pub fn load_size_thin(kind: PrimitiveKind) -> usize {
        kind.width()
    }

    /// Bytes needed to decode the fat value at the start of `buffer`.
    ///
    /// Reads the tag byte only.
    pub fn load_size_fat(buffer: &[u8]) -> Result<usize> {
        let kind = read_tag(buffer)?;
        Ok(TAG_SIZE + kind.width())
    }

    /// Bytes this value occupies in `layout`.
    #[inline]
    pub fn save_size(&self, layout: Layout) -> usize {
        layout.tag_size() + self.kind().width()
    }

    /// Decode a thin value whose kind is known out of band.
    pub fn decode_thin(kind: PrimitiveKind, buffer: &[u8]) -> Result<Self> {
        Self::load_payload(kind, buffer)
    }

    /// Decode a fat value, taking the kind from its tag byte.
    pub fn decode_fat(buffer: &[u8]) -> Result<Self> {
        let kind = read_tag(buffer)?;
        Self::decode_thin(kind, &buffer[TAG_SIZE..])
    }

    /// Decode in either layout. `kind` is required for thin and ignored for fat.
    pub fn decode(buffer: &[u8], layout: Layout, kind: PrimitiveKind) -> Result<Self> {
        match layout {
            Layout::Thin => Self::decode_thin(kind, buffer),
            Layout::Fat => Self::decode_fat(buffer),
        }
    }

    /// Encode at the start of `buffer` and return the number of bytes written.
    ///
    /// Writes nothing if `buffer` cannot hold `save_size(layout)` bytes.
    pub fn encode(&self, buffer: &mut [u8], layout: Layout) -> Result<usize> {
        let size = self.save_size(layout);
        ensure_len(buffer, size)?;

        let payload = match layout {
            Layout::Thin => buffer,
            Layout::Fat => {
                buffer[0] = self.kind().to_u8();
                &mut buffer[TAG_SIZE..]
            }
        };
        self.save_payload(payload)?;

        Ok(size)
    }

    /// Append the encoding to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>, layout: Layout) {
        out.reserve(self.save_size(layout));
        if layout.is_fat() {
            out.push(self.kind().to_u8());
        }
        self.extend_payload(out);
    }

    /// Encode into a new vector of exactly `save_size(layout)` bytes.
    pub fn encode_to_vec(&self, layout: Layout) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.save_size(layout));
        self.encode_into(&mut out, layout);
        out
    }
}

/// Standalone values are self-describing, so they load and save fat.
impl LoadSave for PrimitiveValue {
    fn load_size(buffer: &[u8]) -> Result<usize> {
        Self::load_size_fat(buffer)
    }

    fn save_size(&self) -> usize {
        PrimitiveValue::save_size(self, Layout::Fat)
    }

    fn load(buffer: &[u8]) -> Result<Self> {
        Self::decode_fat(buffer)
    }

    fn save(&self, buffer: &mut [u8]) -> Result<()> {
        self.encode(buffer, Layout::Fat).map(|_| ())
    }
}
