//! Contiguous streams of descriptor-encoded values.
//!
//! Values are laid out back to back with no padding or alignment. The reader
//! advances by the `load_size` of each value it decodes.

use evm_common::{Descriptor, Layout, LoadSave, PrimitiveKind, PrimitiveValue, Result};

/// Growable byte sink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamWriter {
    bytes: Vec<u8>,
}

impl StreamWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Append a value with its own descriptor. Returns the offset it was written at.
    pub fn write<T: LoadSave>(&mut self, value: &T) -> Result<usize> {
        self.write_with(Descriptor::of(), value)
    }

    /// Append a value with an explicit descriptor. Returns the offset it was written at.
    ///
    /// On failure the stream is left as it was.
    pub fn write_with<T>(&mut self, descriptor: Descriptor<T>, value: &T) -> Result<usize> {
        let offset = self.bytes.len();
        let size = descriptor.save_size(value);
        self.bytes.resize(offset + size, 0);

        if let Err(err) = descriptor.save(value, &mut self.bytes[offset..]) {
            self.bytes.truncate(offset);
            return Err(err);
        }

        tracing::trace!(offset, size, "wrote value");
        Ok(offset)
    }

    /// Append a primitive in the given layout. Returns the offset it was written at.
    pub fn write_primitive(&mut self, value: &PrimitiveValue, layout: Layout) -> usize {
        let offset = self.bytes.len();
        value.encode_into(&mut self.bytes, layout);
        tracing::trace!(offset, kind = %value.kind(), ?layout, "wrote primitive");
        offset
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Cursor over a borrowed byte stream.
///
/// A failed read leaves the cursor where it was.
#[derive(Clone, Copy, Debug)]
pub struct StreamReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> StreamReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    pub fn is_empty(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Read a value with its own descriptor.
    pub fn read<T: LoadSave>(&mut self) -> Result<T> {
        self.read_with(Descriptor::of())
    }

    /// Read a value with an explicit descriptor.
    pub fn read_with<T>(&mut self, descriptor: Descriptor<T>) -> Result<T> {
        let (value, size) = descriptor.load_prefix(self.remaining())?;
        tracing::trace!(offset = self.offset, size, "read value");
        self.offset += size;
        Ok(value)
    }

    /// Read a thin primitive whose kind is known from context.
    pub fn read_thin(&mut self, kind: PrimitiveKind) -> Result<PrimitiveValue> {
        let value = PrimitiveValue::decode_thin(kind, self.remaining())?;
        self.offset += PrimitiveValue::load_size_thin(kind);
        Ok(value)
    }

    /// Read a self-describing fat primitive.
    pub fn read_fat(&mut self) -> Result<PrimitiveValue> {
        self.read::<PrimitiveValue>()
    }
}
