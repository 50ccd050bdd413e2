//! Load/save descriptor protocol.
//!
//! A type joins the binary codec by providing four operations: the size it
//! needs before it can be loaded, the size it occupies when saved, and the
//! load and save themselves. [`LoadSave`] is the static form of that
//! contract; [`Descriptor`] is the same contract as a plain value, for tables
//! that pick the codec at runtime (for example one descriptor per
//! instruction argument shape).

mod scalar;
mod string;

use std::fmt;

use crate::{Result, ensure_len};

pub use scalar::FixedWidth;

/// Types that can be loaded from and saved into a byte buffer.
///
/// Implementations must uphold:
/// - `load` reads only `buffer[..load_size(buffer)]`.
/// - `save` writes exactly `save_size()` bytes starting at `buffer[0]`, and
///   writes nothing when it fails.
pub trait LoadSave: Sized {
    /// Bytes required before a full value can be decoded from `buffer`.
    ///
    /// Fixed-width types ignore the buffer. Variable-length types read their
    /// length header.
    fn load_size(buffer: &[u8]) -> Result<usize>;

    /// Bytes this value occupies once saved.
    fn save_size(&self) -> usize;

    /// Decode one value from the start of `buffer`.
    fn load(buffer: &[u8]) -> Result<Self>;

    /// Encode this value at the start of `buffer`.
    fn save(&self, buffer: &mut [u8]) -> Result<()>;
}

/// Load/save information for a type, as a table of four functions.
///
/// Stateless and `Copy`; build one on demand with [`Descriptor::of`] or, for
/// ad-hoc codecs that do not implement [`LoadSave`], [`Descriptor::new`].
pub struct Descriptor<T> {
    load_size: fn(&[u8]) -> Result<usize>,
    save_size: fn(&T) -> usize,
    load: fn(&[u8]) -> Result<T>,
    save: fn(&T, &mut [u8]) -> Result<()>,
}

impl<T: LoadSave> Descriptor<T> {
    /// Descriptor backed by the type's [`LoadSave`] implementation.
    pub fn of() -> Self {
        Self {
            load_size: T::load_size,
            save_size: T::save_size,
            load: T::load,
            save: T::save,
        }
    }
}

impl<T> Descriptor<T> {
    pub const fn new(
        load_size: fn(&[u8]) -> Result<usize>,
        save_size: fn(&T) -> usize,
        load: fn(&[u8]) -> Result<T>,
        save: fn(&T, &mut [u8]) -> Result<()>,
    ) -> Self {
        Self {
            load_size,
            save_size,
            load,
            save,
        }
    }

    #[inline]
    pub fn load_size(&self, buffer: &[u8]) -> Result<usize> {
        (self.load_size)(buffer)
    }

    #[inline]
    pub fn save_size(&self, value: &T) -> usize {
        (self.save_size)(value)
    }

    #[inline]
    pub fn load(&self, buffer: &[u8]) -> Result<T> {
        (self.load)(buffer)
    }

    /// Save `value`, checking up front that `buffer` can hold all of it.
    pub fn save(&self, value: &T, buffer: &mut [u8]) -> Result<()> {
        ensure_len(buffer, self.save_size(value))?;
        (self.save)(value, buffer)
    }

    /// Load one value and report how many bytes it consumed.
    pub fn load_prefix(&self, buffer: &[u8]) -> Result<(T, usize)> {
        let size = self.load_size(buffer)?;
        ensure_len(buffer, size)?;
        let value = self.load(&buffer[..size])?;
        Ok((value, size))
    }

    /// Save `value` into a freshly allocated buffer of exactly `save_size` bytes.
    pub fn to_vec(&self, value: &T) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; self.save_size(value)];
        (self.save)(value, &mut bytes)?;
        Ok(bytes)
    }
}

impl<T> Clone for Descriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Descriptor<T> {}

impl<T> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
