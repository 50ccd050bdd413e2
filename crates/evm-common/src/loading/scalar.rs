//! Fixed-width scalar descriptors (little-endian).

use super::LoadSave;
use crate::{Result, ensure_len};

/// Scalars whose encoded size is a compile-time constant.
pub trait FixedWidth: LoadSave {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Append the encoded bytes to `out`.
    fn extend_le(&self, out: &mut Vec<u8>);
}

/// Copy the first `N` bytes of `buffer` into an array.
#[inline]
fn read_array<const N: usize>(buffer: &[u8]) -> Result<[u8; N]> {
    ensure_len(buffer, N)?;
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buffer[..N]);
    Ok(bytes)
}

macro_rules! le_scalars {
    ($($t:ty),* $(,)?) => {
        $(
            impl FixedWidth for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn extend_le(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }

            impl LoadSave for $t {
                #[inline]
                fn load_size(_buffer: &[u8]) -> Result<usize> {
                    Ok(<Self as FixedWidth>::WIDTH)
                }

                #[inline]
                fn save_size(&self) -> usize {
                    <Self as FixedWidth>::WIDTH
                }

                #[inline]
                fn load(buffer: &[u8]) -> Result<Self> {
                    let bytes = read_array::<{ std::mem::size_of::<$t>() }>(buffer)?;
                    Ok(<$t>::from_le_bytes(bytes))
                }

                #[inline]
                fn save(&self, buffer: &mut [u8]) -> Result<()> {
                    let width = <Self as FixedWidth>::WIDTH;
                    ensure_len(buffer, width)?;
                    buffer[..width].copy_from_slice(&self.to_le_bytes());
                    Ok(())
                }
            }
        )*
    };
}

le_scalars!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
