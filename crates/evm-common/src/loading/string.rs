//! Length-prefixed string descriptors.
//!
//! Layout: `<u64 length N, little-endian><N raw bytes>`. Both `load_size` and
//! `save_size` report the whole encoded size, header included.

use super::LoadSave;
use crate::constants::LENGTH_PREFIX_SIZE;
use crate::{Error, Result, ensure_len};

/// Total encoded size announced by the length header at the start of `buffer`.
fn encoded_len(buffer: &[u8]) -> Result<usize> {
    let raw = u64::load(buffer)?;
    usize::try_from(raw)
        .ok()
        .and_then(|len| len.checked_add(LENGTH_PREFIX_SIZE))
        .ok_or(Error::LengthOverflow(raw))
}

/// Payload bytes of a length-prefixed value, bounded by its header.
fn payload(buffer: &[u8]) -> Result<&[u8]> {
    let end = encoded_len(buffer)?;
    ensure_len(buffer, end)?;
    Ok(&buffer[LENGTH_PREFIX_SIZE..end])
}

fn save_str(value: &str, buffer: &mut [u8]) -> Result<()> {
    let end = LENGTH_PREFIX_SIZE + value.len();
    ensure_len(buffer, end)?;
    (value.len() as u64).save(buffer)?;
    buffer[LENGTH_PREFIX_SIZE..end].copy_from_slice(value.as_bytes());
    Ok(())
}

impl LoadSave for String {
    fn load_size(buffer: &[u8]) -> Result<usize> {
        encoded_len(buffer)
    }

    fn save_size(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.len()
    }

    fn load(buffer: &[u8]) -> Result<Self> {
        let bytes = payload(buffer)?;
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => {
                tracing::debug!(len = bytes.len(), "rejecting non UTF-8 string payload");
                Err(Error::InvalidUtf8)
            }
        }
    }

    fn save(&self, buffer: &mut [u8]) -> Result<()> {
        save_str(self, buffer)
    }
}

/// Borrowed strings are save-only: nothing in a raw buffer can outlive it.
impl LoadSave for &'static str {
    fn load_size(buffer: &[u8]) -> Result<usize> {
        encoded_len(buffer)
    }

    fn save_size(&self) -> usize {
        LENGTH_PREFIX_SIZE + self.len()
    }

    fn load(_buffer: &[u8]) -> Result<Self> {
        Err(Error::UnsupportedOperation(
            "cannot load a borrowed &str from raw bytes",
        ))
    }

    fn save(&self, buffer: &mut [u8]) -> Result<()> {
        save_str(self, buffer)
    }
}
