//! Little-endian cursor helpers used by every parser and writer in the crate.
//!
//! All metadata structures are little-endian. Readers take a slice plus a mutable offset that
//! is advanced past the consumed bytes; writers do the same on a pre-sized mutable slice, which
//! is how the table writer guarantees that the predicted size and the produced size agree.

use crate::{Error::OutOfBounds, Result};

/// Primitive types that can be (de)serialized in little-endian byte order.
pub trait CilIO: Sized + Copy {
    /// Fixed-size byte representation
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Build the value from little-endian bytes
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Produce the little-endian bytes of the value
    fn to_le_bytes(self) -> Self::Bytes;
}

macro_rules! impl_cil_io {
    ($($ty:ty),*) => {
        $(
            impl CilIO for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }
            }
        )*
    };
}

impl_cil_io!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Read a value from the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `data` is too short.
pub fn read_le<T: CilIO>(data: &[u8]) -> Result<T> {
    let mut offset = 0_usize;
    read_le_at(data, &mut offset)
}

/// Read a value at `offset`, advancing the offset on success.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the read would go past the end of `data`.
pub fn read_le_at<T: CilIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(OutOfBounds);
    };

    if end > data.len() {
        return Err(OutOfBounds);
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(OutOfBounds);
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

/// Read a 2 or 4 byte index, zero-extended to `u32`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the read would go past the end of `data`.
pub fn read_le_at_dyn(data: &[u8], offset: &mut usize, is_large: bool) -> Result<u32> {
    let res = if is_large {
        read_le_at::<u32>(data, offset)?
    } else {
        u32::from(read_le_at::<u16>(data, offset)?)
    };

    Ok(res)
}

/// Write a value at the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `data` is too short.
pub fn write_le<T: CilIO>(data: &mut [u8], value: T) -> Result<()> {
    let mut offset = 0_usize;
    write_le_at(data, &mut offset, value)
}

/// Write a value at `offset`, advancing the offset on success.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the write would go past the end of `data`.
pub fn write_le_at<T: CilIO>(data: &mut [u8], offset: &mut usize, value: T) -> Result<()> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(OutOfBounds);
    };

    if end > data.len() {
        return Err(OutOfBounds);
    }

    data[*offset..end].copy_from_slice(value.to_le_bytes().as_ref());
    *offset = end;

    Ok(())
}

/// Write a 2 or 4 byte index.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if the write would go past the end of `data`, or
/// [`crate::Error::Malformed`] if `value` does not fit into a 2 byte index.
pub fn write_le_at_dyn(
    data: &mut [u8],
    offset: &mut usize,
    value: u32,
    is_large: bool,
) -> Result<()> {
    if is_large {
        write_le_at::<u32>(data, offset, value)?;
    } else {
        let Ok(short) = u16::try_from(value) else {
            return Err(malformed_error!(
                "Index {:#x} does not fit into a 2 byte column",
                value
            ));
        };
        write_le_at::<u16>(data, offset, short)?;
    }

    Ok(())
}

/// Read a compressed unsigned integer (ECMA-335 II.23.2), advancing the offset.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] on truncated input or [`crate::Error::Malformed`]
/// for an invalid lead byte.
pub fn read_compressed_uint(data: &[u8], offset: &mut usize) -> Result<u32> {
    let first_byte = read_le_at::<u8>(data, offset)?;

    // 1-byte encoding: 0xxxxxxx
    if (first_byte & 0x80) == 0 {
        return Ok(u32::from(first_byte));
    }

    // 2-byte encoding: 10xxxxxx xxxxxxxx
    if (first_byte & 0xC0) == 0x80 {
        let second_byte = read_le_at::<u8>(data, offset)?;
        return Ok(((u32::from(first_byte) & 0x3F) << 8) | u32::from(second_byte));
    }

    // 4-byte encoding: 110xxxxx xxxxxxxx xxxxxxxx xxxxxxxx
    if (first_byte & 0xE0) == 0xC0 {
        let b1 = u32::from(read_le_at::<u8>(data, offset)?);
        let b2 = u32::from(read_le_at::<u8>(data, offset)?);
        let b3 = u32::from(read_le_at::<u8>(data, offset)?);
        return Ok(((u32::from(first_byte) & 0x1F) << 24) | (b1 << 16) | (b2 << 8) | b3);
    }

    Err(malformed_error!("Invalid compressed uint - {}", first_byte))
}

/// Append a compressed unsigned integer (ECMA-335 II.23.2) to `out`.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] if `value` exceeds `0x1FFF_FFFF`.
#[allow(clippy::cast_possible_truncation)]
pub fn write_compressed_uint(out: &mut Vec<u8>, value: u32) -> Result<()> {
    match value {
        0..=0x7F => out.push(value as u8),
        0x80..=0x3FFF => {
            out.push(((value >> 8) as u8) | 0x80);
            out.push(value as u8);
        }
        0x4000..=0x1FFF_FFFF => {
            out.push(((value >> 24) as u8) | 0xC0);
            out.push((value >> 16) as u8);
            out.push((value >> 8) as u8);
            out.push(value as u8);
        }
        _ => {
            return Err(malformed_error!(
                "Value {:#x} is too large for a compressed uint",
                value
            ))
        }
    }

    Ok(())
}
