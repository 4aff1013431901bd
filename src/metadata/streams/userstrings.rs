//! The `#US` heap.
//!
//! String literals used by `ldstr`. Each entry is a compressed length, the UTF-16LE code units
//! and one trailing byte that flags strings needing more than plain ASCII handling.

use std::collections::HashMap;

use widestring::U16String;

use crate::{
    file::io::{read_compressed_uint, write_compressed_uint},
    metadata::tables::IndexSize,
    Error::OutOfBounds,
    Result,
};

/// The `#US` heap, owned and appendable.
#[derive(Clone, Debug)]
pub struct UserStrings {
    data: Vec<u8>,
    lookup: HashMap<U16String, u32>,
}

impl UserStrings {
    /// An empty heap holding only the empty entry
    #[must_use]
    pub fn new() -> UserStrings {
        UserStrings {
            data: vec![0],
            lookup: HashMap::new(),
        }
    }

    /// Create a `UserStrings` heap from a sequence of bytes
    ///
    /// ## Arguments
    /// * 'data' - The byte slice from which this object shall be created
    ///
    /// # Errors
    /// Returns an error if the data is empty or does not start with the empty entry
    pub fn from(data: &[u8]) -> Result<UserStrings> {
        if data.is_empty() || data[0] != 0 {
            return Err(malformed_error!("Invalid memory for #US heap"));
        }

        Ok(UserStrings {
            data: data.to_vec(),
            lookup: HashMap::new(),
        })
    }

    /// Get the string at the provided offset
    ///
    /// ## Arguments
    /// * 'index' - The offset within the heap to be accessed (comes from `ldstr` tokens)
    ///
    /// # Errors
    /// Returns an error if the index is out of bounds or the entry is truncated
    pub fn get(&self, index: usize) -> Result<U16String> {
        if index >= self.data.len() {
            return Err(OutOfBounds);
        }

        let mut offset = index;
        let len = read_compressed_uint(&self.data, &mut offset)? as usize;
        let Some(end) = offset.checked_add(len) else {
            return Err(OutOfBounds);
        };

        if end > self.data.len() {
            return Err(malformed_error!("Truncated user string at index - {}", index));
        }

        // Drop the trailing flag byte of non-empty entries
        let chars = &self.data[offset..offset + (len & !1)];
        let units = chars
            .chunks_exact(2)
            .map(|unit| u16::from_le_bytes([unit[0], unit[1]]))
            .collect::<Vec<u16>>();

        Ok(U16String::from_vec(units))
    }

    /// Add a string literal and return its offset. An entry added before is reused.
    ///
    /// # Errors
    /// Returns an error if the string is too long for a compressed length
    pub fn add(&mut self, value: &str) -> Result<u32> {
        let units = U16String::from_str(value);
        if units.is_empty() {
            return Ok(0);
        }

        if let Some(offset) = self.lookup.get(&units) {
            return Ok(*offset);
        }

        let len = units
            .len()
            .checked_mul(2)
            .and_then(|bytes| u32::try_from(bytes + 1).ok())
            .ok_or(OutOfBounds)?;
        let offset = u32::try_from(self.data.len()).map_err(|_| OutOfBounds)?;

        write_compressed_uint(&mut self.data, len)?;
        for unit in units.as_slice() {
            self.data.extend_from_slice(&unit.to_le_bytes());
        }
        let flag = units.as_slice().iter().any(|unit| needs_flag(*unit));
        self.data.push(u8::from(flag));

        self.lookup.insert(units, offset);
        Ok(offset)
    }

    /// The raw heap bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the heap in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the heap holds nothing but the empty entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.len() <= 1
    }

    /// True if offsets into this heap need 4 bytes
    #[must_use]
    pub fn is_large(&self) -> bool {
        self.data.len() > usize::from(u16::MAX)
    }

    /// Width of an offset into this heap
    #[must_use]
    pub fn index_size(&self) -> IndexSize {
        IndexSize::from_large(self.is_large())
    }
}

impl Default for UserStrings {
    fn default() -> Self {
        UserStrings::new()
    }
}

impl PartialEq for UserStrings {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// ECMA-335 II.24.2.4, the trailing byte is 1 if any code unit matches
fn needs_flag(unit: u16) -> bool {
    unit > 0xFF || matches!(unit, 0x01..=0x08 | 0x0E..=0x1F | 0x27 | 0x2D | 0x7F)
}
