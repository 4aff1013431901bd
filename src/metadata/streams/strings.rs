//! The `#Strings` heap.
//!
//! A sequence of NUL-terminated UTF-8 strings. Offset 0 always holds the empty string. Table
//! columns of kind `String` store byte offsets into this heap.

use std::{collections::HashMap, ffi::CStr, str};

use crate::{metadata::tables::IndexSize, Error::OutOfBounds, Result};

/// The `#Strings` heap, owned and appendable.
///
/// Strings added through [`Strings::add`] are de-duplicated against the strings already
/// present, so adding the same name twice yields the same offset.
#[derive(Clone, Debug)]
pub struct Strings {
    data: Vec<u8>,
    lookup: HashMap<String, u32>,
    indexed: bool,
}

impl Strings {
    /// An empty heap holding only the empty string
    #[must_use]
    pub fn new() -> Strings {
        Strings {
            data: vec![0],
            lookup: HashMap::new(),
            indexed: false,
        }
    }

    /// Create a `Strings` heap from a sequence of bytes
    ///
    /// ## Arguments
    /// * 'data' - The byte slice from which this object shall be created
    ///
    /// # Errors
    /// Returns an error if the data is empty or does not start with the empty string
    pub fn from(data: &[u8]) -> Result<Strings> {
        if data.is_empty() || data[0] != 0 {
            return Err(malformed_error!("Provided #Strings heap is empty"));
        }

        Ok(Strings {
            data: data.to_vec(),
            lookup: HashMap::new(),
            indexed: false,
        })
    }

    /// Get a view into the string contained at the provided location.
    ///
    /// ## Arguments
    /// * 'index' - The offset within the heap to be accessed (comes from metadata tables)
    ///
    /// # Errors
    /// Returns an error if the index is out of bounds or the string is not valid UTF-8
    pub fn get(&self, index: usize) -> Result<&str> {
        if index >= self.data.len() {
            return Err(OutOfBounds);
        }

        match CStr::from_bytes_until_nul(&self.data[index..]) {
            Ok(result) => result
                .to_str()
                .map_err(|_| malformed_error!("Invalid string at index - {}", index)),
            Err(_) => Err(malformed_error!("Unterminated string at index - {}", index)),
        }
    }

    fn build_index(&mut self) {
        if self.indexed {
            return;
        }

        let mut offset = 0;
        while offset < self.data.len() {
            let Some(length) = self.data[offset..].iter().position(|byte| *byte == 0) else {
                break;
            };

            if let Ok(value) = str::from_utf8(&self.data[offset..offset + length]) {
                #[allow(clippy::cast_possible_truncation)]
                self.lookup.entry(value.to_string()).or_insert(offset as u32);
            }
            offset += length + 1;
        }

        self.indexed = true;
    }

    /// Add a string and return its offset. An equal string already on the heap is reused.
    ///
    /// # Errors
    /// Returns an error if `value` contains a NUL character or the heap would exceed 4 GiB
    pub fn add(&mut self, value: &str) -> Result<u32> {
        if value.is_empty() {
            return Ok(0);
        }

        if value.contains('\0') {
            return Err(malformed_error!("String {:?} contains a NUL character", value));
        }

        self.build_index();
        if let Some(offset) = self.lookup.get(value) {
            return Ok(*offset);
        }

        let offset = u32::try_from(self.data.len()).map_err(|_| OutOfBounds)?;
        self.data.extend_from_slice(value.as_bytes());
        self.data.push(0);
        self.lookup.insert(value.to_string(), offset);

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

    /// True if the heap holds nothing but the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.len() <= 1
    }

    /// True if offsets into this heap need 4 bytes
    #[must_use]
    pub fn is_large(&self) -> bool {
        self.data.len() > usize::from(u16::MAX)
    }

    /// Width of a `String` column referencing this heap
    #[must_use]
    pub fn index_size(&self) -> IndexSize {
        IndexSize::from_large(self.is_large())
    }
}

impl Default for Strings {
    fn default() -> Self {
        Strings::new()
    }
}

impl PartialEq for Strings {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
