//! The `#Blob` heap.
//!
//! Holds binary data (signatures, public keys, custom attribute values, marshalling
//! descriptors). Each entry is prefixed by its length as an ECMA-335 compressed unsigned
//! integer. Offset 0 always holds the empty blob.

use std::collections::HashMap;

use crate::{
    file::io::{read_compressed_uint, write_compressed_uint},
    metadata::tables::IndexSize,
    Error::OutOfBounds,
    Result,
};

/// The `#Blob` heap, owned and appendable.
#[derive(Clone, Debug)]
pub struct Blob {
    data: Vec<u8>,
    lookup: HashMap<Vec<u8>, u32>,
    indexed: bool,
}

impl Blob {
    /// An empty heap holding only the empty blob
    #[must_use]
    pub fn new() -> Blob {
        Blob {
            data: vec![0],
            lookup: HashMap::new(),
            indexed: false,
        }
    }

    /// Create a `Blob` heap from a sequence of bytes
    ///
    /// ## Arguments
    /// * 'data' - The byte slice from which this object shall be created
    ///
    /// # Errors
    /// Returns an error if the data is empty or does not start with the empty blob
    pub fn from(data: &[u8]) -> Result<Blob> {
        if data.is_empty() || data[0] != 0 {
            return Err(malformed_error!("Invalid memory for #Blob heap"));
        }

        Ok(Blob {
            data: data.to_vec(),
            lookup: HashMap::new(),
            indexed: false,
        })
    }

    /// Get a view into the blob contained at the provided location.
    ///
    /// ## Arguments
    /// * 'index' - The offset within the heap to be accessed (comes from metadata tables)
    ///
    /// # Errors
    /// Returns an error if the index is out of bounds or the length prefix is invalid
    pub fn get(&self, index: usize) -> Result<&[u8]> {
        if index >= self.data.len() {
            return Err(OutOfBounds);
        }

        let mut offset = index;
        let len = read_compressed_uint(&self.data, &mut offset)? as usize;

        let Some(data_end) = offset.checked_add(len) else {
            return Err(OutOfBounds);
        };

        if data_end > self.data.len() {
            return Err(OutOfBounds);
        }

        Ok(&self.data[offset..data_end])
    }

    /// Iterate all entries after the leading empty blob as `(offset, data)`
    #[must_use]
    pub fn iter(&self) -> BlobIterator<'_> {
        BlobIterator {
            blob: self,
            position: 1,
        }
    }

    fn build_index(&mut self) {
        if self.indexed {
            return;
        }

        let mut offset = 1;
        while offset < self.data.len() {
            let start = offset;
            let Ok(len) = read_compressed_uint(&self.data, &mut offset) else {
                break;
            };

            let end = offset + len as usize;
            if end > self.data.len() {
                break;
            }

            #[allow(clippy::cast_possible_truncation)]
            self.lookup
                .entry(self.data[offset..end].to_vec())
                .or_insert(start as u32);
            offset = end;
        }

        self.indexed = true;
    }

    /// Add a blob and return its offset. An equal blob already on the heap is reused.
    ///
    /// # Errors
    /// Returns an error if `value` is longer than a compressed length can express
    pub fn add(&mut self, value: &[u8]) -> Result<u32> {
        if value.is_empty() {
            return Ok(0);
        }

        self.build_index();
        if let Some(offset) = self.lookup.get(value) {
            return Ok(*offset);
        }

        let len = u32::try_from(value.len()).map_err(|_| OutOfBounds)?;
        let offset = u32::try_from(self.data.len()).map_err(|_| OutOfBounds)?;

        write_compressed_uint(&mut self.data, len)?;
        self.data.extend_from_slice(value);
        self.lookup.insert(value.to_vec(), offset);

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

    /// True if the heap holds nothing but the empty blob
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.len() <= 1
    }

    /// True if offsets into this heap need 4 bytes
    #[must_use]
    pub fn is_large(&self) -> bool {
        self.data.len() > usize::from(u16::MAX)
    }

    /// Width of a `Blob` column referencing this heap
    #[must_use]
    pub fn index_size(&self) -> IndexSize {
        IndexSize::from_large(self.is_large())
    }
}

impl Default for Blob {
    fn default() -> Self {
        Blob::new()
    }
}

impl PartialEq for Blob {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<'a> IntoIterator for &'a Blob {
    type Item = Result<(usize, &'a [u8])>;
    type IntoIter = BlobIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`Blob`] heap
pub struct BlobIterator<'a> {
    blob: &'a Blob,
    position: usize,
}

impl<'a> Iterator for BlobIterator<'a> {
    type Item = Result<(usize, &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.blob.data.len() {
            return None;
        }

        let start = self.position;
        let mut offset = start;
        let entry = read_compressed_uint(&self.blob.data, &mut offset)
            .and_then(|_| self.blob.get(start));

        match entry {
            Ok(data) => {
                self.position = offset + data.len();
                Some(Ok((start, data)))
            }
            Err(error) => {
                self.position = self.blob.data.len();
                Some(Err(error))
            }
        }
    }
}
