//! The `#GUID` heap.
//!
//! A plain array of 16-byte GUIDs. Unlike the other heaps, columns referencing it store a
//! 1-based entry index instead of a byte offset, 0 being the null GUID.

use crate::{metadata::tables::IndexSize, Error::OutOfBounds, Result};

/// The `#GUID` heap, owned and appendable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Guid {
    data: Vec<u8>,
}

impl Guid {
    /// An empty heap
    #[must_use]
    pub fn new() -> Guid {
        Guid { data: Vec::new() }
    }

    /// Create a `Guid` heap from a sequence of bytes
    ///
    /// ## Arguments
    /// * 'data' - The byte slice from which this object shall be created
    ///
    /// # Errors
    /// Returns an error if the data is not a whole number of GUIDs
    pub fn from(data: &[u8]) -> Result<Guid> {
        if data.len() % 16 != 0 {
            return Err(malformed_error!(
                "Size of #GUID heap is not a multiple of 16 - {}",
                data.len()
            ));
        }

        Ok(Guid {
            data: data.to_vec(),
        })
    }

    /// Get the GUID at a 1-based index
    ///
    /// ## Arguments
    /// * 'index' - The 1-based entry to be accessed (comes from metadata tables)
    ///
    /// # Errors
    /// Returns an error if the index is 0 or past the last entry
    pub fn get(&self, index: usize) -> Result<uguid::Guid> {
        if index < 1 || index > self.count() {
            return Err(OutOfBounds);
        }

        let start = (index - 1) * 16;
        let mut buffer = [0u8; 16];
        buffer.copy_from_slice(&self.data[start..start + 16]);

        Ok(uguid::Guid::from_bytes(buffer))
    }

    /// Add a GUID and return its 1-based index. An equal GUID already on the heap is reused.
    ///
    /// # Errors
    /// Returns an error if the heap would exceed 4 GiB
    pub fn add(&mut self, value: uguid::Guid) -> Result<u32> {
        let bytes = value.to_bytes();
        let existing = self
            .data
            .chunks_exact(16)
            .position(|entry| entry == bytes.as_slice());
        if let Some(position) = existing {
            return u32::try_from(position + 1).map_err(|_| OutOfBounds);
        }

        self.data.extend_from_slice(&bytes);
        u32::try_from(self.count()).map_err(|_| OutOfBounds)
    }

    /// Number of GUIDs on the heap
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len() / 16
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

    /// True if the heap holds no GUID
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if indices into this heap need 4 bytes.
    ///
    /// Measured on the byte size of the heap, the same as the other heaps.
    #[must_use]
    pub fn is_large(&self) -> bool {
        self.data.len() > usize::from(u16::MAX)
    }

    /// Width of a `Guid` column referencing this heap
    #[must_use]
    pub fn index_size(&self) -> IndexSize {
        IndexSize::from_large(self.is_large())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crafted() {
        #[rustfmt::skip]
        let data : [u8; 48] = [
            /* 1 - 0;16   */  0x8e, 0x90, 0x37, 0xd4, 0xe6, 0x65, 0x7c, 0x48, 0x97, 0x35, 0x7b, 0xdf, 0xf6, 0x99, 0xbe, 0xa5,
            /* 2 - 16;32  */  0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA,
            /* 3 - 32;48  */  0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];

        let guids = Guid::from(&data).unwrap();

        assert_eq!(guids.count(), 3);
        assert_eq!(
            guids.get(1).unwrap(),
            uguid::guid!("d437908e-65e6-487c-9735-7bdff699bea5")
        );
        assert_eq!(
            guids.get(2).unwrap(),
            uguid::guid!("AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA")
        );
        assert_eq!(
            guids.get(3).unwrap(),
            uguid::guid!("00000000-0000-0000-0000-000000000000")
        );
    }

    #[test]
    fn invalid() {
        assert!(Guid::from(&[0x00; 15]).is_err());

        let guids = Guid::from(&[0x11; 16]).unwrap();
        assert!(guids.get(0).is_err());
        assert!(guids.get(2).is_err());
    }

    #[test]
    fn add_deduplicates() {
        let mut guids = Guid::new();
        let mvid = uguid::guid!("d437908e-65e6-487c-9735-7bdff699bea5");

        assert_eq!(guids.add(mvid).unwrap(), 1);
        assert_eq!(guids.add(uguid::Guid::ZERO).unwrap(), 2);
        assert_eq!(guids.add(mvid).unwrap(), 1);
        assert_eq!(guids.len(), 32);
        assert_eq!(guids.get(1).unwrap(), mvid);
        assert_eq!(guids.index_size(), IndexSize::Short);
    }
}
