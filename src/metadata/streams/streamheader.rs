//! Stream headers of the metadata root.
//!
//! Each header names one stream and gives its offset and size relative to the start of the
//! metadata root. The name is NUL-terminated and padded to a 4-byte boundary.

use crate::{
    file::io::{read_le, write_le_at},
    Error::OutOfBounds,
    Result,
};

/// Stream names known to this crate
pub const STREAM_NAMES: [&str; 9] = [
    "#~", "#-", "#JTD", "#Schema", "#Strings", "#US", "#Blob", "#GUID", "#Pdb",
];

/// Names of the streams that hold metadata tables
pub const TABLES_STREAM_NAMES: [&str; 3] = ["#~", "#-", "#Schema"];

/// A stream header of the metadata root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamHeader {
    /// Offset of the stream from the start of the metadata root
    pub offset: u32,
    /// Size of the stream in bytes
    pub size: u32,
    /// Name of the stream
    pub name: String,
}

impl StreamHeader {
    /// Create a `StreamHeader` from a sequence of bytes
    ///
    /// ## Arguments
    /// * 'data' - The byte slice from which this object shall be created
    ///
    /// # Errors
    /// Returns an error if the data is too short, the name is not terminated within 32 bytes
    /// or the name is not a known stream
    pub fn from(data: &[u8]) -> Result<StreamHeader> {
        if data.len() < 9 {
            return Err(OutOfBounds);
        }

        let mut name = String::with_capacity(32);
        let mut terminated = false;
        for counter in 0..std::cmp::min(32, data.len() - 8) {
            let name_char = read_le::<u8>(&data[8 + counter..])?;
            if name_char == 0 {
                terminated = true;
                break;
            }

            name.push(char::from(name_char));
        }

        if !terminated {
            return Err(malformed_error!("Unterminated stream header name - {}", name));
        }

        if !STREAM_NAMES.iter().any(|valid_name| name == *valid_name) {
            return Err(malformed_error!("Invalid stream header name - {}", name));
        }

        Ok(StreamHeader {
            offset: read_le::<u32>(data)?,
            size: read_le::<u32>(&data[4..])?,
            name,
        })
    }

    /// Bytes this header occupies in the stream directory
    #[must_use]
    pub fn header_size(&self) -> usize {
        8 + (self.name.len() + 1).next_multiple_of(4)
    }

    /// True if the stream holds metadata tables
    #[must_use]
    pub fn is_tables(&self) -> bool {
        TABLES_STREAM_NAMES.contains(&self.name.as_str())
    }

    /// Write the header at `offset` of `data`
    ///
    /// # Errors
    /// Returns an error if `data` is too short or the name longer than 31 characters
    pub fn write(&self, data: &mut [u8], offset: &mut usize) -> Result<()> {
        if self.name.len() > 31 {
            return Err(malformed_error!("Stream name too long - {}", self.name));
        }

        write_le_at::<u32>(data, offset, self.offset)?;
        write_le_at::<u32>(data, offset, self.size)?;

        let name_len = (self.name.len() + 1).next_multiple_of(4);
        let Some(end) = offset.checked_add(name_len) else {
            return Err(OutOfBounds);
        };
        if end > data.len() {
            return Err(OutOfBounds);
        }

        data[*offset..end].fill(0);
        data[*offset..*offset + self.name.len()].copy_from_slice(self.name.as_bytes());
        *offset = end;

        Ok(())
    }
}
