//! The metadata root (ECMA-335 II.24.2.1).
//!
//! The root starts with the `BSJB` signature, followed by a version string and the stream
//! directory. Stream offsets are relative to the start of the root.

use crate::{
    file::io::{read_le, read_le_at, write_le_at},
    metadata::streams::{StreamHeader, STREAM_NAMES},
    Error::OutOfBounds,
    Result,
};

/// The MAGIC value indicating the CIL header
pub const CIL_HEADER_MAGIC: u32 = 0x424A_5342;

/// The header of the present metadata: version string and stream directory.
///
/// # Example
///
/// ```rust,no_run
/// use dotmeta::metadata::root::Root;
/// let root = Root::read(&[
///            0x42, 0x53, 0x4A, 0x42,
///            0x01, 0x00,
///            0x01, 0x00,
///            0x00, 0x00, 0x00, 0x00,
///            0x04, 0x00, 0x00, 0x00,
///            b'v', b'4', 0x00, 0x00,
///            0x00, 0x00,
///            0x01, 0x00,
///            0x24, 0x00, 0x00, 0x00, // StreamHeader
///            0x00, 0x00, 0x00, 0x00,
///            0x23, 0x7E, 0x00, 0x00,
///        ])?;
/// println!("Version: {}", root.version);
/// # Ok::<(), dotmeta::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Root {
    /// Magic signature for physical metadata: 0x424A5342
    pub signature: u32,
    /// `MajorVersion`, 1
    pub major_version: u16,
    /// `MinorVersion`, 1
    pub minor_version: u16,
    /// Always 0
    pub reserved: u32,
    /// Number of bytes allocated to hold the version string, a multiple of 4
    pub length: u32,
    /// `VersionString` without its terminator and padding
    pub version: String,
    /// Reserved, always 0
    pub flags: u16,
    /// Streams
    pub stream_headers: Vec<StreamHeader>,
}

impl Root {
    /// A root without streams for `version`, e.g. `v4.0.30319`
    #[must_use]
    pub fn new(version: &str) -> Root {
        #[allow(clippy::cast_possible_truncation)]
        let length = (version.len() + 1).next_multiple_of(4) as u32;
        Root {
            signature: CIL_HEADER_MAGIC,
            major_version: 1,
            minor_version: 1,
            reserved: 0,
            length,
            version: version.to_string(),
            flags: 0,
            stream_headers: Vec::new(),
        }
    }

    /// Reads a [`Root`] metadata header from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The metadata, starting with the root
    ///
    /// # Errors
    /// Returns an error if the data is too short, the signature is invalid, or the stream
    /// directory is malformed.
    pub fn read(data: &[u8]) -> Result<Root> {
        if data.len() < 20 {
            return Err(OutOfBounds);
        }

        let signature = read_le::<u32>(data)?;
        if signature != CIL_HEADER_MAGIC {
            return Err(malformed_error!(
                "CIL_HEADER_MAGIC does not match - {:#010x}",
                signature
            ));
        }

        let length = read_le::<u32>(&data[12..])?;
        let Some(version_end) = (length as usize).checked_add(16) else {
            return Err(malformed_error!("Version string length overflows - {}", length));
        };
        if version_end + 4 > data.len() {
            return Err(OutOfBounds);
        }

        let version_bytes = &data[16..version_end];
        let terminator = version_bytes
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(version_bytes.len());
        let version = String::from_utf8_lossy(&version_bytes[..terminator]).into_owned();

        let mut offset = version_end;
        let flags = read_le_at::<u16>(data, &mut offset)?;
        let stream_count = read_le_at::<u16>(data, &mut offset)?;
        if stream_count == 0 || stream_count as usize > STREAM_NAMES.len() {
            return Err(malformed_error!("Invalid stream count - {}", stream_count));
        }

        let mut stream_headers: Vec<StreamHeader> = Vec::with_capacity(stream_count as usize);
        for _ in 0..stream_count {
            if offset > data.len() {
                return Err(OutOfBounds);
            }

            let header = StreamHeader::from(&data[offset..])?;
            match header.offset.checked_add(header.size) {
                Some(end) if end as usize <= data.len() => {}
                Some(_) => return Err(OutOfBounds),
                None => {
                    return Err(malformed_error!(
                        "Stream offset and size cause integer overflow - {} + {}",
                        header.offset,
                        header.size
                    ))
                }
            }

            if stream_headers.iter().any(|known| known.name == header.name) {
                return Err(malformed_error!("Duplicate stream - {}", header.name));
            }

            offset += header.header_size();
            stream_headers.push(header);
        }

        Ok(Root {
            signature,
            major_version: read_le::<u16>(&data[4..])?,
            minor_version: read_le::<u16>(&data[6..])?,
            reserved: read_le::<u32>(&data[8..])?,
            length,
            version,
            flags,
            stream_headers,
        })
    }

    /// The header of the stream called `name`
    #[must_use]
    pub fn stream(&self, name: &str) -> Option<&StreamHeader> {
        self.stream_headers.iter().find(|header| header.name == name)
    }

    /// The header of the tables stream, whichever name it has
    #[must_use]
    pub fn tables_stream(&self) -> Option<&StreamHeader> {
        self.stream_headers.iter().find(|header| header.is_tables())
    }

    /// The bytes of the stream `header` describes
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the stream lies outside of `data`
    pub fn stream_data<'a>(header: &StreamHeader, data: &'a [u8]) -> Result<&'a [u8]> {
        let start = header.offset as usize;
        let end = start
            .checked_add(header.size as usize)
            .ok_or(OutOfBounds)?;
        data.get(start..end).ok_or(OutOfBounds)
    }

    /// Size of the root up to the first stream, for the current version and streams
    fn directory_size(&self, names: &[&str]) -> usize {
        let headers: usize = names
            .iter()
            .map(|name| 8 + (name.len() + 1).next_multiple_of(4))
            .sum();
        20 + (self.version.len() + 1).next_multiple_of(4) + headers
    }

    /// Write the root followed by `streams`, each starting at a 4-byte boundary.
    ///
    /// The stream directory is rebuilt from `streams`, offsets and sizes of the previous
    /// directory are discarded.
    ///
    /// # Arguments
    /// * `streams` - Name and content of each stream, in directory order
    ///
    /// # Errors
    /// Returns an error if there are no streams, a stream name is unknown or a size does not
    /// fit into 32 bits
    pub fn write(&mut self, streams: &[(&str, &[u8])]) -> Result<Vec<u8>> {
        if streams.is_empty() {
            return Err(malformed_error!("A metadata root needs at least one stream"));
        }

        let names: Vec<&str> = streams.iter().map(|(name, _)| *name).collect();
        let mut position = self.directory_size(&names);

        self.stream_headers.clear();
        for (name, data) in streams {
            if !STREAM_NAMES.contains(name) {
                return Err(malformed_error!("Invalid stream header name - {}", name));
            }

            let size = data.len().next_multiple_of(4);
            self.stream_headers.push(StreamHeader {
                offset: u32::try_from(position)
                    .map_err(|_| malformed_error!("Metadata too large"))?,
                size: u32::try_from(size).map_err(|_| malformed_error!("Stream too large"))?,
                name: (*name).to_string(),
            });
            position += size;
        }

        self.length = u32::try_from((self.version.len() + 1).next_multiple_of(4))
            .map_err(|_| malformed_error!("Version string too long"))?;
        let stream_count = u16::try_from(streams.len())
            .map_err(|_| malformed_error!("Too many streams"))?;

        let mut out = vec![0_u8; position];
        let mut offset = 0;
        write_le_at::<u32>(&mut out, &mut offset, self.signature)?;
        write_le_at::<u16>(&mut out, &mut offset, self.major_version)?;
        write_le_at::<u16>(&mut out, &mut offset, self.minor_version)?;
        write_le_at::<u32>(&mut out, &mut offset, self.reserved)?;
        write_le_at::<u32>(&mut out, &mut offset, self.length)?;

        out[offset..offset + self.version.len()].copy_from_slice(self.version.as_bytes());
        offset += self.length as usize;

        write_le_at::<u16>(&mut out, &mut offset, self.flags)?;
        write_le_at::<u16>(&mut out, &mut offset, stream_count)?;

        for header in &self.stream_headers {
            header.write(&mut out, &mut offset)?;
        }

        for (header, (_, data)) in self.stream_headers.iter().zip(streams) {
            let start = header.offset as usize;
            out[start..start + data.len()].copy_from_slice(data);
        }

        log::debug!(
            "Wrote metadata root '{}' with {} streams, {} bytes",
            self.version,
            stream_count,
            out.len()
        );

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crafted() {
        #[rustfmt::skip]
        let header_bytes = [
            0x42, 0x53, 0x4A, 0x42,
            0x01, 0x00,
            0x01, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x08, 0x00, 0x00, 0x00,
            b'H', b'E', b'L', b'L', b'O', 0x00, 0x00, 0x00,
            0x00, 0x00,
            0x01, 0x00,

            0x28, 0x00, 0x00, 0x00, // StreamHeader
            0x04, 0x00, 0x00, 0x00,
            0x23, 0x7E, 0x00, 0x00,

            0xAA, 0xBB, 0xCC, 0xDD,
        ];

        let root = Root::read(&header_bytes).unwrap();

        assert_eq!(root.signature, CIL_HEADER_MAGIC);
        assert_eq!(root.major_version, 1);
        assert_eq!(root.minor_version, 1);
        assert_eq!(root.length, 8);
        assert_eq!(root.version, "HELLO");
        assert_eq!(root.stream_headers.len(), 1);
        assert_eq!(root.stream_headers[0].offset, 0x28);
        assert_eq!(root.stream_headers[0].name, "#~");

        let tables = root.tables_stream().unwrap();
        assert_eq!(
            Root::stream_data(tables, &header_bytes).unwrap(),
            &[0xAA, 0xBB, 0xCC, 0xDD]
        );
    }

    #[test]
    fn invalid_signature() {
        let mut data = [0_u8; 40];
        data[0] = 0x42;
        assert!(Root::read(&data).is_err());
        assert!(Root::read(&data[..10]).is_err());
    }

    #[test]
    fn stream_out_of_bounds() {
        #[rustfmt::skip]
        let header_bytes = [
            0x42, 0x53, 0x4A, 0x42,
            0x01, 0x00,
            0x01, 0x00,
            0x00, 0x00, 0x00, 0x00,
            0x04, 0x00, 0x00, 0x00,
            b'v', b'4', 0x00, 0x00,
            0x00, 0x00,
            0x01, 0x00,

            0x20, 0x00, 0x00, 0x00,
            0x40, 0x00, 0x00, 0x00,
            0x23, 0x7E, 0x00, 0x00,
        ];

        assert!(matches!(
            Root::read(&header_bytes),
            Err(crate::Error::OutOfBounds)
        ));
    }

    #[test]
    fn write_aligns_streams() {
        let mut root = Root::new("v4.0.30319");
        let strings = [0x00, b'a', 0x00];
        let tables = [0x11; 8];

        let data = root
            .write(&[("#~", &tables[..]), ("#Strings", &strings[..])])
            .unwrap();

        // 20 + 12 (version) + 12 (#~) + 20 (#Strings)
        assert_eq!(root.stream_headers[0].offset, 64);
        assert_eq!(root.stream_headers[1].offset, 72);
        assert_eq!(root.stream_headers[1].size, 4);
        assert_eq!(data.len(), 76);

        let reread = Root::read(&data).unwrap();
        assert_eq!(reread, root);
        assert_eq!(reread.version, "v4.0.30319");

        let header = reread.stream("#Strings").unwrap();
        assert_eq!(
            Root::stream_data(header, &data).unwrap(),
            &[0x00, b'a', 0x00, 0x00]
        );
    }

    #[test]
    fn write_rejects_unknown_stream() {
        let mut root = Root::new("v4.0.30319");
        assert!(root.write(&[("#Bogus", &[0_u8; 4][..])]).is_err());
        assert!(root.write(&[]).is_err());
    }
}
