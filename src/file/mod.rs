//! PE container access.
//!
//! The metadata of a .NET executable lives inside a section of a PE image, referenced by the
//! CLR runtime header (the COR20 header) of data directory 14. This module opens the image,
//! either from memory or memory-mapped from disk, parses the PE headers with `goblin` and
//! translates RVAs to file offsets. It does not interpret anything beyond the CLR header.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dotmeta::file::File;
//! use std::path::Path;
//!
//! let file = File::from_file(Path::new("tests/samples/crafted.dll"))?;
//! let metadata = file.metadata()?;
//! println!("Metadata has {} bytes", metadata.len());
//! # Ok::<(), dotmeta::Error>(())
//! ```

pub mod io;

mod memory;
mod physical;

use std::path::Path;

use goblin::pe::{section_table::SectionTable, PE};
use ouroboros::self_referencing;

use crate::{
    file::io::read_le,
    Error::{Empty, GoblinErr},
    Result,
};
use memory::Memory;
use physical::Physical;

/// Size of the CLR runtime header
const COR20_HEADER_SIZE: usize = 72;

/// Byte storage a [`File`] is parsed from
pub trait Backend: Send + Sync {
    /// `len` bytes starting at `offset`
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range is not inside the data
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]>;

    /// All bytes
    fn data(&self) -> &[u8];

    /// Number of bytes
    fn len(&self) -> usize;
}

/// Resolves relative virtual addresses to the data they point at.
///
/// Columns such as `MethodDef.RVA` and `FieldRVA.RVA` store addresses of the loaded image rather
/// than offsets into the metadata. Anything that maps an image can resolve them.
pub trait RvaResolver {
    /// File offset of `rva`
    ///
    /// # Errors
    /// Returns an error if `rva` is not covered by any section
    fn rva_to_offset(&self, rva: usize) -> Result<usize>;

    /// `len` bytes at `rva`
    ///
    /// # Errors
    /// Returns an error if `rva` is not covered by any section or the data is too short
    fn data_at_rva(&self, rva: usize, len: usize) -> Result<&[u8]>;
}

/// A parsed PE image.
///
/// Owns its backend and the `goblin` view that borrows from it.
#[self_referencing]
pub struct File {
    data: Box<dyn Backend>,
    #[borrows(data)]
    #[not_covariant]
    pe: PE<'this>,
}

impl File {
    /// Memory-map and parse the file at `file`
    ///
    /// # Errors
    /// Returns an error if the file can not be mapped, is empty, is not a PE image or has no
    /// CLR runtime header
    pub fn from_file(file: &Path) -> Result<File> {
        let input = Physical::new(file)?;

        Self::load(input)
    }

    /// Parse an image held in memory
    ///
    /// # Errors
    /// Returns an error if `data` is empty, not a PE image or has no CLR runtime header
    pub fn from_mem(data: Vec<u8>) -> Result<File> {
        let input = Memory::from(data);

        Self::load(input)
    }

    fn load<T: Backend + 'static>(data: T) -> Result<File> {
        if data.len() == 0 {
            return Err(Empty);
        }

        let data = Box::new(data);

        File::try_new(data, |data| {
            let pe = PE::parse(data.data()).map_err(GoblinErr)?;
            let Some(optional_header) = pe.header.optional_header else {
                return Err(malformed_error!("File does not have an OptionalHeader"));
            };

            if optional_header
                .data_directories
                .get_clr_runtime_header()
                .is_none()
            {
                return Err(malformed_error!(
                    "File does not have a CLR runtime header directory"
                ));
            }

            Ok(pe)
        })
    }

    /// Size of the image in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data().len()
    }

    /// True if the image has no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All bytes of the image
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.with_data(|data| data.data())
    }

    /// `len` bytes starting at file offset `offset`
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range is not inside the image
    pub fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        self.with_data(|data| data.data_slice(offset, len))
    }

    /// The section headers
    pub fn sections(&self) -> impl Iterator<Item = &SectionTable> {
        self.with_pe(|pe| pe.sections.iter())
    }

    /// RVA and size of the CLR runtime header
    ///
    /// # Errors
    /// Returns an error if the image has no CLR runtime header
    pub fn clr(&self) -> Result<(usize, usize)> {
        self.with_pe(|pe| {
            pe.header
                .optional_header
                .and_then(|optional_header| {
                    optional_header
                        .data_directories
                        .get_clr_runtime_header()
                        .as_ref()
                        .map(|clr| (clr.virtual_address as usize, clr.size as usize))
                })
                .ok_or_else(|| malformed_error!("File does not have a CLR runtime header"))
        })
    }

    /// RVA and size of the metadata, read from the CLR runtime header
    ///
    /// # Errors
    /// Returns an error if the CLR runtime header is missing or truncated
    pub fn metadata_directory(&self) -> Result<(usize, usize)> {
        let (clr_rva, clr_size) = self.clr()?;
        if clr_size < COR20_HEADER_SIZE {
            return Err(malformed_error!(
                "CLR runtime header is too small - {} bytes",
                clr_size
            ));
        }

        let header = self.data_at_rva(clr_rva, COR20_HEADER_SIZE)?;
        let metadata_rva = read_le::<u32>(&header[8..])?;
        let metadata_size = read_le::<u32>(&header[12..])?;
        if metadata_rva == 0 || metadata_size == 0 {
            return Err(malformed_error!("CLR runtime header has no metadata"));
        }

        Ok((metadata_rva as usize, metadata_size as usize))
    }

    /// The metadata, starting with the `BSJB` root
    ///
    /// # Errors
    /// Returns an error if the metadata directory is missing or points outside of the image
    pub fn metadata(&self) -> Result<&[u8]> {
        let (rva, size) = self.metadata_directory()?;
        self.data_at_rva(rva, size)
    }

    /// Translate an RVA to a file offset
    ///
    /// # Errors
    /// Returns an error if no section covers `rva`
    pub fn rva_to_offset(&self, rva: usize) -> Result<usize> {
        let rva_u32 =
            u32::try_from(rva).map_err(|_| malformed_error!("RVA too large - {}", rva))?;

        self.with_pe(|pe| {
            for section in &pe.sections {
                let Some(section_max) = section.virtual_address.checked_add(section.virtual_size)
                else {
                    return Err(malformed_error!(
                        "Section malformed, causing integer overflow - {} + {}",
                        section.virtual_address,
                        section.virtual_size
                    ));
                };

                if section.virtual_address <= rva_u32 && section_max > rva_u32 {
                    return Ok((rva - section.virtual_address as usize)
                        + section.pointer_to_raw_data as usize);
                }
            }

            Err(malformed_error!(
                "RVA could not be converted to offset - {:#x}",
                rva
            ))
        })
    }

    /// Translate a file offset to an RVA
    ///
    /// # Errors
    /// Returns an error if no section covers `offset`
    pub fn offset_to_rva(&self, offset: usize) -> Result<usize> {
        let offset_u32 =
            u32::try_from(offset).map_err(|_| malformed_error!("Offset too large - {}", offset))?;

        self.with_pe(|pe| {
            for section in &pe.sections {
                let Some(section_max) = section
                    .pointer_to_raw_data
                    .checked_add(section.size_of_raw_data)
                else {
                    return Err(malformed_error!(
                        "Section malformed, causing integer overflow - {} + {}",
                        section.pointer_to_raw_data,
                        section.size_of_raw_data
                    ));
                };

                if section.pointer_to_raw_data <= offset_u32 && section_max > offset_u32 {
                    return Ok((offset - section.pointer_to_raw_data as usize)
                        + section.virtual_address as usize);
                }
            }

            Err(malformed_error!(
                "Offset could not be converted to RVA - {:#x}",
                offset
            ))
        })
    }

    /// `len` bytes at `rva`
    ///
    /// # Errors
    /// Returns an error if `rva` is not mapped or the data is too short
    pub fn data_at_rva(&self, rva: usize, len: usize) -> Result<&[u8]> {
        let offset = self.rva_to_offset(rva)?;
        self.data_slice(offset, len)
    }
}

impl RvaResolver for File {
    fn rva_to_offset(&self, rva: usize) -> Result<usize> {
        File::rva_to_offset(self, rva)
    }

    fn data_at_rva(&self, rva: usize, len: usize) -> Result<&[u8]> {
        File::data_at_rva(self, rva, len)
    }
}
