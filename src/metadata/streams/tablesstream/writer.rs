//! Serialization of a [`TablesStream`].

use strum::IntoEnumIterator;

use crate::{
    file::io::write_le_at,
    metadata::{
        streams::tablesstream::{
            SortedMaskPolicy, TablesStream, TablesStreamFlags, COMPILER_SORTED_MASK, HEADER_SIZE,
        },
        tables::{TableId, TableLayout},
    },
    Result,
};

impl TablesStream {
    /// Bit set for every table with at least one row
    #[must_use]
    pub fn valid_mask(&self) -> u64 {
        self.present_tables()
            .fold(0, |mask, table| mask | table.table_id().mask_bit())
    }

    /// The sorted mask a write would produce, according to [`SortedMaskPolicy`]
    ///
    /// # Errors
    /// Returns an error if a table has to be decoded to check its order and fails to
    pub fn sorted_mask(&self) -> Result<u64> {
        match self.options.sorted_mask {
            SortedMaskPolicy::Preserve => Ok(self.sorted),
            SortedMaskPolicy::CompilerDefault => Ok(COMPILER_SORTED_MASK),
            SortedMaskPolicy::Compute => self.compute_sorted_mask(),
        }
    }

    fn compute_sorted_mask(&self) -> Result<u64> {
        let has_pdb = self.present_tables().any(|table| table.table_id().is_pdb());

        let mut mask = 0;
        for table in TableId::iter() {
            if table.sort_key().is_none() || (table.is_pdb() && !has_pdb) {
                continue;
            }

            let data = self.table_data(table);
            if data.is_sorted_by_key()? || data.is_empty() {
                mask |= table.mask_bit();
            } else if self.sorted & table.mask_bit() != 0 {
                log::warn!("{:?} is claimed as sorted but its rows are not", table);
            }
        }

        Ok(mask)
    }

    /// Flags written to the header
    fn write_flags(&self) -> TablesStreamFlags {
        let mut flags = self.flags;
        flags.set(TablesStreamFlags::LARGE_STRINGS, self.info.is_large_str());
        flags.set(TablesStreamFlags::LARGE_GUID, self.info.is_large_guid());
        flags.set(TablesStreamFlags::LARGE_BLOB, self.info.is_large_blob());
        flags.set(TablesStreamFlags::EXTRA_DATA, self.extra_data.is_some());
        flags
    }

    /// Size of the serialized stream in bytes, padded to 4 bytes.
    ///
    /// Column widths are resolved from the current content, so the result is exact even if
    /// [`TablesStream::sync_layouts`] has not run since the last change.
    #[must_use]
    pub fn physical_size(&self) -> u64 {
        let info = self.resolve_info();

        let mut size = HEADER_SIZE as u64;
        if self.extra_data.is_some() {
            size += 4;
        }

        for table in self.present_tables() {
            let layout = TableLayout::resolve(table.table_id(), &info);
            size += 4 + u64::from(table.len()) * u64::from(layout.row_size());
        }

        (size + 4).next_multiple_of(4)
    }

    /// Serialize the stream.
    ///
    /// Synchronizes all layouts first. Tables that were neither modified nor resized are
    /// copied from their original bytes if [`crate::metadata::streams::TablesStreamOptions`]
    /// allow it.
    ///
    /// # Errors
    /// Returns an error if a table fails to decode, a value does not fit its column, or the
    /// output does not match [`TablesStream::physical_size`]
    pub fn write(&mut self) -> Result<Vec<u8>> {
        self.sync_layouts();

        let valid = self.valid_mask();
        let sorted = self.sorted_mask()?;
        let size = usize::try_from(self.physical_size())
            .map_err(|_| malformed_error!("Tables stream too large"))?;

        let mut data = vec![0_u8; size];
        let mut offset = 0;

        write_le_at::<u32>(&mut data, &mut offset, self.reserved)?;
        write_le_at::<u8>(&mut data, &mut offset, self.major_version)?;
        write_le_at::<u8>(&mut data, &mut offset, self.minor_version)?;
        write_le_at::<u8>(&mut data, &mut offset, self.write_flags().bits())?;
        write_le_at::<u8>(&mut data, &mut offset, self.log2_largest_rid)?;
        write_le_at::<u64>(&mut data, &mut offset, valid)?;
        write_le_at::<u64>(&mut data, &mut offset, sorted)?;

        for table in self.present_tables() {
            write_le_at::<u32>(&mut data, &mut offset, table.len())?;
        }

        if let Some(extra_data) = self.extra_data {
            write_le_at::<u32>(&mut data, &mut offset, extra_data)?;
        }

        for table in self.present_tables() {
            table.write(&mut data, &mut offset, self.options.copy_unmodified)?;
        }

        write_le_at::<u32>(&mut data, &mut offset, 0)?;
        offset = offset.next_multiple_of(4);

        if offset != size {
            return Err(malformed_error!(
                "Tables stream wrote {} bytes, expected {}",
                offset,
                size
            ));
        }

        log::debug!(
            "Wrote tables stream of {} bytes, valid {:#018x}, sorted {:#018x}",
            size,
            valid,
            sorted
        );

        Ok(data)
    }
}
