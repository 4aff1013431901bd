//! The metadata tables stream (`#~`, `#-` or `#Schema`).
//!
//! The stream starts with a fixed header, followed by one row count per present table, an
//! optional extra value and the row data of all present tables in table number order. Column
//! widths depend on the row counts and the heap sizes, so the byte layout of every table is
//! resolved from the header before any row is read.
//!
//! Tables are not decoded while the stream is parsed. Each table keeps a reference to its byte
//! span and decodes its rows on first access, see [`crate::metadata::tables::MetadataTable`].
//! A table whose span runs past the end of the stream reports the error at that point.
//!
//! # Reference
//! * [ECMA-335 II.24.2.6](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)

mod options;
mod ranges;
mod writer;

pub use options::*;

use std::sync::Arc;

use strum::{EnumCount, IntoEnumIterator};

use crate::{
    file::io::read_le_at,
    metadata::{
        streams::{Blob, Guid, Strings},
        tables::{
            CodedIndexType, IndexEncoder, MetadataTable, TableAccess, TableData, TableId,
            TableInfo, TableInfoRef, TableLayout,
        },
        token::Token,
    },
    Error::{NotWritable, OutOfBounds, TableMissing},
    Result,
};

/// Size of the fixed part of the header
const HEADER_SIZE: usize = 24;

/// Position of a table in [`TablesStream::tables`]. Table numbers 0x2D - 0x2F are unused.
fn slot(table: TableId) -> usize {
    let id = table as usize;
    if id < 0x30 {
        id
    } else {
        id - 3
    }
}

/// The metadata tables stream
#[derive(Clone, Debug)]
pub struct TablesStream {
    name: String,
    reserved: u32,
    major_version: u8,
    minor_version: u8,
    flags: TablesStreamFlags,
    log2_largest_rid: u8,
    sorted: u64,
    extra_data: Option<u32>,
    info: TableInfoRef,
    tables: Vec<TableData>,
    options: TablesStreamOptions,
    read_only: bool,
}

impl TablesStream {
    /// An empty `#~` stream, version 2.0
    #[must_use]
    pub fn new() -> TablesStream {
        Self::empty(TablesStreamOptions::default())
    }

    /// An empty `#~` stream with the given options
    #[must_use]
    pub fn empty(options: TablesStreamOptions) -> TablesStream {
        let info = Arc::new(TableInfo::new(
            &[],
            false,
            false,
            false,
            options.force_large_columns,
        ));
        let tables = TableId::iter()
            .map(|table| TableData::new(TableLayout::resolve(table, &info)))
            .collect();

        TablesStream {
            name: "#~".to_string(),
            reserved: 0,
            major_version: 2,
            minor_version: 0,
            flags: TablesStreamFlags::empty(),
            log2_largest_rid: 1,
            sorted: 0,
            extra_data: None,
            info,
            tables,
            options,
            read_only: false,
        }
    }

    /// Parse a tables stream with default options
    ///
    /// ## Arguments
    /// * 'data' - The bytes of the stream
    ///
    /// # Errors
    /// Returns an error if the header or the row counts are truncated, or a table that is not
    /// known is marked as present
    pub fn from(data: &[u8]) -> Result<TablesStream> {
        Self::with_options(data, TablesStreamOptions::default())
    }

    /// Parse a tables stream
    ///
    /// ## Arguments
    /// * 'data'    - The bytes of the stream
    /// * 'options' - Options for reading and later writing the stream
    ///
    /// # Errors
    /// Returns an error if the header or the row counts are truncated, or a table that is not
    /// known is marked as present
    pub fn with_options(data: &[u8], options: TablesStreamOptions) -> Result<TablesStream> {
        if data.len() < HEADER_SIZE {
            return Err(OutOfBounds);
        }

        let mut offset = 0;
        let reserved = read_le_at::<u32>(data, &mut offset)?;
        let major_version = read_le_at::<u8>(data, &mut offset)?;
        let minor_version = read_le_at::<u8>(data, &mut offset)?;
        let flags = TablesStreamFlags::from_bits_retain(read_le_at::<u8>(data, &mut offset)?);
        let log2_largest_rid = read_le_at::<u8>(data, &mut offset)?;
        let valid = read_le_at::<u64>(data, &mut offset)?;
        let sorted = read_le_at::<u64>(data, &mut offset)?;

        let known = TableId::iter().fold(0_u64, |mask, table| mask | table.mask_bit());
        if valid & !known != 0 {
            return Err(malformed_error!(
                "Valid mask {:#018x} marks unknown tables {:#018x}",
                valid,
                valid & !known
            ));
        }

        let mut row_counts = Vec::with_capacity(valid.count_ones() as usize);
        for table in TableId::iter() {
            if valid & table.mask_bit() == 0 {
                continue;
            }

            let rows = read_le_at::<u32>(data, &mut offset)?;
            if rows == 0 {
                log::warn!("{:?} is marked as present but has no rows", table);
            }
            row_counts.push((table, rows));
        }

        let extra_data = if flags.contains(TablesStreamFlags::EXTRA_DATA) {
            Some(read_le_at::<u32>(data, &mut offset)?)
        } else {
            None
        };

        let info = Arc::new(TableInfo::new(
            &row_counts,
            flags.contains(TablesStreamFlags::LARGE_STRINGS),
            flags.contains(TablesStreamFlags::LARGE_GUID),
            flags.contains(TablesStreamFlags::LARGE_BLOB),
            options.force_large_columns,
        ));

        log::debug!(
            "Tables stream v{}.{}, flags {:#04x}, valid {:#018x}, sorted {:#018x}, {} tables",
            major_version,
            minor_version,
            flags.bits(),
            valid,
            sorted,
            row_counts.len()
        );

        let shared: Arc<[u8]> = Arc::from(data);
        let mut tables = Vec::with_capacity(TableId::COUNT);
        for table in TableId::iter() {
            let layout = TableLayout::resolve(table, &info);
            let rows = info.rows(table);
            if rows == 0 {
                tables.push(TableData::new(layout));
                continue;
            }

            let size = u64::from(rows) * u64::from(layout.row_size());
            tables.push(TableData::serialized(shared.clone(), offset, rows, layout));
            offset = offset.saturating_add(usize::try_from(size).unwrap_or(usize::MAX));
        }

        if offset > data.len() {
            log::warn!(
                "Tables stream holds {} bytes, the row counts require {}",
                data.len(),
                offset
            );
        }

        Ok(TablesStream {
            name: "#~".to_string(),
            reserved,
            major_version,
            minor_version,
            flags,
            log2_largest_rid,
            sorted,
            extra_data,
            info,
            tables,
            options,
            read_only: false,
        })
    }

    /// Name of the stream in the metadata root
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the stream, e.g. to `#-` for an uncompressed stream
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// The reserved first field of the header
    #[must_use]
    pub fn reserved(&self) -> u32 {
        self.reserved
    }

    /// Major version of the table schema
    #[must_use]
    pub fn major_version(&self) -> u8 {
        self.major_version
    }

    /// Minor version of the table schema
    #[must_use]
    pub fn minor_version(&self) -> u8 {
        self.minor_version
    }

    /// The `HeapSizes` flags
    #[must_use]
    pub fn flags(&self) -> TablesStreamFlags {
        self.flags
    }

    /// The `Log2LargestRid` field of the header
    #[must_use]
    pub fn log2_largest_rid(&self) -> u8 {
        self.log2_largest_rid
    }

    /// The value following the row counts, if the stream has one
    #[must_use]
    pub fn extra_data(&self) -> Option<u32> {
        self.extra_data
    }

    /// Set or remove the value following the row counts
    pub fn set_extra_data(&mut self, extra_data: Option<u32>) {
        self.extra_data = extra_data;
        self.flags
            .set(TablesStreamFlags::EXTRA_DATA, extra_data.is_some());
    }

    /// The sorted mask of the header that was read
    #[must_use]
    pub fn read_sorted_mask(&self) -> u64 {
        self.sorted
    }

    /// Row counts and index widths the current layouts were resolved from
    #[must_use]
    pub fn info(&self) -> &TableInfo {
        &self.info
    }

    /// The options of this stream
    #[must_use]
    pub fn options(&self) -> &TablesStreamOptions {
        &self.options
    }

    /// Replace the options. Column widths follow on the next layout synchronization.
    pub fn set_options(&mut self, options: TablesStreamOptions) {
        self.options = options;
    }

    /// Reject any further mutable table access
    pub fn lock(&mut self) {
        self.read_only = true;
    }

    /// True once [`TablesStream::lock`] was called
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Number of rows of `table`
    #[must_use]
    pub fn row_count(&self, table: TableId) -> u32 {
        self.tables[slot(table)].len()
    }

    /// All tables with at least one row, in table number order
    pub fn present_tables(&self) -> impl Iterator<Item = &TableData> + '_ {
        self.tables.iter().filter(|table| !table.is_empty())
    }

    /// The table `table`, of any row type
    #[must_use]
    pub fn table_data(&self, table: TableId) -> &TableData {
        &self.tables[slot(table)]
    }

    /// Mutable access to the table `table`, of any row type
    ///
    /// # Errors
    /// Returns [`crate::Error::NotWritable`] if the stream is locked
    pub fn table_data_mut(&mut self, table: TableId) -> Result<&mut TableData> {
        if self.read_only {
            return Err(NotWritable(table));
        }

        Ok(&mut self.tables[slot(table)])
    }

    /// The table holding rows of type `R`
    ///
    /// # Errors
    /// Returns [`crate::Error::TableMissing`] if the stream holds no table of that type
    pub fn table<R: TableAccess>(&self) -> Result<&MetadataTable<R>> {
        R::table_of(&self.tables[slot(R::TABLE_ID)]).ok_or(TableMissing(R::TABLE_ID))
    }

    /// Mutable access to the table holding rows of type `R`
    ///
    /// # Errors
    /// Returns [`crate::Error::NotWritable`] if the stream is locked
    pub fn table_mut<R: TableAccess>(&mut self) -> Result<&mut MetadataTable<R>> {
        if self.read_only {
            return Err(NotWritable(R::TABLE_ID));
        }

        R::table_of_mut(&mut self.tables[slot(R::TABLE_ID)]).ok_or(TableMissing(R::TABLE_ID))
    }

    /// A copy of row `rid` of the table of `R`, `None` if there is no such row
    ///
    /// # Errors
    /// Returns an error if the table fails to decode
    pub fn row<R: TableAccess>(&self, rid: u32) -> Result<Option<R>> {
        Ok(self.table::<R>()?.get(rid)?.cloned())
    }

    /// The row `token` refers to, `None` if the token is null, points into another table or
    /// past the last row
    ///
    /// # Errors
    /// Returns an error if the table fails to decode
    pub fn try_row<R: TableAccess>(&self, token: Token) -> Result<Option<R>> {
        if token.table_id() != Some(R::TABLE_ID) {
            return Ok(None);
        }

        self.row::<R>(token.row())
    }

    /// Row counts and index widths as they would be resolved from the current content
    fn resolve_info(&self) -> TableInfo {
        let row_counts: Vec<(TableId, u32)> = TableId::iter()
            .map(|table| (table, self.row_count(table)))
            .filter(|(_, rows)| *rows > 0)
            .collect();

        TableInfo::new(
            &row_counts,
            self.flags.contains(TablesStreamFlags::LARGE_STRINGS),
            self.flags.contains(TablesStreamFlags::LARGE_GUID),
            self.flags.contains(TablesStreamFlags::LARGE_BLOB),
            self.options.force_large_columns,
        )
    }

    /// An encoder for coded indices of `coded_index_type`, sized for the current row counts
    #[must_use]
    pub fn index_encoder(&self, coded_index_type: CodedIndexType) -> IndexEncoder {
        IndexEncoder::new(coded_index_type, &self.resolve_info())
    }

    /// Derive the `HeapSizes` flags from the heaps the stream refers to
    pub fn set_heap_sizes(&mut self, strings: &Strings, guid: &Guid, blob: &Blob) {
        self.flags
            .set(TablesStreamFlags::LARGE_STRINGS, strings.is_large());
        self.flags.set(TablesStreamFlags::LARGE_GUID, guid.is_large());
        self.flags.set(TablesStreamFlags::LARGE_BLOB, blob.is_large());
    }

    /// Resolve the layout of every table from the current row counts and heap flags.
    ///
    /// Needs to run after rows were added or removed and before any offset is computed, as
    /// one table crossing 0xFFFF rows widens the columns of every table referring to it.
    /// [`TablesStream::write`] does this on its own.
    pub fn sync_layouts(&mut self) {
        let info = self.resolve_info();
        if info == *self.info {
            return;
        }

        let mut changed = 0;
        for table in &mut self.tables {
            let layout = TableLayout::resolve(table.table_id(), &info);
            if layout != *table.layout() {
                table.update_layout(layout);
                changed += 1;
            }
        }

        log::trace!("Layout synchronization changed {} table layouts", changed);
        self.info = Arc::new(info);
    }
}

impl Default for TablesStream {
    fn default() -> Self {
        TablesStream::new()
    }
}

impl PartialEq for TablesStream {
    /// Streams are equal if all tables hold equal rows
    fn eq(&self, other: &Self) -> bool {
        self.tables == other.tables
    }
}
