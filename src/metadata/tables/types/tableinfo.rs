use std::sync::Arc;

use strum::{EnumCount, IntoEnumIterator};

use crate::metadata::tables::{CodedIndexType, ColumnType, IndexSize, TableId};

/// Number of slots needed to index row information by table number
const TABLE_SLOTS: usize = TableId::CustomDebugInformation as usize + 1;

/// Holds information about the size that reference index fields have
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct TableRowInfo {
    /// The count of rows in this table
    pub rows: u32,
    /// Number of bits required to represent any valid row index
    pub bits: u8,
    /// If the count is > `u16::max`, the indexes of other tables into this table will be 4 bytes instead of 2
    pub is_large: bool,
}

impl TableRowInfo {
    /// Creates a new `TableRowInfo` instance with the given row count.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(rows: u32) -> Self {
        let bits = if rows == 0 {
            1
        } else {
            (32 - rows.leading_zeros()) as u8
        };

        Self {
            rows,
            bits,
            is_large: rows > u32::from(u16::MAX),
        }
    }
}

/// Row counts and heap index widths of one tables stream.
///
/// Every column width of every table is derived from this structure. It is rebuilt from the
/// current row counts whenever a stream synchronizes its layouts, so widths follow the data.
#[derive(Clone, Debug, PartialEq)]
pub struct TableInfo {
    rows: Vec<TableRowInfo>,
    coded_indexes: Vec<u8>,
    is_large_index_str: bool,
    is_large_index_guid: bool,
    is_large_index_blob: bool,
    force_large: bool,
}

/// Cheap-copy reference to a `TableInfo` structure
pub type TableInfoRef = Arc<TableInfo>;

impl Default for TableInfo {
    fn default() -> Self {
        TableInfo::new(&[], false, false, false, false)
    }
}

impl TableInfo {
    /// Build a new `TableInfo`
    ///
    /// ## Arguments
    /// * `row_counts`  - `(table, rows)` for every table that has rows
    /// * `large_str`   - `#Strings` indices are 4 bytes
    /// * `large_guid`  - `#GUID` indices are 4 bytes
    /// * `large_blob`  - `#Blob` indices are 4 bytes
    /// * `force_large` - every table and coded index is 4 bytes, regardless of row counts
    #[must_use]
    pub fn new(
        row_counts: &[(TableId, u32)],
        large_str: bool,
        large_guid: bool,
        large_blob: bool,
        force_large: bool,
    ) -> Self {
        let mut table_info = TableInfo {
            rows: vec![TableRowInfo::new(0); TABLE_SLOTS],
            coded_indexes: vec![0; CodedIndexType::COUNT],
            is_large_index_str: large_str,
            is_large_index_guid: large_guid,
            is_large_index_blob: large_blob,
            force_large,
        };

        for (table, rows) in row_counts {
            table_info.rows[*table as usize] = TableRowInfo::new(*rows);
        }

        table_info.calculate_coded_index_bits();
        table_info
    }

    #[cfg(test)]
    /// Special constructor for unit-tests
    ///
    /// ## Arguments
    /// * 'valid_tables'    - A slice of touples, which provides (table_id, row_count) of the valid tables
    /// * 'large_str'       - Specify if the #String heap indexes are 4 or 2 bytes
    /// * 'large_blob'      - Specify if the #Blob heap indexes are 4 or 2 bytes
    /// * 'large_guid'      - Specify if the #GUID heap indexes are 4 or 2 bytes
    pub fn new_test(
        valid_tables: &[(TableId, u32)],
        large_str: bool,
        large_blob: bool,
        large_guid: bool,
    ) -> Self {
        TableInfo::new(valid_tables, large_str, large_guid, large_blob, false)
    }

    /// Returns the metadata for a specific table.
    #[must_use]
    pub fn get(&self, table: TableId) -> &TableRowInfo {
        &self.rows[table as usize]
    }

    /// Row count of `table`
    #[must_use]
    pub fn rows(&self, table: TableId) -> u32 {
        self.rows[table as usize].rows
    }

    /// Returns true, if a requested table is larger than 2^16 rows and hence requires 4 bytes instead of 2 bytes
    #[must_use]
    pub fn is_large(&self, id: TableId) -> bool {
        self.force_large || self.rows[id as usize].is_large
    }

    /// Indicates the size of indexes referring into the '#String' heap. True means 4 bytes, False is 2 bytes
    #[must_use]
    pub fn is_large_str(&self) -> bool {
        self.force_large || self.is_large_index_str
    }

    /// Indicates the size of indexes referring into the '#Guid' heap. True means 4 bytes, False is 2 bytes
    #[must_use]
    pub fn is_large_guid(&self) -> bool {
        self.force_large || self.is_large_index_guid
    }

    /// Indicates the size of indexes referring into the '#Blob' heap. True means 4 bytes, False is 2 bytes
    #[must_use]
    pub fn is_large_blob(&self) -> bool {
        self.force_large || self.is_large_index_blob
    }

    /// True if every index column is forced to 4 bytes
    #[must_use]
    pub fn is_forced_large(&self) -> bool {
        self.force_large
    }

    /// Width of a direct index into `table`
    #[must_use]
    pub fn table_index_size(&self, table: TableId) -> IndexSize {
        IndexSize::from_large(self.is_large(table))
    }

    /// Number of bits a coded index of `coded_index_type` needs, tag included
    #[must_use]
    pub fn coded_index_bits(&self, coded_index_type: CodedIndexType) -> u8 {
        self.coded_indexes[coded_index_type as usize]
    }

    /// Width of a coded index of `coded_index_type`.
    ///
    /// `Long` as soon as one governed table has more than `0xFFFF >> tag_bits` rows.
    #[must_use]
    pub fn coded_index_size(&self, coded_index_type: CodedIndexType) -> IndexSize {
        IndexSize::from_large(self.force_large || self.coded_index_bits(coded_index_type) > 16)
    }

    /// Width in bytes of a column of `column_type`
    #[must_use]
    pub fn column_bytes(&self, column_type: ColumnType) -> u8 {
        match column_type {
            ColumnType::Table(table) => self.table_index_size(table).bytes(),
            ColumnType::Coded(ci_type) => self.coded_index_size(ci_type).bytes(),
            ColumnType::String => IndexSize::from_large(self.is_large_str()).bytes(),
            ColumnType::Guid => IndexSize::from_large(self.is_large_guid()).bytes(),
            ColumnType::Blob => IndexSize::from_large(self.is_large_blob()).bytes(),
            ColumnType::Byte => 1,
            ColumnType::UInt16 => 2,
            ColumnType::UInt32 => 4,
        }
    }

    /// Iterate `(table, rows)` for all tables with at least one row
    pub fn present(&self) -> impl Iterator<Item = (TableId, u32)> + '_ {
        TableId::iter()
            .map(|table| (table, self.rows(table)))
            .filter(|(_, rows)| *rows > 0)
    }

    fn calculate_coded_index_size(&self, coded_index_type: CodedIndexType) -> u8 {
        let max_bits = coded_index_type
            .tables()
            .iter()
            .map(|table| self.rows[*table as usize].bits)
            .max()
            .unwrap_or(1);

        max_bits + coded_index_type.tag_bits()
    }

    fn calculate_coded_index_bits(&mut self) {
        for coded_index in CodedIndexType::iter() {
            let size = self.calculate_coded_index_size(coded_index);
            self.coded_indexes[coded_index as usize] = size;
        }
    }
}
