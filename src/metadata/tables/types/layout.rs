//! Column and table layouts.
//!
//! The byte layout of a row is data dependent: every index column is 2 or 4 bytes wide
//! depending on the row counts of the referenced tables and the size of the heaps. A
//! [`TableLayout`] captures the resolved widths for one table of one stream. Rows read and write
//! themselves column by column through [`RowReader`] and [`RowWriter`], which pick the width of
//! each column from the layout.

use crate::{
    file::io::{read_le_at, write_le_at},
    metadata::tables::{CodedIndex, CodedIndexType, TableId, TableInfo},
    Result,
};

/// Width of an index column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexSize {
    /// 2 byte index
    Short = 2,
    /// 4 byte index
    Long = 4,
}

impl IndexSize {
    /// `Long` if `is_large` is set
    #[must_use]
    pub fn from_large(is_large: bool) -> IndexSize {
        if is_large {
            IndexSize::Long
        } else {
            IndexSize::Short
        }
    }

    /// Width in bytes
    #[must_use]
    pub fn bytes(&self) -> u8 {
        *self as u8
    }

    /// True for 4 byte indices
    #[must_use]
    pub fn is_large(&self) -> bool {
        *self == IndexSize::Long
    }
}

/// The kind of value stored in a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Row id of the given table
    Table(TableId),
    /// Coded index of the given kind
    Coded(CodedIndexType),
    /// Offset into the `#Strings` heap
    String,
    /// Offset into the `#Blob` heap
    Blob,
    /// 1-based index into the `#GUID` heap
    Guid,
    /// Fixed 1 byte value
    Byte,
    /// Fixed 2 byte value
    UInt16,
    /// Fixed 4 byte value
    UInt32,
}

impl ColumnType {
    /// True for columns whose width depends on table or heap sizes
    #[must_use]
    pub fn is_index(&self) -> bool {
        !matches!(self, ColumnType::Byte | ColumnType::UInt16 | ColumnType::UInt32)
    }
}

/// A column with its resolved width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Column name, only used for diagnostics
    pub name: &'static str,
    /// What the column stores
    pub column_type: ColumnType,
    /// Width in bytes (1, 2 or 4)
    pub size: u8,
}

impl ColumnLayout {
    /// Create a new column layout
    #[must_use]
    pub fn new(name: &'static str, column_type: ColumnType, size: u8) -> ColumnLayout {
        ColumnLayout {
            name,
            column_type,
            size,
        }
    }

    /// True if `other` describes the same column, ignoring the width
    #[must_use]
    pub fn same_shape(&self, other: &ColumnLayout) -> bool {
        self.name == other.name && self.column_type == other.column_type
    }
}

/// The resolved layout of one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLayout {
    table: TableId,
    columns: Vec<ColumnLayout>,
    row_size: u32,
}

impl TableLayout {
    /// Create a layout from explicit columns
    #[must_use]
    pub fn new(table: TableId, columns: Vec<ColumnLayout>) -> TableLayout {
        let row_size = columns.iter().map(|column| u32::from(column.size)).sum();
        TableLayout {
            table,
            columns,
            row_size,
        }
    }

    /// Resolve the layout of `table` against the row counts and heap flags in `info`
    #[must_use]
    pub fn resolve(table: TableId, info: &TableInfo) -> TableLayout {
        let columns = table
            .schema()
            .iter()
            .map(|(name, column_type)| {
                ColumnLayout::new(name, *column_type, info.column_bytes(*column_type))
            })
            .collect();

        TableLayout::new(table, columns)
    }

    /// The table this layout belongs to
    #[must_use]
    pub fn table_id(&self) -> TableId {
        self.table
    }

    /// All columns in row order
    #[must_use]
    pub fn columns(&self) -> &[ColumnLayout] {
        &self.columns
    }

    /// The column at `index`
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&ColumnLayout> {
        self.columns.get(index)
    }

    /// Number of columns
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Size of a single row in bytes
    #[must_use]
    pub fn row_size(&self) -> u32 {
        self.row_size
    }

    /// Byte offset of column `index` inside a row
    #[must_use]
    pub fn column_offset(&self, index: usize) -> usize {
        self.columns
            .iter()
            .take(index)
            .map(|column| usize::from(column.size))
            .sum()
    }

    /// True if `other` has the same columns, possibly with different widths
    #[must_use]
    pub fn same_shape(&self, other: &TableLayout) -> bool {
        self.table == other.table
            && self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|(ours, theirs)| ours.same_shape(theirs))
    }
}

/// Reads the columns of one row in order.
pub struct RowReader<'a> {
    data: &'a [u8],
    offset: &'a mut usize,
    layout: &'a TableLayout,
    column: usize,
}

impl<'a> RowReader<'a> {
    /// Create a reader for the row starting at `offset`
    pub fn new(data: &'a [u8], offset: &'a mut usize, layout: &'a TableLayout) -> Self {
        RowReader {
            data,
            offset,
            layout,
            column: 0,
        }
    }

    fn next_column(&mut self) -> Result<ColumnLayout> {
        let Some(column) = self.layout.column(self.column) else {
            return Err(malformed_error!(
                "{:?} has no column {}",
                self.layout.table_id(),
                self.column
            ));
        };
        self.column += 1;
        Ok(*column)
    }

    /// Read the next column, zero-extended to `u32`
    ///
    /// # Errors
    /// Returns an error if the row runs past the end of the data or the layout has no more
    /// columns.
    pub fn read_index(&mut self) -> Result<u32> {
        let column = self.next_column()?;
        match column.size {
            1 => Ok(u32::from(read_le_at::<u8>(self.data, self.offset)?)),
            2 => Ok(u32::from(read_le_at::<u16>(self.data, self.offset)?)),
            4 => read_le_at::<u32>(self.data, self.offset),
            other => Err(malformed_error!(
                "Column {} has invalid width {}",
                column.name,
                other
            )),
        }
    }

    /// Read the next column as `u32`
    ///
    /// # Errors
    /// See [`RowReader::read_index`].
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_index()
    }

    /// Read the next column as `u16`
    ///
    /// # Errors
    /// See [`RowReader::read_index`]; also fails if the column holds a wider value.
    pub fn read_u16(&mut self) -> Result<u16> {
        let value = self.read_index()?;
        u16::try_from(value).map_err(|_| malformed_error!("Value {:#x} exceeds u16", value))
    }

    /// Read the next column as `u8`
    ///
    /// # Errors
    /// See [`RowReader::read_index`]; also fails if the column holds a wider value.
    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.read_index()?;
        u8::try_from(value).map_err(|_| malformed_error!("Value {:#x} exceeds u8", value))
    }

    /// Read the next column as coded index of kind `ci_type`
    ///
    /// # Errors
    /// See [`RowReader::read_index`].
    pub fn read_coded(&mut self, ci_type: CodedIndexType) -> Result<CodedIndex> {
        let value = self.read_index()?;
        Ok(CodedIndex::from_value(value, ci_type))
    }
}

/// Writes the columns of one row in order.
pub struct RowWriter<'a> {
    data: &'a mut [u8],
    offset: &'a mut usize,
    layout: &'a TableLayout,
    column: usize,
}

impl<'a> RowWriter<'a> {
    /// Create a writer for the row starting at `offset`
    pub fn new(data: &'a mut [u8], offset: &'a mut usize, layout: &'a TableLayout) -> Self {
        RowWriter {
            data,
            offset,
            layout,
            column: 0,
        }
    }

    /// Write the next column, narrowing `value` to the column width
    ///
    /// # Errors
    /// Returns an error if the value does not fit the column, the buffer is too small or
    /// the layout has no more columns.
    pub fn write_index(&mut self, value: u32) -> Result<()> {
        let Some(column) = self.layout.column(self.column).copied() else {
            return Err(malformed_error!(
                "{:?} has no column {}",
                self.layout.table_id(),
                self.column
            ));
        };
        self.column += 1;

        match column.size {
            1 => {
                let byte = u8::try_from(value).map_err(|_| {
                    malformed_error!("Value {:#x} does not fit column {}", value, column.name)
                })?;
                write_le_at(self.data, self.offset, byte)
            }
            2 => {
                let short = u16::try_from(value).map_err(|_| {
                    malformed_error!("Value {:#x} does not fit column {}", value, column.name)
                })?;
                write_le_at(self.data, self.offset, short)
            }
            4 => write_le_at(self.data, self.offset, value),
            other => Err(malformed_error!(
                "Column {} has invalid width {}",
                column.name,
                other
            )),
        }
    }

    /// Write the next column from a `u32`
    ///
    /// # Errors
    /// See [`RowWriter::write_index`].
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_index(value)
    }

    /// Write the next column from a `u16`
    ///
    /// # Errors
    /// See [`RowWriter::write_index`].
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_index(u32::from(value))
    }

    /// Write the next column from a `u8`
    ///
    /// # Errors
    /// See [`RowWriter::write_index`].
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_index(u32::from(value))
    }

    /// Encode and write a coded index
    ///
    /// # Errors
    /// See [`RowWriter::write_index`]; also fails if the index table is not part of its kind.
    pub fn write_coded(&mut self, value: &CodedIndex) -> Result<()> {
        self.write_index(value.value()?)
    }
}
