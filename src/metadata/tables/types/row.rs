use std::fmt::Debug;

use crate::{
    metadata::tables::{RowReader, RowWriter, TableId},
    Result,
};

/// A fixed-shape row of one metadata table.
///
/// Rows are plain values. Equality is structural over all columns, and a row does not know
/// its own row id; the position inside its [`crate::metadata::tables::MetadataTable`] does.
/// Columns are read and written in schema order, with widths taken from the table layout of the
/// stream the row belongs to.
pub trait MetadataRow: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// The table this row type belongs to
    const TABLE_ID: TableId;

    /// The value of column `index`, zero-extended to `u32`.
    ///
    /// Coded index columns return their encoded value. Returns `None` for an index past the
    /// last column.
    fn column(&self, index: usize) -> Option<u32>;

    /// Read one row, column by column.
    ///
    /// # Errors
    /// Returns an error if the data runs out before the row is complete.
    fn row_read(reader: &mut RowReader<'_>) -> Result<Self>;

    /// Write this row, column by column.
    ///
    /// # Errors
    /// Returns an error if a value does not fit the column width of the layout, or the
    /// buffer is too small.
    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()>;

    /// Number of columns of this row type
    #[must_use]
    fn column_count() -> usize {
        Self::TABLE_ID.schema().len()
    }

    /// The values of all columns in order
    #[must_use]
    fn columns(&self) -> Vec<u32> {
        (0..Self::column_count())
            .map(|index| self.column(index).unwrap_or(0))
            .collect()
    }
}
