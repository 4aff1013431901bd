use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `FieldPtr` table holds an indirection into the `Field` table, emitted by unoptimized compilers. `TableId` = 0x03
pub struct FieldPtrRaw {
    /// an index into the `Field` table
    pub field: u32,
}

impl MetadataRow for FieldPtrRaw {
    const TABLE_ID: TableId = TableId::FieldPtr;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.field),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(FieldPtrRaw {
            field: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.field)?;
        Ok(())
    }
}
