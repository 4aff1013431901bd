use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `TypeSpec` table holds type specifications. `TableId` = 0x1B
pub struct TypeSpecRaw {
    /// an index into the Blob heap
    pub signature: u32,
}

impl MetadataRow for TypeSpecRaw {
    const TABLE_ID: TableId = TableId::TypeSpec;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.signature),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(TypeSpecRaw {
            signature: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.signature)?;
        Ok(())
    }
}
