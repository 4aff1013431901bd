use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `MethodPtr` table holds an indirection into the `MethodDef` table, emitted by unoptimized compilers. `TableId` = 0x05
pub struct MethodPtrRaw {
    /// an index into the `MethodDef` table
    pub method: u32,
}

impl MetadataRow for MethodPtrRaw {
    const TABLE_ID: TableId = TableId::MethodPtr;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.method),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(MethodPtrRaw {
            method: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.method)?;
        Ok(())
    }
}
