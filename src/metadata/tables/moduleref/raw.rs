use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `ModuleRef` table holds references to other modules. `TableId` = 0x1A
pub struct ModuleRefRaw {
    /// an index into the String heap
    pub name: u32,
}

impl MetadataRow for ModuleRefRaw {
    const TABLE_ID: TableId = TableId::ModuleRef;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.name),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ModuleRefRaw {
            name: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.name)?;
        Ok(())
    }
}
