use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `LocalVariable` table holds the local variables of scopes. `TableId` = 0x33
pub struct LocalVariableRaw {
    /// a 2-byte bitmask of type `LocalVariableAttributes`
    pub attributes: u16,
    /// a 2-byte slot index in the local signature
    pub index: u16,
    /// an index into the String heap
    pub name: u32,
}

impl MetadataRow for LocalVariableRaw {
    const TABLE_ID: TableId = TableId::LocalVariable;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.attributes)),
            1 => Some(u32::from(self.index)),
            2 => Some(self.name),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(LocalVariableRaw {
            attributes: reader.read_u16()?,
            index: reader.read_u16()?,
            name: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.attributes)?;
        writer.write_u16(self.index)?;
        writer.write_index(self.name)?;
        Ok(())
    }
}
