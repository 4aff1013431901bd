use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `Field` table holds the fields of all types of this module. `TableId` = 0x04
pub struct FieldRaw {
    /// a 2-byte bitmask of type `FieldAttributes`, §II.23.1.5
    pub flags: u16,
    /// an index into the String heap
    pub name: u32,
    /// an index into the Blob heap
    pub signature: u32,
}

impl MetadataRow for FieldRaw {
    const TABLE_ID: TableId = TableId::Field;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.flags)),
            1 => Some(self.name),
            2 => Some(self.signature),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(FieldRaw {
            flags: reader.read_u16()?,
            name: reader.read_index()?,
            signature: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.flags)?;
        writer.write_index(self.name)?;
        writer.write_index(self.signature)?;
        Ok(())
    }
}
