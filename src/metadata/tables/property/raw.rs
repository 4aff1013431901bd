use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `Property` table holds the properties of all types of this module. `TableId` = 0x17
pub struct PropertyRaw {
    /// a 2-byte bitmask of type `PropertyAttributes`, §II.23.1.14
    pub flags: u16,
    /// an index into the String heap
    pub name: u32,
    /// an index into the Blob heap
    pub signature: u32,
}

impl MetadataRow for PropertyRaw {
    const TABLE_ID: TableId = TableId::Property;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.flags)),
            1 => Some(self.name),
            2 => Some(self.signature),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(PropertyRaw {
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
