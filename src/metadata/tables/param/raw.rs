use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `Param` table holds the parameters of all methods of this module. `TableId` = 0x08
pub struct ParamRaw {
    /// a 2-byte bitmask of type `ParamAttributes`, §II.23.1.13
    pub flags: u16,
    /// a 2-byte constant, 0 is the return value
    pub sequence: u16,
    /// an index into the String heap
    pub name: u32,
}

impl MetadataRow for ParamRaw {
    const TABLE_ID: TableId = TableId::Param;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.flags)),
            1 => Some(u32::from(self.sequence)),
            2 => Some(self.name),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ParamRaw {
            flags: reader.read_u16()?,
            sequence: reader.read_u16()?,
            name: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.flags)?;
        writer.write_u16(self.sequence)?;
        writer.write_index(self.name)?;
        Ok(())
    }
}
