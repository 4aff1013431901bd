use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `Event` table holds the events of all types of this module. `TableId` = 0x14
pub struct EventRaw {
    /// a 2-byte bitmask of type `EventAttributes`, §II.23.1.4
    pub flags: u16,
    /// an index into the String heap
    pub name: u32,
    /// a `TypeDefOrRef` coded index, the delegate type
    pub event_type: CodedIndex,
}

impl MetadataRow for EventRaw {
    const TABLE_ID: TableId = TableId::Event;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.flags)),
            1 => Some(self.name),
            2 => self.event_type.value().ok(),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(EventRaw {
            flags: reader.read_u16()?,
            name: reader.read_index()?,
            event_type: reader.read_coded(CodedIndexType::TypeDefOrRef)?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.flags)?;
        writer.write_index(self.name)?;
        writer.write_coded(&self.event_type)?;
        Ok(())
    }
}
