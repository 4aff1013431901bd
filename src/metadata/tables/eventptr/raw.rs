use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `EventPtr` table holds an indirection into the `Event` table, emitted by unoptimized compilers. `TableId` = 0x13
pub struct EventPtrRaw {
    /// an index into the `Event` table
    pub event: u32,
}

impl MetadataRow for EventPtrRaw {
    const TABLE_ID: TableId = TableId::EventPtr;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.event),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(EventPtrRaw {
            event: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.event)?;
        Ok(())
    }
}
