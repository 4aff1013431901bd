use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `EncMap` table holds the edit-and-continue token map. `TableId` = 0x1F
pub struct EncMapRaw {
    /// a 4-byte metadata token
    pub token_value: u32,
}

impl MetadataRow for EncMapRaw {
    const TABLE_ID: TableId = TableId::EncMap;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.token_value),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(EncMapRaw {
            token_value: reader.read_u32()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.token_value)?;
        Ok(())
    }
}
