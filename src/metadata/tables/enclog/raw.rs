use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `EncLog` table holds the edit-and-continue log. `TableId` = 0x1E
pub struct EncLogRaw {
    /// a 4-byte metadata token
    pub token_value: u32,
    /// a 4-byte operation code
    pub func_code: u32,
}

impl MetadataRow for EncLogRaw {
    const TABLE_ID: TableId = TableId::EncLog;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.token_value),
            1 => Some(self.func_code),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(EncLogRaw {
            token_value: reader.read_u32()?,
            func_code: reader.read_u32()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.token_value)?;
        writer.write_u32(self.func_code)?;
        Ok(())
    }
}
