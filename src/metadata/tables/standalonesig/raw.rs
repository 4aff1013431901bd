use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `StandAloneSig` table holds signatures that are not referenced by any other table. `TableId` = 0x11
pub struct StandAloneSigRaw {
    /// an index into the Blob heap
    pub signature: u32,
}

impl MetadataRow for StandAloneSigRaw {
    const TABLE_ID: TableId = TableId::StandAloneSig;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.signature),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(StandAloneSigRaw {
            signature: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.signature)?;
        Ok(())
    }
}
