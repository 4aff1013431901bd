use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `Document` table holds the source documents of a Portable PDB. `TableId` = 0x30
pub struct DocumentRaw {
    /// an index into the Blob heap, the document name blob
    pub name: u32,
    /// an index into the Guid heap
    pub hash_algorithm: u32,
    /// an index into the Blob heap
    pub hash: u32,
    /// an index into the Guid heap
    pub language: u32,
}

impl MetadataRow for DocumentRaw {
    const TABLE_ID: TableId = TableId::Document;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.name),
            1 => Some(self.hash_algorithm),
            2 => Some(self.hash),
            3 => Some(self.language),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(DocumentRaw {
            name: reader.read_index()?,
            hash_algorithm: reader.read_index()?,
            hash: reader.read_index()?,
            language: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.name)?;
        writer.write_index(self.hash_algorithm)?;
        writer.write_index(self.hash)?;
        writer.write_index(self.language)?;
        Ok(())
    }
}
