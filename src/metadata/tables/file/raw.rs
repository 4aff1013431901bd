use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `File` table holds the files of a multi-module assembly. `TableId` = 0x26
pub struct FileRaw {
    /// a 4-byte bitmask of type `FileAttributes`, §II.23.1.6
    pub flags: u32,
    /// an index into the String heap
    pub name: u32,
    /// an index into the Blob heap
    pub hash_value: u32,
}

impl MetadataRow for FileRaw {
    const TABLE_ID: TableId = TableId::File;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.flags),
            1 => Some(self.name),
            2 => Some(self.hash_value),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(FileRaw {
            flags: reader.read_u32()?,
            name: reader.read_index()?,
            hash_value: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.flags)?;
        writer.write_index(self.name)?;
        writer.write_index(self.hash_value)?;
        Ok(())
    }
}
