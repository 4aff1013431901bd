use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `PropertyPtr` table holds an indirection into the `Property` table, emitted by unoptimized compilers. `TableId` = 0x16
pub struct PropertyPtrRaw {
    /// an index into the `Property` table
    pub property: u32,
}

impl MetadataRow for PropertyPtrRaw {
    const TABLE_ID: TableId = TableId::PropertyPtr;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.property),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(PropertyPtrRaw {
            property: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.property)?;
        Ok(())
    }
}
