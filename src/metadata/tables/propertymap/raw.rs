use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `PropertyMap` table holds the mapping from types to the properties they own. `TableId` = 0x15
pub struct PropertyMapRaw {
    /// an index into the `TypeDef` table
    pub parent: u32,
    /// an index into the `Property` table, the first property owned by the type
    pub property_list: u32,
}

impl MetadataRow for PropertyMapRaw {
    const TABLE_ID: TableId = TableId::PropertyMap;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.parent),
            1 => Some(self.property_list),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(PropertyMapRaw {
            parent: reader.read_index()?,
            property_list: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.parent)?;
        writer.write_index(self.property_list)?;
        Ok(())
    }
}
