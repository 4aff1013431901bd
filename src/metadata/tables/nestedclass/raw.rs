use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `NestedClass` table holds the nesting relationships between types. `TableId` = 0x29
pub struct NestedClassRaw {
    /// an index into the `TypeDef` table, the nested type
    pub nested_class: u32,
    /// an index into the `TypeDef` table, the enclosing type
    pub enclosing_class: u32,
}

impl MetadataRow for NestedClassRaw {
    const TABLE_ID: TableId = TableId::NestedClass;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.nested_class),
            1 => Some(self.enclosing_class),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(NestedClassRaw {
            nested_class: reader.read_index()?,
            enclosing_class: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.nested_class)?;
        writer.write_index(self.enclosing_class)?;
        Ok(())
    }
}
