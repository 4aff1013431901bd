use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `ClassLayout` table holds explicit layout information of types. `TableId` = 0x0F
pub struct ClassLayoutRaw {
    /// a 2-byte constant
    pub packing_size: u16,
    /// a 4-byte constant
    pub class_size: u32,
    /// an index into the `TypeDef` table
    pub parent: u32,
}

impl MetadataRow for ClassLayoutRaw {
    const TABLE_ID: TableId = TableId::ClassLayout;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.packing_size)),
            1 => Some(self.class_size),
            2 => Some(self.parent),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ClassLayoutRaw {
            packing_size: reader.read_u16()?,
            class_size: reader.read_u32()?,
            parent: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.packing_size)?;
        writer.write_u32(self.class_size)?;
        writer.write_index(self.parent)?;
        Ok(())
    }
}
