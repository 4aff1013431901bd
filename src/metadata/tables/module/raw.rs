use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `Module` table holds the current module. It holds exactly one row. `TableId` = 0x00
pub struct ModuleRaw {
    /// a 2-byte value, reserved, shall be zero
    pub generation: u16,
    /// an index into the String heap
    pub name: u32,
    /// an index into the Guid heap, distinguishes between two versions of the same module
    pub mvid: u32,
    /// an index into the Guid heap, reserved, shall be zero
    pub encid: u32,
    /// an index into the Guid heap, reserved, shall be zero
    pub encbaseid: u32,
}

impl MetadataRow for ModuleRaw {
    const TABLE_ID: TableId = TableId::Module;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.generation)),
            1 => Some(self.name),
            2 => Some(self.mvid),
            3 => Some(self.encid),
            4 => Some(self.encbaseid),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ModuleRaw {
            generation: reader.read_u16()?,
            name: reader.read_index()?,
            mvid: reader.read_index()?,
            encid: reader.read_index()?,
            encbaseid: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.generation)?;
        writer.write_index(self.name)?;
        writer.write_index(self.mvid)?;
        writer.write_index(self.encid)?;
        writer.write_index(self.encbaseid)?;
        Ok(())
    }
}
