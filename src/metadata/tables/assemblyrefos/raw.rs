use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `AssemblyRefOS` table holds the operating system of referenced assemblies. Should be empty. `TableId` = 0x25
pub struct AssemblyRefOsRaw {
    /// a 4-byte constant
    pub os_platform_id: u32,
    /// a 4-byte constant
    pub os_major_version: u32,
    /// a 4-byte constant
    pub os_minor_version: u32,
    /// an index into the `AssemblyRef` table
    pub assembly_ref: u32,
}

impl MetadataRow for AssemblyRefOsRaw {
    const TABLE_ID: TableId = TableId::AssemblyRefOS;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.os_platform_id),
            1 => Some(self.os_major_version),
            2 => Some(self.os_minor_version),
            3 => Some(self.assembly_ref),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(AssemblyRefOsRaw {
            os_platform_id: reader.read_u32()?,
            os_major_version: reader.read_u32()?,
            os_minor_version: reader.read_u32()?,
            assembly_ref: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.os_platform_id)?;
        writer.write_u32(self.os_major_version)?;
        writer.write_u32(self.os_minor_version)?;
        writer.write_index(self.assembly_ref)?;
        Ok(())
    }
}
