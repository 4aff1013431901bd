use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `Assembly` table holds the assembly manifest. It holds zero or one row. `TableId` = 0x20
pub struct AssemblyRaw {
    /// a 4-byte constant of type `AssemblyHashAlgorithm`, §II.23.1.1
    pub hash_alg_id: u32,
    /// a 2-byte constant
    pub major_version: u16,
    /// a 2-byte constant
    pub minor_version: u16,
    /// a 2-byte constant
    pub build_number: u16,
    /// a 2-byte constant
    pub revision_number: u16,
    /// a 4-byte bitmask of type `AssemblyFlags`, §II.23.1.2
    pub flags: u32,
    /// an index into the Blob heap
    pub public_key: u32,
    /// an index into the String heap
    pub name: u32,
    /// an index into the String heap
    pub culture: u32,
}

impl MetadataRow for AssemblyRaw {
    const TABLE_ID: TableId = TableId::Assembly;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.hash_alg_id),
            1 => Some(u32::from(self.major_version)),
            2 => Some(u32::from(self.minor_version)),
            3 => Some(u32::from(self.build_number)),
            4 => Some(u32::from(self.revision_number)),
            5 => Some(self.flags),
            6 => Some(self.public_key),
            7 => Some(self.name),
            8 => Some(self.culture),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(AssemblyRaw {
            hash_alg_id: reader.read_u32()?,
            major_version: reader.read_u16()?,
            minor_version: reader.read_u16()?,
            build_number: reader.read_u16()?,
            revision_number: reader.read_u16()?,
            flags: reader.read_u32()?,
            public_key: reader.read_index()?,
            name: reader.read_index()?,
            culture: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.hash_alg_id)?;
        writer.write_u16(self.major_version)?;
        writer.write_u16(self.minor_version)?;
        writer.write_u16(self.build_number)?;
        writer.write_u16(self.revision_number)?;
        writer.write_u32(self.flags)?;
        writer.write_index(self.public_key)?;
        writer.write_index(self.name)?;
        writer.write_index(self.culture)?;
        Ok(())
    }
}
