use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `MethodDef` table holds the methods of all types of this module. `TableId` = 0x06
pub struct MethodDefRaw {
    /// a 4-byte constant, the RVA of the method body
    pub rva: u32,
    /// a 2-byte bitmask of type `MethodImplAttributes`, §II.23.1.10
    pub impl_flags: u16,
    /// a 2-byte bitmask of type `MethodAttributes`, §II.23.1.10
    pub flags: u16,
    /// an index into the String heap
    pub name: u32,
    /// an index into the Blob heap
    pub signature: u32,
    /// an index into the `Param` table, the first parameter owned by this method
    pub param_list: u32,
}

impl MetadataRow for MethodDefRaw {
    const TABLE_ID: TableId = TableId::MethodDef;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.rva),
            1 => Some(u32::from(self.impl_flags)),
            2 => Some(u32::from(self.flags)),
            3 => Some(self.name),
            4 => Some(self.signature),
            5 => Some(self.param_list),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(MethodDefRaw {
            rva: reader.read_u32()?,
            impl_flags: reader.read_u16()?,
            flags: reader.read_u16()?,
            name: reader.read_index()?,
            signature: reader.read_index()?,
            param_list: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.rva)?;
        writer.write_u16(self.impl_flags)?;
        writer.write_u16(self.flags)?;
        writer.write_index(self.name)?;
        writer.write_index(self.signature)?;
        writer.write_index(self.param_list)?;
        Ok(())
    }
}
