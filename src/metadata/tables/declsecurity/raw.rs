use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `DeclSecurity` table holds declarative security permission sets. `TableId` = 0x0E
pub struct DeclSecurityRaw {
    /// a 2-byte value, the `SecurityAction`
    pub action: u16,
    /// a `HasDeclSecurity` coded index
    pub parent: CodedIndex,
    /// an index into the Blob heap
    pub permission_set: u32,
}

impl MetadataRow for DeclSecurityRaw {
    const TABLE_ID: TableId = TableId::DeclSecurity;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.action)),
            1 => self.parent.value().ok(),
            2 => Some(self.permission_set),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(DeclSecurityRaw {
            action: reader.read_u16()?,
            parent: reader.read_coded(CodedIndexType::HasDeclSecurity)?,
            permission_set: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.action)?;
        writer.write_coded(&self.parent)?;
        writer.write_index(self.permission_set)?;
        Ok(())
    }
}
