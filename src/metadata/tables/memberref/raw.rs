use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `MemberRef` table holds references to fields and methods of other types. `TableId` = 0x0A
pub struct MemberRefRaw {
    /// a `MemberRefParent` coded index
    pub class: CodedIndex,
    /// an index into the String heap
    pub name: u32,
    /// an index into the Blob heap
    pub signature: u32,
}

impl MetadataRow for MemberRefRaw {
    const TABLE_ID: TableId = TableId::MemberRef;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => self.class.value().ok(),
            1 => Some(self.name),
            2 => Some(self.signature),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(MemberRefRaw {
            class: reader.read_coded(CodedIndexType::MemberRefParent)?,
            name: reader.read_index()?,
            signature: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_coded(&self.class)?;
        writer.write_index(self.name)?;
        writer.write_index(self.signature)?;
        Ok(())
    }
}
