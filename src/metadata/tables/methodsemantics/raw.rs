use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `MethodSemantics` table holds the accessor methods of properties and events. `TableId` = 0x18
pub struct MethodSemanticsRaw {
    /// a 2-byte bitmask of type `MethodSemanticsAttributes`, §II.23.1.12
    pub semantics: u16,
    /// an index into the `MethodDef` table
    pub method: u32,
    /// a `HasSemantics` coded index
    pub association: CodedIndex,
}

impl MetadataRow for MethodSemanticsRaw {
    const TABLE_ID: TableId = TableId::MethodSemantics;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.semantics)),
            1 => Some(self.method),
            2 => self.association.value().ok(),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(MethodSemanticsRaw {
            semantics: reader.read_u16()?,
            method: reader.read_index()?,
            association: reader.read_coded(CodedIndexType::HasSemantics)?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.semantics)?;
        writer.write_index(self.method)?;
        writer.write_coded(&self.association)?;
        Ok(())
    }
}
