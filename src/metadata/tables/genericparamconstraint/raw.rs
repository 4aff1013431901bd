use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `GenericParamConstraint` table holds the constraints of generic parameters. `TableId` = 0x2C
pub struct GenericParamConstraintRaw {
    /// an index into the `GenericParam` table
    pub owner: u32,
    /// a `TypeDefOrRef` coded index
    pub constraint: CodedIndex,
}

impl MetadataRow for GenericParamConstraintRaw {
    const TABLE_ID: TableId = TableId::GenericParamConstraint;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.owner),
            1 => self.constraint.value().ok(),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(GenericParamConstraintRaw {
            owner: reader.read_index()?,
            constraint: reader.read_coded(CodedIndexType::TypeDefOrRef)?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.owner)?;
        writer.write_coded(&self.constraint)?;
        Ok(())
    }
}
