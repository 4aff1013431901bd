use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `ParamPtr` table holds an indirection into the `Param` table, emitted by unoptimized compilers. `TableId` = 0x07
pub struct ParamPtrRaw {
    /// an index into the `Param` table
    pub param: u32,
}

impl MetadataRow for ParamPtrRaw {
    const TABLE_ID: TableId = TableId::ParamPtr;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.param),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ParamPtrRaw {
            param: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.param)?;
        Ok(())
    }
}
