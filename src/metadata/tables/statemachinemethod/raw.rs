use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `StateMachineMethod` table holds the mapping from async and iterator state machines to their kickoff methods. `TableId` = 0x36
pub struct StateMachineMethodRaw {
    /// an index into the `MethodDef` table, the `MoveNext` method
    pub move_next_method: u32,
    /// an index into the `MethodDef` table, the original method
    pub kickoff_method: u32,
}

impl MetadataRow for StateMachineMethodRaw {
    const TABLE_ID: TableId = TableId::StateMachineMethod;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.move_next_method),
            1 => Some(self.kickoff_method),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(StateMachineMethodRaw {
            move_next_method: reader.read_index()?,
            kickoff_method: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.move_next_method)?;
        writer.write_index(self.kickoff_method)?;
        Ok(())
    }
}
