use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `LocalScope` table holds the lexical scopes of methods. `TableId` = 0x32
pub struct LocalScopeRaw {
    /// an index into the `MethodDef` table
    pub method: u32,
    /// an index into the `ImportScope` table
    pub import_scope: u32,
    /// an index into the `LocalVariable` table, the first variable of the scope
    pub variable_list: u32,
    /// an index into the `LocalConstant` table, the first constant of the scope
    pub constant_list: u32,
    /// a 4-byte IL offset of the first instruction of the scope
    pub start_offset: u32,
    /// a 4-byte length of the scope in bytes
    pub length: u32,
}

impl MetadataRow for LocalScopeRaw {
    const TABLE_ID: TableId = TableId::LocalScope;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.method),
            1 => Some(self.import_scope),
            2 => Some(self.variable_list),
            3 => Some(self.constant_list),
            4 => Some(self.start_offset),
            5 => Some(self.length),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(LocalScopeRaw {
            method: reader.read_index()?,
            import_scope: reader.read_index()?,
            variable_list: reader.read_index()?,
            constant_list: reader.read_index()?,
            start_offset: reader.read_u32()?,
            length: reader.read_u32()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.method)?;
        writer.write_index(self.import_scope)?;
        writer.write_index(self.variable_list)?;
        writer.write_index(self.constant_list)?;
        writer.write_u32(self.start_offset)?;
        writer.write_u32(self.length)?;
        Ok(())
    }
}
