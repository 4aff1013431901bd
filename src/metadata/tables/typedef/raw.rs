use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `TypeDef` table holds the types defined in this module. `TableId` = 0x02
pub struct TypeDefRaw {
    /// a 4-byte bitmask of type `TypeAttributes`, §II.23.1.15
    pub flags: u32,
    /// an index into the String heap
    pub type_name: u32,
    /// an index into the String heap
    pub type_namespace: u32,
    /// a `TypeDefOrRef` coded index, the base type
    pub extends: CodedIndex,
    /// an index into the `Field` table, the first field owned by this type
    pub field_list: u32,
    /// an index into the `MethodDef` table, the first method owned by this type
    pub method_list: u32,
}

impl MetadataRow for TypeDefRaw {
    const TABLE_ID: TableId = TableId::TypeDef;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.flags),
            1 => Some(self.type_name),
            2 => Some(self.type_namespace),
            3 => self.extends.value().ok(),
            4 => Some(self.field_list),
            5 => Some(self.method_list),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(TypeDefRaw {
            flags: reader.read_u32()?,
            type_name: reader.read_index()?,
            type_namespace: reader.read_index()?,
            extends: reader.read_coded(CodedIndexType::TypeDefOrRef)?,
            field_list: reader.read_index()?,
            method_list: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.flags)?;
        writer.write_index(self.type_name)?;
        writer.write_index(self.type_namespace)?;
        writer.write_coded(&self.extends)?;
        writer.write_index(self.field_list)?;
        writer.write_index(self.method_list)?;
        Ok(())
    }
}
