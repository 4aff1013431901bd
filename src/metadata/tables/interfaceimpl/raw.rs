use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `InterfaceImpl` table holds the interfaces each type implements. `TableId` = 0x09
pub struct InterfaceImplRaw {
    /// an index into the `TypeDef` table
    pub class: u32,
    /// a `TypeDefOrRef` coded index
    pub interface: CodedIndex,
}

impl MetadataRow for InterfaceImplRaw {
    const TABLE_ID: TableId = TableId::InterfaceImpl;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.class),
            1 => self.interface.value().ok(),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(InterfaceImplRaw {
            class: reader.read_index()?,
            interface: reader.read_coded(CodedIndexType::TypeDefOrRef)?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.class)?;
        writer.write_coded(&self.interface)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::metadata::tables::{MetadataTable, TableInfo, TableLayout};

    #[test]
    fn crafted_short() {
        let data = vec![
            0x01, 0x01, // class
            0x02, 0x02, // interface
        ];

        let info = TableInfo::new_test(
            &[(TableId::InterfaceImpl, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::InterfaceImpl, &info);
        assert_eq!(layout.row_size(), 4);

        let table =
            MetadataTable::<InterfaceImplRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &InterfaceImplRaw| {
            assert_eq!(row.class, 0x0101);
            assert_eq!(
                row.interface,
                CodedIndex::new(TableId::TypeSpec, 0x80, CodedIndexType::TypeDefOrRef)
            );
        };

        for row in table.iter().unwrap() {
            eval(row);
        }
        eval(table.get(1).unwrap().unwrap());

        let mut written = vec![0_u8; data.len()];
        let mut offset = 0;
        table.write(&mut written, &mut offset, false).unwrap();
        assert_eq!(written, data);
    }

    #[test]
    fn crafted_long() {
        let data = vec![
            0x01, 0x01, 0x01, 0x01, // class
            0x02, 0x02, 0x02, 0x00, // interface
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::InterfaceImpl, 1),
                (TableId::TypeDef, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::InterfaceImpl, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<InterfaceImplRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &InterfaceImplRaw| {
            assert_eq!(row.class, 0x01010101);
            assert_eq!(
                row.interface,
                CodedIndex::new(TableId::TypeSpec, 0x8080, CodedIndexType::TypeDefOrRef)
            );
        };

        for row in table.iter().unwrap() {
            eval(row);
        }
        eval(table.get(1).unwrap().unwrap());

        let mut written = vec![0_u8; data.len()];
        let mut offset = 0;
        table.write(&mut written, &mut offset, false).unwrap();
        assert_eq!(written, data);
    }
}
