use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `MethodSpec` table holds instantiations of generic methods. `TableId` = 0x2B
pub struct MethodSpecRaw {
    /// a `MethodDefOrRef` coded index
    pub method: CodedIndex,
    /// an index into the Blob heap
    pub instantiation: u32,
}

impl MetadataRow for MethodSpecRaw {
    const TABLE_ID: TableId = TableId::MethodSpec;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => self.method.value().ok(),
            1 => Some(self.instantiation),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(MethodSpecRaw {
            method: reader.read_coded(CodedIndexType::MethodDefOrRef)?,
            instantiation: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_coded(&self.method)?;
        writer.write_index(self.instantiation)?;
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
            0x01, 0x01, // method
            0x02, 0x02, // instantiation
        ];

        let info = TableInfo::new_test(
            &[(TableId::MethodSpec, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::MethodSpec, &info);
        assert_eq!(layout.row_size(), 4);

        let table =
            MetadataTable::<MethodSpecRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &MethodSpecRaw| {
            assert_eq!(
                row.method,
                CodedIndex::new(TableId::MemberRef, 0x80, CodedIndexType::MethodDefOrRef)
            );
            assert_eq!(row.instantiation, 0x0202);
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
            0x01, 0x01, 0x01, 0x00, // method
            0x02, 0x02, 0x02, 0x02, // instantiation
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::MethodSpec, 1),
                (TableId::MethodDef, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::MethodSpec, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<MethodSpecRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &MethodSpecRaw| {
            assert_eq!(
                row.method,
                CodedIndex::new(TableId::MemberRef, 0x8080, CodedIndexType::MethodDefOrRef)
            );
            assert_eq!(row.instantiation, 0x02020202);
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
