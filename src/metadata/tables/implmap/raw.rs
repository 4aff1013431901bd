use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `ImplMap` table holds P/Invoke mappings of fields and methods. `TableId` = 0x1C
pub struct ImplMapRaw {
    /// a 2-byte bitmask of type `PInvokeAttributes`, §II.23.1.8
    pub mapping_flags: u16,
    /// a `MemberForwarded` coded index
    pub member_forwarded: CodedIndex,
    /// an index into the String heap
    pub import_name: u32,
    /// an index into the `ModuleRef` table
    pub import_scope: u32,
}

impl MetadataRow for ImplMapRaw {
    const TABLE_ID: TableId = TableId::ImplMap;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.mapping_flags)),
            1 => self.member_forwarded.value().ok(),
            2 => Some(self.import_name),
            3 => Some(self.import_scope),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ImplMapRaw {
            mapping_flags: reader.read_u16()?,
            member_forwarded: reader.read_coded(CodedIndexType::MemberForwarded)?,
            import_name: reader.read_index()?,
            import_scope: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.mapping_flags)?;
        writer.write_coded(&self.member_forwarded)?;
        writer.write_index(self.import_name)?;
        writer.write_index(self.import_scope)?;
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
            0x01, 0x01, // mapping_flags
            0x02, 0x02, // member_forwarded
            0x03, 0x03, // import_name
            0x04, 0x04, // import_scope
        ];

        let info = TableInfo::new_test(
            &[(TableId::ImplMap, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::ImplMap, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<ImplMapRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &ImplMapRaw| {
            assert_eq!(row.mapping_flags, 0x0101);
            assert_eq!(
                row.member_forwarded,
                CodedIndex::new(TableId::Field, 0x101, CodedIndexType::MemberForwarded)
            );
            assert_eq!(row.import_name, 0x0303);
            assert_eq!(row.import_scope, 0x0404);
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
            0x01, 0x01, // mapping_flags
            0x02, 0x02, 0x02, 0x00, // member_forwarded
            0x03, 0x03, 0x03, 0x03, // import_name
            0x04, 0x04, 0x04, 0x04, // import_scope
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::ImplMap, 1),
                (TableId::Field, u32::from(u16::MAX) + 3),
                (TableId::ModuleRef, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::ImplMap, &info);
        assert_eq!(layout.row_size(), 14);

        let table =
            MetadataTable::<ImplMapRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &ImplMapRaw| {
            assert_eq!(row.mapping_flags, 0x0101);
            assert_eq!(
                row.member_forwarded,
                CodedIndex::new(TableId::Field, 0x10101, CodedIndexType::MemberForwarded)
            );
            assert_eq!(row.import_name, 0x03030303);
            assert_eq!(row.import_scope, 0x04040404);
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
