use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `FieldMarshal` table holds marshalling descriptors of fields and parameters. `TableId` = 0x0D
pub struct FieldMarshalRaw {
    /// a `HasFieldMarshal` coded index
    pub parent: CodedIndex,
    /// an index into the Blob heap
    pub native_type: u32,
}

impl MetadataRow for FieldMarshalRaw {
    const TABLE_ID: TableId = TableId::FieldMarshal;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => self.parent.value().ok(),
            1 => Some(self.native_type),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(FieldMarshalRaw {
            parent: reader.read_coded(CodedIndexType::HasFieldMarshal)?,
            native_type: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_coded(&self.parent)?;
        writer.write_index(self.native_type)?;
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
            0x01, 0x01, // parent
            0x02, 0x02, // native_type
        ];

        let info = TableInfo::new_test(
            &[(TableId::FieldMarshal, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::FieldMarshal, &info);
        assert_eq!(layout.row_size(), 4);

        let table =
            MetadataTable::<FieldMarshalRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &FieldMarshalRaw| {
            assert_eq!(
                row.parent,
                CodedIndex::new(TableId::Param, 0x80, CodedIndexType::HasFieldMarshal)
            );
            assert_eq!(row.native_type, 0x0202);
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
            0x01, 0x01, 0x01, 0x00, // parent
            0x02, 0x02, 0x02, 0x02, // native_type
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::FieldMarshal, 1),
                (TableId::Field, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::FieldMarshal, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<FieldMarshalRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &FieldMarshalRaw| {
            assert_eq!(
                row.parent,
                CodedIndex::new(TableId::Param, 0x8080, CodedIndexType::HasFieldMarshal)
            );
            assert_eq!(row.native_type, 0x02020202);
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
