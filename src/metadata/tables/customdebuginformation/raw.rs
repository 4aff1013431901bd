use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `CustomDebugInformation` table holds custom debug records attached to metadata entities. `TableId` = 0x37
pub struct CustomDebugInformationRaw {
    /// a `HasCustomDebugInformation` coded index
    pub parent: CodedIndex,
    /// an index into the Guid heap, identifies the record kind
    pub kind: u32,
    /// an index into the Blob heap
    pub value: u32,
}

impl MetadataRow for CustomDebugInformationRaw {
    const TABLE_ID: TableId = TableId::CustomDebugInformation;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => self.parent.value().ok(),
            1 => Some(self.kind),
            2 => Some(self.value),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(CustomDebugInformationRaw {
            parent: reader.read_coded(CodedIndexType::HasCustomDebugInformation)?,
            kind: reader.read_index()?,
            value: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_coded(&self.parent)?;
        writer.write_index(self.kind)?;
        writer.write_index(self.value)?;
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
            0x02, 0x02, // kind
            0x03, 0x03, // value
        ];

        let info = TableInfo::new_test(
            &[(TableId::CustomDebugInformation, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::CustomDebugInformation, &info);
        assert_eq!(layout.row_size(), 6);

        let table =
            MetadataTable::<CustomDebugInformationRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &CustomDebugInformationRaw| {
            assert_eq!(
                row.parent,
                CodedIndex::new(TableId::Field, 0x8, CodedIndexType::HasCustomDebugInformation)
            );
            assert_eq!(row.kind, 0x0202);
            assert_eq!(row.value, 0x0303);
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
            0x02, 0x02, 0x02, 0x02, // kind
            0x03, 0x03, 0x03, 0x03, // value
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::CustomDebugInformation, 1),
                (TableId::MethodDef, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::CustomDebugInformation, &info);
        assert_eq!(layout.row_size(), 12);

        let table =
            MetadataTable::<CustomDebugInformationRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &CustomDebugInformationRaw| {
            assert_eq!(
                row.parent,
                CodedIndex::new(TableId::Field, 0x808, CodedIndexType::HasCustomDebugInformation)
            );
            assert_eq!(row.kind, 0x02020202);
            assert_eq!(row.value, 0x03030303);
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
