use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `MethodDebugInformation` table holds the sequence points of methods. Rows are parallel to the `MethodDef` table. `TableId` = 0x31
pub struct MethodDebugInformationRaw {
    /// an index into the `Document` table, 0 if the method spans documents
    pub document: u32,
    /// an index into the Blob heap
    pub sequence_points: u32,
}

impl MetadataRow for MethodDebugInformationRaw {
    const TABLE_ID: TableId = TableId::MethodDebugInformation;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.document),
            1 => Some(self.sequence_points),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(MethodDebugInformationRaw {
            document: reader.read_index()?,
            sequence_points: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.document)?;
        writer.write_index(self.sequence_points)?;
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
            0x01, 0x01, // document
            0x02, 0x02, // sequence_points
        ];

        let info = TableInfo::new_test(
            &[(TableId::MethodDebugInformation, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::MethodDebugInformation, &info);
        assert_eq!(layout.row_size(), 4);

        let table =
            MetadataTable::<MethodDebugInformationRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &MethodDebugInformationRaw| {
            assert_eq!(row.document, 0x0101);
            assert_eq!(row.sequence_points, 0x0202);
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
            0x01, 0x01, 0x01, 0x01, // document
            0x02, 0x02, 0x02, 0x02, // sequence_points
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::MethodDebugInformation, 1),
                (TableId::Document, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::MethodDebugInformation, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<MethodDebugInformationRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &MethodDebugInformationRaw| {
            assert_eq!(row.document, 0x01010101);
            assert_eq!(row.sequence_points, 0x02020202);
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
