use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `FieldRVA` table holds the initial data of fields. `TableId` = 0x1D
pub struct FieldRvaRaw {
    /// a 4-byte constant, the RVA of the initial value
    pub rva: u32,
    /// an index into the `Field` table
    pub field: u32,
}

impl MetadataRow for FieldRvaRaw {
    const TABLE_ID: TableId = TableId::FieldRVA;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.rva),
            1 => Some(self.field),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(FieldRvaRaw {
            rva: reader.read_u32()?,
            field: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.rva)?;
        writer.write_index(self.field)?;
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
            0x01, 0x01, 0x01, 0x01, // rva
            0x02, 0x02, // field
        ];

        let info = TableInfo::new_test(
            &[(TableId::FieldRVA, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::FieldRVA, &info);
        assert_eq!(layout.row_size(), 6);

        let table =
            MetadataTable::<FieldRvaRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &FieldRvaRaw| {
            assert_eq!(row.rva, 0x01010101);
            assert_eq!(row.field, 0x0202);
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
            0x01, 0x01, 0x01, 0x01, // rva
            0x02, 0x02, 0x02, 0x02, // field
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::FieldRVA, 1),
                (TableId::Field, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::FieldRVA, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<FieldRvaRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &FieldRvaRaw| {
            assert_eq!(row.rva, 0x01010101);
            assert_eq!(row.field, 0x02020202);
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
