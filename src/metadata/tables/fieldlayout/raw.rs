use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `FieldLayout` table holds explicit offsets of fields. `TableId` = 0x10
pub struct FieldLayoutRaw {
    /// a 4-byte constant
    pub field_offset: u32,
    /// an index into the `Field` table
    pub field: u32,
}

impl MetadataRow for FieldLayoutRaw {
    const TABLE_ID: TableId = TableId::FieldLayout;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.field_offset),
            1 => Some(self.field),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(FieldLayoutRaw {
            field_offset: reader.read_u32()?,
            field: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.field_offset)?;
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
            0x01, 0x01, 0x01, 0x01, // field_offset
            0x02, 0x02, // field
        ];

        let info = TableInfo::new_test(
            &[(TableId::FieldLayout, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::FieldLayout, &info);
        assert_eq!(layout.row_size(), 6);

        let table =
            MetadataTable::<FieldLayoutRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &FieldLayoutRaw| {
            assert_eq!(row.field_offset, 0x01010101);
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
            0x01, 0x01, 0x01, 0x01, // field_offset
            0x02, 0x02, 0x02, 0x02, // field
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::FieldLayout, 1),
                (TableId::Field, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::FieldLayout, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<FieldLayoutRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &FieldLayoutRaw| {
            assert_eq!(row.field_offset, 0x01010101);
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
