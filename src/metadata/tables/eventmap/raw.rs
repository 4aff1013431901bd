use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `EventMap` table holds the mapping from types to the events they own. `TableId` = 0x12
pub struct EventMapRaw {
    /// an index into the `TypeDef` table
    pub parent: u32,
    /// an index into the `Event` table, the first event owned by the type
    pub event_list: u32,
}

impl MetadataRow for EventMapRaw {
    const TABLE_ID: TableId = TableId::EventMap;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.parent),
            1 => Some(self.event_list),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(EventMapRaw {
            parent: reader.read_index()?,
            event_list: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.parent)?;
        writer.write_index(self.event_list)?;
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
            0x02, 0x02, // event_list
        ];

        let info = TableInfo::new_test(
            &[(TableId::EventMap, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::EventMap, &info);
        assert_eq!(layout.row_size(), 4);

        let table =
            MetadataTable::<EventMapRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &EventMapRaw| {
            assert_eq!(row.parent, 0x0101);
            assert_eq!(row.event_list, 0x0202);
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
            0x01, 0x01, 0x01, 0x01, // parent
            0x02, 0x02, 0x02, 0x02, // event_list
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::EventMap, 1),
                (TableId::TypeDef, u32::from(u16::MAX) + 3),
                (TableId::Event, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::EventMap, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<EventMapRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &EventMapRaw| {
            assert_eq!(row.parent, 0x01010101);
            assert_eq!(row.event_list, 0x02020202);
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
