use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `ImportScope` table holds the namespace import scopes. `TableId` = 0x35
pub struct ImportScopeRaw {
    /// an index into the `ImportScope` table, 0 for the root
    pub parent: u32,
    /// an index into the Blob heap
    pub imports: u32,
}

impl MetadataRow for ImportScopeRaw {
    const TABLE_ID: TableId = TableId::ImportScope;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.parent),
            1 => Some(self.imports),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ImportScopeRaw {
            parent: reader.read_index()?,
            imports: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_index(self.parent)?;
        writer.write_index(self.imports)?;
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
            0x02, 0x02, // imports
        ];

        let info = TableInfo::new_test(
            &[(TableId::ImportScope, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::ImportScope, &info);
        assert_eq!(layout.row_size(), 4);

        let table =
            MetadataTable::<ImportScopeRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &ImportScopeRaw| {
            assert_eq!(row.parent, 0x0101);
            assert_eq!(row.imports, 0x0202);
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
            0x02, 0x02, 0x02, 0x02, // imports
        ];

        let info = TableInfo::new_test(
            &[(TableId::ImportScope, u32::from(u16::MAX) + 3)],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::ImportScope, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<ImportScopeRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &ImportScopeRaw| {
            assert_eq!(row.parent, 0x01010101);
            assert_eq!(row.imports, 0x02020202);
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
