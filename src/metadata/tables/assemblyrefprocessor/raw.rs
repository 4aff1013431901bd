use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `AssemblyRefProcessor` table holds the processor of referenced assemblies. Should be empty. `TableId` = 0x24
pub struct AssemblyRefProcessorRaw {
    /// a 4-byte constant
    pub processor: u32,
    /// an index into the `AssemblyRef` table
    pub assembly_ref: u32,
}

impl MetadataRow for AssemblyRefProcessorRaw {
    const TABLE_ID: TableId = TableId::AssemblyRefProcessor;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.processor),
            1 => Some(self.assembly_ref),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(AssemblyRefProcessorRaw {
            processor: reader.read_u32()?,
            assembly_ref: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.processor)?;
        writer.write_index(self.assembly_ref)?;
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
            0x01, 0x01, 0x01, 0x01, // processor
            0x02, 0x02, // assembly_ref
        ];

        let info = TableInfo::new_test(
            &[(TableId::AssemblyRefProcessor, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::AssemblyRefProcessor, &info);
        assert_eq!(layout.row_size(), 6);

        let table =
            MetadataTable::<AssemblyRefProcessorRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &AssemblyRefProcessorRaw| {
            assert_eq!(row.processor, 0x01010101);
            assert_eq!(row.assembly_ref, 0x0202);
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
            0x01, 0x01, 0x01, 0x01, // processor
            0x02, 0x02, 0x02, 0x02, // assembly_ref
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::AssemblyRefProcessor, 1),
                (TableId::AssemblyRef, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::AssemblyRefProcessor, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<AssemblyRefProcessorRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &AssemblyRefProcessorRaw| {
            assert_eq!(row.processor, 0x01010101);
            assert_eq!(row.assembly_ref, 0x02020202);
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
