use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `AssemblyOS` table holds the operating system of the assembly. Should be empty. `TableId` = 0x22
pub struct AssemblyOsRaw {
    /// a 4-byte constant
    pub os_platform_id: u32,
    /// a 4-byte constant
    pub os_major_version: u32,
    /// a 4-byte constant
    pub os_minor_version: u32,
}

impl MetadataRow for AssemblyOsRaw {
    const TABLE_ID: TableId = TableId::AssemblyOS;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.os_platform_id),
            1 => Some(self.os_major_version),
            2 => Some(self.os_minor_version),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(AssemblyOsRaw {
            os_platform_id: reader.read_u32()?,
            os_major_version: reader.read_u32()?,
            os_minor_version: reader.read_u32()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.os_platform_id)?;
        writer.write_u32(self.os_major_version)?;
        writer.write_u32(self.os_minor_version)?;
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
            0x01, 0x01, 0x01, 0x01, // os_platform_id
            0x02, 0x02, 0x02, 0x02, // os_major_version
            0x03, 0x03, 0x03, 0x03, // os_minor_version
        ];

        let info = TableInfo::new_test(
            &[(TableId::AssemblyOS, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::AssemblyOS, &info);
        assert_eq!(layout.row_size(), 12);

        let table =
            MetadataTable::<AssemblyOsRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &AssemblyOsRaw| {
            assert_eq!(row.os_platform_id, 0x01010101);
            assert_eq!(row.os_major_version, 0x02020202);
            assert_eq!(row.os_minor_version, 0x03030303);
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
            0x01, 0x01, 0x01, 0x01, // os_platform_id
            0x02, 0x02, 0x02, 0x02, // os_major_version
            0x03, 0x03, 0x03, 0x03, // os_minor_version
        ];

        let info = TableInfo::new_test(
            &[(TableId::AssemblyOS, 1)],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::AssemblyOS, &info);
        assert_eq!(layout.row_size(), 12);

        let table =
            MetadataTable::<AssemblyOsRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &AssemblyOsRaw| {
            assert_eq!(row.os_platform_id, 0x01010101);
            assert_eq!(row.os_major_version, 0x02020202);
            assert_eq!(row.os_minor_version, 0x03030303);
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
