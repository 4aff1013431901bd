use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `ManifestResource` table holds the resources of the assembly. `TableId` = 0x28
pub struct ManifestResourceRaw {
    /// a 4-byte offset of the resource in the resource directory
    pub offset: u32,
    /// a 4-byte bitmask of type `ManifestResourceAttributes`, §II.23.1.9
    pub flags: u32,
    /// an index into the String heap
    pub name: u32,
    /// an `Implementation` coded index, null for resources of this file
    pub implementation: CodedIndex,
}

impl MetadataRow for ManifestResourceRaw {
    const TABLE_ID: TableId = TableId::ManifestResource;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.offset),
            1 => Some(self.flags),
            2 => Some(self.name),
            3 => self.implementation.value().ok(),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(ManifestResourceRaw {
            offset: reader.read_u32()?,
            flags: reader.read_u32()?,
            name: reader.read_index()?,
            implementation: reader.read_coded(CodedIndexType::Implementation)?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u32(self.offset)?;
        writer.write_u32(self.flags)?;
        writer.write_index(self.name)?;
        writer.write_coded(&self.implementation)?;
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
            0x01, 0x01, 0x01, 0x01, // offset
            0x02, 0x02, 0x02, 0x02, // flags
            0x03, 0x03, // name
            0x04, 0x04, // implementation
        ];

        let info = TableInfo::new_test(
            &[(TableId::ManifestResource, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::ManifestResource, &info);
        assert_eq!(layout.row_size(), 12);

        let table =
            MetadataTable::<ManifestResourceRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &ManifestResourceRaw| {
            assert_eq!(row.offset, 0x01010101);
            assert_eq!(row.flags, 0x02020202);
            assert_eq!(row.name, 0x0303);
            assert_eq!(
                row.implementation,
                CodedIndex::new(TableId::File, 0x101, CodedIndexType::Implementation)
            );
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
            0x01, 0x01, 0x01, 0x01, // offset
            0x02, 0x02, 0x02, 0x02, // flags
            0x03, 0x03, 0x03, 0x03, // name
            0x04, 0x04, 0x04, 0x00, // implementation
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::ManifestResource, 1),
                (TableId::File, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::ManifestResource, &info);
        assert_eq!(layout.row_size(), 16);

        let table =
            MetadataTable::<ManifestResourceRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &ManifestResourceRaw| {
            assert_eq!(row.offset, 0x01010101);
            assert_eq!(row.flags, 0x02020202);
            assert_eq!(row.name, 0x03030303);
            assert_eq!(
                row.implementation,
                CodedIndex::new(TableId::File, 0x10101, CodedIndexType::Implementation)
            );
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
