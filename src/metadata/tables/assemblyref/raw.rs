use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `AssemblyRef` table holds the assemblies referenced by this module. `TableId` = 0x23
pub struct AssemblyRefRaw {
    /// a 2-byte constant
    pub major_version: u16,
    /// a 2-byte constant
    pub minor_version: u16,
    /// a 2-byte constant
    pub build_number: u16,
    /// a 2-byte constant
    pub revision_number: u16,
    /// a 4-byte bitmask of type `AssemblyFlags`, §II.23.1.2
    pub flags: u32,
    /// an index into the Blob heap
    pub public_key_or_token: u32,
    /// an index into the String heap
    pub name: u32,
    /// an index into the String heap
    pub culture: u32,
    /// an index into the Blob heap
    pub hash_value: u32,
}

impl MetadataRow for AssemblyRefRaw {
    const TABLE_ID: TableId = TableId::AssemblyRef;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.major_version)),
            1 => Some(u32::from(self.minor_version)),
            2 => Some(u32::from(self.build_number)),
            3 => Some(u32::from(self.revision_number)),
            4 => Some(self.flags),
            5 => Some(self.public_key_or_token),
            6 => Some(self.name),
            7 => Some(self.culture),
            8 => Some(self.hash_value),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(AssemblyRefRaw {
            major_version: reader.read_u16()?,
            minor_version: reader.read_u16()?,
            build_number: reader.read_u16()?,
            revision_number: reader.read_u16()?,
            flags: reader.read_u32()?,
            public_key_or_token: reader.read_index()?,
            name: reader.read_index()?,
            culture: reader.read_index()?,
            hash_value: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.major_version)?;
        writer.write_u16(self.minor_version)?;
        writer.write_u16(self.build_number)?;
        writer.write_u16(self.revision_number)?;
        writer.write_u32(self.flags)?;
        writer.write_index(self.public_key_or_token)?;
        writer.write_index(self.name)?;
        writer.write_index(self.culture)?;
        writer.write_index(self.hash_value)?;
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
            0x01, 0x01, // major_version
            0x02, 0x02, // minor_version
            0x03, 0x03, // build_number
            0x04, 0x04, // revision_number
            0x05, 0x05, 0x05, 0x05, // flags
            0x06, 0x06, // public_key_or_token
            0x07, 0x07, // name
            0x08, 0x08, // culture
            0x09, 0x09, // hash_value
        ];

        let info = TableInfo::new_test(
            &[(TableId::AssemblyRef, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::AssemblyRef, &info);
        assert_eq!(layout.row_size(), 20);

        let table =
            MetadataTable::<AssemblyRefRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &AssemblyRefRaw| {
            assert_eq!(row.major_version, 0x0101);
            assert_eq!(row.minor_version, 0x0202);
            assert_eq!(row.build_number, 0x0303);
            assert_eq!(row.revision_number, 0x0404);
            assert_eq!(row.flags, 0x05050505);
            assert_eq!(row.public_key_or_token, 0x0606);
            assert_eq!(row.name, 0x0707);
            assert_eq!(row.culture, 0x0808);
            assert_eq!(row.hash_value, 0x0909);
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
            0x01, 0x01, // major_version
            0x02, 0x02, // minor_version
            0x03, 0x03, // build_number
            0x04, 0x04, // revision_number
            0x05, 0x05, 0x05, 0x05, // flags
            0x06, 0x06, 0x06, 0x06, // public_key_or_token
            0x07, 0x07, 0x07, 0x07, // name
            0x08, 0x08, 0x08, 0x08, // culture
            0x09, 0x09, 0x09, 0x09, // hash_value
        ];

        let info = TableInfo::new_test(
            &[(TableId::AssemblyRef, 1)],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::AssemblyRef, &info);
        assert_eq!(layout.row_size(), 28);

        let table =
            MetadataTable::<AssemblyRefRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &AssemblyRefRaw| {
            assert_eq!(row.major_version, 0x0101);
            assert_eq!(row.minor_version, 0x0202);
            assert_eq!(row.build_number, 0x0303);
            assert_eq!(row.revision_number, 0x0404);
            assert_eq!(row.flags, 0x05050505);
            assert_eq!(row.public_key_or_token, 0x06060606);
            assert_eq!(row.name, 0x07070707);
            assert_eq!(row.culture, 0x08080808);
            assert_eq!(row.hash_value, 0x09090909);
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
