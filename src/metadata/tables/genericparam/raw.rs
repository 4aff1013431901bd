use crate::{
    metadata::tables::{CodedIndex, CodedIndexType, MetadataRow, RowReader, RowWriter, TableId},
    Result,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The `GenericParam` table holds the generic parameters of types and methods. `TableId` = 0x2A
pub struct GenericParamRaw {
    /// a 2-byte index of the parameter, numbered left to right from 0
    pub number: u16,
    /// a 2-byte bitmask of type `GenericParamAttributes`, §II.23.1.7
    pub flags: u16,
    /// a `TypeOrMethodDef` coded index
    pub owner: CodedIndex,
    /// an index into the String heap
    pub name: u32,
}

impl MetadataRow for GenericParamRaw {
    const TABLE_ID: TableId = TableId::GenericParam;

    fn column(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(u32::from(self.number)),
            1 => Some(u32::from(self.flags)),
            2 => self.owner.value().ok(),
            3 => Some(self.name),
            _ => None,
        }
    }

    fn row_read(reader: &mut RowReader<'_>) -> Result<Self> {
        Ok(GenericParamRaw {
            number: reader.read_u16()?,
            flags: reader.read_u16()?,
            owner: reader.read_coded(CodedIndexType::TypeOrMethodDef)?,
            name: reader.read_index()?,
        })
    }

    fn row_write(&self, writer: &mut RowWriter<'_>) -> Result<()> {
        writer.write_u16(self.number)?;
        writer.write_u16(self.flags)?;
        writer.write_coded(&self.owner)?;
        writer.write_index(self.name)?;
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
            0x01, 0x01, // number
            0x02, 0x02, // flags
            0x03, 0x03, // owner
            0x04, 0x04, // name
        ];

        let info = TableInfo::new_test(
            &[(TableId::GenericParam, 1)],
            false,
            false,
            false,
        );
        let layout = TableLayout::resolve(TableId::GenericParam, &info);
        assert_eq!(layout.row_size(), 8);

        let table =
            MetadataTable::<GenericParamRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &GenericParamRaw| {
            assert_eq!(row.number, 0x0101);
            assert_eq!(row.flags, 0x0202);
            assert_eq!(
                row.owner,
                CodedIndex::new(TableId::MethodDef, 0x181, CodedIndexType::TypeOrMethodDef)
            );
            assert_eq!(row.name, 0x0404);
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
            0x01, 0x01, // number
            0x02, 0x02, // flags
            0x03, 0x03, 0x03, 0x00, // owner
            0x04, 0x04, 0x04, 0x04, // name
        ];

        let info = TableInfo::new_test(
            &[
                (TableId::GenericParam, 1),
                (TableId::TypeDef, u32::from(u16::MAX) + 3),
            ],
            true,
            true,
            true,
        );
        let layout = TableLayout::resolve(TableId::GenericParam, &info);
        assert_eq!(layout.row_size(), 12);

        let table =
            MetadataTable::<GenericParamRaw>::serialized(Arc::from(data.clone()), 0, 1, layout);

        let eval = |row: &GenericParamRaw| {
            assert_eq!(row.number, 0x0101);
            assert_eq!(row.flags, 0x0202);
            assert_eq!(
                row.owner,
                CodedIndex::new(TableId::MethodDef, 0x18181, CodedIndexType::TypeOrMethodDef)
            );
            assert_eq!(row.name, 0x04040404);
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
