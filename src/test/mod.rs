//! Shared helpers for unit tests.

use crate::{
    file::io::{write_le, write_le_at},
    metadata::{
        streams::TablesStream,
        tables::{
            CodedIndex, CodedIndexType, FieldRaw, MethodDefRaw, PropertyMapRaw, PropertyRaw,
            TypeDefRaw,
        },
    },
};

/// Builds a [`TablesStream`] from rows, with heap and signature columns filled with
/// placeholder values.
///
/// Rows are collected first and pushed in table order by [`TablesStreamBuilder::build`], so
/// the calls can come in any order.
#[derive(Default)]
pub struct TablesStreamBuilder {
    type_defs: Vec<TypeDefRaw>,
    fields: u32,
    methods: u32,
    property_maps: Vec<PropertyMapRaw>,
    properties: u32,
}

impl TablesStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `TypeDef` row without a base type
    pub fn type_def(mut self, flags: u32, field_list: u32, method_list: u32) -> Self {
        let rid = self.type_defs.len() as u32 + 1;
        self.type_defs.push(TypeDefRaw {
            flags,
            type_name: rid,
            type_namespace: 0,
            extends: CodedIndex::null(CodedIndexType::TypeDefOrRef),
            field_list,
            method_list,
        });
        self
    }

    /// Add `count` private fields
    pub fn field_rows(mut self, count: u32) -> Self {
        self.fields += count;
        self
    }

    /// Add `count` public methods without parameters
    pub fn method_rows(mut self, count: u32) -> Self {
        self.methods += count;
        self
    }

    pub fn property_map(mut self, parent: u32, property_list: u32) -> Self {
        self.property_maps.push(PropertyMapRaw {
            parent,
            property_list,
        });
        self
    }

    pub fn property_rows(mut self, count: u32) -> Self {
        self.properties += count;
        self
    }

    pub fn build(self) -> TablesStream {
        let mut stream = TablesStream::new();

        let type_defs = stream.table_mut::<TypeDefRaw>().unwrap();
        for row in self.type_defs {
            type_defs.push(row).unwrap();
        }

        let fields = stream.table_mut::<FieldRaw>().unwrap();
        for rid in 1..=self.fields {
            fields
                .push(FieldRaw {
                    flags: 0x0001,
                    name: rid,
                    signature: 1,
                })
                .unwrap();
        }

        let methods = stream.table_mut::<MethodDefRaw>().unwrap();
        for rid in 1..=self.methods {
            methods
                .push(MethodDefRaw {
                    rva: 0,
                    impl_flags: 0,
                    flags: 0x0006,
                    name: rid,
                    signature: 1,
                    param_list: 1,
                })
                .unwrap();
        }

        let property_maps = stream.table_mut::<PropertyMapRaw>().unwrap();
        for row in self.property_maps {
            property_maps.push(row).unwrap();
        }

        let properties = stream.table_mut::<PropertyRaw>().unwrap();
        for rid in 1..=self.properties {
            properties
                .push(PropertyRaw {
                    flags: 0,
                    name: rid,
                    signature: 1,
                })
                .unwrap();
        }

        stream.sync_layouts();
        stream
    }
}

/// A minimal PE32 image with one `.text` section holding a CLR runtime header at RVA 0x2000,
/// directly followed by `metadata` at RVA 0x2048.
pub fn build_pe(metadata: &[u8]) -> Vec<u8> {
    let section_size = 72 + metadata.len();
    let raw_size = section_size.next_multiple_of(0x200);
    let mut pe = vec![0_u8; 0x200 + raw_size];

    pe[0..2].copy_from_slice(b"MZ");
    write_le::<u32>(&mut pe[0x3C..], 0x80).unwrap();
    pe[0x80..0x84].copy_from_slice(b"PE\0\0");

    let mut offset = 0x84;
    for value in [0x014C_u16, 1] {
        write_le_at::<u16>(&mut pe, &mut offset, value).unwrap();
    }
    for value in [0_u32, 0, 0] {
        write_le_at::<u32>(&mut pe, &mut offset, value).unwrap();
    }
    write_le_at::<u16>(&mut pe, &mut offset, 0xE0).unwrap();
    write_le_at::<u16>(&mut pe, &mut offset, 0x2102).unwrap();

    // Standard fields
    write_le_at::<u16>(&mut pe, &mut offset, 0x010B).unwrap();
    write_le_at::<u8>(&mut pe, &mut offset, 8).unwrap();
    write_le_at::<u8>(&mut pe, &mut offset, 0).unwrap();
    for value in [raw_size as u32, 0, 0, 0, 0x2000, 0] {
        write_le_at::<u32>(&mut pe, &mut offset, value).unwrap();
    }

    // Windows fields
    for value in [0x1000_0000_u32, 0x2000, 0x200] {
        write_le_at::<u32>(&mut pe, &mut offset, value).unwrap();
    }
    for value in [4_u16, 0, 0, 0, 4, 0] {
        write_le_at::<u16>(&mut pe, &mut offset, value).unwrap();
    }
    let image_size = 0x2000 + section_size.next_multiple_of(0x2000) as u32;
    for value in [0_u32, image_size, 0x200, 0] {
        write_le_at::<u32>(&mut pe, &mut offset, value).unwrap();
    }
    write_le_at::<u16>(&mut pe, &mut offset, 3).unwrap();
    write_le_at::<u16>(&mut pe, &mut offset, 0x8540).unwrap();
    for value in [0x10_0000_u32, 0x1000, 0x10_0000, 0x1000, 0, 16] {
        write_le_at::<u32>(&mut pe, &mut offset, value).unwrap();
    }

    // Data directory 14, the CLR runtime header
    assert_eq!(offset, 0xF8);
    let mut clr = 0xF8 + 14 * 8;
    write_le_at::<u32>(&mut pe, &mut clr, 0x2000).unwrap();
    write_le_at::<u32>(&mut pe, &mut clr, 72).unwrap();

    // Section table
    let mut offset = 0x178;
    pe[offset..offset + 5].copy_from_slice(b".text");
    offset += 8;
    for value in [section_size as u32, 0x2000, raw_size as u32, 0x200, 0, 0] {
        write_le_at::<u32>(&mut pe, &mut offset, value).unwrap();
    }
    write_le_at::<u32>(&mut pe, &mut offset, 0).unwrap();
    write_le_at::<u32>(&mut pe, &mut offset, 0x6000_0020).unwrap();

    // CLR runtime header
    let mut offset = 0x200;
    write_le_at::<u32>(&mut pe, &mut offset, 72).unwrap();
    write_le_at::<u16>(&mut pe, &mut offset, 2).unwrap();
    write_le_at::<u16>(&mut pe, &mut offset, 5).unwrap();
    write_le_at::<u32>(&mut pe, &mut offset, 0x2048).unwrap();
    write_le_at::<u32>(&mut pe, &mut offset, metadata.len() as u32).unwrap();
    write_le_at::<u32>(&mut pe, &mut offset, 1).unwrap();

    pe[0x248..0x248 + metadata.len()].copy_from_slice(metadata);
    pe
}
