//! Builders shared by the integration tests.
#![allow(dead_code)]

use dotmeta::{
    metadata::{
        streams::TablesStream,
        tables::{CodedIndex, CodedIndexType, FieldRaw, MethodDefRaw, TypeDefRaw},
    },
    Result,
};

/// Route `log` output of the crate to the test output, `RUST_LOG` selects the level
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A `TypeDef` row without base type whose name is a placeholder offset
pub fn type_def(field_list: u32, method_list: u32) -> TypeDefRaw {
    TypeDefRaw {
        flags: 0x0010_0001,
        type_name: 0,
        type_namespace: 0,
        extends: CodedIndex::null(CodedIndexType::TypeDefOrRef),
        field_list,
        method_list,
    }
}

/// A stream with one type per entry of `field_lists` and `fields` field rows
pub fn types_with_fields(field_lists: &[u32], fields: u32) -> Result<TablesStream> {
    let mut stream = TablesStream::new();

    let types = stream.table_mut::<TypeDefRaw>()?;
    for field_list in field_lists {
        types.push(type_def(*field_list, 1))?;
    }

    let table = stream.table_mut::<FieldRaw>()?;
    for _ in 0..fields {
        table.push(FieldRaw {
            flags: 0x0001,
            name: 0,
            signature: 0,
        })?;
    }

    stream.sync_layouts();
    Ok(stream)
}

/// `count` methods without body, parameters starting at `param_list`
pub fn push_methods(stream: &mut TablesStream, count: u32, param_list: u32) -> Result<()> {
    let table = stream.table_mut::<MethodDefRaw>()?;
    for _ in 0..count {
        table.push(MethodDefRaw {
            rva: 0,
            impl_flags: 0,
            flags: 0x0006,
            name: 0,
            signature: 0,
            param_list,
        })?;
    }

    stream.sync_layouts();
    Ok(())
}
