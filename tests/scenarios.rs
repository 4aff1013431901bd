//! End to end scenarios over whole metadata images.

mod common;

use std::sync::Arc;

use dotmeta::{
    metadata::{
        image::{MetadataImage, Member, Version, DEFAULT_VERSION},
        streams::{SortedMaskPolicy, TablesStream, TablesStreamOptions, COMPILER_SORTED_MASK},
        tables::{
            AssemblyFlags, AssemblyHashAlgorithm, AssemblyRaw, AssemblyRefRaw, CodedIndex,
            CodedIndexType, CustomAttributeRaw, FieldRaw, MemberRefRaw, NestedClassRaw,
            PropertyMapRaw, PropertyRaw, TableId, TypeDefRaw, TypeRefRaw,
        },
        token::Token,
    },
    Error, Result,
};

use common::{init_logging, type_def};

/// The ECMA standard public key, whose token is b77a5c561934e089
const ECMA_KEY: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

fn assembly_image() -> Result<MetadataImage> {
    let mut image = MetadataImage::new(DEFAULT_VERSION);
    let name = image.strings_mut().add("TestAsm")?;

    image.tables_mut().table_mut::<AssemblyRaw>()?.push(AssemblyRaw {
        hash_alg_id: 0x8004,
        major_version: 1,
        minor_version: 2,
        build_number: 3,
        revision_number: 4,
        flags: 0,
        public_key: 0,
        name,
        culture: 0,
    })?;

    Ok(image)
}

#[test]
fn assembly_row_after_write() -> Result<()> {
    init_logging();

    let mut image = assembly_image()?;
    let data = image.write_metadata()?;

    let image = MetadataImage::from_metadata(&data)?;
    let assembly = image.assembly()?.ok_or(Error::Empty)?;
    assert_eq!(assembly.name, "TestAsm");
    assert_eq!(assembly.version, Version::new(1, 2, 3, 4));
    assert_eq!(assembly.version.to_string(), "1.2.3.4");
    assert_eq!(assembly.hash_algorithm, AssemblyHashAlgorithm::Sha1);
    assert!(assembly.culture.is_none());
    assert!(assembly.public_key.is_none());
    assert_eq!(assembly.token, Token::new(0x2000_0001));
    Ok(())
}

#[test]
fn assembly_references() -> Result<()> {
    let mut image = assembly_image()?;
    let mscorlib = image.strings_mut().add("mscorlib")?;
    let other = image.strings_mut().add("Other")?;
    let key = image.blob_mut().add(&ECMA_KEY)?;
    let token = image
        .blob_mut()
        .add(&[0xB0, 0x3F, 0x5F, 0x7F, 0x11, 0xD5, 0x0A, 0x3A])?;

    let refs = image.tables_mut().table_mut::<AssemblyRefRaw>()?;
    for (name, flags, public_key_or_token) in [
        (mscorlib, AssemblyFlags::PUBLIC_KEY.bits(), key),
        (other, 0, token),
    ] {
        refs.push(AssemblyRefRaw {
            major_version: 4,
            minor_version: 0,
            build_number: 0,
            revision_number: 0,
            flags,
            public_key_or_token,
            name,
            culture: 0,
            hash_value: 0,
        })?;
    }

    let data = image.write_metadata()?;
    let image = MetadataImage::from_metadata(&data)?;

    let mscorlib = image.find_assembly_ref("mscorlib")?.ok_or(Error::Empty)?;
    assert_eq!(
        mscorlib.public_key_token(),
        Some([0xB7, 0x7A, 0x5C, 0x56, 0x19, 0x34, 0xE0, 0x89])
    );
    assert_eq!(mscorlib.version.to_string(), "4.0.0.0");

    let other = image.assembly_ref(2)?.ok_or(Error::Empty)?;
    assert_eq!(
        other.public_key_token(),
        Some([0xB0, 0x3F, 0x5F, 0x7F, 0x11, 0xD5, 0x0A, 0x3A])
    );
    assert!(image.find_assembly_ref("Missing")?.is_none());
    assert_eq!(image.assembly_refs()?.len(), 2);
    Ok(())
}

/// `<Module>`, `Outer` with two fields and a property, `Outer/Inner` with two fields
fn type_image() -> Result<MetadataImage> {
    let mut image = MetadataImage::new(DEFAULT_VERSION);
    let strings = image.strings_mut();
    let names = [
        strings.add("<Module>")?,
        strings.add("Outer")?,
        strings.add("Inner")?,
        strings.add("a")?,
        strings.add("b")?,
        strings.add("c")?,
        strings.add("d")?,
        strings.add("Value")?,
        strings.add("Demo")?,
        strings.add("Object")?,
        strings.add("System")?,
        strings.add(".ctor")?,
    ];
    let signature = image.blob_mut().add(&[0x06, 0x08])?;

    let tables = image.tables_mut();
    tables.table_mut::<TypeRefRaw>()?.push(TypeRefRaw {
        resolution_scope: CodedIndex::null(CodedIndexType::ResolutionScope),
        type_name: names[9],
        type_namespace: names[10],
    })?;

    let object = CodedIndex::new(TableId::TypeRef, 1, CodedIndexType::TypeDefOrRef);
    let types = tables.table_mut::<TypeDefRaw>()?;
    types.push(TypeDefRaw {
        type_name: names[0],
        ..type_def(1, 1)
    })?;
    types.push(TypeDefRaw {
        type_name: names[1],
        type_namespace: names[8],
        extends: object,
        ..type_def(1, 1)
    })?;
    types.push(TypeDefRaw {
        flags: 0x0010_0002,
        type_name: names[2],
        extends: object,
        ..type_def(3, 1)
    })?;

    let fields = tables.table_mut::<FieldRaw>()?;
    for name in &names[3..7] {
        fields.push(FieldRaw {
            flags: 0x0001,
            name: *name,
            signature,
        })?;
    }

    tables.table_mut::<NestedClassRaw>()?.push(NestedClassRaw {
        nested_class: 3,
        enclosing_class: 2,
    })?;
    tables.table_mut::<PropertyMapRaw>()?.push(PropertyMapRaw {
        parent: 2,
        property_list: 1,
    })?;
    tables.table_mut::<PropertyRaw>()?.push(PropertyRaw {
        flags: 0,
        name: names[7],
        signature,
    })?;
    tables.table_mut::<MemberRefRaw>()?.push(MemberRefRaw {
        class: CodedIndex::new(TableId::TypeRef, 1, CodedIndexType::MemberRefParent),
        name: names[11],
        signature,
    })?;
    tables
        .table_mut::<CustomAttributeRaw>()?
        .push(CustomAttributeRaw {
            parent: CodedIndex::new(TableId::TypeDef, 2, CodedIndexType::HasCustomAttribute),
            constructor: CodedIndex::new(TableId::MemberRef, 1, CodedIndexType::CustomAttributeType),
            value: 0,
        })?;

    Ok(image)
}

#[test]
fn type_ownership() -> Result<()> {
    let mut image = type_image()?;
    let image = MetadataImage::from_metadata(&image.write_metadata()?)?;

    let types = image.types()?;
    assert_eq!(types.len(), 3);

    let outer = image.find_type("Demo", "Outer")?.ok_or(Error::Empty)?;
    let names: Vec<&str> = outer
        .fields(&image)?
        .iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(outer.extends, Some(Token::from_parts(TableId::TypeRef, 1)));
    assert_eq!(outer.nested_types(&image)?, [Token::from_parts(TableId::TypeDef, 3)]);
    assert_eq!(outer.declaring_type(&image)?, None);

    let properties = outer.properties(&image)?;
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "Value");
    assert_eq!(properties[0].declaring_type(&image)?, Some(outer.token));
    assert!(outer.events(&image)?.is_empty());

    let inner = image.type_def(3)?.ok_or(Error::Empty)?;
    assert!(inner.is_nested());
    assert_eq!(inner.full_name(), "Inner");
    assert_eq!(inner.declaring_type(&image)?, Some(outer.token));
    assert_eq!(inner.fields(&image)?.len(), 2);

    // Fields resolved through their owner share the cached entity
    let field = image.field(3)?.ok_or(Error::Empty)?;
    assert!(Arc::ptr_eq(&field, &inner.fields(&image)?[0]));
    assert_eq!(field.declaring_type(&image)?, Some(inner.token));

    let object = image.find_type_ref("System", "Object")?.ok_or(Error::Empty)?;
    assert_eq!(object.full_name(), "System.Object");
    Ok(())
}

#[test]
fn custom_attribute_constructor() -> Result<()> {
    let image = type_image()?;

    let outer = image.type_def(2)?.ok_or(Error::Empty)?;
    let attributes = outer.custom_attributes(&image)?;
    assert_eq!(attributes.len(), 1);

    match attributes[0].constructor(&image)? {
        Some(Member::MemberRef(constructor)) => {
            assert_eq!(constructor.name, ".ctor");
            assert_eq!(constructor.parent, Token::from_parts(TableId::TypeRef, 1));
            assert!(constructor.is_field());
        }
        other => panic!("unexpected constructor {other:?}"),
    }

    assert!(image
        .custom_attributes(Token::from_parts(TableId::TypeDef, 1))?
        .is_empty());
    Ok(())
}

#[test]
fn concurrent_resolution() -> Result<()> {
    let image = type_image()?;

    let resolved: Vec<Vec<Arc<_>>> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| image.types()))
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().unwrap_or_else(|_| Err(Error::LockError)))
            .collect::<Result<_>>()
    })?;

    for types in &resolved[1..] {
        for (left, right) in types.iter().zip(&resolved[0]) {
            assert!(Arc::ptr_eq(left, right));
        }
    }
    Ok(())
}

#[test]
fn locked_stream_rejects_mutation() -> Result<()> {
    let mut image = assembly_image()?;
    image.tables_mut().lock();

    assert!(image.tables().is_read_only());
    assert!(matches!(
        image.tables_mut().table_mut::<FieldRaw>(),
        Err(Error::NotWritable(TableId::Field))
    ));

    // Reading and writing out still work
    assert!(image.assembly()?.is_some());
    assert!(image.write_metadata().is_ok());
    Ok(())
}

#[test]
fn sorted_mask_follows_row_order() -> Result<()> {
    let mut stream = TablesStream::new();
    let nested = stream.table_mut::<NestedClassRaw>()?;
    for (nested_class, enclosing_class) in [(2, 1), (4, 1), (3, 2)] {
        nested.insert_sorted(NestedClassRaw {
            nested_class,
            enclosing_class,
        })?;
    }

    let data = stream.write()?;
    let parsed = TablesStream::from(&data)?;
    assert_ne!(parsed.read_sorted_mask() & TableId::NestedClass.mask_bit(), 0);
    assert_eq!(
        parsed
            .table::<NestedClassRaw>()?
            .iter()?
            .map(|row| row.nested_class)
            .collect::<Vec<_>>(),
        [2, 3, 4]
    );

    // Swapping two rows breaks the order
    let nested = stream.table_mut::<NestedClassRaw>()?;
    let first = nested.remove(1)?;
    nested.push(first)?;
    let parsed = TablesStream::from(&stream.write()?)?;
    assert_eq!(parsed.read_sorted_mask() & TableId::NestedClass.mask_bit(), 0);

    stream.set_options(TablesStreamOptions {
        sorted_mask: SortedMaskPolicy::CompilerDefault,
        ..TablesStreamOptions::default()
    });
    let parsed = TablesStream::from(&stream.write()?)?;
    assert_eq!(parsed.read_sorted_mask(), COMPILER_SORTED_MASK);
    Ok(())
}

#[test]
fn unknown_streams_are_kept() -> Result<()> {
    let mut image = assembly_image()?;
    let data = image.write_metadata()?;

    // Append a #Pdb stream by rebuilding the root around the existing streams
    let mut root = image.root().clone();
    let mut streams: Vec<(String, Vec<u8>)> = Vec::new();
    for header in &root.stream_headers {
        let stream = dotmeta::metadata::root::Root::stream_data(header, &data)?;
        streams.push((header.name.clone(), stream.to_vec()));
    }
    streams.push(("#Pdb".to_string(), vec![0xAB; 8]));
    let borrowed: Vec<(&str, &[u8])> = streams
        .iter()
        .map(|(name, data)| (name.as_str(), data.as_slice()))
        .collect();
    let data = root.write(&borrowed)?;

    let mut image = MetadataImage::from_metadata(&data)?;
    assert_eq!(image.extra_streams().len(), 1);
    assert_eq!(image.extra_streams()[0].0, "#Pdb");

    let written = image.write_metadata()?;
    let reloaded = MetadataImage::from_metadata(&written)?;
    assert_eq!(reloaded.extra_streams()[0].1, vec![0xAB; 8]);
    assert_eq!(
        reloaded.assembly()?.map(|assembly| assembly.name.clone()),
        Some("TestAsm".to_string())
    );
    Ok(())
}
