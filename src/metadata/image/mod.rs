//! # Metadata Image
//!
//! [`MetadataImage`] ties the metadata root, the four heaps and the tables stream together and
//! resolves table rows into entities on demand.
//!
//! Entities are created the first time their token is requested and cached per token, so two
//! lookups of the same token yield the same `Arc`. Child lists of types and methods are
//! resolved lazily as well, and resolving them records the parent on every child.
//!
//! ```rust,no_run
//! use dotmeta::metadata::image::MetadataImage;
//! use std::path::Path;
//!
//! let image = MetadataImage::from_file(Path::new("tests/samples/example.dll"))?;
//! for ty in image.types()? {
//!     println!("{} with {} fields", ty.full_name(), ty.fields(&image)?.len());
//! }
//! # Ok::<(), dotmeta::Error>(())
//! ```
//!
//! All resolution APIs take `&self`. Anything that changes rows or heaps needs `&mut self`
//! and drops the entity cache, as cached entities would no longer match their rows.

mod assembly;
mod attribute;
mod member;
mod members;
mod module;
mod types;

pub use assembly::*;
pub use attribute::*;
pub use member::*;
pub use members::*;
pub use module::*;
pub use types::*;

use std::{path::Path, sync::Arc};

use dashmap::DashMap;

use crate::{
    file::File,
    metadata::{
        root::Root,
        streams::{Blob, Guid, Strings, TablesStream, TablesStreamOptions, UserStrings},
        tables::{
            AssemblyRefRaw, CustomAttributeRaw, TableId, TypeDefRaw, TypeRefRaw,
        },
        token::Token,
    },
    Error::MemberNotFound,
    Result,
};

/// Runtime version string written by current compilers
pub const DEFAULT_VERSION: &str = "v4.0.30319";

/// Stream order of a newly created image
const DEFAULT_STREAM_ORDER: [&str; 5] = ["#~", "#Strings", "#US", "#GUID", "#Blob"];

macro_rules! typed_member {
    ($(#[$attr:meta])* $name:ident, $table:ident, $variant:ident, $entity:ident) => {
        $(#[$attr])*
        ///
        /// # Errors
        /// Returns an error if the row or one of the heap values it refers to is malformed
        pub fn $name(&self, rid: u32) -> Result<Option<Arc<$entity>>> {
            match self.member(Token::from_parts(TableId::$table, rid))? {
                Some(Member::$variant(entity)) => Ok(Some(entity)),
                _ => Ok(None),
            }
        }
    };
}

/// The metadata of one module: root, heaps, tables and the entities resolved from them
#[derive(Debug)]
pub struct MetadataImage {
    root: Root,
    tables: TablesStream,
    strings: Strings,
    blob: Blob,
    guid: Guid,
    user_strings: UserStrings,
    extra_streams: Vec<(String, Vec<u8>)>,
    cache: DashMap<Token, Member>,
}

impl MetadataImage {
    /// An empty image with an empty tables stream and empty heaps
    ///
    /// ## Arguments
    /// * 'version' - The runtime version string of the metadata root, e.g. [`DEFAULT_VERSION`]
    #[must_use]
    pub fn new(version: &str) -> MetadataImage {
        MetadataImage {
            root: Root::new(version),
            tables: TablesStream::new(),
            strings: Strings::new(),
            blob: Blob::new(),
            guid: Guid::new(),
            user_strings: UserStrings::new(),
            extra_streams: Vec::new(),
            cache: DashMap::new(),
        }
    }

    /// Load the metadata of a PE file on disk
    ///
    /// # Errors
    /// Returns an error if the file is not a .NET image or its metadata is malformed
    pub fn from_file(path: &Path) -> Result<MetadataImage> {
        let file = File::from_file(path)?;
        Self::from_pe(&file)
    }

    /// Load the metadata of an already parsed PE file
    ///
    /// # Errors
    /// Returns an error if the file has no CLR runtime header or its metadata is malformed
    pub fn from_pe(file: &File) -> Result<MetadataImage> {
        Self::from_metadata(file.metadata()?)
    }

    /// Parse metadata starting at its root, with default options
    ///
    /// ## Arguments
    /// * 'data' - The bytes of the metadata, starting with the `BSJB` signature
    ///
    /// # Errors
    /// Returns an error if the root or one of the streams is malformed, or there is no tables
    /// stream
    pub fn from_metadata(data: &[u8]) -> Result<MetadataImage> {
        Self::from_metadata_with_options(data, TablesStreamOptions::default())
    }

    /// Parse metadata starting at its root
    ///
    /// ## Arguments
    /// * 'data'    - The bytes of the metadata, starting with the `BSJB` signature
    /// * 'options' - Options of the tables stream
    ///
    /// # Errors
    /// Returns an error if the root or one of the streams is malformed, or there is no tables
    /// stream
    pub fn from_metadata_with_options(
        data: &[u8],
        options: TablesStreamOptions,
    ) -> Result<MetadataImage> {
        let root = Root::read(data)?;

        let mut tables = None;
        let mut strings = None;
        let mut blob = None;
        let mut guid = None;
        let mut user_strings = None;
        let mut extra_streams = Vec::new();

        for header in &root.stream_headers {
            let stream = Root::stream_data(header, data)?;
            if header.is_tables() {
                let mut stream = TablesStream::with_options(stream, options)?;
                stream.set_name(&header.name);
                tables = Some(stream);
                continue;
            }

            match header.name.as_str() {
                "#Strings" => strings = Some(Strings::from(stream)?),
                "#Blob" => blob = Some(Blob::from(stream)?),
                "#GUID" => guid = Some(Guid::from(stream)?),
                "#US" => user_strings = Some(UserStrings::from(stream)?),
                _ => extra_streams.push((header.name.clone(), stream.to_vec())),
            }
        }

        let Some(tables) = tables else {
            return Err(malformed_error!("Metadata has no tables stream"));
        };

        log::debug!(
            "Loaded metadata '{}' with {} streams, {} present tables",
            root.version,
            root.stream_headers.len(),
            tables.present_tables().count()
        );

        Ok(MetadataImage {
            root,
            tables,
            strings: strings.unwrap_or_default(),
            blob: blob.unwrap_or_default(),
            guid: guid.unwrap_or_default(),
            user_strings: user_strings.unwrap_or_default(),
            extra_streams,
            cache: DashMap::new(),
        })
    }

    /// The metadata root as read, or as last written
    #[must_use]
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// The tables stream
    #[must_use]
    pub fn tables(&self) -> &TablesStream {
        &self.tables
    }

    /// Mutable access to the tables stream. Drops all cached entities.
    pub fn tables_mut(&mut self) -> &mut TablesStream {
        self.cache.clear();
        &mut self.tables
    }

    /// The `#Strings` heap
    #[must_use]
    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    /// Mutable access to the `#Strings` heap. Drops all cached entities.
    pub fn strings_mut(&mut self) -> &mut Strings {
        self.cache.clear();
        &mut self.strings
    }

    /// The `#Blob` heap
    #[must_use]
    pub fn blob(&self) -> &Blob {
        &self.blob
    }

    /// Mutable access to the `#Blob` heap. Drops all cached entities.
    pub fn blob_mut(&mut self) -> &mut Blob {
        self.cache.clear();
        &mut self.blob
    }

    /// The `#GUID` heap
    #[must_use]
    pub fn guid(&self) -> &Guid {
        &self.guid
    }

    /// Mutable access to the `#GUID` heap. Drops all cached entities.
    pub fn guid_mut(&mut self) -> &mut Guid {
        self.cache.clear();
        &mut self.guid
    }

    /// The `#US` heap
    #[must_use]
    pub fn user_strings(&self) -> &UserStrings {
        &self.user_strings
    }

    /// Mutable access to the `#US` heap
    pub fn user_strings_mut(&mut self) -> &mut UserStrings {
        &mut self.user_strings
    }

    /// Streams this crate does not interpret, e.g. `#Pdb` or `#JTD`, in directory order
    #[must_use]
    pub fn extra_streams(&self) -> &[(String, Vec<u8>)] {
        &self.extra_streams
    }

    /// The string at `index` of the `#Strings` heap
    pub(crate) fn string(&self, index: u32) -> Result<&str> {
        self.strings.get(index as usize)
    }

    /// The string at `index`, `None` for the empty string
    pub(crate) fn string_value(&self, index: u32) -> Result<Option<String>> {
        let value = self.string(index)?;
        Ok((!value.is_empty()).then(|| value.to_string()))
    }

    /// The blob at `index`, empty for index 0
    pub(crate) fn blob_value(&self, index: u32) -> Result<&[u8]> {
        if index == 0 {
            return Ok(&[]);
        }

        self.blob.get(index as usize)
    }

    /// The GUID at 1-based `index`, `None` for index 0
    pub(crate) fn guid_value(&self, index: u32) -> Result<Option<uguid::Guid>> {
        if index == 0 {
            return Ok(None);
        }

        self.guid.get(index as usize).map(Some)
    }

    /// The entity `token` refers to, `None` if the row does not exist or its table has no
    /// entity type
    ///
    /// # Errors
    /// Returns an error if the row or one of the heap values it refers to is malformed
    pub fn member(&self, token: Token) -> Result<Option<Member>> {
        if let Some(member) = self.cache.get(&token) {
            return Ok(Some(member.value().clone()));
        }

        // No guard is held while reading, entities may resolve other tokens
        let Some(member) = Member::read(self, token)? else {
            return Ok(None);
        };

        Ok(Some(self.cache.entry(token).or_insert(member).value().clone()))
    }

    /// Like [`MetadataImage::member`], for callers that need the entity to exist
    ///
    /// # Errors
    /// Returns [`crate::Error::MemberNotFound`] if there is no such entity
    pub fn resolve(&self, token: Token) -> Result<Member> {
        self.member(token)?.ok_or(MemberNotFound(token))
    }

    /// Number of cached entities
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    typed_member!(
        /// The `Module` row `rid`
        module_def, Module, Module, ModuleDefinition
    );
    typed_member!(
        /// The `TypeRef` row `rid`
        type_ref, TypeRef, TypeRef, TypeReference
    );
    typed_member!(
        /// The `TypeDef` row `rid`
        type_def, TypeDef, TypeDef, TypeDefinition
    );
    typed_member!(
        /// The `Field` row `rid`
        field, Field, Field, FieldDefinition
    );
    typed_member!(
        /// The `MethodDef` row `rid`
        method, MethodDef, Method, MethodDefinition
    );
    typed_member!(
        /// The `Param` row `rid`
        param, Param, Param, ParameterDefinition
    );
    typed_member!(
        /// The `MemberRef` row `rid`
        member_ref, MemberRef, MemberRef, MemberReference
    );
    typed_member!(
        /// The `CustomAttribute` row `rid`
        custom_attribute, CustomAttribute, CustomAttribute, CustomAttribute
    );
    typed_member!(
        /// The `Property` row `rid`
        property, Property, Property, PropertyDefinition
    );
    typed_member!(
        /// The `Event` row `rid`
        event, Event, Event, EventDefinition
    );
    typed_member!(
        /// The `ModuleRef` row `rid`
        module_ref, ModuleRef, ModuleRef, ModuleReference
    );
    typed_member!(
        /// The `TypeSpec` row `rid`
        type_spec, TypeSpec, TypeSpec, TypeSpecification
    );
    typed_member!(
        /// The `Assembly` row `rid`
        assembly_def, Assembly, Assembly, AssemblyDefinition
    );
    typed_member!(
        /// The `AssemblyRef` row `rid`
        assembly_ref, AssemblyRef, AssemblyRef, AssemblyReference
    );

    /// The module this metadata describes
    ///
    /// # Errors
    /// Returns an error if the `Module` row is malformed
    pub fn module(&self) -> Result<Option<Arc<ModuleDefinition>>> {
        self.module_def(1)
    }

    /// The assembly manifest, `None` for modules that are not the manifest module
    ///
    /// # Errors
    /// Returns an error if the `Assembly` row is malformed
    pub fn assembly(&self) -> Result<Option<Arc<AssemblyDefinition>>> {
        self.assembly_def(1)
    }

    /// All `TypeDef` rows, in table order. The first one is usually `<Module>`.
    ///
    /// # Errors
    /// Returns an error if a row is malformed
    pub fn types(&self) -> Result<Vec<Arc<TypeDefinition>>> {
        self.collect(self.tables.row_count(TableId::TypeDef), Self::type_def)
    }

    /// All `TypeRef` rows, in table order
    ///
    /// # Errors
    /// Returns an error if a row is malformed
    pub fn type_refs(&self) -> Result<Vec<Arc<TypeReference>>> {
        self.collect(self.tables.row_count(TableId::TypeRef), Self::type_ref)
    }

    /// All `AssemblyRef` rows, in table order
    ///
    /// # Errors
    /// Returns an error if a row is malformed
    pub fn assembly_refs(&self) -> Result<Vec<Arc<AssemblyReference>>> {
        self.collect(self.tables.row_count(TableId::AssemblyRef), Self::assembly_ref)
    }

    fn collect<T>(
        &self,
        rows: u32,
        get: impl Fn(&Self, u32) -> Result<Option<Arc<T>>>,
    ) -> Result<Vec<Arc<T>>> {
        let mut entities = Vec::with_capacity(rows as usize);
        for rid in 1..=rows {
            if let Some(entity) = get(self, rid)? {
                entities.push(entity);
            }
        }
        Ok(entities)
    }

    /// The first type called `name` in `namespace`
    ///
    /// # Errors
    /// Returns an error if the `TypeDef` table or a name is malformed
    pub fn find_type(&self, namespace: &str, name: &str) -> Result<Option<Arc<TypeDefinition>>> {
        let table = self.tables.table::<TypeDefRaw>()?;
        for (index, row) in table.iter()?.enumerate() {
            if self.string(row.type_name)? == name && self.string(row.type_namespace)? == namespace
            {
                #[allow(clippy::cast_possible_truncation)]
                return self.type_def(index as u32 + 1);
            }
        }

        Ok(None)
    }

    /// The first type reference called `name` in `namespace`
    ///
    /// # Errors
    /// Returns an error if the `TypeRef` table or a name is malformed
    pub fn find_type_ref(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<Arc<TypeReference>>> {
        let table = self.tables.table::<TypeRefRaw>()?;
        for (index, row) in table.iter()?.enumerate() {
            if self.string(row.type_name)? == name && self.string(row.type_namespace)? == namespace
            {
                #[allow(clippy::cast_possible_truncation)]
                return self.type_ref(index as u32 + 1);
            }
        }

        Ok(None)
    }

    /// The assembly reference called `name`
    ///
    /// # Errors
    /// Returns an error if the `AssemblyRef` table or a name is malformed
    pub fn find_assembly_ref(&self, name: &str) -> Result<Option<Arc<AssemblyReference>>> {
        let table = self.tables.table::<AssemblyRefRaw>()?;
        for (index, row) in table.iter()?.enumerate() {
            if self.string(row.name)? == name {
                #[allow(clippy::cast_possible_truncation)]
                return self.assembly_ref(index as u32 + 1);
            }
        }

        Ok(None)
    }

    /// Custom attributes applied to `parent`, in table order
    ///
    /// # Errors
    /// Returns an error if the `CustomAttribute` table or one of the value blobs is malformed
    pub fn custom_attributes(&self, parent: Token) -> Result<Vec<Arc<CustomAttribute>>> {
        let table = self.tables.table::<CustomAttributeRaw>()?;
        let mut attributes = Vec::new();
        for (index, row) in table.iter()?.enumerate() {
            if row.parent.token != parent {
                continue;
            }

            #[allow(clippy::cast_possible_truncation)]
            if let Some(attribute) = self.custom_attribute(index as u32 + 1)? {
                attributes.push(attribute);
            }
        }

        Ok(attributes)
    }

    /// Serialize the metadata root with all streams.
    ///
    /// The heap size flags of the tables stream are derived from the heaps first. Streams
    /// keep the order they were read in; heaps that did not exist and are no longer empty are
    /// appended.
    ///
    /// # Errors
    /// Returns an error if a table fails to decode or a value does not fit its column
    pub fn write_metadata(&mut self) -> Result<Vec<u8>> {
        self.tables
            .set_heap_sizes(&self.strings, &self.guid, &self.blob);
        let tables = self.tables.write()?;

        let mut order: Vec<String> = if self.root.stream_headers.is_empty() {
            DEFAULT_STREAM_ORDER.iter().map(ToString::to_string).collect()
        } else {
            self.root
                .stream_headers
                .iter()
                .map(|header| header.name.clone())
                .collect()
        };

        let heaps = [
            ("#Strings", self.strings.is_empty()),
            ("#US", self.user_strings.is_empty()),
            ("#GUID", self.guid.is_empty()),
            ("#Blob", self.blob.is_empty()),
        ];
        for (name, empty) in heaps {
            if !empty && !order.iter().any(|stream| stream == name) {
                order.push(name.to_string());
            }
        }

        let tables_name = self.tables.name().to_string();
        let mut streams: Vec<(&str, &[u8])> = Vec::with_capacity(order.len());
        for name in &order {
            let stream: (&str, &[u8]) = match name.as_str() {
                "#~" | "#-" | "#Schema" => (&tables_name, &tables),
                "#Strings" => ("#Strings", self.strings.data()),
                "#US" => ("#US", self.user_strings.data()),
                "#GUID" => ("#GUID", self.guid.data()),
                "#Blob" => ("#Blob", self.blob.data()),
                other => match self.extra_streams.iter().find(|(extra, _)| extra == other) {
                    Some((extra, data)) => (extra, data),
                    None => continue,
                },
            };
            streams.push(stream);
        }

        self.root.write(&streams)
    }
}
