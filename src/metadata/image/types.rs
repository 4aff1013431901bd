//! Type definitions, references and specifications.

use std::sync::{Arc, OnceLock};

use crate::{
    metadata::{
        image::{
            CustomAttribute, EventDefinition, FieldDefinition, MetadataImage, MethodDefinition,
            PropertyDefinition,
        },
        tables::{NestedClassRaw, TableId, TypeAttributes, TypeDefRaw, TypeRefRaw, TypeSpecRaw},
        token::Token,
    },
    Result,
};

fn full_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// A `TypeRef` row, a type defined elsewhere
#[derive(Debug)]
pub struct TypeReference {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// `Module`, `ModuleRef`, `AssemblyRef` or enclosing `TypeRef` the type lives in. A null
    /// token for exported types looked up through the `ExportedType` table.
    pub resolution_scope: Token,
    /// Type name
    pub name: String,
    /// Namespace, empty for nested types
    pub namespace: String,
}

impl TypeReference {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<TypeReference>> {
        let Some(row) = image.tables().row::<TypeRefRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(TypeReference {
            rid,
            token: Token::from_parts(TableId::TypeRef, rid),
            resolution_scope: row.resolution_scope.token,
            name: image.string(row.type_name)?.to_string(),
            namespace: image.string(row.type_namespace)?.to_string(),
        }))
    }

    /// `Namespace.Name`, or the name alone for types without namespace
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.namespace, &self.name)
    }
}

/// A `TypeDef` row.
///
/// Members are resolved on first access and cached. Resolving a member list also records
/// this type as the declaring type of each member.
#[derive(Debug)]
pub struct TypeDefinition {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// `TypeAttributes`
    pub flags: u32,
    /// Type name
    pub name: String,
    /// Namespace, empty for nested types
    pub namespace: String,
    /// Base type, `None` for interfaces and `System.Object`
    pub extends: Option<Token>,
    fields: OnceLock<Vec<Arc<FieldDefinition>>>,
    methods: OnceLock<Vec<Arc<MethodDefinition>>>,
    properties: OnceLock<Vec<Arc<PropertyDefinition>>>,
    events: OnceLock<Vec<Arc<EventDefinition>>>,
    nested_types: OnceLock<Vec<Token>>,
    declaring_type: OnceLock<Option<Token>>,
}

impl TypeDefinition {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<TypeDefinition>> {
        let Some(row) = image.tables().row::<TypeDefRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(TypeDefinition {
            rid,
            token: Token::from_parts(TableId::TypeDef, rid),
            flags: row.flags,
            name: image.string(row.type_name)?.to_string(),
            namespace: image.string(row.type_namespace)?.to_string(),
            extends: (!row.extends.is_null()).then_some(row.extends.token),
            fields: OnceLock::new(),
            methods: OnceLock::new(),
            properties: OnceLock::new(),
            events: OnceLock::new(),
            nested_types: OnceLock::new(),
            declaring_type: OnceLock::new(),
        }))
    }

    /// `Namespace.Name`, or the name alone for types without namespace
    #[must_use]
    pub fn full_name(&self) -> String {
        full_name(&self.namespace, &self.name)
    }

    /// True if the type is an interface
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.flags & TypeAttributes::INTERFACE != 0
    }

    /// True if the type is nested in another type
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.flags & TypeAttributes::VISIBILITY_MASK > TypeAttributes::PUBLIC
    }

    /// The fields declared by this type
    ///
    /// # Errors
    /// Returns an error if the `TypeDef`, `FieldPtr` or `Field` table fails to decode
    pub fn fields(&self, image: &MetadataImage) -> Result<&[Arc<FieldDefinition>]> {
        if let Some(fields) = self.fields.get() {
            return Ok(fields);
        }

        let range = image.tables().field_range(self.rid)?;
        let mut fields = Vec::with_capacity(range.len());
        for rid in range.rids() {
            if let Some(field) = image.field(rid)? {
                field.set_declaring_type(self.token);
                fields.push(field);
            }
        }

        Ok(self.fields.get_or_init(|| fields))
    }

    /// The methods declared by this type
    ///
    /// # Errors
    /// Returns an error if the `TypeDef`, `MethodPtr` or `MethodDef` table fails to decode
    pub fn methods(&self, image: &MetadataImage) -> Result<&[Arc<MethodDefinition>]> {
        if let Some(methods) = self.methods.get() {
            return Ok(methods);
        }

        let range = image.tables().method_range(self.rid)?;
        let mut methods = Vec::with_capacity(range.len());
        for rid in range.rids() {
            if let Some(method) = image.method(rid)? {
                method.set_declaring_type(self.token);
                methods.push(method);
            }
        }

        Ok(self.methods.get_or_init(|| methods))
    }

    /// The properties declared by this type, through its `PropertyMap` row
    ///
    /// # Errors
    /// Returns an error if one of the involved tables fails to decode
    pub fn properties(&self, image: &MetadataImage) -> Result<&[Arc<PropertyDefinition>]> {
        if let Some(properties) = self.properties.get() {
            return Ok(properties);
        }

        let range = image.tables().property_range(self.rid)?;
        let mut properties = Vec::with_capacity(range.len());
        for rid in range.rids() {
            if let Some(property) = image.property(rid)? {
                property.set_declaring_type(self.token);
                properties.push(property);
            }
        }

        Ok(self.properties.get_or_init(|| properties))
    }

    /// The events declared by this type, through its `EventMap` row
    ///
    /// # Errors
    /// Returns an error if one of the involved tables fails to decode
    pub fn events(&self, image: &MetadataImage) -> Result<&[Arc<EventDefinition>]> {
        if let Some(events) = self.events.get() {
            return Ok(events);
        }

        let range = image.tables().event_range(self.rid)?;
        let mut events = Vec::with_capacity(range.len());
        for rid in range.rids() {
            if let Some(event) = image.event(rid)? {
                event.set_declaring_type(self.token);
                events.push(event);
            }
        }

        Ok(self.events.get_or_init(|| events))
    }

    /// Tokens of the types nested directly in this type
    ///
    /// # Errors
    /// Returns an error if the `NestedClass` table fails to decode
    pub fn nested_types(&self, image: &MetadataImage) -> Result<&[Token]> {
        if let Some(nested) = self.nested_types.get() {
            return Ok(nested);
        }

        let nested: Vec<Token> = image
            .tables()
            .table::<NestedClassRaw>()?
            .iter()?
            .filter(|row| row.enclosing_class == self.rid)
            .map(|row| Token::from_parts(TableId::TypeDef, row.nested_class))
            .collect();

        Ok(self.nested_types.get_or_init(|| nested))
    }

    /// The enclosing type, `None` for top-level types
    ///
    /// # Errors
    /// Returns an error if the `NestedClass` table fails to decode
    pub fn declaring_type(&self, image: &MetadataImage) -> Result<Option<Token>> {
        if let Some(declaring_type) = self.declaring_type.get() {
            return Ok(*declaring_type);
        }

        let table = image.tables().table::<NestedClassRaw>()?;
        let enclosing = if table.is_sorted_by_key()? {
            match table.find_by_key(0, self.rid)? {
                Some(rid) => table.get(rid)?.map(|row| row.enclosing_class),
                None => None,
            }
        } else {
            table
                .iter()?
                .find(|row| row.nested_class == self.rid)
                .map(|row| row.enclosing_class)
        };

        let declaring_type = enclosing
            .filter(|rid| *rid != 0)
            .map(|rid| Token::from_parts(TableId::TypeDef, rid));
        Ok(*self.declaring_type.get_or_init(|| declaring_type))
    }

    /// Custom attributes applied to this type
    ///
    /// # Errors
    /// Returns an error if the `CustomAttribute` table fails to decode
    pub fn custom_attributes(&self, image: &MetadataImage) -> Result<Vec<Arc<CustomAttribute>>> {
        image.custom_attributes(self.token)
    }
}

/// A `TypeSpec` row, a constructed type described by a signature
#[derive(Debug)]
pub struct TypeSpecification {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// The type signature
    pub signature: Vec<u8>,
}

impl TypeSpecification {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<TypeSpecification>> {
        let Some(row) = image.tables().row::<TypeSpecRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(TypeSpecification {
            rid,
            token: Token::from_parts(TableId::TypeSpec, rid),
            signature: image.blob_value(row.signature)?.to_vec(),
        }))
    }
}
