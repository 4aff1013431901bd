//! Fields, methods, parameters, properties, events and member references.
//!
//! Every member knows the type (or method) owning it. The owner is set when the owner resolves
//! its member list, and looked up through the reverse range search otherwise.

use std::sync::{Arc, OnceLock};

use crate::{
    file::RvaResolver,
    metadata::{
        image::MetadataImage,
        tables::{
            EventRaw, FieldRaw, FieldRvaRaw, MemberRefRaw, MethodDefRaw, ParamRaw, PropertyRaw,
            TableId,
        },
        token::Token,
    },
    Result,
};

/// Cached owner of a member, a `TypeDef` or `MethodDef` token
#[derive(Debug, Default)]
struct Owner(OnceLock<Option<Token>>);

impl Owner {
    fn set(&self, token: Token) {
        let _ = self.0.set(Some(token));
    }

    fn get_or_find(
        &self,
        table: TableId,
        find: impl FnOnce() -> Result<u32>,
    ) -> Result<Option<Token>> {
        if let Some(owner) = self.0.get() {
            return Ok(*owner);
        }

        let rid = find()?;
        let owner = (rid != 0).then(|| Token::from_parts(table, rid));
        Ok(*self.0.get_or_init(|| owner))
    }
}

/// A `Field` row
#[derive(Debug)]
pub struct FieldDefinition {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// `FieldAttributes`
    pub flags: u16,
    /// Field name
    pub name: String,
    /// The field signature
    pub signature: Vec<u8>,
    declaring_type: Owner,
}

impl FieldDefinition {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<FieldDefinition>> {
        let Some(row) = image.tables().row::<FieldRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(FieldDefinition {
            rid,
            token: Token::from_parts(TableId::Field, rid),
            flags: row.flags,
            name: image.string(row.name)?.to_string(),
            signature: image.blob_value(row.signature)?.to_vec(),
            declaring_type: Owner::default(),
        }))
    }

    pub(crate) fn set_declaring_type(&self, token: Token) {
        self.declaring_type.set(token);
    }

    /// The `TypeDef` declaring this field
    ///
    /// # Errors
    /// Returns an error if the `TypeDef` or `FieldPtr` table fails to decode
    pub fn declaring_type(&self, image: &MetadataImage) -> Result<Option<Token>> {
        self.declaring_type.get_or_find(TableId::TypeDef, || {
            image.tables().field_declaring_type(self.rid)
        })
    }

    /// RVA of the initial value from the `FieldRVA` table, `None` if the field has none
    ///
    /// # Errors
    /// Returns an error if the `FieldRVA` table fails to decode
    pub fn rva(&self, image: &MetadataImage) -> Result<Option<u32>> {
        Ok(image
            .tables()
            .table::<FieldRvaRaw>()?
            .iter()?
            .find(|row| row.field == self.rid)
            .map(|row| row.rva))
    }

    /// The first `len` bytes of the initial value
    ///
    /// # Errors
    /// Returns an error if the `FieldRVA` table fails to decode, or `resolver` can not map the
    /// RVA
    pub fn initial_value<'a>(
        &self,
        image: &MetadataImage,
        resolver: &'a dyn RvaResolver,
        len: usize,
    ) -> Result<Option<&'a [u8]>> {
        match self.rva(image)? {
            Some(rva) if rva != 0 => Ok(Some(resolver.data_at_rva(rva as usize, len)?)),
            _ => Ok(None),
        }
    }
}

/// A `MethodDef` row
#[derive(Debug)]
pub struct MethodDefinition {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// RVA of the method body, 0 for abstract and runtime provided methods
    pub rva: u32,
    /// `MethodImplAttributes`
    pub impl_flags: u16,
    /// `MethodAttributes`
    pub flags: u16,
    /// Method name
    pub name: String,
    /// The method signature
    pub signature: Vec<u8>,
    parameters: OnceLock<Vec<Arc<ParameterDefinition>>>,
    declaring_type: Owner,
}

impl MethodDefinition {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<MethodDefinition>> {
        let Some(row) = image.tables().row::<MethodDefRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(MethodDefinition {
            rid,
            token: Token::from_parts(TableId::MethodDef, rid),
            rva: row.rva,
            impl_flags: row.impl_flags,
            flags: row.flags,
            name: image.string(row.name)?.to_string(),
            signature: image.blob_value(row.signature)?.to_vec(),
            parameters: OnceLock::new(),
            declaring_type: Owner::default(),
        }))
    }

    pub(crate) fn set_declaring_type(&self, token: Token) {
        self.declaring_type.set(token);
    }

    /// The `TypeDef` declaring this method
    ///
    /// # Errors
    /// Returns an error if the `TypeDef` or `MethodPtr` table fails to decode
    pub fn declaring_type(&self, image: &MetadataImage) -> Result<Option<Token>> {
        self.declaring_type.get_or_find(TableId::TypeDef, || {
            image.tables().method_declaring_type(self.rid)
        })
    }

    /// The parameter rows of this method, in table order. The return value, if it has a row,
    /// comes first with sequence 0.
    ///
    /// # Errors
    /// Returns an error if the `MethodDef`, `ParamPtr` or `Param` table fails to decode
    pub fn parameters(&self, image: &MetadataImage) -> Result<&[Arc<ParameterDefinition>]> {
        if let Some(parameters) = self.parameters.get() {
            return Ok(parameters);
        }

        let range = image.tables().param_range(self.rid)?;
        let mut parameters = Vec::with_capacity(range.len());
        for rid in range.rids() {
            if let Some(parameter) = image.param(rid)? {
                parameter.method.set(self.token);
                parameters.push(parameter);
            }
        }

        Ok(self.parameters.get_or_init(|| parameters))
    }

    /// File offset of the method body, `None` for methods without body
    ///
    /// # Errors
    /// Returns an error if `resolver` can not map the RVA
    pub fn body_offset(&self, resolver: &dyn RvaResolver) -> Result<Option<usize>> {
        if self.rva == 0 {
            return Ok(None);
        }

        resolver.rva_to_offset(self.rva as usize).map(Some)
    }
}

/// A `Param` row
#[derive(Debug)]
pub struct ParameterDefinition {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// `ParamAttributes`
    pub flags: u16,
    /// Position in the signature, 0 for the return value
    pub sequence: u16,
    /// Parameter name
    pub name: String,
    method: Owner,
}

impl ParameterDefinition {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<ParameterDefinition>> {
        let Some(row) = image.tables().row::<ParamRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(ParameterDefinition {
            rid,
            token: Token::from_parts(TableId::Param, rid),
            flags: row.flags,
            sequence: row.sequence,
            name: image.string(row.name)?.to_string(),
            method: Owner::default(),
        }))
    }

    /// The `MethodDef` this parameter belongs to
    ///
    /// # Errors
    /// Returns an error if the `MethodDef` or `ParamPtr` table fails to decode
    pub fn method(&self, image: &MetadataImage) -> Result<Option<Token>> {
        self.method
            .get_or_find(TableId::MethodDef, || image.tables().param_owner(self.rid))
    }
}

/// A `Property` row
#[derive(Debug)]
pub struct PropertyDefinition {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// `PropertyAttributes`
    pub flags: u16,
    /// Property name
    pub name: String,
    /// The property signature
    pub signature: Vec<u8>,
    declaring_type: Owner,
}

impl PropertyDefinition {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<PropertyDefinition>> {
        let Some(row) = image.tables().row::<PropertyRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(PropertyDefinition {
            rid,
            token: Token::from_parts(TableId::Property, rid),
            flags: row.flags,
            name: image.string(row.name)?.to_string(),
            signature: image.blob_value(row.signature)?.to_vec(),
            declaring_type: Owner::default(),
        }))
    }

    pub(crate) fn set_declaring_type(&self, token: Token) {
        self.declaring_type.set(token);
    }

    /// The `TypeDef` declaring this property
    ///
    /// # Errors
    /// Returns an error if the `PropertyMap` or `PropertyPtr` table fails to decode
    pub fn declaring_type(&self, image: &MetadataImage) -> Result<Option<Token>> {
        self.declaring_type.get_or_find(TableId::TypeDef, || {
            image.tables().property_declaring_type(self.rid)
        })
    }
}

/// An `Event` row
#[derive(Debug)]
pub struct EventDefinition {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// `EventAttributes`
    pub flags: u16,
    /// Event name
    pub name: String,
    /// The delegate type of the event
    pub event_type: Option<Token>,
    declaring_type: Owner,
}

impl EventDefinition {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<EventDefinition>> {
        let Some(row) = image.tables().row::<EventRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(EventDefinition {
            rid,
            token: Token::from_parts(TableId::Event, rid),
            flags: row.flags,
            name: image.string(row.name)?.to_string(),
            event_type: (!row.event_type.is_null()).then_some(row.event_type.token),
            declaring_type: Owner::default(),
        }))
    }

    pub(crate) fn set_declaring_type(&self, token: Token) {
        self.declaring_type.set(token);
    }

    /// The `TypeDef` declaring this event
    ///
    /// # Errors
    /// Returns an error if the `EventMap` or `EventPtr` table fails to decode
    pub fn declaring_type(&self, image: &MetadataImage) -> Result<Option<Token>> {
        self.declaring_type.get_or_find(TableId::TypeDef, || {
            image.tables().event_declaring_type(self.rid)
        })
    }
}

/// A `MemberRef` row, a field or method of another module or of a constructed type
#[derive(Debug)]
pub struct MemberReference {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// `TypeDef`, `TypeRef`, `ModuleRef`, `MethodDef` or `TypeSpec` the member belongs to
    pub parent: Token,
    /// Member name
    pub name: String,
    /// Field or method signature
    pub signature: Vec<u8>,
}

impl MemberReference {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<MemberReference>> {
        let Some(row) = image.tables().row::<MemberRefRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(MemberReference {
            rid,
            token: Token::from_parts(TableId::MemberRef, rid),
            parent: row.class.token,
            name: image.string(row.name)?.to_string(),
            signature: image.blob_value(row.signature)?.to_vec(),
        }))
    }

    /// True if the signature describes a field
    #[must_use]
    pub fn is_field(&self) -> bool {
        self.signature.first() == Some(&0x06)
    }
}
