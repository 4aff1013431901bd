use std::sync::Arc;

use crate::{
    metadata::{
        image::{
            AssemblyDefinition, AssemblyReference, CustomAttribute, EventDefinition,
            FieldDefinition, MemberReference, MetadataImage, MethodDefinition, ModuleDefinition,
            ModuleReference, ParameterDefinition, PropertyDefinition, TypeDefinition,
            TypeReference, TypeSpecification,
        },
        tables::TableId,
        token::Token,
    },
    Result,
};

/// Any resolved entity of a [`MetadataImage`], keyed by its token
#[derive(Clone, Debug)]
pub enum Member {
    /// `Module` row
    Module(Arc<ModuleDefinition>),
    /// `TypeRef` row
    TypeRef(Arc<TypeReference>),
    /// `TypeDef` row
    TypeDef(Arc<TypeDefinition>),
    /// `Field` row
    Field(Arc<FieldDefinition>),
    /// `MethodDef` row
    Method(Arc<MethodDefinition>),
    /// `Param` row
    Param(Arc<ParameterDefinition>),
    /// `MemberRef` row
    MemberRef(Arc<MemberReference>),
    /// `CustomAttribute` row
    CustomAttribute(Arc<CustomAttribute>),
    /// `Property` row
    Property(Arc<PropertyDefinition>),
    /// `Event` row
    Event(Arc<EventDefinition>),
    /// `ModuleRef` row
    ModuleRef(Arc<ModuleReference>),
    /// `TypeSpec` row
    TypeSpec(Arc<TypeSpecification>),
    /// `Assembly` row
    Assembly(Arc<AssemblyDefinition>),
    /// `AssemblyRef` row
    AssemblyRef(Arc<AssemblyReference>),
}

macro_rules! read_member {
    ($image:expr, $rid:expr, $variant:ident, $entity:ident) => {
        $entity::read($image, $rid)?.map(|entity| Member::$variant(Arc::new(entity)))
    };
}

impl Member {
    /// Resolve `token` without consulting the cache. `None` for null tokens, rows past the end
    /// of their table and tables without entity type.
    pub(crate) fn read(image: &MetadataImage, token: Token) -> Result<Option<Member>> {
        let rid = token.row();
        if rid == 0 {
            return Ok(None);
        }

        let Some(table) = token.table_id() else {
            return Ok(None);
        };

        Ok(match table {
            TableId::Module => read_member!(image, rid, Module, ModuleDefinition),
            TableId::TypeRef => read_member!(image, rid, TypeRef, TypeReference),
            TableId::TypeDef => read_member!(image, rid, TypeDef, TypeDefinition),
            TableId::Field => read_member!(image, rid, Field, FieldDefinition),
            TableId::MethodDef => read_member!(image, rid, Method, MethodDefinition),
            TableId::Param => read_member!(image, rid, Param, ParameterDefinition),
            TableId::MemberRef => read_member!(image, rid, MemberRef, MemberReference),
            TableId::CustomAttribute => {
                read_member!(image, rid, CustomAttribute, CustomAttribute)
            }
            TableId::Property => read_member!(image, rid, Property, PropertyDefinition),
            TableId::Event => read_member!(image, rid, Event, EventDefinition),
            TableId::ModuleRef => read_member!(image, rid, ModuleRef, ModuleReference),
            TableId::TypeSpec => read_member!(image, rid, TypeSpec, TypeSpecification),
            TableId::Assembly => read_member!(image, rid, Assembly, AssemblyDefinition),
            TableId::AssemblyRef => read_member!(image, rid, AssemblyRef, AssemblyReference),
            _ => None,
        })
    }

    /// Token of the entity
    #[must_use]
    pub fn token(&self) -> Token {
        match self {
            Member::Module(entity) => entity.token,
            Member::TypeRef(entity) => entity.token,
            Member::TypeDef(entity) => entity.token,
            Member::Field(entity) => entity.token,
            Member::Method(entity) => entity.token,
            Member::Param(entity) => entity.token,
            Member::MemberRef(entity) => entity.token,
            Member::CustomAttribute(entity) => entity.token,
            Member::Property(entity) => entity.token,
            Member::Event(entity) => entity.token,
            Member::ModuleRef(entity) => entity.token,
            Member::TypeSpec(entity) => entity.token,
            Member::Assembly(entity) => entity.token,
            Member::AssemblyRef(entity) => entity.token,
        }
    }

    /// Name of the entity, `None` for entities without one
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Module(entity) => Some(&entity.name),
            Member::TypeRef(entity) => Some(&entity.name),
            Member::TypeDef(entity) => Some(&entity.name),
            Member::Field(entity) => Some(&entity.name),
            Member::Method(entity) => Some(&entity.name),
            Member::Param(entity) => Some(&entity.name),
            Member::MemberRef(entity) => Some(&entity.name),
            Member::Property(entity) => Some(&entity.name),
            Member::Event(entity) => Some(&entity.name),
            Member::ModuleRef(entity) => Some(&entity.name),
            Member::Assembly(entity) => Some(&entity.name),
            Member::AssemblyRef(entity) => Some(&entity.name),
            Member::CustomAttribute(_) | Member::TypeSpec(_) => None,
        }
    }
}
