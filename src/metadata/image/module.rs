use crate::{
    metadata::{
        image::MetadataImage,
        tables::{ModuleRaw, ModuleRefRaw, TableId},
        token::Token,
    },
    Result,
};

/// The `Module` row, the module the metadata describes
#[derive(Debug)]
pub struct ModuleDefinition {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// Reserved, 0
    pub generation: u16,
    /// Module name, usually the file name
    pub name: String,
    /// Module version id
    pub mvid: Option<uguid::Guid>,
    /// Edit-and-continue id
    pub enc_id: Option<uguid::Guid>,
    /// Edit-and-continue base id
    pub enc_base_id: Option<uguid::Guid>,
}

impl ModuleDefinition {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<ModuleDefinition>> {
        let Some(row) = image.tables().row::<ModuleRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(ModuleDefinition {
            rid,
            token: Token::from_parts(TableId::Module, rid),
            generation: row.generation,
            name: image.string(row.name)?.to_string(),
            mvid: image.guid_value(row.mvid)?,
            enc_id: image.guid_value(row.encid)?,
            enc_base_id: image.guid_value(row.encbaseid)?,
        }))
    }
}

/// A `ModuleRef` row, a module of the same assembly or a native library
#[derive(Debug)]
pub struct ModuleReference {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// File name
    pub name: String,
}

impl ModuleReference {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<ModuleReference>> {
        let Some(row) = image.tables().row::<ModuleRefRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(ModuleReference {
            rid,
            token: Token::from_parts(TableId::ModuleRef, rid),
            name: image.string(row.name)?.to_string(),
        }))
    }
}
