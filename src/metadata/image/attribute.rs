use crate::{
    metadata::{
        image::{Member, MetadataImage},
        tables::{CustomAttributeRaw, TableId},
        token::Token,
    },
    Result,
};

/// A `CustomAttribute` row. The value blob is kept undecoded.
#[derive(Debug)]
pub struct CustomAttribute {
    /// Row id
    pub rid: u32,
    /// Token
    pub token: Token,
    /// The member the attribute is applied to
    pub parent: Token,
    /// The attribute constructor, a `MethodDef` or `MemberRef`
    pub constructor: Token,
    /// The encoded constructor arguments and named arguments
    pub value: Vec<u8>,
}

impl CustomAttribute {
    pub(crate) fn read(image: &MetadataImage, rid: u32) -> Result<Option<CustomAttribute>> {
        let Some(row) = image.tables().row::<CustomAttributeRaw>(rid)? else {
            return Ok(None);
        };

        Ok(Some(CustomAttribute {
            rid,
            token: Token::from_parts(TableId::CustomAttribute, rid),
            parent: row.parent.token,
            constructor: row.constructor.token,
            value: image.blob_value(row.value)?.to_vec(),
        }))
    }

    /// The resolved constructor. `None` if the token does not point at a method.
    ///
    /// # Errors
    /// Returns an error if the constructor row fails to decode
    pub fn constructor(&self, image: &MetadataImage) -> Result<Option<Member>> {
        match self.constructor.table_id() {
            Some(TableId::MethodDef | TableId::MemberRef) => image.member(self.constructor),
            _ => Ok(None),
        }
    }
}
