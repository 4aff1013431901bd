//! Coded indices (ECMA-335 II.24.2.6).
//!
//! A coded index references a row in one of several tables. The low `N` bits hold a tag that
//! selects the table (the position of the table in the [`CodedIndexType::tables`] list) and
//! the remaining high bits hold the row id, where `N = ceil(log2(table count))`.
//!
//! [`CodedIndexType::tables`] is the only place where the participating tables are listed. Both
//! the column width computation in [`crate::metadata::tables::TableInfo`] and the
//! [`IndexEncoder`] read from it.
//!
//! ## Key Components
//!
//! - [`CodedIndexType`]: all coded index kinds and their table lists
//! - [`CodedIndex`]: a decoded coded index as stored inside a row
//! - [`IndexEncoder`]: encoder bound to the column width of one stream

use std::hash::{Hash, Hasher};

use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{
    metadata::{
        tables::{IndexSize, TableId, TableInfo},
        token::Token,
    },
    Error, Result,
};

/// All coded index kinds defined in the CLI metadata specification.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, EnumIter, EnumCount, IntoStaticStr)]
#[repr(usize)]
pub enum CodedIndexType {
    /// `TypeDef`, `TypeRef` or `TypeSpec`
    TypeDefOrRef,
    /// `Field`, `Param` or `Property`
    HasConstant,
    /// Any of the 22 tables that can carry custom attributes
    HasCustomAttribute,
    /// `Field` or `Param`
    HasFieldMarshal,
    /// `TypeDef`, `MethodDef` or `Assembly`
    HasDeclSecurity,
    /// `TypeDef`, `TypeRef`, `ModuleRef`, `MethodDef` or `TypeSpec`
    MemberRefParent,
    /// `Event` or `Property`
    HasSemantics,
    /// `MethodDef` or `MemberRef`
    MethodDefOrRef,
    /// `Field` or `MethodDef`
    MemberForwarded,
    /// `File`, `AssemblyRef` or `ExportedType`
    Implementation,
    /// `MethodDef` or `MemberRef`, using tags 2 and 3 of a 5 slot list.
    ///
    /// Tags 0, 1 and 4 are reserved. They are filled with `Module`, so that decoding one of
    /// them yields a `Module` token, which no consumer accepts as attribute constructor.
    CustomAttributeType,
    /// `Module`, `ModuleRef`, `AssemblyRef` or `TypeRef`
    ResolutionScope,
    /// `TypeDef` or `MethodDef`
    TypeOrMethodDef,
    /// Portable PDB: the `HasCustomAttribute` tables plus five debug tables
    HasCustomDebugInformation,
}

impl CodedIndexType {
    /// The tables that can be referenced by this kind, in tag order.
    ///
    /// The position of a table in this slice is the tag value stored in the low bits.
    #[must_use]
    pub fn tables(&self) -> &'static [TableId] {
        match self {
            CodedIndexType::TypeDefOrRef => {
                &[TableId::TypeDef, TableId::TypeRef, TableId::TypeSpec]
            }
            CodedIndexType::HasConstant => &[TableId::Field, TableId::Param, TableId::Property],
            CodedIndexType::HasCustomAttribute => &[
                TableId::MethodDef,
                TableId::Field,
                TableId::TypeRef,
                TableId::TypeDef,
                TableId::Param,
                TableId::InterfaceImpl,
                TableId::MemberRef,
                TableId::Module,
                TableId::DeclSecurity,
                TableId::Property,
                TableId::Event,
                TableId::StandAloneSig,
                TableId::ModuleRef,
                TableId::TypeSpec,
                TableId::Assembly,
                TableId::AssemblyRef,
                TableId::File,
                TableId::ExportedType,
                TableId::ManifestResource,
                TableId::GenericParam,
                TableId::GenericParamConstraint,
                TableId::MethodSpec,
            ],
            CodedIndexType::HasFieldMarshal => &[TableId::Field, TableId::Param],
            CodedIndexType::HasDeclSecurity => {
                &[TableId::TypeDef, TableId::MethodDef, TableId::Assembly]
            }
            CodedIndexType::MemberRefParent => &[
                TableId::TypeDef,
                TableId::TypeRef,
                TableId::ModuleRef,
                TableId::MethodDef,
                TableId::TypeSpec,
            ],
            CodedIndexType::HasSemantics => &[TableId::Event, TableId::Property],
            CodedIndexType::MethodDefOrRef => &[TableId::MethodDef, TableId::MemberRef],
            CodedIndexType::MemberForwarded => &[TableId::Field, TableId::MethodDef],
            CodedIndexType::Implementation => {
                &[TableId::File, TableId::AssemblyRef, TableId::ExportedType]
            }
            CodedIndexType::CustomAttributeType => &[
                TableId::Module,
                TableId::Module,
                TableId::MethodDef,
                TableId::MemberRef,
                TableId::Module,
            ],
            CodedIndexType::ResolutionScope => &[
                TableId::Module,
                TableId::ModuleRef,
                TableId::AssemblyRef,
                TableId::TypeRef,
            ],
            CodedIndexType::TypeOrMethodDef => &[TableId::TypeDef, TableId::MethodDef],
            CodedIndexType::HasCustomDebugInformation => &[
                TableId::MethodDef,
                TableId::Field,
                TableId::TypeRef,
                TableId::TypeDef,
                TableId::Param,
                TableId::InterfaceImpl,
                TableId::MemberRef,
                TableId::Module,
                TableId::DeclSecurity,
                TableId::Property,
                TableId::Event,
                TableId::StandAloneSig,
                TableId::ModuleRef,
                TableId::TypeSpec,
                TableId::Assembly,
                TableId::AssemblyRef,
                TableId::File,
                TableId::ExportedType,
                TableId::ManifestResource,
                TableId::GenericParam,
                TableId::GenericParamConstraint,
                TableId::MethodSpec,
                TableId::Document,
                TableId::LocalScope,
                TableId::LocalVariable,
                TableId::LocalConstant,
                TableId::ImportScope,
            ],
        }
    }

    /// Number of low bits used for the tag, `ceil(log2(tables().len()))`
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn tag_bits(&self) -> u8 {
        let count = self.tables().len();
        (usize::BITS - (count - 1).leading_zeros()) as u8
    }

    /// Name of the kind, used in diagnostics
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Encode `token` as coded index of this kind.
    ///
    /// # Errors
    /// Returns [`crate::Error::CodedIndexMismatch`] if the table of `token` is not part of
    /// this kind.
    pub fn encode(&self, token: Token) -> Result<u32> {
        let Some(tag) = self
            .tables()
            .iter()
            .position(|table| table.token_type() == u32::from(token.table()))
        else {
            return Err(Error::CodedIndexMismatch {
                token,
                coded_index: self.name(),
            });
        };

        #[allow(clippy::cast_possible_truncation)]
        Ok((token.row() << self.tag_bits()) | tag as u32)
    }

    /// Decode a coded index value into a token.
    ///
    /// A tag beyond the table list yields a `Module` token with the decoded row id. Callers
    /// treat such a token as not resolvable in their context.
    #[must_use]
    pub fn decode(&self, value: u32) -> Token {
        let tag_bits = self.tag_bits();
        let tag = (value & ((1 << tag_bits) - 1)) as usize;
        let rid = value >> tag_bits;

        match self.tables().get(tag) {
            Some(table) => Token::from_parts(*table, rid),
            None => {
                log::warn!(
                    "{} index {:#x} uses reserved tag {}, decoding as Module",
                    self.name(),
                    value,
                    tag
                );
                Token::from_parts(TableId::Module, rid)
            }
        }
    }
}

/// A decoded coded index as stored inside a row.
///
/// An index read from a table keeps its column value. As long as `tag`, `row` and `token`
/// still describe that value it is written back unchanged, so reserved tags survive a rewrite.
#[derive(Clone, Copy, Debug)]
pub struct CodedIndex {
    /// The table this index points into
    pub tag: TableId,
    /// The 1-based row id, 0 if the index is null
    pub row: u32,
    /// The token equivalent of `tag` and `row`
    pub token: Token,
    /// The kind of coded index this was read from or will be written as
    pub ci_type: CodedIndexType,
    /// Column value this index was read from
    encoded: Option<u32>,
}

impl PartialEq for CodedIndex {
    fn eq(&self, other: &Self) -> bool {
        self.ci_type == other.ci_type
            && self.token == other.token
            && self.value().ok() == other.value().ok()
    }
}

impl Eq for CodedIndex {}

impl Hash for CodedIndex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ci_type.hash(state);
        self.token.hash(state);
    }
}

impl CodedIndex {
    /// Create a coded index pointing to `row` of `tag`
    #[must_use]
    pub fn new(tag: TableId, row: u32, ci_type: CodedIndexType) -> CodedIndex {
        CodedIndex {
            tag,
            row,
            token: Token::from_parts(tag, row),
            ci_type,
            encoded: None,
        }
    }

    /// A null coded index of the given kind, using the first table of the kind as tag
    #[must_use]
    pub fn null(ci_type: CodedIndexType) -> CodedIndex {
        CodedIndex::new(ci_type.tables()[0], 0, ci_type)
    }

    /// Build a coded index from an encoded column value
    #[must_use]
    pub fn from_value(value: u32, ci_type: CodedIndexType) -> CodedIndex {
        let token = ci_type.decode(value);
        let tag = token.table_id().unwrap_or(TableId::Module);
        CodedIndex {
            tag,
            row: token.row(),
            token,
            ci_type,
            encoded: Some(value),
        }
    }

    /// Build a coded index from a token.
    ///
    /// # Errors
    /// Returns [`crate::Error::CodedIndexMismatch`] if the table of `token` is not part of
    /// `ci_type`.
    pub fn from_token(token: Token, ci_type: CodedIndexType) -> Result<CodedIndex> {
        match token.table_id() {
            Some(tag) if ci_type.tables().contains(&tag) => {
                Ok(CodedIndex::new(tag, token.row(), ci_type))
            }
            _ => Err(Error::CodedIndexMismatch {
                token,
                coded_index: ci_type.name(),
            }),
        }
    }

    /// The encoded column value. The value read from the table if the index was not changed
    /// since, otherwise the encoding of `token`.
    ///
    /// # Errors
    /// Returns [`crate::Error::CodedIndexMismatch`] if a changed `token` is not part of
    /// `ci_type`.
    pub fn value(&self) -> Result<u32> {
        match self.encoded {
            Some(value)
                if self.ci_type.decode(value) == self.token
                    && self.token == Token::from_parts(self.tag, self.row) =>
            {
                Ok(value)
            }
            _ => self.ci_type.encode(self.token),
        }
    }

    /// True if the index does not reference a row
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.row == 0
    }
}

/// Encoder for one coded index kind, bound to the row counts of a stream.
///
/// The column width depends on the current row counts of all governed tables, so an encoder
/// is a snapshot. Create a new one after the tables changed size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexEncoder {
    ci_type: CodedIndexType,
    index_size: IndexSize,
}

impl IndexEncoder {
    /// Create an encoder for `ci_type` sized against `info`
    #[must_use]
    pub fn new(ci_type: CodedIndexType, info: &TableInfo) -> IndexEncoder {
        IndexEncoder {
            ci_type,
            index_size: info.coded_index_size(ci_type),
        }
    }

    /// The kind this encoder handles
    #[must_use]
    pub fn coded_index_type(&self) -> CodedIndexType {
        self.ci_type
    }

    /// The tables this encoder can reference, in tag order
    #[must_use]
    pub fn tables(&self) -> &'static [TableId] {
        self.ci_type.tables()
    }

    /// Width of the column in bytes
    #[must_use]
    pub fn index_size(&self) -> IndexSize {
        self.index_size
    }

    /// `(rid << N) | tag` for the table of `token`.
    ///
    /// # Errors
    /// Returns [`crate::Error::CodedIndexMismatch`] if the token's table is not governed by
    /// this encoder.
    pub fn encode_token(&self, token: Token) -> Result<u32> {
        self.ci_type.encode(token)
    }

    /// Decode a coded value into a token, see [`CodedIndexType::decode`]
    #[must_use]
    pub fn decode_index(&self, value: u32) -> Token {
        self.ci_type.decode(value)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tag_bits() {
        assert_eq!(CodedIndexType::TypeDefOrRef.tag_bits(), 2);
        assert_eq!(CodedIndexType::HasConstant.tag_bits(), 2);
        assert_eq!(CodedIndexType::HasCustomAttribute.tag_bits(), 5);
        assert_eq!(CodedIndexType::HasFieldMarshal.tag_bits(), 1);
        assert_eq!(CodedIndexType::HasDeclSecurity.tag_bits(), 2);
        assert_eq!(CodedIndexType::MemberRefParent.tag_bits(), 3);
        assert_eq!(CodedIndexType::HasSemantics.tag_bits(), 1);
        assert_eq!(CodedIndexType::MethodDefOrRef.tag_bits(), 1);
        assert_eq!(CodedIndexType::MemberForwarded.tag_bits(), 1);
        assert_eq!(CodedIndexType::Implementation.tag_bits(), 2);
        assert_eq!(CodedIndexType::CustomAttributeType.tag_bits(), 3);
        assert_eq!(CodedIndexType::ResolutionScope.tag_bits(), 2);
        assert_eq!(CodedIndexType::TypeOrMethodDef.tag_bits(), 1);
        assert_eq!(CodedIndexType::HasCustomDebugInformation.tag_bits(), 5);
    }

    #[test]
    fn encode_known_values() {
        // TypeRef row 3 as TypeDefOrRef: (3 << 2) | 1
        let token = Token::from_parts(TableId::TypeRef, 3);
        assert_eq!(CodedIndexType::TypeDefOrRef.encode(token).unwrap(), 0x0D);

        // Assembly row 1 as HasCustomAttribute: (1 << 5) | 14
        let token = Token::from_parts(TableId::Assembly, 1);
        assert_eq!(CodedIndexType::HasCustomAttribute.encode(token).unwrap(), 0x2E);

        // MemberRef row 0x10 as CustomAttributeType: (0x10 << 3) | 3
        let token = Token::from_parts(TableId::MemberRef, 0x10);
        assert_eq!(
            CodedIndexType::CustomAttributeType.encode(token).unwrap(),
            0x83
        );
    }

    #[test]
    fn encode_rejects_foreign_table() {
        let token = Token::from_parts(TableId::Field, 1);
        let result = CodedIndexType::TypeDefOrRef.encode(token);
        assert!(matches!(
            result,
            Err(Error::CodedIndexMismatch {
                coded_index: "TypeDefOrRef",
                ..
            })
        ));
    }

    #[test]
    fn decode_reserved_tag_is_module() {
        // tag 5 is past the 5 slots of CustomAttributeType
        let token = CodedIndexType::CustomAttributeType.decode((7 << 3) | 5);
        assert_eq!(token.table_id(), Some(TableId::Module));
        assert_eq!(token.row(), 7);

        // tag 0 is one of the unused slots
        let token = CodedIndexType::CustomAttributeType.decode(7 << 3);
        assert_eq!(token.table_id(), Some(TableId::Module));

        // tag 3 is past the 3 slots of TypeDefOrRef
        let token = CodedIndexType::TypeDefOrRef.decode((2 << 2) | 3);
        assert_eq!(token, Token::from_parts(TableId::Module, 2));
    }

    #[test]
    fn token_roundtrip_every_kind() {
        for ci_type in CodedIndexType::iter() {
            for table in ci_type.tables() {
                for rid in [1_u32, 2, 0x3FFF, 0x4000, 0xFFFF, 0x1_0000, 0x00FF_FFFF] {
                    let token = Token::from_parts(*table, rid);
                    let coded = ci_type.encode(token).unwrap();
                    assert_eq!(ci_type.decode(coded), token, "{ci_type:?} {table:?} {rid}");
                }
            }
        }
    }

    #[test]
    fn coded_index_from_token() {
        let token = Token::from_parts(TableId::TypeSpec, 9);
        let index = CodedIndex::from_token(token, CodedIndexType::TypeDefOrRef).unwrap();
        assert_eq!(index.tag, TableId::TypeSpec);
        assert_eq!(index.row, 9);
        assert_eq!(index.value().unwrap(), (9 << 2) | 2);
        assert_eq!(
            CodedIndex::from_value(index.value().unwrap(), CodedIndexType::TypeDefOrRef),
            index
        );

        assert!(CodedIndex::from_token(token, CodedIndexType::HasConstant).is_err());
        assert!(CodedIndex::null(CodedIndexType::HasConstant).is_null());
    }

    #[test]
    fn reserved_tags_keep_their_value() {
        // tag 1 of CustomAttributeType is an unused Module slot
        let unused = CodedIndex::from_value(0x0009, CodedIndexType::CustomAttributeType);
        assert_eq!(unused.tag, TableId::Module);
        assert_eq!(unused.value().unwrap(), 0x0009);
        assert_ne!(
            unused,
            CodedIndex::new(TableId::Module, 1, CodedIndexType::CustomAttributeType)
        );

        // tag 3 of TypeDefOrRef has no table at all
        let reserved = CodedIndex::from_value(0x0007, CodedIndexType::TypeDefOrRef);
        assert_eq!(reserved.value().unwrap(), 0x0007);

        // a changed index is encoded from its token again
        let mut changed = reserved;
        changed.tag = TableId::TypeRef;
        changed.token = Token::from_parts(TableId::TypeRef, 1);
        assert_eq!(changed.value().unwrap(), (1 << 2) | 1);

        let mut foreign = reserved;
        foreign.row = 2;
        foreign.token = Token::from_parts(TableId::Module, 2);
        assert!(foreign.value().is_err());
    }

    #[test]
    fn encoder_sizes() {
        let info = TableInfo::new_test(&[(TableId::TypeRef, 0x3FFF)], false, false, false);
        let encoder = IndexEncoder::new(CodedIndexType::TypeDefOrRef, &info);
        assert_eq!(encoder.index_size(), IndexSize::Short);
        assert_eq!(encoder.tables().len(), 3);

        let info = TableInfo::new_test(&[(TableId::TypeRef, 0x4000)], false, false, false);
        let encoder = IndexEncoder::new(CodedIndexType::TypeDefOrRef, &info);
        assert_eq!(encoder.index_size(), IndexSize::Long);

        let token = Token::from_parts(TableId::TypeRef, 0x4000);
        let coded = encoder.encode_token(token).unwrap();
        assert_eq!(encoder.decode_index(coded), token);
    }
}
