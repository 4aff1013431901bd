//! Metadata tokens.
//!
//! A token packs a table identifier into the top 8 bits and a 1-based row id (RID) into the
//! low 24 bits. A RID of `0` denotes "no value" for any reference column, independent of the
//! table byte.

use std::fmt;

use crate::metadata::tables::TableId;

/// A metadata token, `(table << 24) | rid`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Token(pub u32);

impl Token {
    /// Create a token from its raw value
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Create a token from a table and a row id. Only the low 24 bits of `rid` are kept.
    #[must_use]
    pub fn from_parts(table: TableId, rid: u32) -> Self {
        Token((table.token_type() << 24) | (rid & 0x00FF_FFFF))
    }

    /// The raw 32-bit value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The table byte
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The table as [`TableId`], `None` for table bytes that are not defined
    #[must_use]
    pub fn table_id(&self) -> Option<TableId> {
        TableId::try_from(self.table()).ok()
    }

    /// The 1-based row id
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// True if the token does not reference any row
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.row() == 0
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl From<i32> for Token {
    fn from(value: i32) -> Self {
        Token(u32::from_ne_bytes(value.to_ne_bytes()))
    }
}

impl From<Token> for i32 {
    fn from(token: Token) -> Self {
        i32::from_ne_bytes(token.0.to_ne_bytes())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_token_new() {
        let token = Token::new(0x06000001);
        assert_eq!(token.value(), 0x06000001);
        assert_eq!(token.table(), 0x06);
        assert_eq!(token.row(), 1);
    }

    #[test]
    fn test_token_from_parts() {
        let token = Token::from_parts(TableId::TypeDef, 5);
        assert_eq!(token.value(), 0x02000005);
        assert_eq!(token.table_id(), Some(TableId::TypeDef));

        let token = Token::from_parts(TableId::CustomDebugInformation, 0x00FF_FFFF);
        assert_eq!(token.value(), 0x37FF_FFFF);

        let token = Token::from_parts(TableId::Field, 0x0100_0002);
        assert_eq!(token.row(), 2);
    }

    #[test]
    fn test_token_table_id_unknown() {
        let token = Token(0x2D000001);
        assert_eq!(token.table_id(), None);
        assert_eq!(token.table(), 0x2D);
    }

    #[test]
    fn test_token_is_null() {
        assert!(Token(0x00000000).is_null());
        assert!(Token(0x06000000).is_null());
        assert!(!Token(0x06000001).is_null());
    }

    #[test]
    fn test_token_conversions() {
        let value = 0x06000001u32;
        let token: Token = value.into();
        let back_to_u32: u32 = token.into();
        assert_eq!(back_to_u32, value);

        let token = Token::from(-1_i32);
        assert_eq!(token.value(), 0xFFFF_FFFF);
        assert_eq!(i32::from(token), -1);

        let token = Token(0x7000_0001);
        assert_eq!(i32::from(token), 0x7000_0001);
    }

    #[test]
    fn test_token_display_debug() {
        let token = Token(0x06000001);
        assert_eq!(format!("{}", token), "0x06000001");
        assert_eq!(
            format!("{:?}", token),
            "Token(0x06000001, table: 0x06, row: 1)"
        );
    }

    #[test]
    fn test_token_ordering_and_hash() {
        let mut tokens = vec![Token(0x06000002), Token(0x02000001), Token(0x06000001)];
        tokens.sort();
        assert_eq!(
            tokens,
            vec![Token(0x02000001), Token(0x06000001), Token(0x06000002)]
        );

        let mut map = HashMap::new();
        map.insert(Token(0x06000001), "method");
        assert_eq!(map.get(&Token(0x06000001)), Some(&"method"));
        assert_eq!(map.get(&Token(0x06000002)), None);
    }
}
