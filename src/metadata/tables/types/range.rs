//! Ranges of child rows owned by a parent row.
//!
//! A `TypeDef` owns the fields from its `FieldList` up to the `FieldList` of the next `TypeDef`,
//! and the same scheme is used for methods, params, properties and events. When a pointer table
//! such as `FieldPtr` is present, the positions of the range are looked up in the pointer table
//! first. Ranges are derived on demand and own their data, see
//! [`crate::metadata::streams::TablesStream::member_range`].

use crate::metadata::{tables::TableId, token::Token};

/// The rows of one table owned by a single parent row, as `[start, end)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataRange {
    /// Positions are row ids of `table`
    Continuous {
        /// Table the rows belong to
        table: TableId,
        /// First position, inclusive
        start: u32,
        /// Last position, exclusive
        end: u32,
    },
    /// Positions are rows of a pointer table, `targets` holds the row ids of `table` they
    /// point at
    Redirected {
        /// Table the resolved rows belong to
        table: TableId,
        /// First position in the pointer table, inclusive
        start: u32,
        /// Last position in the pointer table, exclusive
        end: u32,
        /// Resolved row ids, one per position
        targets: Vec<u32>,
    },
}

impl MetadataRange {
    /// A range without rows
    #[must_use]
    pub fn empty(table: TableId) -> MetadataRange {
        MetadataRange::Continuous {
            table,
            start: 0,
            end: 0,
        }
    }

    /// Rows `start..end` of `table`. An inverted range is treated as empty.
    #[must_use]
    pub fn continuous(table: TableId, start: u32, end: u32) -> MetadataRange {
        MetadataRange::Continuous {
            table,
            start,
            end: end.max(start),
        }
    }

    /// Positions `start..start + targets.len()` of a pointer table into `table`
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn redirected(table: TableId, start: u32, targets: Vec<u32>) -> MetadataRange {
        MetadataRange::Redirected {
            table,
            start,
            end: start + targets.len() as u32,
            targets,
        }
    }

    /// The table the resolved rows belong to
    #[must_use]
    pub fn table(&self) -> TableId {
        match self {
            MetadataRange::Continuous { table, .. } | MetadataRange::Redirected { table, .. } => {
                *table
            }
        }
    }

    /// First position, inclusive
    #[must_use]
    pub fn start(&self) -> u32 {
        match self {
            MetadataRange::Continuous { start, .. } | MetadataRange::Redirected { start, .. } => {
                *start
            }
        }
    }

    /// Last position, exclusive
    #[must_use]
    pub fn end(&self) -> u32 {
        match self {
            MetadataRange::Continuous { end, .. } | MetadataRange::Redirected { end, .. } => *end,
        }
    }

    /// Number of rows in the range
    #[must_use]
    pub fn len(&self) -> usize {
        (self.end() - self.start()) as usize
    }

    /// True if the range holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the positions go through a pointer table
    #[must_use]
    pub fn is_redirected(&self) -> bool {
        matches!(self, MetadataRange::Redirected { .. })
    }

    /// Row id of the `index`th row of the range
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rid(&self, index: usize) -> Option<u32> {
        if index >= self.len() {
            return None;
        }

        match self {
            MetadataRange::Continuous { start, .. } => Some(start + index as u32),
            MetadataRange::Redirected { targets, .. } => targets.get(index).copied(),
        }
    }

    /// Token of the `index`th row of the range
    #[must_use]
    pub fn token(&self, index: usize) -> Option<Token> {
        self.rid(index)
            .map(|rid| Token::from_parts(self.table(), rid))
    }

    /// True if row `rid` of the target table is part of the range
    #[must_use]
    pub fn contains_rid(&self, rid: u32) -> bool {
        match self {
            MetadataRange::Continuous { start, end, .. } => rid >= *start && rid < *end,
            MetadataRange::Redirected { targets, .. } => targets.contains(&rid),
        }
    }

    /// All row ids in range order
    #[must_use]
    pub fn rids(&self) -> Vec<u32> {
        (0..self.len()).filter_map(|index| self.rid(index)).collect()
    }

    /// Iterate the tokens of all rows in range order
    #[must_use]
    pub fn iter(&self) -> MetadataRangeIter<'_> {
        MetadataRangeIter {
            range: self,
            index: 0,
        }
    }
}

/// Iterator over the tokens of a [`MetadataRange`]
pub struct MetadataRangeIter<'a> {
    range: &'a MetadataRange,
    index: usize,
}

impl Iterator for MetadataRangeIter<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.range.token(self.index)?;
        self.index += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MetadataRangeIter<'_> {}

impl<'a> IntoIterator for &'a MetadataRange {
    type Item = Token;
    type IntoIter = MetadataRangeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continuous() {
        let range = MetadataRange::continuous(TableId::Field, 3, 5);
        assert_eq!(range.len(), 2);
        assert!(!range.is_redirected());
        assert_eq!(range.rids(), vec![3, 4]);
        assert!(range.contains_rid(4));
        assert!(!range.contains_rid(5));

        let tokens: Vec<u32> = range.iter().map(|token| token.value()).collect();
        assert_eq!(tokens, vec![0x0400_0003, 0x0400_0004]);
    }

    #[test]
    fn redirected() {
        let range = MetadataRange::redirected(TableId::MethodDef, 1, vec![3, 1]);
        assert_eq!(range.start(), 1);
        assert_eq!(range.end(), 3);
        assert!(range.is_redirected());
        assert_eq!(range.rids(), vec![3, 1]);
        assert!(range.contains_rid(3));
        assert!(!range.contains_rid(2));
        assert_eq!(range.token(0).unwrap().value(), 0x0600_0003);
        assert_eq!(range.iter().len(), 2);
    }

    #[test]
    fn empty_and_inverted() {
        let range = MetadataRange::empty(TableId::Param);
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
        assert_eq!(range.rid(0), None);

        let inverted = MetadataRange::continuous(TableId::Param, 7, 2);
        assert!(inverted.is_empty());
    }
}
