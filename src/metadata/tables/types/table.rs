//! The generic, lazily materialized metadata table.
//!
//! A table read from a stream keeps a reference to its byte span and only decodes its rows the
//! first time they are needed. Tables that are never touched are never parsed, and a table that
//! is neither modified nor resized is written back by copying its original bytes.
//!
//! Materialization goes through a [`std::sync::OnceLock`], so several readers may touch a table
//! for the first time concurrently. Mutation needs `&mut` access, which makes the single
//! writer contract a compile time property.

use std::{cmp::Ordering, fmt, sync::Arc, sync::OnceLock};

use rayon::prelude::*;

use crate::{
    metadata::tables::{MetadataRow, RowReader, RowWriter, TableId, TableLayout},
    Error::OutOfBounds,
    Result,
};

/// The byte span a serialized table was read from
#[derive(Clone)]
struct TableSource {
    data: Arc<[u8]>,
    offset: usize,
    rows: u32,
    layout: TableLayout,
}

impl fmt::Debug for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSource")
            .field("offset", &self.offset)
            .field("rows", &self.rows)
            .field("row_size", &self.layout.row_size())
            .finish()
    }
}

impl TableSource {
    fn span(&self) -> Result<(usize, usize)> {
        let size = (self.rows as usize)
            .checked_mul(self.layout.row_size() as usize)
            .ok_or(OutOfBounds)?;
        let end = self.offset.checked_add(size).ok_or(OutOfBounds)?;
        if end > self.data.len() {
            return Err(malformed_error!(
                "{:?} with {} rows of {} bytes runs past the end of the stream ({} > {})",
                self.layout.table_id(),
                self.rows,
                self.layout.row_size(),
                end,
                self.data.len()
            ));
        }

        Ok((self.offset, end))
    }

    fn decode<R: MetadataRow>(&self) -> Result<Vec<R>> {
        let (start, end) = self.span()?;
        let data = &self.data[..end];
        let row_size = self.layout.row_size() as usize;

        let mut rows = Vec::with_capacity(self.rows as usize);
        let mut offset = start;
        for _ in 0..self.rows {
            let row_start = offset;
            let mut reader = RowReader::new(data, &mut offset, &self.layout);
            rows.push(R::row_read(&mut reader)?);

            if offset - row_start != row_size {
                return Err(malformed_error!(
                    "{:?} row consumed {} bytes, layout expects {}",
                    R::TABLE_ID,
                    offset - row_start,
                    row_size
                ));
            }
        }

        log::debug!("Materialized {:?} with {} rows", R::TABLE_ID, rows.len());
        Ok(rows)
    }
}

/// An ordered collection of rows of one table.
///
/// Rows are addressed by their 1-based row id, the position in the table plus one.
#[derive(Clone, Debug)]
pub struct MetadataTable<R: MetadataRow> {
    layout: TableLayout,
    source: Option<TableSource>,
    rows: OnceLock<Vec<R>>,
    modified: bool,
}

impl<R: MetadataRow> MetadataTable<R> {
    /// Create an empty table with the given layout
    #[must_use]
    pub fn new(layout: TableLayout) -> Self {
        Self::from_rows(layout, Vec::new())
    }

    /// Create a table holding `rows`
    #[must_use]
    pub fn from_rows(layout: TableLayout, rows: Vec<R>) -> Self {
        debug_assert_eq!(layout.table_id(), R::TABLE_ID);
        MetadataTable {
            layout,
            source: None,
            rows: OnceLock::from(rows),
            modified: false,
        }
    }

    /// Create a table over `row_count` rows starting at `offset` of `data`.
    ///
    /// Nothing is decoded here. Problems with the byte span, such as a table that runs past
    /// the end of `data`, are reported when the rows are first accessed.
    #[must_use]
    pub fn serialized(data: Arc<[u8]>, offset: usize, row_count: u32, layout: TableLayout) -> Self {
        debug_assert_eq!(layout.table_id(), R::TABLE_ID);
        MetadataTable {
            layout: layout.clone(),
            source: Some(TableSource {
                data,
                offset,
                rows: row_count,
                layout,
            }),
            rows: OnceLock::new(),
            modified: false,
        }
    }

    /// The table this is
    #[must_use]
    pub fn table_id(&self) -> TableId {
        R::TABLE_ID
    }

    /// The current layout
    #[must_use]
    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// Size of a single row with the current layout
    #[must_use]
    pub fn row_size(&self) -> u32 {
        self.layout.row_size()
    }

    /// Number of rows. Does not materialize the table.
    #[must_use]
    pub fn len(&self) -> u32 {
        match (self.rows.get(), &self.source) {
            #[allow(clippy::cast_possible_truncation)]
            (Some(rows), _) => rows.len() as u32,
            (None, Some(source)) => source.rows,
            (None, None) => 0,
        }
    }

    /// True if the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once the rows have been decoded (or the table was built from rows)
    #[must_use]
    pub fn is_materialized(&self) -> bool {
        self.rows.get().is_some()
    }

    /// Size of the table data in bytes with the current layout
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.len()) * u64::from(self.row_size())
    }

    fn materialize(&self) -> Result<&Vec<R>> {
        if let Some(rows) = self.rows.get() {
            return Ok(rows);
        }

        let rows = match &self.source {
            Some(source) => source.decode::<R>()?,
            None => Vec::new(),
        };

        Ok(self.rows.get_or_init(|| rows))
    }

    fn rows_mut(&mut self) -> Result<&mut Vec<R>> {
        self.modified = true;
        if self.rows.get().is_none() {
            let rows = match &self.source {
                Some(source) => source.decode::<R>()?,
                None => Vec::new(),
            };
            let _ = self.rows.set(rows);
        }

        self.rows
            .get_mut()
            .ok_or_else(|| malformed_error!("{:?} failed to materialize", R::TABLE_ID))
    }

    /// All rows in table order, decoding them on first access.
    ///
    /// # Errors
    /// Returns an error if the table data is truncated or malformed.
    pub fn rows(&self) -> Result<&[R]> {
        Ok(self.materialize()?.as_slice())
    }

    /// Iterate all rows in table order.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn iter(&self) -> Result<std::slice::Iter<'_, R>> {
        Ok(self.materialize()?.iter())
    }

    /// Iterate all rows in parallel.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn par_iter(&self) -> Result<rayon::slice::Iter<'_, R>> {
        Ok(self.materialize()?.par_iter())
    }

    /// Force decoding of the rows.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn materialize_rows(&self) -> Result<()> {
        self.materialize().map(|_| ())
    }

    /// The row with the 1-based `rid`, `None` if there is no such row.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn get(&self, rid: u32) -> Result<Option<&R>> {
        if rid == 0 {
            return Ok(None);
        }

        Ok(self.materialize()?.get(rid as usize - 1))
    }

    /// Mutable access to the row with the 1-based `rid`.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn get_mut(&mut self, rid: u32) -> Result<Option<&mut R>> {
        if rid == 0 {
            return Ok(None);
        }

        Ok(self.rows_mut()?.get_mut(rid as usize - 1))
    }

    /// Value of column `column` of row `rid`.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn column(&self, rid: u32, column: usize) -> Result<Option<u32>> {
        Ok(self.get(rid)?.and_then(|row| row.column(column)))
    }

    /// Replace the row at `rid`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if there is no row at `rid`.
    pub fn set(&mut self, rid: u32, row: R) -> Result<()> {
        match self.get_mut(rid)? {
            Some(slot) => {
                *slot = row;
                Ok(())
            }
            None => Err(OutOfBounds),
        }
    }

    /// Append a row and return its rid.
    ///
    /// # Errors
    /// Returns an error if the existing rows fail to decode or the table is full.
    pub fn push(&mut self, row: R) -> Result<u32> {
        let rows = self.rows_mut()?;
        if rows.len() >= 0x00FF_FFFF {
            return Err(malformed_error!("{:?} is full", R::TABLE_ID));
        }

        rows.push(row);
        #[allow(clippy::cast_possible_truncation)]
        Ok(rows.len() as u32)
    }

    /// Insert a row so that it gets `rid`, moving the following rows up by one.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `rid` is 0 or larger than `len() + 1`.
    pub fn insert(&mut self, rid: u32, row: R) -> Result<()> {
        let rows = self.rows_mut()?;
        if rid == 0 || rid as usize > rows.len() + 1 {
            return Err(OutOfBounds);
        }

        rows.insert(rid as usize - 1, row);
        Ok(())
    }

    /// Remove and return the row at `rid`, moving the following rows down by one.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if there is no row at `rid`.
    pub fn remove(&mut self, rid: u32) -> Result<R> {
        let rows = self.rows_mut()?;
        if rid == 0 || rid as usize > rows.len() {
            return Err(OutOfBounds);
        }

        Ok(rows.remove(rid as usize - 1))
    }

    /// True if an equal row is present.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn contains(&self, row: &R) -> Result<bool> {
        Ok(self.materialize()?.contains(row))
    }

    /// The rid of the first row equal to `row`.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn position(&self, row: &R) -> Result<Option<u32>> {
        #[allow(clippy::cast_possible_truncation)]
        Ok(self
            .materialize()?
            .iter()
            .position(|candidate| candidate == row)
            .map(|index| index as u32 + 1))
    }

    /// Remove all rows
    pub fn clear(&mut self) {
        self.source = None;
        self.rows = OnceLock::from(Vec::new());
        self.modified = true;
    }

    /// Switch to a layout with different column widths.
    ///
    /// # Panics
    /// Panics if `layout` does not describe the same columns as the current layout. Mixing
    /// up layouts of different tables is a programming error, not a data problem.
    pub fn update_layout(&mut self, layout: TableLayout) {
        assert!(
            self.layout.same_shape(&layout),
            "Layout of {:?} can not be replaced by a layout of {:?} with different columns",
            self.layout.table_id(),
            layout.table_id()
        );

        self.layout = layout;
    }

    fn compare_key(row: &R, keys: &[usize], key: &[u32]) -> Ordering {
        for (column, expected) in keys.iter().zip(key.iter()) {
            match row.column(*column).unwrap_or(0).cmp(expected) {
                Ordering::Equal => {}
                other => return other,
            }
        }
        Ordering::Equal
    }

    /// Binary search a sorted table for a row whose column `column` equals `key`.
    ///
    /// The table has to be sorted by `column`; the result is unspecified otherwise.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn find_by_key(&self, column: usize, key: u32) -> Result<Option<u32>> {
        let rows = self.materialize()?;
        #[allow(clippy::cast_possible_truncation)]
        Ok(rows
            .binary_search_by(|row| Self::compare_key(row, &[column], &[key]))
            .ok()
            .map(|index| index as u32 + 1))
    }

    /// The rid of the first row whose column `column` equals `key`, in a sorted table.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn find_first_by_key(&self, column: usize, key: u32) -> Result<Option<u32>> {
        let rows = self.materialize()?;
        let first = rows.partition_point(|row| row.column(column).unwrap_or(0) < key);
        #[allow(clippy::cast_possible_truncation)]
        Ok(rows
            .get(first)
            .filter(|row| row.column(column) == Some(key))
            .map(|_| first as u32 + 1))
    }

    /// The rid of the last row whose column `column` is less than or equal to `key`, in a
    /// sorted table.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn find_closest_by_key(&self, column: usize, key: u32) -> Result<Option<u32>> {
        let rows = self.materialize()?;
        let after = rows.partition_point(|row| row.column(column).unwrap_or(0) <= key);
        #[allow(clippy::cast_possible_truncation)]
        Ok((after > 0).then_some(after as u32))
    }

    /// True if the rows are ordered by the designated sort key of the table.
    ///
    /// Tables without a sort key are never reported as sorted.
    ///
    /// # Errors
    /// See [`MetadataTable::rows`].
    pub fn is_sorted_by_key(&self) -> Result<bool> {
        let Some(keys) = R::TABLE_ID.sort_key() else {
            return Ok(false);
        };

        let rows = self.materialize()?;
        Ok(rows.windows(2).all(|pair| {
            let key: Vec<u32> = keys
                .iter()
                .map(|column| pair[1].column(*column).unwrap_or(0))
                .collect();
            Self::compare_key(&pair[0], keys, &key) != Ordering::Greater
        }))
    }

    /// Insert `row` behind all rows with a key less than or equal to its own, keeping a
    /// sorted table sorted. Returns the rid the row ended up with.
    ///
    /// Tables without a sort key append the row.
    ///
    /// # Errors
    /// See [`MetadataTable::push`].
    pub fn insert_sorted(&mut self, row: R) -> Result<u32> {
        let Some(keys) = R::TABLE_ID.sort_key() else {
            return self.push(row);
        };

        let key: Vec<u32> = keys
            .iter()
            .map(|column| row.column(*column).unwrap_or(0))
            .collect();
        let rows = self.rows_mut()?;
        let index =
            rows.partition_point(|existing| Self::compare_key(existing, keys, &key) != Ordering::Greater);
        rows.insert(index, row);

        #[allow(clippy::cast_possible_truncation)]
        Ok(index as u32 + 1)
    }

    /// True if a row was changed, added or removed since the table was created
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// True if the table can be written by copying its original bytes
    fn is_untouched(&self) -> bool {
        !self.modified
            && self
                .source
                .as_ref()
                .is_some_and(|source| source.layout == self.layout)
    }

    /// Write all rows with the current layout.
    ///
    /// With `reuse_source` set, a table that was never modified and whose layout did not
    /// change is copied from its original bytes instead of being encoded again.
    ///
    /// # Errors
    /// Returns an error if the rows fail to decode, a value does not fit its column or `data`
    /// is too small.
    pub fn write(&self, data: &mut [u8], offset: &mut usize, reuse_source: bool) -> Result<()> {
        if reuse_source && self.is_untouched() {
            if let Some(source) = &self.source {
                let (start, end) = source.span()?;
                let target_end = offset.checked_add(end - start).ok_or(OutOfBounds)?;
                if target_end > data.len() {
                    return Err(OutOfBounds);
                }

                data[*offset..target_end].copy_from_slice(&source.data[start..end]);
                *offset = target_end;
                return Ok(());
            }
        }

        let row_size = self.layout.row_size() as usize;
        for row in self.materialize()? {
            let row_start = *offset;
            let mut writer = RowWriter::new(data, offset, &self.layout);
            row.row_write(&mut writer)?;

            if *offset - row_start != row_size {
                return Err(malformed_error!(
                    "{:?} row produced {} bytes, layout expects {}",
                    R::TABLE_ID,
                    *offset - row_start,
                    row_size
                ));
            }
        }

        Ok(())
    }
}

impl<R: MetadataRow> PartialEq for MetadataTable<R> {
    /// Tables are equal if they hold equal rows. Tables that fail to decode are never equal.
    fn eq(&self, other: &Self) -> bool {
        match (self.rows(), other.rows()) {
            (Ok(ours), Ok(theirs)) => ours == theirs,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::metadata::tables::{FieldRaw, NestedClassRaw, TableInfo, TableLayout};

    fn field(flags: u16, name: u32) -> FieldRaw {
        FieldRaw {
            flags,
            name,
            signature: 1,
        }
    }

    fn field_layout() -> TableLayout {
        TableLayout::resolve(
            TableId::Field,
            &TableInfo::new_test(&[], false, false, false),
        )
    }

    #[test]
    fn list_semantics() {
        let mut table = MetadataTable::new(field_layout());
        assert!(table.is_empty());

        assert_eq!(table.push(field(1, 0x10)).unwrap(), 1);
        assert_eq!(table.push(field(2, 0x20)).unwrap(), 2);
        table.insert(1, field(3, 0x30)).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(1).unwrap().unwrap().flags, 3);
        assert_eq!(table.get(3).unwrap().unwrap().flags, 2);
        assert!(table.get(0).unwrap().is_none());
        assert!(table.get(4).unwrap().is_none());

        assert!(table.contains(&field(1, 0x10)).unwrap());
        assert_eq!(table.position(&field(2, 0x20)).unwrap(), Some(3));

        let removed = table.remove(1).unwrap();
        assert_eq!(removed.flags, 3);
        assert!(table.remove(5).is_err());

        table.set(2, field(9, 0x90)).unwrap();
        assert_eq!(table.column(2, 1).unwrap(), Some(0x90));
        assert!(table.set(7, field(9, 0x90)).is_err());

        table.clear();
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn lazy_materialization() {
        let data: Arc<[u8]> = Arc::from(
            vec![
                0xAA, 0xAA, // unrelated prefix
                0x06, 0x00, 0x01, 0x00, 0x02, 0x00, // row 1
                0x16, 0x00, 0x03, 0x00, 0x04, 0x00, // row 2
            ]
            .into_boxed_slice(),
        );

        let table = MetadataTable::<FieldRaw>::serialized(data, 2, 2, field_layout());
        assert_eq!(table.len(), 2);
        assert!(!table.is_materialized());

        let row = table.get(2).unwrap().unwrap();
        assert!(table.is_materialized());
        assert_eq!(row.flags, 0x16);
        assert_eq!(row.name, 3);
        assert_eq!(row.signature, 4);
    }

    #[test]
    fn truncated_table_fails_on_access() {
        let data: Arc<[u8]> = Arc::from(vec![0x06, 0x00, 0x01, 0x00].into_boxed_slice());

        let table = MetadataTable::<FieldRaw>::serialized(data, 0, 1, field_layout());
        assert_eq!(table.len(), 1);
        assert!(table.rows().is_err());
        assert!(table.get(1).is_err());
    }

    #[test]
    fn write_reuses_untouched_source() {
        let bytes = vec![0x06, 0x00, 0x01, 0x00, 0x02, 0x00];
        let data: Arc<[u8]> = Arc::from(bytes.clone().into_boxed_slice());
        let table = MetadataTable::<FieldRaw>::serialized(data, 0, 1, field_layout());

        let mut out = vec![0_u8; 6];
        let mut offset = 0;
        table.write(&mut out, &mut offset, true).unwrap();
        assert!(!table.is_materialized());
        assert_eq!(out, bytes);

        let mut out = vec![0_u8; 6];
        let mut offset = 0;
        table.write(&mut out, &mut offset, false).unwrap();
        assert!(table.is_materialized());
        assert!(!table.is_modified());
        assert_eq!(out, bytes);

        let mut table = table;
        table.get_mut(1).unwrap().unwrap().name = 3;
        assert!(table.is_modified());

        let mut out = vec![0_u8; 6];
        let mut offset = 0;
        table.write(&mut out, &mut offset, true).unwrap();
        assert_eq!(out, vec![0x06, 0x00, 0x03, 0x00, 0x02, 0x00]);
    }

    #[test]
    fn write_with_wider_layout() {
        let mut table = MetadataTable::new(field_layout());
        table.push(field(0x06, 0x1234)).unwrap();

        let wide = TableLayout::resolve(
            TableId::Field,
            &TableInfo::new_test(&[], true, false, false),
        );
        table.update_layout(wide);
        assert_eq!(table.row_size(), 8);

        let mut out = vec![0_u8; 8];
        let mut offset = 0;
        table.write(&mut out, &mut offset, true).unwrap();
        assert_eq!(out, vec![0x06, 0x00, 0x34, 0x12, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    #[should_panic(expected = "can not be replaced")]
    fn update_layout_rejects_other_shape() {
        let mut table = MetadataTable::<FieldRaw>::new(field_layout());
        let other = TableLayout::resolve(
            TableId::Param,
            &TableInfo::new_test(&[], false, false, false),
        );
        table.update_layout(other);
    }

    #[test]
    fn sorted_lookups() {
        let layout = TableLayout::resolve(
            TableId::NestedClass,
            &TableInfo::new_test(&[], false, false, false),
        );
        let mut table = MetadataTable::new(layout);
        for (nested, enclosing) in [(5, 1), (2, 1), (9, 4), (3, 2)] {
            table
                .insert_sorted(NestedClassRaw {
                    nested_class: nested,
                    enclosing_class: enclosing,
                })
                .unwrap();
        }

        let order: Vec<u32> = table.iter().unwrap().map(|row| row.nested_class).collect();
        assert_eq!(order, vec![2, 3, 5, 9]);
        assert!(table.is_sorted_by_key().unwrap());

        assert_eq!(table.find_by_key(0, 5).unwrap(), Some(3));
        assert_eq!(table.find_by_key(0, 4).unwrap(), None);
        assert_eq!(table.find_first_by_key(0, 9).unwrap(), Some(4));
        assert_eq!(table.find_closest_by_key(0, 4).unwrap(), Some(2));
        assert_eq!(table.find_closest_by_key(0, 1).unwrap(), None);
        assert_eq!(table.find_closest_by_key(0, 100).unwrap(), Some(4));

        table
            .push(NestedClassRaw {
                nested_class: 1,
                enclosing_class: 1,
            })
            .unwrap();
        assert!(!table.is_sorted_by_key().unwrap());
    }

    #[test]
    fn unsorted_table_kind() {
        let table = MetadataTable::from_rows(field_layout(), vec![field(1, 1)]);
        assert!(!table.is_sorted_by_key().unwrap());
    }

    #[test]
    fn par_iter_matches_iter() {
        let rows: Vec<FieldRaw> = (1..=64).map(|i| field(i, u32::from(i))).collect();
        let table = MetadataTable::from_rows(field_layout(), rows);
        let sum: u32 = table.par_iter().unwrap().map(|row| row.name).sum();
        assert_eq!(sum, (1..=64).sum());
    }
}
