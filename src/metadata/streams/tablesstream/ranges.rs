//! Member ranges and their owners.
//!
//! A parent row owns the child rows from the value of its list column up to the list column of
//! the next parent row, the last parent owning everything up to the end of the child table.
//! When the pointer table of the child kind has rows, the range positions are rows of the
//! pointer table, which in turn name the actual child rows.

use crate::{
    metadata::{
        streams::tablesstream::TablesStream,
        tables::{MetadataRange, TableId},
    },
    Result,
};

/// The pointer table redirecting positions of `child`
fn pointer_table(child: TableId) -> Option<TableId> {
    match child {
        TableId::Field => Some(TableId::FieldPtr),
        TableId::MethodDef => Some(TableId::MethodPtr),
        TableId::Param => Some(TableId::ParamPtr),
        TableId::Property => Some(TableId::PropertyPtr),
        TableId::Event => Some(TableId::EventPtr),
        _ => None,
    }
}

impl TablesStream {
    /// The pointer table in use for `child`, if it has rows
    fn active_pointer_table(&self, child: TableId) -> Option<TableId> {
        pointer_table(child).filter(|pointer| self.row_count(*pointer) > 0)
    }

    /// Number of positions a range of `child` can address
    fn position_count(&self, child: TableId) -> u32 {
        match self.active_pointer_table(child) {
            Some(pointer) => self.row_count(pointer),
            None => self.row_count(child),
        }
    }

    /// `[start, end)` positions owned by row `owner_rid` of `owner`, in pointer table rows if
    /// one is in use. Both bounds are clamped to `1..=position_count + 1`.
    fn owned_positions(
        &self,
        owner: TableId,
        owner_rid: u32,
        column: usize,
        child: TableId,
    ) -> Result<Option<(u32, u32)>> {
        let owners = self.table_data(owner);
        if owner_rid == 0 || owner_rid > owners.len() {
            return Ok(None);
        }

        // List columns come from the file, keep them inside the child positions
        let limit = self.position_count(child).saturating_add(1);
        let start = owners
            .column(owner_rid, column)?
            .unwrap_or(0)
            .clamp(1, limit);
        let end = if owner_rid < owners.len() {
            owners
                .column(owner_rid + 1, column)?
                .unwrap_or(0)
                .clamp(start, limit)
        } else {
            limit
        };

        Ok(Some((start, end)))
    }

    /// The rows of `child` owned by row `owner_rid` of `owner`, whose list column is
    /// `column`.
    ///
    /// An `owner_rid` outside of the owner table yields an empty range. With a non-empty
    /// pointer table for `child`, the range is redirected through it.
    ///
    /// # Errors
    /// Returns an error if the owner or pointer table fails to decode
    pub fn member_range(
        &self,
        owner: TableId,
        owner_rid: u32,
        column: usize,
        child: TableId,
    ) -> Result<MetadataRange> {
        let Some((start, end)) = self.owned_positions(owner, owner_rid, column, child)? else {
            return Ok(MetadataRange::empty(child));
        };

        let Some(pointer) = self.active_pointer_table(child) else {
            return Ok(MetadataRange::continuous(child, start, end));
        };

        let pointers = self.table_data(pointer);
        let mut targets = Vec::with_capacity(end.saturating_sub(start) as usize);
        for position in start..end {
            match pointers.column(position, 0)? {
                Some(target) => targets.push(target),
                None => break,
            }
        }

        Ok(MetadataRange::redirected(child, start, targets))
    }

    /// The row of `owner` whose range of `child` contains `child_rid`, 0 if there is none.
    ///
    /// The reverse of [`TablesStream::member_range`]. List columns are ascending, so the
    /// owner is found by binary search.
    ///
    /// # Errors
    /// Returns an error if the owner or pointer table fails to decode
    pub fn member_owner(
        &self,
        owner: TableId,
        column: usize,
        child: TableId,
        child_rid: u32,
    ) -> Result<u32> {
        if child_rid == 0 {
            return Ok(0);
        }

        let position = match self.active_pointer_table(child) {
            Some(pointer) => {
                let pointers = self.table_data(pointer);
                let mut found = 0;
                for rid in 1..=pointers.len() {
                    if pointers.column(rid, 0)? == Some(child_rid) {
                        found = rid;
                        break;
                    }
                }
                found
            }
            None => child_rid,
        };

        if position == 0 || position > self.position_count(child) {
            return Ok(0);
        }

        // Last owner whose list starts at or before the position
        let owners = self.table_data(owner);
        let (mut low, mut high) = (0_u32, owners.len());
        while low < high {
            let middle = low + (high - low) / 2;
            if owners.column(middle + 1, column)?.unwrap_or(0) <= position {
                low = middle + 1;
            } else {
                high = middle;
            }
        }

        if low == 0 {
            return Ok(0);
        }

        match self.owned_positions(owner, low, column, child)? {
            Some((start, end)) if position >= start && position < end => Ok(low),
            _ => Ok(0),
        }
    }

    /// The fields of the type `type_rid`
    ///
    /// # Errors
    /// See [`TablesStream::member_range`]
    pub fn field_range(&self, type_rid: u32) -> Result<MetadataRange> {
        self.member_range(TableId::TypeDef, type_rid, 4, TableId::Field)
    }

    /// The methods of the type `type_rid`
    ///
    /// # Errors
    /// See [`TablesStream::member_range`]
    pub fn method_range(&self, type_rid: u32) -> Result<MetadataRange> {
        self.member_range(TableId::TypeDef, type_rid, 5, TableId::MethodDef)
    }

    /// The parameters of the method `method_rid`
    ///
    /// # Errors
    /// See [`TablesStream::member_range`]
    pub fn param_range(&self, method_rid: u32) -> Result<MetadataRange> {
        self.member_range(TableId::MethodDef, method_rid, 5, TableId::Param)
    }

    /// The `PropertyMap` or `EventMap` row whose parent is `type_rid`
    fn map_row(&self, map: TableId, type_rid: u32) -> Result<Option<u32>> {
        let maps = self.table_data(map);
        for rid in 1..=maps.len() {
            if maps.column(rid, 0)? == Some(type_rid) {
                return Ok(Some(rid));
            }
        }

        Ok(None)
    }

    /// The properties of the type `type_rid`, found through its `PropertyMap` row
    ///
    /// # Errors
    /// See [`TablesStream::member_range`]
    pub fn property_range(&self, type_rid: u32) -> Result<MetadataRange> {
        match self.map_row(TableId::PropertyMap, type_rid)? {
            Some(map_rid) => {
                self.member_range(TableId::PropertyMap, map_rid, 1, TableId::Property)
            }
            None => Ok(MetadataRange::empty(TableId::Property)),
        }
    }

    /// The events of the type `type_rid`, found through its `EventMap` row
    ///
    /// # Errors
    /// See [`TablesStream::member_range`]
    pub fn event_range(&self, type_rid: u32) -> Result<MetadataRange> {
        match self.map_row(TableId::EventMap, type_rid)? {
            Some(map_rid) => self.member_range(TableId::EventMap, map_rid, 1, TableId::Event),
            None => Ok(MetadataRange::empty(TableId::Event)),
        }
    }

    /// The local variables of the Portable PDB scope `scope_rid`
    ///
    /// # Errors
    /// See [`TablesStream::member_range`]
    pub fn local_variable_range(&self, scope_rid: u32) -> Result<MetadataRange> {
        self.member_range(TableId::LocalScope, scope_rid, 2, TableId::LocalVariable)
    }

    /// The local constants of the Portable PDB scope `scope_rid`
    ///
    /// # Errors
    /// See [`TablesStream::member_range`]
    pub fn local_constant_range(&self, scope_rid: u32) -> Result<MetadataRange> {
        self.member_range(TableId::LocalScope, scope_rid, 3, TableId::LocalConstant)
    }

    /// The type declaring the field `field_rid`, 0 if there is none
    ///
    /// # Errors
    /// See [`TablesStream::member_owner`]
    pub fn field_declaring_type(&self, field_rid: u32) -> Result<u32> {
        self.member_owner(TableId::TypeDef, 4, TableId::Field, field_rid)
    }

    /// The type declaring the method `method_rid`, 0 if there is none
    ///
    /// # Errors
    /// See [`TablesStream::member_owner`]
    pub fn method_declaring_type(&self, method_rid: u32) -> Result<u32> {
        self.member_owner(TableId::TypeDef, 5, TableId::MethodDef, method_rid)
    }

    /// The method owning the parameter `param_rid`, 0 if there is none
    ///
    /// # Errors
    /// See [`TablesStream::member_owner`]
    pub fn param_owner(&self, param_rid: u32) -> Result<u32> {
        self.member_owner(TableId::MethodDef, 5, TableId::Param, param_rid)
    }

    /// The type declaring the property `property_rid`, 0 if there is none
    ///
    /// # Errors
    /// See [`TablesStream::member_owner`]
    pub fn property_declaring_type(&self, property_rid: u32) -> Result<u32> {
        let map_rid =
            self.member_owner(TableId::PropertyMap, 1, TableId::Property, property_rid)?;
        Ok(self
            .table_data(TableId::PropertyMap)
            .column(map_rid, 0)?
            .unwrap_or(0))
    }

    /// The type declaring the event `event_rid`, 0 if there is none
    ///
    /// # Errors
    /// See [`TablesStream::member_owner`]
    pub fn event_declaring_type(&self, event_rid: u32) -> Result<u32> {
        let map_rid = self.member_owner(TableId::EventMap, 1, TableId::Event, event_rid)?;
        Ok(self
            .table_data(TableId::EventMap)
            .column(map_rid, 0)?
            .unwrap_or(0))
    }
}
