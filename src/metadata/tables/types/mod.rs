//! # Metadata Table Types Module
//!
//! Core infrastructure shared by all metadata tables: table identifiers, column schemas, coded
//! indices, the data-dependent layout model and the generic lazily decoded table container.
//!
//! ## Key Components
//!
//! - [`TableId`]: Enumeration of all tables, including the Portable PDB tables
//! - [`CodedIndexType`], [`CodedIndex`] and [`IndexEncoder`]: Compact cross-table references
//! - [`TableInfo`]: Row counts and heap flags every column width is derived from
//! - [`TableLayout`], [`ColumnLayout`], [`IndexSize`]: Resolved byte layout of one table
//! - [`MetadataRow`]: Trait implemented by every row type
//! - [`MetadataTable`]: Generic, lazily materialized table of one row type
//! - [`TableData`] and [`TableAccess`]: Storage for a table of any kind and typed access to it
//! - [`MetadataRange`]: Rows of a child table owned by a parent row
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use dotmeta::metadata::tables::{MetadataTable, TableId, TableInfo, TableLayout, FieldRaw};
//!
//! let info = TableInfo::default();
//! let mut table = MetadataTable::new(TableLayout::resolve(TableId::Field, &info));
//! let rid = table.push(FieldRaw { flags: 0x0006, name: 0x10, signature: 0x01 })?;
//! assert_eq!(rid, 1);
//! ```

mod codedindex;
mod data;
mod layout;
mod range;
mod row;
mod schema;
mod table;
mod tableid;
mod tableinfo;

pub use codedindex::*;
pub use data::*;
pub use layout::*;
pub use range::*;
pub use row::*;
pub use schema::*;
pub use table::*;
pub use tableid::*;
pub use tableinfo::*;
