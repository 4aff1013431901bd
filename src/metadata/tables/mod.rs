//! # Metadata Tables
//!
//! Row types of all tables of the `#~` stream, ECMA-335 Partition II Section 22 and the
//! Portable PDB v1.0 tables, together with the shared table infrastructure in [`types`].
//!
//! Every table has its own module holding the row struct (`<Table>Raw`) and, where ECMA-335
//! defines them, the flag constants of its bitmask columns. Rows store columns only: heap
//! offsets and row ids as `u32`, coded indices as [`CodedIndex`]. A row's own row id is its
//! position in the table.

mod assembly;
mod assemblyos;
mod assemblyprocessor;
mod assemblyref;
mod assemblyrefos;
mod assemblyrefprocessor;
mod classlayout;
mod constant;
mod customattribute;
mod customdebuginformation;
mod declsecurity;
mod document;
mod enclog;
mod encmap;
mod event;
mod eventmap;
mod eventptr;
mod exportedtype;
mod field;
mod fieldlayout;
mod fieldmarshal;
mod fieldptr;
mod fieldrva;
mod file;
mod genericparam;
mod genericparamconstraint;
mod implmap;
mod importscope;
mod interfaceimpl;
mod localconstant;
mod localscope;
mod localvariable;
mod manifestresource;
mod memberref;
mod methoddebuginformation;
mod methoddef;
mod methodimpl;
mod methodptr;
mod methodsemantics;
mod methodspec;
mod module;
mod moduleref;
mod nestedclass;
mod param;
mod paramptr;
mod property;
mod propertymap;
mod propertyptr;
mod standalonesig;
mod statemachinemethod;
mod typedef;
mod typeref;
mod typespec;

pub mod types;

pub use assembly::*;
pub use assemblyos::*;
pub use assemblyprocessor::*;
pub use assemblyref::*;
pub use assemblyrefos::*;
pub use assemblyrefprocessor::*;
pub use classlayout::*;
pub use constant::*;
pub use customattribute::*;
pub use customdebuginformation::*;
pub use declsecurity::*;
pub use document::*;
pub use enclog::*;
pub use encmap::*;
pub use event::*;
pub use eventmap::*;
pub use eventptr::*;
pub use exportedtype::*;
pub use field::*;
pub use fieldlayout::*;
pub use fieldmarshal::*;
pub use fieldptr::*;
pub use fieldrva::*;
pub use file::*;
pub use genericparam::*;
pub use genericparamconstraint::*;
pub use implmap::*;
pub use importscope::*;
pub use interfaceimpl::*;
pub use localconstant::*;
pub use localscope::*;
pub use localvariable::*;
pub use manifestresource::*;
pub use memberref::*;
pub use methoddebuginformation::*;
pub use methoddef::*;
pub use methodimpl::*;
pub use methodptr::*;
pub use methodsemantics::*;
pub use methodspec::*;
pub use module::*;
pub use moduleref::*;
pub use nestedclass::*;
pub use param::*;
pub use paramptr::*;
pub use property::*;
pub use propertymap::*;
pub use propertyptr::*;
pub use standalonesig::*;
pub use statemachinemethod::*;
pub use typedef::*;
pub use typeref::*;
pub use typespec::*;
pub use types::*;
