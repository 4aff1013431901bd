//! Implementation of the ECMA-335 metadata.
//!
//! The metadata of a module starts with the [`root`], which lists the streams. The heaps and
//! the tables stream live in [`streams`], the row types of every table in [`tables`], and
//! [`image`] resolves rows into entities.

pub mod image;
pub mod root;
pub mod streams;
pub mod tables;
pub mod token;
