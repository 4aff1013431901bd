// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(clippy::too_many_arguments)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # dotmeta
//!
//! Reader and writer for the ECMA-335 metadata of .NET PE executables, centered on the
//! metadata tables stream (`#~`).
//!
//! ## Features
//!
//! - **Lazy table decoding** - Tables keep their byte span and decode rows on first access
//! - **Byte exact round trips** - Untouched tables are written back from their source bytes
//! - **Column widths** - Index widths follow row counts and heap sizes, and are re-resolved
//!   after every structural change
//! - **Member ranges** - Field, method, parameter, property and event lists, with and without
//!   pointer tables, in both directions
//! - **Entities** - Types, members and assemblies resolved on demand and cached per token
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dotmeta::prelude::*;
//! use std::path::Path;
//!
//! let image = MetadataImage::from_file(Path::new("tests/samples/example.dll"))?;
//! if let Some(assembly) = image.assembly()? {
//!     println!("{} {}", assembly.name, assembly.version);
//! }
//!
//! for ty in image.types()? {
//!     for method in ty.methods(&image)? {
//!         println!("{}::{}", ty.full_name(), method.name);
//!     }
//! }
//! # Ok::<(), dotmeta::Error>(())
//! ```
//!
//! ### Working with the tables stream directly
//!
//! ```rust,no_run
//! use dotmeta::metadata::{streams::TablesStream, tables::TypeDefRaw};
//!
//! # fn example(data: &[u8]) -> dotmeta::Result<()> {
//! let mut stream = TablesStream::from(data)?;
//! let types = stream.table::<TypeDefRaw>()?;
//! println!("{} types", types.len());
//!
//! let fields = stream.field_range(2)?;
//! for rid in fields.rids() {
//!     println!("field {rid}");
//! }
//!
//! let bytes = stream.write()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`](https://docs.rs/log) facade. The crate never
//! installs a logger.
//!
//! ## References
//!
//! * [ECMA-335 6th Edition](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf)
//! * [Portable PDB v1.0](https://github.com/dotnet/runtime/blob/main/docs/design/specs/PortablePdb-Metadata.md)

#[macro_use]
pub(crate) mod error;

/// Byte backends, the PE container and little-endian helpers.
///
/// [`file::File`] parses a PE image from memory or from a memory-mapped file and locates its
/// CLR runtime header and metadata. It implements [`file::RvaResolver`], the collaborator the
/// metadata layer uses to translate RVAs stored in tables into file offsets.
pub mod file;

/// Metadata root, heaps, tables and the entities resolved from them, based on ECMA-335
/// Partition II.
///
/// # Key Components
///
/// - [`metadata::image::MetadataImage`] - Entry point, ties the streams together
/// - [`metadata::root`] - Metadata root and stream directory
/// - [`metadata::streams`] - Heaps and the tables stream
/// - [`metadata::tables`] - Row types and table infrastructure
/// - [`metadata::token`] - Metadata tokens
pub mod metadata;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust,no_run
/// use dotmeta::prelude::*;
///
/// let image = MetadataImage::from_file("tests/samples/example.dll".as_ref())?;
/// println!("{} types", image.types()?.len());
/// # Ok::<(), dotmeta::Error>(())
/// ```
pub mod prelude;

/// `dotmeta` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dotmeta` Error type
///
/// # Examples
///
/// ```rust,no_run
/// use dotmeta::{metadata::image::MetadataImage, Error};
///
/// match MetadataImage::from_file(std::path::Path::new("tests/samples/native.exe")) {
///     Ok(_) => println!("Loaded successfully"),
///     Err(Error::NotSupported) => println!("Not a .NET image"),
///     Err(Error::Malformed { message, .. }) => println!("Malformed: {}", message),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// PE container of the metadata, see [`file::File`]
pub use file::File;

/// Metadata of one module, see [`metadata::image::MetadataImage`]
pub use metadata::image::MetadataImage;
