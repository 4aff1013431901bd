//! Metadata streams.
//!
//! The metadata root holds a directory of named streams. Four of them are heaps that tables
//! refer to by offset or index, one holds the tables themselves.
//!
//! # Stream Types
//!
//! ## String Heaps
//! - **`#Strings`** - NUL-terminated UTF-8 identifiers, see [`Strings`]
//! - **`#US`** - UTF-16 string literals with a length prefix and a trailing flag byte, see
//!   [`UserStrings`]
//!
//! ## Binary Data
//! - **`#Blob`** - Length-prefixed signatures, public keys and attribute values, see [`Blob`]
//! - **`#GUID`** - 16-byte GUIDs indexed from 1, see [`Guid`]
//!
//! ## Metadata Tables
//! - **`#~`**, **`#-`** or **`#Schema`** - The tables stream, see [`TablesStream`]
//! - **`#JTD`** - Empty marker of minimal delta images, kept as an opaque stream
//!
//! All heaps are owned copies of the stream data and can be appended to. Appending
//! de-duplicates against the existing entries.
//!
//! # Examples
//!
//! ```rust,ignore
//! use dotmeta::metadata::streams::{Strings, TablesStream};
//!
//! let strings = Strings::from(&strings_data)?;
//! let tables = TablesStream::from(&tables_data)?;
//!
//! for field in tables.field_range(1)?.iter() {
//!     println!("{}", field);
//! }
//! ```
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 24.2.2 - Stream Headers
//! - ECMA-335 6th Edition, Partition II, Section 24.2.3 - 24.2.6 - Heaps and Tables

mod blob;
pub use blob::{Blob, BlobIterator};

mod guid;
pub use guid::Guid;

mod streamheader;
pub use streamheader::{StreamHeader, STREAM_NAMES, TABLES_STREAM_NAMES};

mod strings;
pub use strings::Strings;

mod tablesstream;
pub use tablesstream::{
    SortedMaskPolicy, TablesStream, TablesStreamFlags, TablesStreamOptions, COMPILER_SORTED_MASK,
};

mod userstrings;
pub use userstrings::UserStrings;
