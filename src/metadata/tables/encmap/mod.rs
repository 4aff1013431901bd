//! `EncMap` table module
//!
//! Not part of ECMA-335 proper. Emitted for edit-and-continue deltas, carried through
//! unchanged.

mod raw;

pub use raw::*;
