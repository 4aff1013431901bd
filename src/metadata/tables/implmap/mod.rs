//! `ImplMap` table module
//!
//! ECMA-335, Partition II, Section 22.22. The table holds P/Invoke mappings of fields and methods.

mod raw;

pub use raw::*;

#[allow(non_snake_case)]
/// All possible flags for `PInvokeAttributes`
pub mod PInvokeAttributes {
    /// `PInvoke` is to use the member name as specified
    pub const NO_MANGLE: u16 = 0x0001;
    /// Mask for the character set
    pub const CHAR_SET_MASK: u16 = 0x0006;
    /// Character set is not specified
    pub const CHAR_SET_NOT_SPEC: u16 = 0x0000;
    /// ANSI character set
    pub const CHAR_SET_ANSI: u16 = 0x0002;
    /// Unicode character set
    pub const CHAR_SET_UNICODE: u16 = 0x0004;
    /// Automatic character set
    pub const CHAR_SET_AUTO: u16 = 0x0006;
    /// The callee calls `SetLastError`
    pub const SUPPORTS_LAST_ERROR: u16 = 0x0040;
    /// Mask for the calling convention
    pub const CALL_CONV_MASK: u16 = 0x0700;
    /// Platform default calling convention
    pub const CALL_CONV_WINAPI: u16 = 0x0100;
    /// `cdecl` calling convention
    pub const CALL_CONV_CDECL: u16 = 0x0200;
    /// `stdcall` calling convention
    pub const CALL_CONV_STDCALL: u16 = 0x0300;
    /// `thiscall` calling convention
    pub const CALL_CONV_THISCALL: u16 = 0x0400;
    /// `fastcall` calling convention
    pub const CALL_CONV_FASTCALL: u16 = 0x0500;
}
