//! Status codes returned across the host boundary.

use std::fmt;

/// HRESULT-style status code.
///
/// Zero is success; every other value is host-defined and passed through
/// unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Status(pub i32);

impl Status {
    /// Success.
    pub const S_OK: Self = Self(0);
    /// Unspecified failure.
    pub const E_FAIL: Self = Self(0x8000_4005_u32 as i32);
    /// Operation not implemented.
    pub const E_NOTIMPL: Self = Self(0x8000_4001_u32 as i32);
    /// Requested interface is not supported.
    pub const E_NOINTERFACE: Self = Self(0x8000_4002_u32 as i32);
    /// One or more arguments are invalid.
    pub const E_INVALIDARG: Self = Self(0x8007_0057_u32 as i32);

    /// Returns true for [`Status::S_OK`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::S_OK
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0 as u32)
    }
}
