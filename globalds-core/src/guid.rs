//! Globally unique identifiers used to name generators and interfaces.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A 128-bit GUID in the registry's `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid {
    /// First group (8 hex digits).
    pub data1: u32,
    /// Second group (4 hex digits).
    pub data2: u16,
    /// Third group (4 hex digits).
    pub data3: u16,
    /// Remaining 8 bytes (4 + 12 hex digits).
    pub data4: [u8; 8],
}

impl Guid {
    /// The all-zero GUID.
    pub const NIL: Self = Self::from_fields(0, 0, 0, [0; 8]);

    /// Creates a GUID from its fields.
    #[must_use]
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Parses a GUID, with or without surrounding braces, case-insensitively.
    ///
    /// # Errors
    /// Returns `InvalidGuid` if `text` is not a well-formed GUID.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let inner = match trimmed.strip_prefix('{') {
            Some(rest) => rest
                .strip_suffix('}')
                .ok_or_else(|| Error::invalid_guid(text))?,
            None => trimmed,
        };

        let groups: Vec<&str> = inner.split('-').collect();
        let lengths = [8, 4, 4, 4, 12];
        if groups.len() != lengths.len()
            || groups
                .iter()
                .zip(lengths)
                .any(|(g, len)| g.len() != len || !g.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            return Err(Error::invalid_guid(text));
        }

        let hex = |s: &str| u64::from_str_radix(s, 16).map_err(|_| Error::invalid_guid(text));
        let data1 = hex(groups[0])? as u32;
        let data2 = hex(groups[1])? as u16;
        let data3 = hex(groups[2])? as u16;
        let tail = (hex(groups[3])? << 48) | hex(groups[4])?;
        Ok(Self::from_fields(data1, data2, data3, tail.to_be_bytes()))
    }

    /// Returns the braced, upper-case form used as a registry key name.
    #[must_use]
    pub fn to_braced_string(&self) -> String {
        format!("{{{self}}}")
    }
}

impl FromStr for Guid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}
