//! Text encoding detection for generator output.
//!
//! Generators hand back raw bytes without saying how they were encoded. The
//! encoding is sniffed from a leading byte-order mark; bytes without one are
//! UTF-8. Re-encoding with the detected [`TextEncoding`] reproduces the same
//! byte-order mark, so a decode/encode cycle preserves the file's format.

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::borrow::Cow;
use std::fmt;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF32LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
const UTF32BE_BOM: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];

/// Text encoding of a generator's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    /// UTF-8 without a byte-order mark.
    #[default]
    Utf8,
    /// UTF-8 with a leading byte-order mark.
    Utf8Bom,
    /// UTF-16 little-endian with a byte-order mark.
    Utf16Le,
    /// UTF-16 big-endian with a byte-order mark.
    Utf16Be,
    /// UTF-32 little-endian with a byte-order mark.
    Utf32Le,
    /// UTF-32 big-endian with a byte-order mark.
    Utf32Be,
}

/// Text decoded from a byte buffer together with the encoding it used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Decoded text, without the byte-order mark.
    pub text: String,
    /// Encoding detected from the buffer.
    pub encoding: TextEncoding,
    /// True if malformed sequences were replaced with U+FFFD.
    pub had_errors: bool,
}

impl TextEncoding {
    /// Detects the encoding of `bytes` from its byte-order mark.
    ///
    /// UTF-32 marks are checked before UTF-16 since the UTF-32LE mark starts
    /// with the UTF-16LE one.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(UTF32LE_BOM) {
            return Self::Utf32Le;
        }
        if bytes.starts_with(UTF32BE_BOM) {
            return Self::Utf32Be;
        }
        match Encoding::for_bom(bytes) {
            Some((encoding, _)) if encoding == UTF_8 => Self::Utf8Bom,
            Some((encoding, _)) if encoding == UTF_16LE => Self::Utf16Le,
            Some((encoding, _)) if encoding == UTF_16BE => Self::Utf16Be,
            _ => Self::Utf8,
        }
    }

    /// Returns the byte-order mark written ahead of the text.
    #[must_use]
    pub const fn bom(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[],
            Self::Utf8Bom => UTF8_BOM,
            Self::Utf16Le => UTF16LE_BOM,
            Self::Utf16Be => UTF16BE_BOM,
            Self::Utf32Le => UTF32LE_BOM,
            Self::Utf32Be => UTF32BE_BOM,
        }
    }

    /// Returns the WHATWG encoding backing this variant, if there is one.
    ///
    /// UTF-32 is not part of the WHATWG Encoding Standard.
    #[must_use]
    pub fn whatwg(self) -> Option<&'static Encoding> {
        match self {
            Self::Utf8 | Self::Utf8Bom => Some(UTF_8),
            Self::Utf16Le => Some(UTF_16LE),
            Self::Utf16Be => Some(UTF_16BE),
            Self::Utf32Le | Self::Utf32Be => None,
        }
    }

    /// Returns the canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf32Le => "UTF-32LE",
            Self::Utf32Be => "UTF-32BE",
            other => other.whatwg().map_or("UTF-8", Encoding::name),
        }
    }

    /// Sniffs the encoding of `bytes` and decodes them.
    ///
    /// Malformed sequences are replaced with U+FFFD and flagged in
    /// [`DecodedText::had_errors`].
    #[must_use]
    pub fn decode(bytes: &[u8]) -> DecodedText {
        let encoding = Self::detect(bytes);
        let (text, had_errors) = encoding.decode_body(&bytes[encoding.bom().len()..]);
        DecodedText {
            text: text.into_owned(),
            encoding,
            had_errors,
        }
    }

    /// Decodes bytes that follow the byte-order mark.
    fn decode_body(self, body: &[u8]) -> (Cow<'_, str>, bool) {
        match self.whatwg() {
            Some(encoding) => encoding.decode_without_bom_handling(body),
            None => decode_utf32(body, self == Self::Utf32Be),
        }
    }

    /// Encodes `text` with this encoding, byte-order mark included.
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        let bom = self.bom();
        let mut out = Vec::with_capacity(bom.len() + text.len());
        out.extend_from_slice(bom);
        match self {
            Self::Utf8 | Self::Utf8Bom => out.extend_from_slice(text.as_bytes()),
            Self::Utf16Le => out.extend(text.encode_utf16().flat_map(u16::to_le_bytes)),
            Self::Utf16Be => out.extend(text.encode_utf16().flat_map(u16::to_be_bytes)),
            Self::Utf32Le => out.extend(text.chars().flat_map(|c| u32::from(c).to_le_bytes())),
            Self::Utf32Be => out.extend(text.chars().flat_map(|c| u32::from(c).to_be_bytes())),
        }
        out
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn decode_utf32(body: &[u8], big_endian: bool) -> (Cow<'_, str>, bool) {
    let mut text = String::with_capacity(body.len() / 4);
    let mut had_errors = false;
    let chunks = body.chunks_exact(4);
    let trailing = !chunks.remainder().is_empty();
    for chunk in chunks {
        let bytes = [chunk[0], chunk[1], chunk[2], chunk[3]];
        let scalar = if big_endian {
            u32::from_be_bytes(bytes)
        } else {
            u32::from_le_bytes(bytes)
        };
        match char::from_u32(scalar) {
            Some(c) => text.push(c),
            None => {
                text.push(char::REPLACEMENT_CHARACTER);
                had_errors = true;
            }
        }
    }
    if trailing {
        text.push(char::REPLACEMENT_CHARACTER);
        had_errors = true;
    }
    (Cow::Owned(text), had_errors)
}
