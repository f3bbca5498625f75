//! Shared types: [`TextEncoding`] and [`MagnitudeField`], plus unit constants.

use crate::Result;

/// Kilometers per degree of latitude. The PHA horizontal error field is
/// given in kilometers; origins store their errors in degrees.
pub const DEG2KM: f64 = 111.2;

/// Character encoding of PHA input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Strict UTF-8; invalid byte sequences are a read error.
    Utf8,
    /// Latin-1, 8-bit clean: every byte sequence decodes. The default.
    #[default]
    Latin1,
}

impl TextEncoding {
    /// Decode raw file bytes into text.
    pub fn decode(self, bytes: Vec<u8>) -> Result<String> {
        match self {
            Self::Utf8 => Ok(String::from_utf8(bytes)?),
            Self::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

/// Parsed magnitude field of a PHA header line.
///
/// The literal token `NaN` (any case) marks an event without a magnitude.
/// Keeping this an explicit variant avoids comparing float NaNs later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagnitudeField {
    Value(f64),
    Absent,
}

impl MagnitudeField {
    /// Parse a magnitude token. `None` means the token is neither `NaN`
    /// nor a number.
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("nan") {
            return Some(Self::Absent);
        }
        token.parse().ok().map(Self::Value)
    }
}
