use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, Result};

/// Opaque tag content with typed views.
///
/// A tag carries no type information of its own. Each typed accessor
/// tries to read the bytes as that type and returns `None` when the
/// layout does not fit (wrong length, invalid UTF-8).
///
/// Layouts:
/// - string: raw UTF-8 bytes
/// - bool: one byte, non-zero is `true`
/// - uint16 / uint32 / uint64: fixed width little-endian
/// - number: IEEE 754 `f64`, little-endian
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tag(Vec<u8>);

impl Tag {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decode a hexadecimal representation (either case).
    pub fn from_hex(s: &str) -> Result<Self> {
        hex::decode(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidHex(e.to_string()))
    }

    /// Decode a standard base-64 representation (with padding).
    pub fn from_base64(s: &str) -> Result<Self> {
        STANDARD
            .decode(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidBase64(e.to_string()))
    }

    pub fn from_string(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }

    pub fn from_bool(val: bool) -> Self {
        Self(vec![u8::from(val)])
    }

    pub fn from_uint16(val: u16) -> Self {
        Self(val.to_le_bytes().to_vec())
    }

    pub fn from_uint32(val: u32) -> Self {
        Self(val.to_le_bytes().to_vec())
    }

    pub fn from_uint64(val: u64) -> Self {
        Self(val.to_le_bytes().to_vec())
    }

    pub fn from_number(val: f64) -> Self {
        Self(val.to_le_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// UTF-8 checked view; use `as_bytes` for the raw content.
    pub fn string(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn bool(&self) -> Option<bool> {
        match self.0.as_slice() {
            [b] => Some(*b != 0),
            _ => None,
        }
    }

    pub fn uint16(&self) -> Option<u16> {
        self.fixed::<2>().map(u16::from_le_bytes)
    }

    pub fn uint32(&self) -> Option<u32> {
        self.fixed::<4>().map(u32::from_le_bytes)
    }

    pub fn uint64(&self) -> Option<u64> {
        self.fixed::<8>().map(u64::from_le_bytes)
    }

    pub fn number(&self) -> Option<f64> {
        self.fixed::<8>().map(f64::from_le_bytes)
    }

    fn fixed<const N: usize>(&self) -> Option<[u8; N]> {
        self.0.as_slice().try_into().ok()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<Vec<u8>> for Tag {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::from_bool(val)
    }
}

impl From<u16> for Tag {
    fn from(val: u16) -> Self {
        Self::from_uint16(val)
    }
}

impl From<u32> for Tag {
    fn from(val: u32) -> Self {
        Self::from_uint32(val)
    }
}

impl From<u64> for Tag {
    fn from(val: u64) -> Self {
        Self::from_uint64(val)
    }
}

impl From<f64> for Tag {
    fn from(val: f64) -> Self {
        Self::from_number(val)
    }
}

// Serialized as hex text so JSON dumps stay readable.
impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Tag::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
