use crate::error::{DomainError, Result};

/// Attribute identifier: names the semantic role of a tag inside a tagset.
pub type Aid = u16;

pub const FID: Aid = 0;
pub const NAME: Aid = 1;
pub const CREATED: Aid = 2;

pub const CRC32IEEE: Aid = 3;
pub const CRC32C: Aid = 4;
pub const CRC32K: Aid = 5;
pub const CRC64ISO: Aid = 6;

pub const MD5: Aid = 7;
pub const SHA1: Aid = 8;
pub const SHA224: Aid = 9;
pub const SHA256: Aid = 10;
pub const SHA384: Aid = 11;
pub const SHA512: Aid = 12;

pub const MIME: Aid = 13;
pub const KEYWORDS: Aid = 14;
pub const CATEGORY: Aid = 15;
pub const VERSION: Aid = 16;
pub const AUTHOR: Aid = 17;
pub const COMMENT: Aid = 18;

/// Closed set of string aliases accepted in place of numeric identifiers.
///
/// The first alias listed for an identifier is its canonical name.
pub const ALIASES: &[(&str, Aid)] = &[
    ("fid", FID),
    ("name", NAME),
    ("created", CREATED),
    ("crt", CREATED),
    ("crc32ieee", CRC32IEEE),
    ("crc32c", CRC32C),
    ("crc32", CRC32C),
    ("crc32k", CRC32K),
    ("crc64iso", CRC64ISO),
    ("crc64", CRC64ISO),
    ("md5", MD5),
    ("sha1", SHA1),
    ("sha224", SHA224),
    ("sha256", SHA256),
    ("sha384", SHA384),
    ("sha512", SHA512),
    ("mime", MIME),
    ("keywords", KEYWORDS),
    ("category", CATEGORY),
    ("version", VERSION),
    ("author", AUTHOR),
    ("comment", COMMENT),
];

/// Resolve a string alias to its attribute identifier.
pub fn aid_by_name(name: &str) -> Result<Aid> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, aid)| *aid)
        .ok_or_else(|| DomainError::KeyUndefined(name.to_string()))
}

/// Canonical alias of an identifier, if it has one.
pub fn aid_name(aid: Aid) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(_, id)| *id == aid)
        .map(|(alias, _)| *alias)
}
