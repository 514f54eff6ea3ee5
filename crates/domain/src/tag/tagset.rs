use std::collections::BTreeMap;

use bytes::{Buf, BufMut, BytesMut};
use serde::{Deserialize, Serialize};

use super::{Aid, Tag};
use crate::error::{DomainError, Result};

/// Mapping from attribute identifier to tag, ordered by identifier.
///
/// Byte layout (little-endian):
///
/// ```text
/// u16 count
/// count x { u16 aid, u16 len, len bytes }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tagset(BTreeMap<Aid, Tag>);

impl Tagset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, aid: Aid) -> Option<&Tag> {
        self.0.get(&aid)
    }

    /// Insert or replace; returns the previous tag.
    pub fn put(&mut self, aid: Aid, tag: Tag) -> Option<Tag> {
        self.0.insert(aid, tag)
    }

    /// Replace only an existing tag. Returns whether the tag was present.
    pub fn set(&mut self, aid: Aid, tag: Tag) -> bool {
        match self.0.get_mut(&aid) {
            Some(slot) => {
                *slot = tag;
                true
            }
            None => false,
        }
    }

    pub fn del(&mut self, aid: Aid) -> Option<Tag> {
        self.0.remove(&aid)
    }

    pub fn has(&self, aid: Aid) -> bool {
        self.0.contains_key(&aid)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Aid, &Tag)> {
        self.0.iter().map(|(aid, tag)| (*aid, tag))
    }

    /// Size in bytes of the encoded form.
    pub fn encoded_len(&self) -> usize {
        2 + self.0.values().map(|tag| 4 + tag.len()).sum::<usize>()
    }

    pub fn write_to(&self, buf: &mut impl BufMut) -> Result<()> {
        let count =
            u16::try_from(self.0.len()).map_err(|_| DomainError::TagsetTooLarge(self.0.len()))?;
        // validate lengths before writing anything
        if let Some(tag) = self.0.values().find(|tag| tag.len() > u16::MAX as usize) {
            return Err(DomainError::TagTooLong(tag.len()));
        }

        buf.put_u16_le(count);
        for (aid, tag) in &self.0 {
            buf.put_u16_le(*aid);
            buf.put_u16_le(tag.len() as u16);
            buf.put_slice(tag.as_bytes());
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.write_to(&mut buf)?;
        Ok(buf.to_vec())
    }

    /// Read one tagset from the front of `buf`, leaving any following data.
    pub fn read_from(buf: &mut impl Buf) -> Result<Self> {
        if buf.remaining() < 2 {
            return Err(DomainError::MalformedTagset(
                "missing tag count".to_string(),
            ));
        }
        let count = buf.get_u16_le();

        let mut tagset = Tagset::new();
        for index in 0..count {
            if buf.remaining() < 4 {
                return Err(DomainError::MalformedTagset(format!(
                    "truncated header of tag #{}",
                    index
                )));
            }
            let aid = buf.get_u16_le();
            let len = buf.get_u16_le() as usize;
            if buf.remaining() < len {
                return Err(DomainError::MalformedTagset(format!(
                    "tag {} declares {} bytes, {} available",
                    aid,
                    len,
                    buf.remaining()
                )));
            }
            let mut data = vec![0u8; len];
            buf.copy_to_slice(&mut data);
            tagset.put(aid, Tag::new(data));
        }
        Ok(tagset)
    }

    /// Decode a buffer holding exactly one tagset.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut buf = data;
        let tagset = Self::read_from(&mut buf)?;
        if buf.has_remaining() {
            return Err(DomainError::MalformedTagset(format!(
                "{} trailing bytes",
                buf.remaining()
            )));
        }
        Ok(tagset)
    }
}

impl FromIterator<(Aid, Tag)> for Tagset {
    fn from_iter<I: IntoIterator<Item = (Aid, Tag)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
