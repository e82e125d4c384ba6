// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::codec::{self, expect_bytes};
use crate::error::Result;
use crate::header_map::HeaderMap;
use crate::item::CoseItem;

/// Protected header: a header map carried as the bytes of its encoding.
///
/// The bytes are what a signature covers, so they are kept exactly as
/// received or as produced at construction. Equality and hashing compare
/// those bytes, never the decoded map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProtectedHeaderMap {
    bytes: Vec<u8>,
}

impl ProtectedHeaderMap {
    /// Wrap already encoded header map bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Encode `header_map` once and keep the resulting bytes.
    pub fn from_header_map(header_map: &HeaderMap) -> Result<Self> {
        Ok(Self {
            bytes: header_map.to_vec()?,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Decode the stored bytes. An empty byte string stands for an empty map.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        if self.bytes.is_empty() {
            return Ok(HeaderMap::new());
        }
        HeaderMap::from_value(codec::decode(&self.bytes)?)
    }

    pub fn to_value(&self) -> Value {
        Value::Bytes(self.bytes.clone())
    }

    pub fn from_value(value: Value) -> Result<Self> {
        expect_bytes(value).map(|bytes| Self { bytes })
    }
}
