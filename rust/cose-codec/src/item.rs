// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::Read;

use ciborium::value::Value;

use crate::codec;
use crate::error::Result;
use crate::settings::DecodeSettings;

/// A COSE structure that maps to and from a single CBOR tree node.
///
/// Implementors only provide the tree conversion; byte encoding and decoding
/// are shared.
pub trait CoseItem: Sized {
    fn to_value(&self) -> Result<Value>;

    fn from_value(value: Value) -> Result<Self>;

    fn to_vec(&self) -> Result<Vec<u8>> {
        codec::encode(&self.to_value()?)
    }

    /// Decode from the first CBOR item in `bytes`.
    fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_slice_with(bytes, &DecodeSettings::default())
    }

    fn from_slice_with(bytes: &[u8], settings: &DecodeSettings) -> Result<Self> {
        Self::from_value(codec::decode_with(bytes, settings)?)
    }

    fn from_reader(reader: impl Read, settings: &DecodeSettings) -> Result<Self> {
        Self::from_value(codec::decode_reader(reader, settings)?)
    }
}
