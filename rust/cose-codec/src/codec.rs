// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Byte-level glue between COSE items and the CBOR tree model.
//!
//! Encoding is never canonicalized: map entries are written in insertion
//! order and duplicate keys are written as given.

use std::io::Read;

use ciborium::value::Value;

use crate::error::{CoseError, Result};
use crate::settings::DecodeSettings;

/// Encode a CBOR tree to bytes.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    ciborium::ser::into_writer(value, &mut out).map_err(CoseError::cbor_encode)?;
    tracing::trace!(len = out.len(), "encoded CBOR item");
    Ok(out)
}

/// Decode the first CBOR item in `bytes`.
pub fn decode(bytes: &[u8]) -> Result<Value> {
    decode_with(bytes, &DecodeSettings::default())
}

pub fn decode_with(bytes: &[u8], settings: &DecodeSettings) -> Result<Value> {
    if let Some(max_len) = settings.max_len {
        if bytes.len() > max_len {
            return Err(CoseError::InputTooLarge { max_len });
        }
    }

    let mut cursor = bytes;
    let value: Value = ciborium::de::from_reader(&mut cursor).map_err(CoseError::cbor_decode)?;

    if !cursor.is_empty() && !settings.allow_trailing_bytes {
        return Err(CoseError::TrailingBytes(cursor.len()));
    }

    tracing::trace!(
        len = bytes.len(),
        trailing = cursor.len(),
        "decoded CBOR item"
    );
    Ok(value)
}

/// Read all of `reader` (bounded by `max_len` when set) and decode the first item.
pub fn decode_reader(reader: impl Read, settings: &DecodeSettings) -> Result<Value> {
    let mut buf = Vec::new();
    match settings.max_len {
        Some(max_len) => {
            // Read one byte past the limit so oversize input is detected.
            let limit = (max_len as u64).saturating_add(1);
            reader
                .take(limit)
                .read_to_end(&mut buf)
                .map_err(|e| CoseError::Io(e.to_string()))?;
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut buf)
                .map_err(|e| CoseError::Io(e.to_string()))?;
        }
    }
    decode_with(&buf, settings)
}

/// Short human readable name of a node's major type, used in error messages.
pub(crate) fn node_kind(value: &Value) -> &'static str {
    match value {
        Value::Integer(i) if i128::from(*i) < 0 => "negative integer",
        Value::Integer(_) => "unsigned integer",
        Value::Bytes(_) => "byte string",
        Value::Text(_) => "text string",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        Value::Tag(_, _) => "tag",
        Value::Bool(_) => "bool",
        Value::Null => "null",
        Value::Float(_) => "float",
        _ => "unknown",
    }
}

pub(crate) fn expect_array(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(CoseError::ExpectedArrayType {
            found: node_kind(&other),
        }),
    }
}

/// An array of exactly `N` elements.
pub(crate) fn expect_fixed_array<const N: usize>(
    value: Value,
    what: &'static str,
) -> Result<[Value; N]> {
    fixed_array(expect_array(value)?, what)
}

/// Split already decoded array items into exactly `N` elements.
pub(crate) fn fixed_array<const N: usize>(
    items: Vec<Value>,
    what: &'static str,
) -> Result<[Value; N]> {
    items
        .try_into()
        .map_err(|items: Vec<Value>| CoseError::arity(what, N, items.len()))
}

pub(crate) fn expect_map(value: Value) -> Result<Vec<(Value, Value)>> {
    match value {
        Value::Map(entries) => Ok(entries),
        other => Err(CoseError::ExpectedMapType {
            found: node_kind(&other),
        }),
    }
}

pub(crate) fn expect_bytes(value: Value) -> Result<Vec<u8>> {
    match value {
        Value::Bytes(bytes) => Ok(bytes),
        other => Err(CoseError::ExpectedByteStringType {
            found: node_kind(&other),
        }),
    }
}

/// A byte string, or `null` for absent.
pub(crate) fn expect_bytes_or_null(value: Value) -> Result<Option<Vec<u8>>> {
    match value {
        Value::Null => Ok(None),
        other => expect_bytes(other).map(Some),
    }
}

/// Encodes absent bytes as `null`.
pub(crate) fn bytes_or_null(bytes: Option<&[u8]>) -> Value {
    match bytes {
        Some(b) => Value::Bytes(b.to_vec()),
        None => Value::Null,
    }
}
