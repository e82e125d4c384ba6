// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Scalar header values and their conversion to and from CBOR nodes.
//!
//! COSE restricts header labels and most header values to integers and text,
//! with byte strings for identifiers and IVs. `ScalarValue` is that closed
//! domain; anything else is rejected when a value is built from a CBOR node.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use ciborium::value::{Integer, Value};

use crate::codec::node_kind;
use crate::error::{CoseError, Result};

#[derive(Debug, Clone)]
pub enum ScalarValue {
    /// Integer that fits the native width.
    Int(i64),
    /// Integer outside the `i64` range. Any CBOR major type 0/1 integer fits.
    BigInt(i128),
    Text(String),
    Bytes(Vec<u8>),
}

/// Borrowed view used for comparison, so `Int(5)` and `BigInt(5)` are equal.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Canonical<'a> {
    Int(i128),
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl ScalarValue {
    /// Build an integer value, narrowing to `Int` when it fits.
    pub fn integer(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::BigInt(value),
        }
    }

    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(i128::from(*i)),
            Self::BigInt(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_i128().and_then(|i| i64::try_from(i).ok())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// True for the label domain: integers of any width and text.
    pub fn is_int_or_text(&self) -> bool {
        !matches!(self, Self::Bytes(_))
    }

    /// Convert to a CBOR node. Non-negative integers become unsigned nodes,
    /// negative integers become negative nodes.
    pub fn to_value(&self) -> Result<Value> {
        match self {
            Self::Int(i) => Ok(Value::Integer(Integer::from(*i))),
            Self::BigInt(i) => Integer::try_from(*i).map(Value::Integer).map_err(|_| {
                CoseError::UnsupportedValueType(format!(
                    "integer {i} is outside the CBOR integer range"
                ))
            }),
            Self::Text(s) => Ok(Value::Text(s.clone())),
            Self::Bytes(b) => Ok(Value::Bytes(b.clone())),
        }
    }

    /// Convert a CBOR node back to a scalar. `null` yields `None`.
    pub fn from_value(value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Integer(i) => Ok(Some(Self::integer(i128::from(*i)))),
            Value::Text(s) => Ok(Some(Self::Text(s.clone()))),
            Value::Bytes(b) => Ok(Some(Self::Bytes(b.clone()))),
            Value::Null => Ok(None),
            other => Err(CoseError::UnexpectedNodeType {
                found: node_kind(other),
            }),
        }
    }

    fn canonical(&self) -> Canonical<'_> {
        match self {
            Self::Int(i) => Canonical::Int(i128::from(*i)),
            Self::BigInt(i) => Canonical::Int(*i),
            Self::Text(s) => Canonical::Text(s),
            Self::Bytes(b) => Canonical::Bytes(b),
        }
    }
}

/// Reject values outside {integer, text}; `what` names the offending field.
pub(crate) fn ensure_int_or_text(value: &ScalarValue, what: &str) -> Result<()> {
    if value.is_int_or_text() {
        Ok(())
    } else {
        Err(CoseError::UnsupportedValueType(format!(
            "{what} must be an integer or text"
        )))
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for ScalarValue {}

impl PartialOrd for ScalarValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScalarValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl Hash for ScalarValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::BigInt(i) => write!(f, "{i}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "h'{}'", hex::encode(b)),
        }
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ScalarValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for ScalarValue {
    fn from(value: u64) -> Self {
        Self::integer(i128::from(value))
    }
}

impl From<i128> for ScalarValue {
    fn from(value: i128) -> Self {
        Self::integer(value)
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for ScalarValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for ScalarValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

/// Dynamic construction from an arbitrary CBOR node.
impl TryFrom<Value> for ScalarValue {
    type Error = CoseError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(Self::integer(i128::from(i))),
            Value::Text(s) => Ok(Self::Text(s)),
            Value::Bytes(b) => Ok(Self::Bytes(b)),
            other => Err(CoseError::UnsupportedValueType(format!(
                "expected integer, text or bytes, found {}",
                node_kind(&other)
            ))),
        }
    }
}
