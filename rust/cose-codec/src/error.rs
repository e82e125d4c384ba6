// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Errors produced while building, encoding or decoding COSE structures.
///
/// Every failure is a data validation error: nothing here is transient or
/// worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoseError {
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(String),

    #[error("unexpected CBOR node type: {found}")]
    UnexpectedNodeType { found: &'static str },

    #[error("expected CBOR map, found {found}")]
    ExpectedMapType { found: &'static str },

    #[error("expected CBOR array, found {found}")]
    ExpectedArrayType { found: &'static str },

    #[error("expected CBOR byte string, found {found}")]
    ExpectedByteStringType { found: &'static str },

    #[error("expected CBOR text string, found {found}")]
    ExpectedTextStringType { found: &'static str },

    #[error("{what}: expected array of {expected} items, found {actual}")]
    ArityMismatch {
        what: &'static str,
        expected: String,
        actual: usize,
    },

    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("payload is not present and no external payload was supplied")]
    MissingPayload,

    #[error("CBOR tag mismatch: expected {expected}, found {}", display_tag(.found))]
    TagMismatch { expected: u64, found: Option<u64> },

    #[error("label {label} is reserved and cannot be used as an additional header")]
    ReservedLabelCollision { label: String },

    #[error("unknown Sig_structure context: {0}")]
    UnknownSigContext(String),

    #[error("CBOR encode failed: {0}")]
    CborEncode(String),

    #[error("CBOR decode failed: {0}")]
    CborDecode(String),

    #[error("input exceeded max length of {max_len} bytes")]
    InputTooLarge { max_len: usize },

    #[error("trailing bytes after CBOR item: {0} bytes")]
    TrailingBytes(usize),

    #[error("read failed: {0}")]
    Io(String),
}

impl CoseError {
    /// Normalize a CBOR encoder failure so the underlying error type does not
    /// leak across the crate boundary.
    pub(crate) fn cbor_encode<E: std::fmt::Display>(e: E) -> Self {
        Self::CborEncode(e.to_string())
    }

    pub(crate) fn cbor_decode<E: std::fmt::Display>(e: E) -> Self {
        Self::CborDecode(e.to_string())
    }

    pub(crate) fn arity(what: &'static str, expected: impl ToString, actual: usize) -> Self {
        let expected = expected.to_string();
        tracing::debug!(what, %expected, actual, "array arity mismatch");
        Self::ArityMismatch {
            what,
            expected,
            actual,
        }
    }
}

fn display_tag(tag: &Option<u64>) -> String {
    match tag {
        Some(t) => t.to_string(),
        None => "no tag".to_string(),
    }
}

pub type Result<T, E = CoseError> = std::result::Result<T, E>;
