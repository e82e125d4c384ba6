// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tag-wrapped encryption envelopes.
//!
//! The tag is part of the wire form: encoding always emits it and decoding
//! refuses anything that is not wrapped in exactly that tag.

use ciborium::value::Value;

use crate::encrypt::Encrypt;
use crate::encrypt0::Encrypt0;
use crate::error::{CoseError, Result};
use crate::item::CoseItem;

/// CBOR tag for COSE_Encrypt0.
pub const PASSWORD_ENCRYPTION_TAG: u64 = 16;
/// CBOR tag for COSE_Encrypt.
pub const PUB_KEY_ENCRYPTION_TAG: u64 = 96;

fn untag(value: Value, expected: u64) -> Result<Value> {
    match value {
        Value::Tag(tag, inner) if tag == expected => Ok(*inner),
        Value::Tag(tag, _) => {
            tracing::debug!(expected, found = tag, "unexpected CBOR tag");
            Err(CoseError::TagMismatch {
                expected,
                found: Some(tag),
            })
        }
        _ => {
            tracing::debug!(expected, "expected tagged item, found untagged");
            Err(CoseError::TagMismatch {
                expected,
                found: None,
            })
        }
    }
}

/// A COSE_Encrypt0 under tag 16, used for password based encryption.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordEncryption(pub Encrypt0);

impl PasswordEncryption {
    pub fn new(inner: Encrypt0) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> Encrypt0 {
        self.0
    }
}

impl CoseItem for PasswordEncryption {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Tag(PASSWORD_ENCRYPTION_TAG, Box::new(self.0.to_value()?)))
    }

    fn from_value(value: Value) -> Result<Self> {
        Encrypt0::from_value(untag(value, PASSWORD_ENCRYPTION_TAG)?).map(Self)
    }
}

/// A COSE_Encrypt under tag 96, used for public key encryption.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PubKeyEncryption(pub Encrypt);

impl PubKeyEncryption {
    pub fn new(inner: Encrypt) -> Self {
        Self(inner)
    }

    pub fn into_inner(self) -> Encrypt {
        self.0
    }
}

impl CoseItem for PubKeyEncryption {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Tag(PUB_KEY_ENCRYPTION_TAG, Box::new(self.0.to_value()?)))
    }

    fn from_value(value: Value) -> Result<Self> {
        Encrypt::from_value(untag(value, PUB_KEY_ENCRYPTION_TAG)?).map(Self)
    }
}
