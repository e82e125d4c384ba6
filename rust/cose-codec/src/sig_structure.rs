// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The Sig_structure: the exact bytes a signature algorithm signs or verifies.
//!
//! ```text
//! Sig_structure = [
//!     context : "Signature" / "Signature1",
//!     body_protected : empty_or_serialized_map,
//!     ? sign_protected : empty_or_serialized_map,
//!     external_aad : bstr,
//!     payload : bstr
//! ]
//! ```
//!
//! `sign_protected` is only present for the multi-signer context, so the array
//! has 5 items for `Signature` and 4 for `Signature1`. Both directions reject
//! a context paired with the other form's length.

use std::fmt;
use std::str::FromStr;

use ciborium::value::Value;

use crate::codec::{expect_array, expect_bytes, fixed_array, node_kind};
use crate::error::{CoseError, Result};
use crate::item::CoseItem;
use crate::protected::ProtectedHeaderMap;

pub const SIG_STRUCTURE_CONTEXT_SIGNATURE: &str = "Signature";
pub const SIG_STRUCTURE_CONTEXT_SIGNATURE1: &str = "Signature1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigContext {
    /// COSE_Sign, one of possibly several signers.
    Signature,
    /// COSE_Sign1.
    Signature1,
}

impl SigContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signature => SIG_STRUCTURE_CONTEXT_SIGNATURE,
            Self::Signature1 => SIG_STRUCTURE_CONTEXT_SIGNATURE1,
        }
    }

    /// Number of items in a Sig_structure carrying this context.
    pub fn arity(&self) -> usize {
        match self {
            Self::Signature => 5,
            Self::Signature1 => 4,
        }
    }
}

impl fmt::Display for SigContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigContext {
    type Err = CoseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            SIG_STRUCTURE_CONTEXT_SIGNATURE => Ok(Self::Signature),
            SIG_STRUCTURE_CONTEXT_SIGNATURE1 => Ok(Self::Signature1),
            other => Err(CoseError::UnknownSigContext(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SigStructure {
    pub context: SigContext,
    pub body_protected: Option<ProtectedHeaderMap>,
    /// Present only in the 5-item form.
    pub sign_protected: Option<ProtectedHeaderMap>,
    pub external_aad: Option<Vec<u8>>,
    pub payload: Option<Vec<u8>>,
}

impl SigStructure {
    pub fn new(context: SigContext) -> Self {
        Self {
            context,
            body_protected: None,
            sign_protected: None,
            external_aad: None,
            payload: None,
        }
    }
}

fn protected_or_empty(protected: &Option<ProtectedHeaderMap>) -> Value {
    match protected {
        Some(p) => p.to_value(),
        None => Value::Bytes(Vec::new()),
    }
}

impl CoseItem for SigStructure {
    fn to_value(&self) -> Result<Value> {
        let mut items = Vec::with_capacity(5);
        items.push(Value::Text(self.context.to_string()));
        items.push(protected_or_empty(&self.body_protected));
        if let Some(sign_protected) = &self.sign_protected {
            items.push(sign_protected.to_value());
        }
        items.push(Value::Bytes(self.external_aad.clone().unwrap_or_default()));
        items.push(Value::Bytes(self.payload.clone().unwrap_or_default()));

        let expected = self.context.arity();
        if items.len() != expected {
            return Err(CoseError::arity("Sig_structure", expected, items.len()));
        }
        Ok(Value::Array(items))
    }

    fn from_value(value: Value) -> Result<Self> {
        let items = expect_array(value)?;
        let len = items.len();
        let (context, body_protected, sign_protected, external_aad, payload) = match len {
            4 => {
                let [context, body, aad, payload] = fixed_array(items, "Sig_structure")?;
                (context, body, None, aad, payload)
            }
            5 => {
                let [context, body, sign, aad, payload] = fixed_array(items, "Sig_structure")?;
                (context, body, Some(sign), aad, payload)
            }
            n => return Err(CoseError::arity("Sig_structure", "4 or 5", n)),
        };

        let context = match context {
            Value::Text(s) => s.parse::<SigContext>()?,
            other => {
                return Err(CoseError::ExpectedTextStringType {
                    found: node_kind(&other),
                })
            }
        };
        if context.arity() != len {
            return Err(CoseError::arity("Sig_structure", context.arity(), len));
        }

        let body_protected = ProtectedHeaderMap::from_value(body_protected)?;
        let sign_protected = sign_protected.map(ProtectedHeaderMap::from_value).transpose()?;
        let external_aad = expect_bytes(external_aad)?;
        let payload = expect_bytes(payload)?;

        Ok(Self {
            context,
            body_protected: Some(body_protected),
            sign_protected,
            external_aad: Some(external_aad),
            payload: Some(payload),
        })
    }
}
