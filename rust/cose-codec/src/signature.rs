// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::codec::{expect_bytes, expect_fixed_array};
use crate::error::Result;
use crate::headers::Headers;
use crate::item::CoseItem;

/// One signer's entry in a COSE_Sign, also used for counter signatures.
///
/// ```text
/// COSE_Signature = [ protected : bstr, unprotected : map, signature : bstr ]
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    pub headers: Headers,
    pub signature: Vec<u8>,
}

impl Signature {
    pub fn new(headers: Headers, signature: impl Into<Vec<u8>>) -> Self {
        Self {
            headers,
            signature: signature.into(),
        }
    }
}

impl CoseItem for Signature {
    fn to_value(&self) -> Result<Value> {
        let mut items = Vec::with_capacity(3);
        items.extend(self.headers.to_values()?);
        items.push(Value::Bytes(self.signature.clone()));
        Ok(Value::Array(items))
    }

    fn from_value(value: Value) -> Result<Self> {
        let [protected, unprotected, signature] = expect_fixed_array(value, "COSE_Signature")?;

        Ok(Self {
            headers: Headers::from_pair(protected, unprotected)?,
            signature: expect_bytes(signature)?,
        })
    }
}
