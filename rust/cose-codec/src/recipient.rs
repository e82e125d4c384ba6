// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::codec::{bytes_or_null, expect_bytes_or_null, expect_fixed_array};
use crate::error::Result;
use crate::headers::Headers;
use crate::item::CoseItem;

/// One recipient of a COSE_Encrypt.
///
/// ```text
/// COSE_recipient = [ protected, unprotected, ciphertext : bstr / nil ]
/// ```
///
/// Nested recipients are not supported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipient {
    pub headers: Headers,
    pub ciphertext: Option<Vec<u8>>,
}

impl Recipient {
    pub fn new(headers: Headers, ciphertext: Option<Vec<u8>>) -> Self {
        Self {
            headers,
            ciphertext,
        }
    }
}

impl CoseItem for Recipient {
    fn to_value(&self) -> Result<Value> {
        let mut items = Vec::with_capacity(3);
        items.extend(self.headers.to_values()?);
        items.push(bytes_or_null(self.ciphertext.as_deref()));
        Ok(Value::Array(items))
    }

    fn from_value(value: Value) -> Result<Self> {
        let [protected, unprotected, ciphertext] = expect_fixed_array(value, "COSE_recipient")?;

        Ok(Self {
            headers: Headers::from_pair(protected, unprotected)?,
            ciphertext: expect_bytes_or_null(ciphertext)?,
        })
    }
}
