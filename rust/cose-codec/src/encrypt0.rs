// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::codec::{bytes_or_null, expect_bytes_or_null, expect_fixed_array};
use crate::error::Result;
use crate::headers::Headers;
use crate::item::CoseItem;

/// Encrypted message for a recipient that already holds the key.
///
/// ```text
/// COSE_Encrypt0 = [ protected, unprotected, ciphertext : bstr / nil ]
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encrypt0 {
    pub headers: Headers,
    pub ciphertext: Option<Vec<u8>>,
}

impl Encrypt0 {
    pub fn new(headers: Headers, ciphertext: Option<Vec<u8>>) -> Self {
        Self {
            headers,
            ciphertext,
        }
    }
}

impl CoseItem for Encrypt0 {
    fn to_value(&self) -> Result<Value> {
        let mut items = Vec::with_capacity(3);
        items.extend(self.headers.to_values()?);
        items.push(bytes_or_null(self.ciphertext.as_deref()));
        Ok(Value::Array(items))
    }

    fn from_value(value: Value) -> Result<Self> {
        let [protected, unprotected, ciphertext] = expect_fixed_array(value, "COSE_Encrypt0")?;

        Ok(Self {
            headers: Headers::from_pair(protected, unprotected)?,
            ciphertext: expect_bytes_or_null(ciphertext)?,
        })
    }
}
