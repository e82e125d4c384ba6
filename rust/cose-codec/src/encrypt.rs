// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::codec::{bytes_or_null, expect_array, expect_bytes_or_null, expect_fixed_array};
use crate::error::{CoseError, Result};
use crate::headers::Headers;
use crate::item::CoseItem;
use crate::recipient::Recipient;

/// Encrypted message with one or more recipients.
///
/// ```text
/// COSE_Encrypt = [
///     protected, unprotected,
///     ciphertext : bstr / nil,
///     recipients : [+ COSE_recipient]
/// ]
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encrypt {
    pub headers: Headers,
    pub ciphertext: Option<Vec<u8>>,
    pub recipients: Vec<Recipient>,
}

impl Encrypt {
    pub fn new(headers: Headers, ciphertext: Option<Vec<u8>>, recipients: Vec<Recipient>) -> Self {
        Self {
            headers,
            ciphertext,
            recipients,
        }
    }
}

impl CoseItem for Encrypt {
    fn to_value(&self) -> Result<Value> {
        if self.recipients.is_empty() {
            return Err(CoseError::MissingRequiredField("recipients"));
        }

        let mut items = Vec::with_capacity(4);
        items.extend(self.headers.to_values()?);
        items.push(bytes_or_null(self.ciphertext.as_deref()));
        items.push(Value::Array(
            self.recipients
                .iter()
                .map(Recipient::to_value)
                .collect::<Result<_>>()?,
        ));
        Ok(Value::Array(items))
    }

    fn from_value(value: Value) -> Result<Self> {
        let [protected, unprotected, ciphertext, recipients] =
            expect_fixed_array(value, "COSE_Encrypt")?;

        let headers = Headers::from_pair(protected, unprotected)?;
        let ciphertext = expect_bytes_or_null(ciphertext)?;
        let recipients = expect_array(recipients)?
            .into_iter()
            .map(Recipient::from_value)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            headers,
            ciphertext,
            recipients,
        })
    }
}
