// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::codec::{expect_bytes, expect_bytes_or_null, expect_fixed_array};
use crate::error::{CoseError, Result};
use crate::headers::Headers;
use crate::item::CoseItem;
use crate::sig_structure::{SigContext, SigStructure};

/// A single-signer signed message.
///
/// ```text
/// COSE_Sign1 = [ protected, unprotected, payload : bstr / nil, signature : bstr ]
/// ```
///
/// A detached message has no payload and encodes it as `null`. An empty
/// payload is treated the same way. A missing signature encodes as an empty
/// byte string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sign1 {
    pub headers: Headers,
    pub payload: Option<Vec<u8>>,
    pub signature: Option<Vec<u8>>,
}

impl Sign1 {
    pub fn new(headers: Headers, payload: Option<Vec<u8>>, signature: Option<Vec<u8>>) -> Self {
        Self {
            headers,
            payload,
            signature,
        }
    }

    pub fn is_detached(&self) -> bool {
        self.payload.as_deref().map_or(true, <[u8]>::is_empty)
    }

    /// Build the `Signature1` Sig_structure covering this message.
    ///
    /// `external_payload` wins over the embedded payload. With neither one
    /// there is nothing to sign and [`CoseError::MissingPayload`] is returned.
    pub fn signed_data(
        &self,
        external_aad: Option<&[u8]>,
        external_payload: Option<&[u8]>,
    ) -> Result<SigStructure> {
        let payload = external_payload
            .or(self.payload.as_deref())
            .ok_or(CoseError::MissingPayload)?;

        tracing::trace!(
            payload_len = payload.len(),
            detached = external_payload.is_some(),
            "building Signature1 Sig_structure"
        );

        Ok(SigStructure {
            context: SigContext::Signature1,
            body_protected: self.headers.protected.clone(),
            sign_protected: None,
            external_aad: external_aad.map(<[u8]>::to_vec),
            payload: Some(payload.to_vec()),
        })
    }
}

impl CoseItem for Sign1 {
    fn to_value(&self) -> Result<Value> {
        let mut items = Vec::with_capacity(4);
        items.extend(self.headers.to_values()?);
        items.push(match &self.payload {
            Some(p) if !p.is_empty() => Value::Bytes(p.clone()),
            _ => Value::Null,
        });
        items.push(Value::Bytes(self.signature.clone().unwrap_or_default()));
        Ok(Value::Array(items))
    }

    fn from_value(value: Value) -> Result<Self> {
        let [protected, unprotected, payload, signature] = expect_fixed_array(value, "COSE_Sign1")?;

        Ok(Self {
            headers: Headers::from_pair(protected, unprotected)?,
            payload: expect_bytes_or_null(payload)?,
            signature: Some(expect_bytes(signature)?),
        })
    }
}
