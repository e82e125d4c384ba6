// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::codec::{expect_array, expect_bytes_or_null, expect_fixed_array};
use crate::error::{CoseError, Result};
use crate::headers::Headers;
use crate::item::CoseItem;
use crate::protected::ProtectedHeaderMap;
use crate::sig_structure::{SigContext, SigStructure};
use crate::signature::Signature;

/// A multi-signer signed message.
///
/// ```text
/// COSE_Sign = [ protected, unprotected, payload : bstr / nil, signatures : [+ COSE_Signature] ]
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sign {
    pub headers: Headers,
    pub payload: Option<Vec<u8>>,
    pub signatures: Vec<Signature>,
}

impl Sign {
    pub fn new(headers: Headers, payload: Option<Vec<u8>>, signatures: Vec<Signature>) -> Self {
        Self {
            headers,
            payload,
            signatures,
        }
    }

    /// Build the `Signature` Sig_structure that `signature` covers.
    ///
    /// The signer's protected header is always written, as an empty byte
    /// string when the signer has none.
    pub fn signed_data(
        &self,
        signature: &Signature,
        external_aad: Option<&[u8]>,
        external_payload: Option<&[u8]>,
    ) -> Result<SigStructure> {
        let payload = external_payload
            .or(self.payload.as_deref())
            .ok_or(CoseError::MissingPayload)?;

        Ok(SigStructure {
            context: SigContext::Signature,
            body_protected: self.headers.protected.clone(),
            sign_protected: Some(
                signature
                    .headers
                    .protected
                    .clone()
                    .unwrap_or_else(ProtectedHeaderMap::default),
            ),
            external_aad: external_aad.map(<[u8]>::to_vec),
            payload: Some(payload.to_vec()),
        })
    }
}

impl CoseItem for Sign {
    fn to_value(&self) -> Result<Value> {
        if self.signatures.is_empty() {
            return Err(CoseError::MissingRequiredField("signatures"));
        }

        let mut items = Vec::with_capacity(4);
        items.extend(self.headers.to_values()?);
        items.push(match &self.payload {
            Some(p) if !p.is_empty() => Value::Bytes(p.clone()),
            _ => Value::Null,
        });
        items.push(Value::Array(
            self.signatures
                .iter()
                .map(Signature::to_value)
                .collect::<Result<_>>()?,
        ));
        Ok(Value::Array(items))
    }

    fn from_value(value: Value) -> Result<Self> {
        let [protected, unprotected, payload, signatures] = expect_fixed_array(value, "COSE_Sign")?;

        let headers = Headers::from_pair(protected, unprotected)?;
        let payload = expect_bytes_or_null(payload)?;
        let signatures = expect_array(signatures)?
            .into_iter()
            .map(Signature::from_value)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            headers,
            payload,
            signatures,
        })
    }
}
