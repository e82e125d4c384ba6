// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE header maps.
//!
//! A header map is an inline CBOR map in the unprotected position, and the
//! byte-string-wrapped encoding of the same map in the protected position
//! (see `ProtectedHeaderMap`). The registered labels 1 through 7 are decoded
//! into typed fields; every other entry is kept as a raw CBOR node.
//!
//! ```text
//! { ? 1 => int / tstr,            ; alg
//!   ? 2 => [+ label],             ; crit
//!   ? 3 => tstr / int,            ; content type
//!   ? 4 => bstr,                  ; kid
//!   ? 5 => bstr,                  ; IV
//!   ? 6 => bstr,                  ; Partial IV
//!   ? 7 => COSE_Signature / [+ COSE_Signature],
//!   * label => values }
//! ```

use ciborium::value::Value;

use crate::codec::{expect_array, expect_bytes, expect_map};
use crate::error::{CoseError, Result};
use crate::item::CoseItem;
use crate::labels::{header, is_reserved, label_value, reserved_label};
use crate::other_headers::OtherHeaders;
use crate::scalar::{ensure_int_or_text, ScalarValue};
use crate::signature::Signature;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderMap {
    algorithm_id: Option<ScalarValue>,
    criticality: Vec<ScalarValue>,
    content_type: Option<ScalarValue>,
    key_id: Option<Vec<u8>>,
    init_vector: Option<Vec<u8>>,
    partial_init_vector: Option<Vec<u8>>,
    counter_signature: Vec<Signature>,
    other_headers: OtherHeaders,
}

impl HeaderMap {
    /// An empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> HeaderMapBuilder {
        HeaderMapBuilder::default()
    }

    pub fn algorithm_id(&self) -> Option<&ScalarValue> {
        self.algorithm_id.as_ref()
    }

    pub fn criticality(&self) -> &[ScalarValue] {
        &self.criticality
    }

    pub fn content_type(&self) -> Option<&ScalarValue> {
        self.content_type.as_ref()
    }

    pub fn key_id(&self) -> Option<&[u8]> {
        self.key_id.as_deref()
    }

    pub fn init_vector(&self) -> Option<&[u8]> {
        self.init_vector.as_deref()
    }

    pub fn partial_init_vector(&self) -> Option<&[u8]> {
        self.partial_init_vector.as_deref()
    }

    pub fn counter_signature(&self) -> &[Signature] {
        &self.counter_signature
    }

    pub fn other_headers(&self) -> &OtherHeaders {
        &self.other_headers
    }

    /// Mutable access to the additional headers.
    ///
    /// An entry stored here under a registered label (1-7) overrides the
    /// matching typed field when the map is serialized.
    pub fn other_headers_mut(&mut self) -> &mut OtherHeaders {
        &mut self.other_headers
    }

    /// True if no field is populated; such a map serializes as `{}`.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn validate(&self) -> Result<()> {
        if let Some(alg) = &self.algorithm_id {
            ensure_int_or_text(alg, "algorithm")?;
        }
        for crit in &self.criticality {
            ensure_int_or_text(crit, "criticality entry")?;
        }
        if let Some(content_type) = &self.content_type {
            ensure_int_or_text(content_type, "content type")?;
        }
        Ok(())
    }
}

impl CoseItem for HeaderMap {
    fn to_value(&self) -> Result<Value> {
        let mut map = Vec::new();

        if let Some(alg) = &self.algorithm_id {
            map.push((label_value(header::ALGORITHM), alg.to_value()?));
        }
        if !self.criticality.is_empty() {
            map.push((label_value(header::CRITICALITY), scalars_to_array(&self.criticality)?));
        }
        if let Some(content_type) = &self.content_type {
            map.push((label_value(header::CONTENT_TYPE), content_type.to_value()?));
        }
        if let Some(kid) = &self.key_id {
            map.push((label_value(header::KEY_ID), Value::Bytes(kid.clone())));
        }
        if let Some(iv) = &self.init_vector {
            map.push((label_value(header::INIT_VECTOR), Value::Bytes(iv.clone())));
        }
        if let Some(piv) = &self.partial_init_vector {
            map.push((label_value(header::PARTIAL_INIT_VECTOR), Value::Bytes(piv.clone())));
        }
        match self.counter_signature.as_slice() {
            [] => {}
            [single] => map.push((label_value(header::COUNTER_SIGNATURE), single.to_value()?)),
            many => {
                let sigs = many.iter().map(Signature::to_value).collect::<Result<Vec<_>>>()?;
                map.push((label_value(header::COUNTER_SIGNATURE), Value::Array(sigs)));
            }
        }

        self.other_headers.write_into(&mut map, header::MAX)?;

        Ok(Value::Map(map))
    }

    fn from_value(value: Value) -> Result<Self> {
        let entries = expect_map(value)?;
        let mut hm = HeaderMap::default();

        for (key, value) in entries {
            match reserved_label(&key, header::MAX) {
                Some(header::ALGORITHM) => hm.algorithm_id = ScalarValue::from_value(&value)?,
                Some(header::CRITICALITY) => hm.criticality = scalars_from_array(value)?,
                Some(header::CONTENT_TYPE) => hm.content_type = ScalarValue::from_value(&value)?,
                Some(header::KEY_ID) => hm.key_id = Some(expect_bytes(value)?),
                Some(header::INIT_VECTOR) => hm.init_vector = Some(expect_bytes(value)?),
                Some(header::PARTIAL_INIT_VECTOR) => {
                    hm.partial_init_vector = Some(expect_bytes(value)?)
                }
                // header::COUNTER_SIGNATURE
                Some(_) => hm.counter_signature = counter_signatures_from_value(value)?,
                None => hm.other_headers.insert_decoded(&key, value)?,
            }
        }

        hm.validate()?;
        Ok(hm)
    }
}

/// A single counter signature is the signature array itself; several are an
/// array of signature arrays.
fn counter_signatures_from_value(value: Value) -> Result<Vec<Signature>> {
    let items = expect_array(value)?;
    if matches!(items.first(), Some(Value::Array(_))) {
        items.into_iter().map(Signature::from_value).collect()
    } else {
        Ok(vec![Signature::from_value(Value::Array(items))?])
    }
}

pub(crate) fn scalars_to_array(values: &[ScalarValue]) -> Result<Value> {
    let items = values.iter().map(ScalarValue::to_value).collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(items))
}

/// Decode an array of scalars, skipping `null` entries.
pub(crate) fn scalars_from_array(value: Value) -> Result<Vec<ScalarValue>> {
    let mut out = Vec::new();
    for item in expect_array(value)? {
        if let Some(scalar) = ScalarValue::from_value(&item)? {
            out.push(scalar);
        }
    }
    Ok(out)
}

/// Builder for [`HeaderMap`]. Field types are checked in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct HeaderMapBuilder {
    map: HeaderMap,
    pending: Vec<(ScalarValue, Value)>,
}

impl HeaderMapBuilder {
    pub fn algorithm_id(mut self, alg: impl Into<ScalarValue>) -> Self {
        self.map.algorithm_id = Some(alg.into());
        self
    }

    pub fn add_criticality(mut self, label: impl Into<ScalarValue>) -> Self {
        self.map.criticality.push(label.into());
        self
    }

    pub fn criticality(mut self, labels: Vec<ScalarValue>) -> Self {
        self.map.criticality = labels;
        self
    }

    pub fn content_type(mut self, content_type: impl Into<ScalarValue>) -> Self {
        self.map.content_type = Some(content_type.into());
        self
    }

    pub fn key_id(mut self, kid: impl Into<Vec<u8>>) -> Self {
        self.map.key_id = Some(kid.into());
        self
    }

    pub fn init_vector(mut self, iv: impl Into<Vec<u8>>) -> Self {
        self.map.init_vector = Some(iv.into());
        self
    }

    pub fn partial_init_vector(mut self, piv: impl Into<Vec<u8>>) -> Self {
        self.map.partial_init_vector = Some(piv.into());
        self
    }

    pub fn add_counter_signature(mut self, signature: Signature) -> Self {
        self.map.counter_signature.push(signature);
        self
    }

    pub fn counter_signatures(mut self, signatures: Vec<Signature>) -> Self {
        self.map.counter_signature = signatures;
        self
    }

    /// Add a parameter outside the registered labels.
    pub fn other_header(mut self, label: impl Into<ScalarValue>, value: Value) -> Self {
        self.pending.push((label.into(), value));
        self
    }

    pub fn build(self) -> Result<HeaderMap> {
        let Self { mut map, pending } = self;
        map.validate()?;

        for (label, value) in pending {
            map.other_headers.insert(label, value)?;
        }
        if let Some(label) = map.other_headers.find_reserved(|l| is_reserved(l, header::MAX)) {
            return Err(CoseError::ReservedLabelCollision {
                label: label.to_string(),
            });
        }

        Ok(map)
    }
}
