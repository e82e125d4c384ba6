// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Key descriptors.
//!
//! ```text
//! COSE_Key = {
//!     1 => tstr / int,          ; kty
//!     ? 2 => bstr,              ; kid
//!     ? 3 => tstr / int,        ; alg
//!     ? 4 => [+ (tstr / int)],  ; key_ops
//!     ? 5 => bstr,              ; Base IV
//!     * label => values
//! }
//! ```
//!
//! Key-type specific parameters (curve, coordinates, ...) are not interpreted
//! and stay in the additional parameters.

use ciborium::value::Value;

use crate::codec::{expect_bytes, expect_map};
use crate::error::{CoseError, Result};
use crate::header_map::{scalars_from_array, scalars_to_array};
use crate::item::CoseItem;
use crate::labels::{is_reserved, key, label_value, reserved_label};
use crate::other_headers::OtherHeaders;
use crate::scalar::{ensure_int_or_text, ScalarValue};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Key {
    key_type: Option<ScalarValue>,
    key_id: Option<Vec<u8>>,
    algorithm_id: Option<ScalarValue>,
    key_ops: Vec<ScalarValue>,
    base_init_vector: Option<Vec<u8>>,
    other_headers: OtherHeaders,
}

impl Key {
    pub fn builder() -> KeyBuilder {
        KeyBuilder::default()
    }

    pub fn key_type(&self) -> Option<&ScalarValue> {
        self.key_type.as_ref()
    }

    pub fn key_id(&self) -> Option<&[u8]> {
        self.key_id.as_deref()
    }

    pub fn algorithm_id(&self) -> Option<&ScalarValue> {
        self.algorithm_id.as_ref()
    }

    pub fn key_ops(&self) -> &[ScalarValue] {
        &self.key_ops
    }

    pub fn base_init_vector(&self) -> Option<&[u8]> {
        self.base_init_vector.as_deref()
    }

    pub fn other_headers(&self) -> &OtherHeaders {
        &self.other_headers
    }

    /// Mutable access to the additional key parameters.
    ///
    /// An entry stored here under a registered label (1-5) overrides the
    /// matching typed field when the key is serialized.
    pub fn other_headers_mut(&mut self) -> &mut OtherHeaders {
        &mut self.other_headers
    }

    fn validate(&self) -> Result<()> {
        if let Some(kty) = &self.key_type {
            ensure_int_or_text(kty, "key type")?;
        }
        if let Some(alg) = &self.algorithm_id {
            ensure_int_or_text(alg, "algorithm")?;
        }
        for op in &self.key_ops {
            ensure_int_or_text(op, "key operation")?;
        }
        Ok(())
    }
}

impl CoseItem for Key {
    fn to_value(&self) -> Result<Value> {
        let mut map = Vec::new();

        if let Some(kty) = &self.key_type {
            map.push((label_value(key::KEY_TYPE), kty.to_value()?));
        }
        if let Some(kid) = &self.key_id {
            map.push((label_value(key::KEY_ID), Value::Bytes(kid.clone())));
        }
        if let Some(alg) = &self.algorithm_id {
            map.push((label_value(key::ALGORITHM), alg.to_value()?));
        }
        if !self.key_ops.is_empty() {
            map.push((label_value(key::KEY_OPS), scalars_to_array(&self.key_ops)?));
        }
        if let Some(biv) = &self.base_init_vector {
            map.push((label_value(key::BASE_INIT_VECTOR), Value::Bytes(biv.clone())));
        }

        self.other_headers.write_into(&mut map, key::MAX)?;

        Ok(Value::Map(map))
    }

    fn from_value(value: Value) -> Result<Self> {
        let mut k = Key::default();

        for (label, value) in expect_map(value)? {
            match reserved_label(&label, key::MAX) {
                Some(key::KEY_TYPE) => k.key_type = ScalarValue::from_value(&value)?,
                Some(key::KEY_ID) => k.key_id = Some(expect_bytes(value)?),
                Some(key::ALGORITHM) => k.algorithm_id = ScalarValue::from_value(&value)?,
                Some(key::KEY_OPS) => k.key_ops = scalars_from_array(value)?,
                // key::BASE_INIT_VECTOR
                Some(_) => k.base_init_vector = Some(expect_bytes(value)?),
                None => k.other_headers.insert_decoded(&label, value)?,
            }
        }

        k.validate()?;
        Ok(k)
    }
}

/// Builder for [`Key`].
#[derive(Debug, Clone, Default)]
pub struct KeyBuilder {
    key: Key,
    pending: Vec<(ScalarValue, Value)>,
}

impl KeyBuilder {
    pub fn key_type(mut self, kty: impl Into<ScalarValue>) -> Self {
        self.key.key_type = Some(kty.into());
        self
    }

    pub fn key_id(mut self, kid: impl Into<Vec<u8>>) -> Self {
        self.key.key_id = Some(kid.into());
        self
    }

    pub fn algorithm_id(mut self, alg: impl Into<ScalarValue>) -> Self {
        self.key.algorithm_id = Some(alg.into());
        self
    }

    pub fn add_key_op(mut self, op: impl Into<ScalarValue>) -> Self {
        self.key.key_ops.push(op.into());
        self
    }

    pub fn key_ops(mut self, ops: Vec<ScalarValue>) -> Self {
        self.key.key_ops = ops;
        self
    }

    pub fn base_init_vector(mut self, biv: impl Into<Vec<u8>>) -> Self {
        self.key.base_init_vector = Some(biv.into());
        self
    }

    pub fn other_header(mut self, label: impl Into<ScalarValue>, value: Value) -> Self {
        self.pending.push((label.into(), value));
        self
    }

    pub fn build(self) -> Result<Key> {
        let Self { key: mut built, pending } = self;
        built.validate()?;

        for (label, value) in pending {
            built.other_headers.insert(label, value)?;
        }
        if let Some(label) = built.other_headers.find_reserved(|l| is_reserved(l, key::MAX)) {
            return Err(CoseError::ReservedLabelCollision {
                label: label.to_string(),
            });
        }

        Ok(built)
    }
}
