// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Registered integer labels (RFC 9052 sections 3.1 and 7.1).

use ciborium::value::Value;

use crate::scalar::ScalarValue;

/// Common header parameter labels.
pub mod header {
    pub const ALGORITHM: i64 = 1;
    pub const CRITICALITY: i64 = 2;
    pub const CONTENT_TYPE: i64 = 3;
    pub const KEY_ID: i64 = 4;
    pub const INIT_VECTOR: i64 = 5;
    pub const PARTIAL_INIT_VECTOR: i64 = 6;
    pub const COUNTER_SIGNATURE: i64 = 7;

    pub(crate) const MAX: i64 = COUNTER_SIGNATURE;
}

/// COSE_Key common parameter labels.
pub mod key {
    pub const KEY_TYPE: i64 = 1;
    pub const KEY_ID: i64 = 2;
    pub const ALGORITHM: i64 = 3;
    pub const KEY_OPS: i64 = 4;
    pub const BASE_INIT_VECTOR: i64 = 5;

    pub(crate) const MAX: i64 = BASE_INIT_VECTOR;
}

pub(crate) fn label_value(label: i64) -> Value {
    Value::Integer(label.into())
}

/// The reserved label a decoded map key stands for, if any.
///
/// Reserved labels are the unsigned integers `1..=max`.
pub(crate) fn reserved_label(key: &Value, max: i64) -> Option<i64> {
    match key {
        Value::Integer(i) => {
            let i = i128::from(*i);
            (1..=i128::from(max)).contains(&i).then_some(i as i64)
        }
        _ => None,
    }
}

pub(crate) fn is_reserved(label: &ScalarValue, max: i64) -> bool {
    matches!(label.as_i128(), Some(i) if (1..=i128::from(max)).contains(&i))
}
