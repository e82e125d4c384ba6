// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::error::{CoseError, Result};
use crate::header_map::HeaderMap;
use crate::item::CoseItem;
use crate::protected::ProtectedHeaderMap;

/// The protected/unprotected header pair that leads every COSE structure.
///
/// On the wire this is always two adjacent array elements: the protected
/// bytes (`h''` when absent) followed by the unprotected map (`{}` when
/// absent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers {
    pub protected: Option<ProtectedHeaderMap>,
    pub unprotected: Option<HeaderMap>,
}

impl Headers {
    pub fn new(protected: Option<ProtectedHeaderMap>, unprotected: Option<HeaderMap>) -> Self {
        Self {
            protected,
            unprotected,
        }
    }

    pub fn to_values(&self) -> Result<[Value; 2]> {
        let protected = match &self.protected {
            Some(p) => p.to_value(),
            None => Value::Bytes(Vec::new()),
        };
        let unprotected = match &self.unprotected {
            Some(u) => u.to_value()?,
            None => Value::Map(Vec::new()),
        };
        Ok([protected, unprotected])
    }

    /// Decode the header pair from exactly two array elements.
    pub fn from_values(items: Vec<Value>) -> Result<Self> {
        let [protected, unprotected]: [Value; 2] = items
            .try_into()
            .map_err(|items: Vec<Value>| CoseError::arity("Headers", 2, items.len()))?;
        Self::from_pair(protected, unprotected)
    }

    pub(crate) fn from_pair(protected: Value, unprotected: Value) -> Result<Self> {
        Ok(Self {
            protected: Some(ProtectedHeaderMap::from_value(protected)?),
            unprotected: Some(HeaderMap::from_value(unprotected)?),
        })
    }

    /// The protected header bytes, empty when absent.
    pub fn protected_bytes(&self) -> &[u8] {
        self.protected.as_ref().map(ProtectedHeaderMap::as_bytes).unwrap_or(&[])
    }
}
