// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use ciborium::value::Value;

use crate::codec::node_kind;
use crate::error::{CoseError, Result};
use crate::labels::reserved_label;
use crate::scalar::{ensure_int_or_text, ScalarValue};

/// Additional header (or key) parameters beyond the reserved labels.
///
/// Entries keep insertion order and are written in that order. Values are
/// raw CBOR nodes and are never interpreted. Inserting a label that is
/// already present replaces its value in place.
///
/// This is the one mutable part of `HeaderMap` and `Key`; callers sharing
/// an instance must ensure a single writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtherHeaders {
    entries: Vec<(ScalarValue, Value)>,
}

impl OtherHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter. Labels must be integers or text.
    pub fn insert(&mut self, label: impl Into<ScalarValue>, value: Value) -> Result<Option<Value>> {
        let label = label.into();
        ensure_int_or_text(&label, "header label")?;

        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => Ok(Some(std::mem::replace(&mut entry.1, value))),
            None => {
                self.entries.push((label, value));
                Ok(None)
            }
        }
    }

    pub fn get(&self, label: &ScalarValue) -> Option<&Value> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, v)| v)
    }

    pub fn remove(&mut self, label: &ScalarValue) -> Option<Value> {
        let pos = self.entries.iter().position(|(l, _)| l == label)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains(&self, label: &ScalarValue) -> bool {
        self.get(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ScalarValue, &Value)> {
        self.entries.iter().map(|(l, v)| (l, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First label for which `is_reserved` holds, if any.
    pub(crate) fn find_reserved(
        &self,
        is_reserved: impl Fn(&ScalarValue) -> bool,
    ) -> Option<&ScalarValue> {
        self.entries.iter().map(|(l, _)| l).find(|l| is_reserved(l))
    }

    /// Write every entry into an encoded map whose registered labels are
    /// `1..=max`.
    ///
    /// An entry whose label is already in `map` overrides that entry's value.
    /// A registered label not yet in `map` is placed in label order ahead of
    /// all unregistered entries, where a decoded copy would write it. Other
    /// labels are appended.
    pub(crate) fn write_into(&self, map: &mut Vec<(Value, Value)>, max: i64) -> Result<()> {
        for (label, value) in &self.entries {
            let key = label.to_value()?;

            if let Some(entry) = map.iter_mut().find(|(k, _)| *k == key) {
                entry.1 = value.clone();
                tracing::debug!(%label, "additional header overrides an existing map entry");
                continue;
            }

            match reserved_label(&key, max) {
                Some(reserved) => {
                    let at = map
                        .iter()
                        .position(|(k, _)| reserved_label(k, max).map_or(true, |l| l > reserved))
                        .unwrap_or(map.len());
                    map.insert(at, (key, value.clone()));
                    tracing::debug!(%label, "additional header fills a registered label");
                }
                None => map.push((key, value.clone())),
            }
        }
        Ok(())
    }

    /// Record a decoded map entry that is not a reserved label.
    pub(crate) fn insert_decoded(&mut self, key: &Value, value: Value) -> Result<()> {
        let label = ScalarValue::from_value(key)?.ok_or(CoseError::UnexpectedNodeType {
            found: node_kind(key),
        })?;
        self.insert(label, value).map(|_| ())
    }
}

impl<'a> IntoIterator for &'a OtherHeaders {
    type Item = &'a (ScalarValue, Value);
    type IntoIter = std::slice::Iter<'a, (ScalarValue, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
