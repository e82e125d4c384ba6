// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// Options applied when decoding COSE structures from bytes or readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSettings {
    /// Inputs longer than this many bytes are rejected before decoding.
    pub(crate) max_len: Option<usize>,

    /// If false, any bytes left after the first CBOR item are an error.
    pub(crate) allow_trailing_bytes: bool,
}

impl DecodeSettings {
    pub fn new() -> Self {
        Self {
            max_len: None,
            allow_trailing_bytes: true,
        }
    }

    /// Reject inputs longer than `max_len` bytes.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Require the input to hold exactly one CBOR item.
    pub fn reject_trailing_bytes(mut self) -> Self {
        self.allow_trailing_bytes = false;
        self
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    pub fn allow_trailing_bytes(&self) -> bool {
        self.allow_trailing_bytes
    }
}

impl Default for DecodeSettings {
    fn default() -> Self {
        Self::new()
    }
}
