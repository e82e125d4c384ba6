// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `cose-codec` integration tests.
//!
//! Hand-built CBOR fixtures are written with `minicbor` so malformed
//! structures can be produced without going through the codec under test.

#![allow(dead_code)]

use std::fmt::Debug;

use cose_codec::{CoseItem, HeaderMap, Headers, ProtectedHeaderMap};

/// `n` copies of byte `b`.
pub(crate) fn bytes_of(b: u8, n: usize) -> Vec<u8> {
    vec![b; n]
}

/// Encode, decode, and re-encode `item`, asserting both encodings match.
///
/// When `expected_hex` is given the first encoding must equal it. Returns the
/// decoded item for field checks.
pub(crate) fn assert_round_trip<T: CoseItem + Debug>(item: &T, expected_hex: Option<&str>) -> T {
    let first = item.to_vec().expect("encode");
    if let Some(expected) = expected_hex {
        assert_eq!(hex::encode(&first), expected);
    }

    let decoded = T::from_slice(&first).expect("decode");
    let second = decoded.to_vec().expect("re-encode");
    assert_eq!(first, second, "re-encoding changed the bytes");

    decoded
}

/// `{3: -9, 4: h'07070707070707'}`, the small map most tests hang off.
pub(crate) fn small_header_map() -> HeaderMap {
    HeaderMap::builder()
        .key_id(bytes_of(7, 7))
        .content_type(-9)
        .build()
        .expect("header map")
}

/// The small map in both the protected and unprotected position.
pub(crate) fn small_headers() -> Headers {
    let hm = small_header_map();
    Headers::new(
        Some(ProtectedHeaderMap::from_header_map(&hm).expect("protected")),
        Some(hm),
    )
}

pub(crate) fn encoder(buf: &mut Vec<u8>) -> minicbor::Encoder<&mut Vec<u8>> {
    minicbor::Encoder::new(buf)
}

/// A CBOR array holding `n` empty byte strings.
pub(crate) fn array_of_empty_bytes(n: u64) -> Vec<u8> {
    let mut out = Vec::new();
    let mut enc = encoder(&mut out);
    enc.array(n).unwrap();
    for _ in 0..n {
        enc.bytes(&[]).unwrap();
    }
    out
}
