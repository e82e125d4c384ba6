// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for `ProtectedHeaderMap` and the `Headers` pair.

mod common;

use common::{bytes_of, small_header_map};
use cose_codec::{CoseError, CoseItem, HeaderMap, Headers, ProtectedHeaderMap, Value};

#[test]
fn protected_keeps_the_encoded_bytes() {
    let hm = small_header_map();
    let protected = ProtectedHeaderMap::from_header_map(&hm).unwrap();
    assert_eq!(protected.as_bytes(), hm.to_vec().unwrap().as_slice());
    assert_eq!(protected.to_header_map().unwrap(), hm);
}

#[test]
fn empty_protected_bytes_stand_for_an_empty_map() {
    let protected = ProtectedHeaderMap::default();
    assert!(protected.is_empty());
    assert!(protected.to_header_map().unwrap().is_empty());
    assert_eq!(protected.to_value(), Value::Bytes(vec![]));
}

#[test]
fn protected_equality_is_byte_exact() {
    // {3: -9} with a one-byte and a two-byte integer encoding of the label.
    let short = ProtectedHeaderMap::new(vec![0xa1, 0x03, 0x28]);
    let long = ProtectedHeaderMap::new(vec![0xa1, 0x18, 0x03, 0x28]);

    assert_eq!(
        short.to_header_map().unwrap(),
        long.to_header_map().unwrap()
    );
    assert_ne!(short, long);
}

#[test]
fn protected_bytes_that_are_not_a_map_fail_to_decode() {
    let err = ProtectedHeaderMap::new(vec![0x80]).to_header_map().unwrap_err();
    assert!(matches!(err, CoseError::ExpectedMapType { found: "array" }));
}

#[test]
fn protected_decode_requires_byte_string() {
    let err = ProtectedHeaderMap::from_value(Value::Map(vec![])).unwrap_err();
    assert!(matches!(err, CoseError::ExpectedByteStringType { found: "map" }));
}

#[test]
fn absent_headers_encode_as_empty_bytes_and_empty_map() {
    let [protected, unprotected] = Headers::default().to_values().unwrap();
    assert_eq!(protected, Value::Bytes(vec![]));
    assert_eq!(unprotected, Value::Map(vec![]));
}

#[test]
fn decoded_headers_are_always_present() {
    let headers = Headers::from_values(vec![Value::Bytes(vec![]), Value::Map(vec![])]).unwrap();
    assert_eq!(headers.protected, Some(ProtectedHeaderMap::default()));
    assert_eq!(headers.unprotected, Some(HeaderMap::new()));
    assert!(headers.protected_bytes().is_empty());
}

#[test]
fn header_pair_round_trips() {
    let hm = small_header_map();
    let headers = Headers::new(
        Some(ProtectedHeaderMap::from_header_map(&hm).unwrap()),
        Some(hm.clone()),
    );

    let values = headers.to_values().unwrap();
    let decoded = Headers::from_values(values.to_vec()).unwrap();
    assert_eq!(decoded, headers);
    assert_eq!(decoded.unprotected.unwrap().key_id(), Some(bytes_of(7, 7).as_slice()));
}

#[test]
fn header_pair_requires_two_elements() {
    let err = Headers::from_values(vec![Value::Bytes(vec![])]).unwrap_err();
    assert!(matches!(
        err,
        CoseError::ArityMismatch {
            what: "Headers",
            actual: 1,
            ..
        }
    ));
}

#[test]
fn unprotected_must_be_a_map() {
    let err = Headers::from_values(vec![Value::Bytes(vec![]), Value::Bytes(vec![])]).unwrap_err();
    assert!(matches!(err, CoseError::ExpectedMapType { .. }));
}
