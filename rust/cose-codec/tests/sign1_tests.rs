// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for COSE_Sign1 encoding and Sig_structure construction.

mod common;

use common::{assert_round_trip, bytes_of, encoder};
use cose_codec::{
    CoseError, CoseItem, HeaderMap, Headers, ProtectedHeaderMap, ScalarValue, SigContext, Sign1,
    Value,
};

const HELLO_SIGN1_HEX: &str = concat!(
    "845869a30127045820674d11e432450118d70ea78673d5e31d5cc1aec63de0ff6284784876544be3406761646472657373583",
    "901d2eb831c6cad4aba700eb35f86966fbeff19d077954430e32ce65e8da79a3abe84f4ce817fad066acc1435be2ffc6bd",
    "7dce2ec1cc6cca6cba166686173686564f44568656c6c6f5840a3b5acd99df5f3b5e4449c5a116078e9c0fcfc126a4d4e2",
    "f6a9565f40b0c77474cafd89845e768fae3f6eec0df4575fcfe7094672c8c02169d744b415c617609",
);

fn content_type_headers() -> Headers {
    Headers::new(
        Some(ProtectedHeaderMap::new(Vec::new())),
        Some(HeaderMap::builder().content_type(-1000).build().unwrap()),
    )
}

#[test]
fn sign1_with_payload_matches_vector() {
    let msg = Sign1::new(content_type_headers(), Some(bytes_of(64, 39)), Some(vec![1, 2, 100]));
    let expected = format!("8440a1033903e75827{}43010264", "40".repeat(39));

    let decoded = assert_round_trip(&msg, Some(&expected));
    assert_eq!(decoded.payload, Some(bytes_of(64, 39)));
    assert_eq!(decoded.signature, Some(vec![1, 2, 100]));
    assert_eq!(
        decoded.headers.unprotected.unwrap().content_type(),
        Some(&ScalarValue::Int(-1000))
    );
}

#[test]
fn sign1_without_payload_encodes_null() {
    let msg = Sign1::new(content_type_headers(), None, Some(vec![1, 2, 100]));
    let decoded = assert_round_trip(&msg, Some("8440a1033903e7f643010264"));
    assert_eq!(decoded.payload, None);
    assert!(decoded.is_detached());
}

#[test]
fn empty_payload_is_null_but_missing_signature_is_empty_bytes() {
    let msg = Sign1::new(Headers::default(), Some(Vec::new()), None);
    assert_eq!(hex::encode(msg.to_vec().unwrap()), "8440a0f640");
}

#[test]
fn decode_hello_message() {
    let bytes = hex::decode(HELLO_SIGN1_HEX).unwrap();
    let msg = Sign1::from_slice(&bytes).unwrap();

    assert_eq!(msg.payload.as_deref(), Some(&b"hello"[..]));
    assert_eq!(msg.signature.as_ref().map(Vec::len), Some(64));

    let protected = msg.headers.protected.as_ref().unwrap().to_header_map().unwrap();
    assert_eq!(protected.algorithm_id(), Some(&ScalarValue::Int(-8)));
    assert_eq!(protected.key_id().map(<[u8]>::len), Some(32));
    assert!(protected.other_headers().contains(&ScalarValue::from("address")));

    let unprotected = msg.headers.unprotected.as_ref().unwrap();
    assert_eq!(
        unprotected.other_headers().get(&ScalarValue::from("hashed")),
        Some(&Value::Bool(false))
    );

    assert_eq!(msg.to_vec().unwrap(), bytes);
}

#[test]
fn signed_data_uses_embedded_payload() {
    let bytes = hex::decode(HELLO_SIGN1_HEX).unwrap();
    let msg = Sign1::from_slice(&bytes).unwrap();

    let sig_structure = msg.signed_data(None, None).unwrap();
    assert_eq!(sig_structure.context, SigContext::Signature1);
    assert_eq!(sig_structure.body_protected, msg.headers.protected);
    assert_eq!(sig_structure.sign_protected, None);
    assert_eq!(sig_structure.external_aad, None);
    assert_eq!(sig_structure.payload.as_deref(), Some(&b"hello"[..]));

    let tbs = sig_structure.to_vec().unwrap();
    assert_eq!(tbs[0], 0x84);
}

#[test]
fn signed_data_prefers_external_payload() {
    let msg = Sign1::new(content_type_headers(), Some(b"embedded".to_vec()), None);
    let sig_structure = msg.signed_data(Some(b"aad"), Some(b"external")).unwrap();
    assert_eq!(sig_structure.payload.as_deref(), Some(&b"external"[..]));
    assert_eq!(sig_structure.external_aad.as_deref(), Some(&b"aad"[..]));
}

#[test]
fn signed_data_without_any_payload_fails() {
    let protected = HeaderMap::builder()
        .other_header("key1", Value::Text("value1".into()))
        .build()
        .unwrap();
    let msg = Sign1::new(
        Headers::new(Some(ProtectedHeaderMap::from_header_map(&protected).unwrap()), None),
        None,
        Some(bytes_of(1, 64)),
    );

    let err = msg.signed_data(None, None).unwrap_err();
    assert_eq!(err, CoseError::MissingPayload);

    msg.signed_data(None, Some(b"detached")).unwrap();
}

#[test]
fn decode_requires_four_elements() {
    let err = Sign1::from_slice(&common::array_of_empty_bytes(3)).unwrap_err();
    assert!(matches!(
        err,
        CoseError::ArityMismatch {
            what: "COSE_Sign1",
            actual: 3,
            ..
        }
    ));
}

#[test]
fn decode_rejects_text_payload() {
    let mut buf = Vec::new();
    let mut enc = encoder(&mut buf);
    enc.array(4).unwrap();
    enc.bytes(&[]).unwrap().map(0).unwrap();
    enc.str("payload").unwrap().bytes(&[1]).unwrap();

    let err = Sign1::from_slice(&buf).unwrap_err();
    assert!(matches!(err, CoseError::ExpectedByteStringType { found: "text string" }));
}

#[test]
fn decode_rejects_tagged_input() {
    // 18([h'', {}, null, h''])
    let err = Sign1::from_slice(&hex::decode("d28440a0f640").unwrap()).unwrap_err();
    assert!(matches!(err, CoseError::ExpectedArrayType { found: "tag" }));
}
