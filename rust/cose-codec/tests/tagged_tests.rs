// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for the tag-wrapped encryption envelopes.

mod common;

use common::{assert_round_trip, small_header_map};
use cose_codec::{
    CoseError, CoseItem, Encrypt, Encrypt0, Headers, PasswordEncryption, ProtectedHeaderMap,
    PubKeyEncryption, Recipient, PASSWORD_ENCRYPTION_TAG, PUB_KEY_ENCRYPTION_TAG,
};

fn headers() -> Headers {
    Headers::new(Some(ProtectedHeaderMap::default()), Some(small_header_map()))
}

fn password_encryption() -> PasswordEncryption {
    PasswordEncryption::new(Encrypt0::new(headers(), Some(b"This is a msg".to_vec())))
}

fn pub_key_encryption() -> PubKeyEncryption {
    PubKeyEncryption::new(Encrypt::new(
        headers(),
        Some(b"This is a msg".to_vec()),
        vec![Recipient::new(headers(), Some(b"Recipient1 msg".to_vec()))],
    ))
}

#[test]
fn password_encryption_is_tagged_16() {
    let pe = password_encryption();
    let bytes = pe.to_vec().unwrap();
    // Tag 16 fits in the initial byte: 0xc0 | 16.
    assert_eq!(bytes[0], 0xd0);
    assert_eq!(&bytes[1..], pe.0.to_vec().unwrap().as_slice());

    let decoded = assert_round_trip(&pe, None);
    assert_eq!(decoded, pe);
    assert_eq!(decoded.into_inner().ciphertext, Some(b"This is a msg".to_vec()));
}

#[test]
fn pub_key_encryption_is_tagged_96() {
    let pke = pub_key_encryption();
    let bytes = pke.to_vec().unwrap();
    assert_eq!(&bytes[..2], &[0xd8, 0x60]);

    let decoded = assert_round_trip(&pke, None);
    assert_eq!(decoded.0.recipients.len(), 1);
    assert_eq!(decoded, pke);
}

#[test]
fn wrong_tag_is_rejected() {
    let bytes = pub_key_encryption().to_vec().unwrap();
    let err = PasswordEncryption::from_slice(&bytes).unwrap_err();
    assert_eq!(
        err,
        CoseError::TagMismatch {
            expected: PASSWORD_ENCRYPTION_TAG,
            found: Some(PUB_KEY_ENCRYPTION_TAG),
        }
    );

    let bytes = password_encryption().to_vec().unwrap();
    let err = PubKeyEncryption::from_slice(&bytes).unwrap_err();
    assert_eq!(
        err,
        CoseError::TagMismatch {
            expected: PUB_KEY_ENCRYPTION_TAG,
            found: Some(PASSWORD_ENCRYPTION_TAG),
        }
    );
}

#[test]
fn untagged_input_is_rejected() {
    let bytes = password_encryption().0.to_vec().unwrap();
    let err = PasswordEncryption::from_slice(&bytes).unwrap_err();
    assert_eq!(
        err,
        CoseError::TagMismatch {
            expected: PASSWORD_ENCRYPTION_TAG,
            found: None,
        }
    );
    assert_eq!(err.to_string(), "CBOR tag mismatch: expected 16, found no tag");
}

#[test]
fn inner_structure_errors_surface_after_the_tag_matches() {
    // 16([h'', {}])
    let err = PasswordEncryption::from_slice(&[0xd0, 0x82, 0x40, 0xa0]).unwrap_err();
    assert!(matches!(
        err,
        CoseError::ArityMismatch {
            what: "COSE_Encrypt0",
            actual: 2,
            ..
        }
    ));
}
