// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Structural codec for COSE (RFC 9052) messages.
//!
//! Each COSE structure is a typed record implementing [`CoseItem`], which
//! converts it to and from a CBOR tree node. Byte encoding is non-canonical:
//! map entries are written in insertion order.
//!
//! This crate does not sign, verify, encrypt or decrypt. [`Sign1::signed_data`]
//! and [`Sign::signed_data`] produce the [`SigStructure`] a signer or verifier
//! would feed to its algorithm.

pub mod codec;
pub mod encrypt;
pub mod encrypt0;
pub mod error;
pub mod header_map;
pub mod headers;
pub mod item;
pub mod key;
pub mod labels;
pub mod other_headers;
pub mod protected;
pub mod recipient;
pub mod scalar;
pub mod settings;
pub mod sig_structure;
pub mod sign;
pub mod sign1;
pub mod signature;
pub mod tagged;

pub use ciborium::value::Value;

pub use codec::{decode, decode_reader, decode_with, encode};
pub use encrypt::Encrypt;
pub use encrypt0::Encrypt0;
pub use error::{CoseError, Result};
pub use header_map::{HeaderMap, HeaderMapBuilder};
pub use headers::Headers;
pub use item::CoseItem;
pub use key::{Key, KeyBuilder};
pub use other_headers::OtherHeaders;
pub use protected::ProtectedHeaderMap;
pub use recipient::Recipient;
pub use scalar::ScalarValue;
pub use settings::DecodeSettings;
pub use sig_structure::{SigContext, SigStructure};
pub use sign::Sign;
pub use sign1::Sign1;
pub use signature::Signature;
pub use tagged::{
    PasswordEncryption, PubKeyEncryption, PASSWORD_ENCRYPTION_TAG, PUB_KEY_ENCRYPTION_TAG,
};
