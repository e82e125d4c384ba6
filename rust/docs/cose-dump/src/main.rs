// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Decode a COSE structure from a file and print what it contains.
//!
//! Set `RUST_LOG=cose_codec=trace` to see the codec's own logging.

use std::fmt::Debug;

use cose_codec::{
    CoseItem, DecodeSettings, Encrypt, Encrypt0, Key, PasswordEncryption, PubKeyEncryption,
    SigStructure, Sign, Sign1,
};
use tracing_subscriber::EnvFilter;

/// Read a file to bytes or exit with a clear error.
fn read(path: &str) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| {
        eprintln!("failed to read {path}: {e}");
        std::process::exit(2);
    })
}

fn get_arg_value(args: &[String], name: &str) -> Option<String> {
    let mut i = 0usize;
    while i < args.len() {
        if args[i] == name {
            return args.get(i + 1).cloned();
        }
        i += 1;
    }
    None
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

fn usage_and_exit(exe: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {exe} <sign1|sign> --cose <file> [--payload <file>] [--aad <file>] [--strict]");
    eprintln!(
        "  {exe} <encrypt|encrypt0|key|password|pubkey|sig-structure> --cose <file> [--strict]"
    );
    std::process::exit(2);
}

fn decode_or_exit<T: CoseItem>(bytes: &[u8], settings: &DecodeSettings) -> T {
    T::from_slice_with(bytes, settings).unwrap_or_else(|e| {
        eprintln!("COSE decode failed: {e}");
        std::process::exit(1);
    })
}

fn dump<T: CoseItem + Debug>(bytes: &[u8], settings: &DecodeSettings) {
    let item: T = decode_or_exit(bytes, settings);
    println!("{item:#?}");
}

fn print_to_be_signed(label: &str, sig_structure: &SigStructure) {
    match sig_structure.to_vec() {
        Ok(tbs) => println!("{label}: {}", hex::encode(tbs)),
        Err(e) => {
            eprintln!("failed to encode Sig_structure: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let exe = args.first().map(|s| s.as_str()).unwrap_or("cose-dump");
    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let cose_path = get_arg_value(&args, "--cose").unwrap_or_default();
    if mode.is_empty() || cose_path.is_empty() {
        usage_and_exit(exe);
    }

    let cose = read(&cose_path);
    let payload = get_arg_value(&args, "--payload").map(|p| read(&p));
    let aad = get_arg_value(&args, "--aad").map(|p| read(&p));

    let mut settings = DecodeSettings::default();
    if has_flag(&args, "--strict") {
        settings = settings.reject_trailing_bytes();
    }

    tracing::debug!(mode, len = cose.len(), "decoding input");

    match mode {
        "sign1" => {
            let msg: Sign1 = decode_or_exit(&cose, &settings);
            println!("{msg:#?}");
            match msg.signed_data(aad.as_deref(), payload.as_deref()) {
                Ok(tbs) => print_to_be_signed("to_be_signed", &tbs),
                Err(e) => eprintln!("no Sig_structure: {e}; provide --payload <file>"),
            }
        }
        "sign" => {
            let msg: Sign = decode_or_exit(&cose, &settings);
            println!("{msg:#?}");
            for (i, signature) in msg.signatures.iter().enumerate() {
                match msg.signed_data(signature, aad.as_deref(), payload.as_deref()) {
                    Ok(tbs) => print_to_be_signed(&format!("to_be_signed[{i}]"), &tbs),
                    Err(e) => eprintln!("no Sig_structure for signer {i}: {e}"),
                }
            }
        }
        "encrypt" => dump::<Encrypt>(&cose, &settings),
        "encrypt0" => dump::<Encrypt0>(&cose, &settings),
        "key" => dump::<Key>(&cose, &settings),
        "password" => dump::<PasswordEncryption>(&cose, &settings),
        "pubkey" => dump::<PubKeyEncryption>(&cose, &settings),
        "sig-structure" => dump::<SigStructure>(&cose, &settings),
        _ => usage_and_exit(exe),
    }
}
