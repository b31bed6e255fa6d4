// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! RSASSA-PKCS1-v1_5 / SHA-256 verification over X.509 public keys.

use base64ct::{Base64, Encoding};
use ring::signature::{UnparsedPublicKey, RSA_PKCS1_2048_8192_SHA256};
use x509_parser::oid_registry::OID_PKCS1_RSAENCRYPTION;
use x509_parser::prelude::{FromDer, SubjectPublicKeyInfo};

use super::error::SignatureError;

/// Verify `signature_b64` over `message` with a base64 DER SPKI public key.
///
/// Returns `false` on any failure: bad base64, a malformed or non-RSA key,
/// or a signature that does not match.
pub fn verify(message: &str, signature_b64: &str, public_key_b64: &str) -> bool {
    match try_verify(message, signature_b64, public_key_b64) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, error_code = e.error_code(), "Signature verification failed");
            false
        }
    }
}

/// Same as [`verify`], but reports why verification failed.
pub fn try_verify(
    message: &str,
    signature_b64: &str,
    public_key_b64: &str,
) -> Result<(), SignatureError> {
    let key_der = Base64::decode_vec(public_key_b64)
        .map_err(|e| SignatureError::KeyEncoding(e.to_string()))?;
    let signature = Base64::decode_vec(signature_b64)
        .map_err(|e| SignatureError::SignatureEncoding(e.to_string()))?;

    let (rest, spki) = SubjectPublicKeyInfo::from_der(&key_der)
        .map_err(|e| SignatureError::MalformedKey(e.to_string()))?;
    if !rest.is_empty() {
        return Err(SignatureError::MalformedKey(
            "trailing data after SubjectPublicKeyInfo".to_string(),
        ));
    }
    if spki.algorithm.algorithm != OID_PKCS1_RSAENCRYPTION {
        return Err(SignatureError::UnsupportedAlgorithm(
            spki.algorithm.algorithm.to_id_string(),
        ));
    }

    // The bit string holds a PKCS #1 RSAPublicKey, which is what ring expects.
    UnparsedPublicKey::new(&RSA_PKCS1_2048_8192_SHA256, &spki.subject_public_key.data)
        .verify(message.as_bytes(), &signature)
        .map_err(|_| SignatureError::Mismatch)
}
