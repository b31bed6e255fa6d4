// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signature verification errors.
//!
//! These never cross the facade boundary; [`verify`](super::verify) logs
//! them and reports `false`.

#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("public key is not valid base64: {0}")]
    KeyEncoding(String),

    #[error("signature is not valid base64: {0}")]
    SignatureEncoding(String),

    #[error("public key is not a valid SubjectPublicKeyInfo: {0}")]
    MalformedKey(String),

    #[error("public key algorithm {0} is not RSA")]
    UnsupportedAlgorithm(String),

    #[error("signature does not match message")]
    Mismatch,
}

impl SignatureError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SignatureError::KeyEncoding(_) => "key_encoding",
            SignatureError::SignatureEncoding(_) => "signature_encoding",
            SignatureError::MalformedKey(_) => "malformed_key",
            SignatureError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            SignatureError::Mismatch => "signature_mismatch",
        }
    }
}
