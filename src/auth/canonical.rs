// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Canonical message construction.

use std::fmt::{Display, Write};

/// Builder for the string a client signs.
///
/// Field order is part of the protocol: signer and verifier must append the
/// same names in the same order. Amounts render through
/// [`Amount`](crate::amount::Amount)'s six-decimal `Display`.
#[derive(Debug, Clone)]
pub struct CanonicalMessage {
    buf: String,
}

impl CanonicalMessage {
    pub fn new(id: i64, timestamp: i64) -> Self {
        Self {
            buf: format!("{id}{timestamp}"),
        }
    }

    /// Append a field name followed by its value.
    pub fn field(mut self, name: &str, value: impl Display) -> Self {
        self.buf.push_str(name);
        // Writing into a String cannot fail.
        let _ = write!(self.buf, "{value}");
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// A request carrying a signature over its own canonical message.
pub trait SignedRequest {
    /// Base64 signature supplied by the client.
    fn signature(&self) -> &str;

    fn canonical_message(&self) -> String;

    /// Check the signature against a base64 DER public key.
    fn verify(&self, public_key: &str) -> bool {
        super::verify(&self.canonical_message(), self.signature(), public_key)
    }
}
