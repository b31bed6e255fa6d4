// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Request Authentication
//!
//! Balance queries and transfers are signed by the account owner with the
//! RSA private key matching the public key registered at account creation.
//!
//! ## Signing Flow
//!
//! 1. Client builds the canonical message for the request type:
//!    `id ‖ timestamp ‖ name₁ ‖ value₁ ‖ … ‖ nameₙ ‖ valueₙ` with no
//!    separators, fields in a fixed per-request order
//! 2. Client signs it with RSASSA-PKCS1-v1_5 / SHA-256 and sends the
//!    base64 signature alongside the request fields
//! 3. Server rebuilds the same message from the received fields and checks
//!    the signature against the account's stored public key
//!
//! ## Security
//!
//! - Verification never errors: every failure collapses to `false`
//! - Public keys are base64 DER X.509 SubjectPublicKeyInfo (RSA only)
//! - Accepted moduli are 2048 to 8192 bits
//! - `id` and `timestamp` are signed but not checked for freshness, so a
//!   captured request can be replayed

pub mod canonical;
pub mod error;
pub mod verify;

pub use canonical::{CanonicalMessage, SignedRequest};
pub use error::SignatureError;
pub use verify::{try_verify, verify};
