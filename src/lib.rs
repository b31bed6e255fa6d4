// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Asset Transfer Server - Signed Account Transfers over a Transactional Ledger
//!
//! Accounts live in a key-value ledger. Balance queries and transfers must be
//! signed with the RSA key registered when the account was created.
//!
//! ## Modules
//!
//! - `amount` - Fixed-point amounts (six decimals)
//! - `ledger` - Transactional key-value ledger (in-memory MVCC or redb)
//! - `contract` - Account create/read/transfer rules
//! - `auth` - Canonical messages and RSA-SHA256 verification
//! - `service` - Facade mapping outcomes to response codes
//! - `api` - HTTP API handlers (Axum)

pub mod amount;
pub mod api;
pub mod auth;
pub mod config;
pub mod contract;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod service;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
