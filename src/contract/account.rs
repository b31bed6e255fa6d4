// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account entity and its ledger record format.
//!
//! ## Record Format (v1)
//!
//! Stored under key = `accountID`:
//!
//! ```text
//! {"accountID": "alice", "publicKey": "<base64 DER SPKI>", "balance": 100.0}
//! ```
//!
//! Encoding and decoding go through [`AccountRecordV1`] only, so the stored
//! shape is fixed by this file rather than by the in-memory struct.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::amount::Amount;

use super::error::{ContractError, ContractResult};

/// An account as held on the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Primary key, immutable once created.
    pub account_id: String,
    /// Base64 DER X.509 SubjectPublicKeyInfo (RSA).
    pub public_key: String,
    pub balance: Amount,
}

impl Account {
    pub fn new(account_id: impl Into<String>, balance: Amount, public_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            public_key: public_key.into(),
            balance,
        }
    }

    /// Same account with a different balance.
    pub fn with_balance(&self, balance: Amount) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }
}

/// Wire and storage shape of an account record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AccountRecordV1 {
    #[serde(rename = "accountID")]
    pub account_id: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
    #[schema(value_type = f64)]
    pub balance: Amount,
}

impl From<&Account> for AccountRecordV1 {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id.clone(),
            public_key: account.public_key.clone(),
            balance: account.balance,
        }
    }
}

impl From<AccountRecordV1> for Account {
    fn from(record: AccountRecordV1) -> Self {
        Self {
            account_id: record.account_id,
            public_key: record.public_key,
            balance: record.balance,
        }
    }
}

/// Serialize an account into its ledger record bytes.
pub fn encode(account: &Account) -> ContractResult<Vec<u8>> {
    serde_json::to_vec(&AccountRecordV1::from(account)).map_err(|e| ContractError::Codec {
        key: account.account_id.clone(),
        reason: e.to_string(),
    })
}

/// Parse ledger record bytes stored under `key`.
pub fn decode(key: &str, bytes: &[u8]) -> ContractResult<Account> {
    serde_json::from_slice::<AccountRecordV1>(bytes)
        .map(Account::from)
        .map_err(|e| ContractError::Codec {
            key: key.to_string(),
            reason: e.to_string(),
        })
}
