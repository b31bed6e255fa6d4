// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account contract errors.
//!
//! Any error aborts the enclosing ledger transaction, so no partial writes
//! are ever persisted.

use crate::amount::Amount;
use crate::ledger::LedgerError;

#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("Account {0} does not exist")]
    NotFound(String),

    #[error("Account {0} already exists")]
    AlreadyExists(String),

    #[error("Account {0} does not have enough balance to make the transaction")]
    InsufficientBalance(String),

    #[error("Account ID must not be empty")]
    InvalidAccountId,

    #[error("Amount {0} must not be negative")]
    NegativeAmount(Amount),

    #[error("Balance of account {0} would overflow")]
    AmountOverflow(String),

    #[error("Record {key} could not be decoded: {reason}")]
    Codec { key: String, reason: String },

    #[error("Ledger access failed: {0}")]
    Ledger(#[from] LedgerError),
}

impl ContractError {
    /// Stable machine-readable code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContractError::NotFound(_) => "ACCOUNT_NOT_FOUND",
            ContractError::AlreadyExists(_) => "ASSET_ALREADY_EXISTS",
            ContractError::InsufficientBalance(_) => "NOT_ENOUGH_BALANCE",
            ContractError::InvalidAccountId => "INVALID_ACCOUNT_ID",
            ContractError::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            ContractError::AmountOverflow(_) => "AMOUNT_OVERFLOW",
            ContractError::Codec { .. } => "CORRUPT_RECORD",
            ContractError::Ledger(_) => "LEDGER_UNAVAILABLE",
        }
    }

    /// Transient failures may succeed if the whole request is retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, ContractError::Ledger(_))
    }
}

pub type ContractResult<T> = Result<T, ContractError>;
