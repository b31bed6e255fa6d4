// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Account Service
//!
//! Orchestrates contract calls for the HTTP layer and maps every outcome to
//! an [`ApiResponse`]:
//!
//! | Operation | Auth | Outcomes |
//! |-----------|------|----------|
//! | `get_balance` | signed by owner | `OK`, `ACCOUNT_NOT_EXIST`, `INVALID_SIG`, `ERR` |
//! | `create_account` | none | `OK`, `ERR` |
//! | `send` | signed by sender | `OK`, `INVALID_SIG`, `ERR` |
//!
//! Contract errors other than a missing account on a balance query are
//! flattened into `ERR` with the error message. No method panics or returns
//! an error for a business outcome.

use std::sync::Arc;

use crate::auth::SignedRequest;
use crate::contract::{Account, AccountContract, ContractError, ContractResult};
use crate::ledger::{self, Ledger};
use crate::models::{ApiResponse, BalanceQuery, CreateAccountRequest, SendRequest};

/// The application facade over one ledger handle.
pub struct AccountService {
    ledger: Arc<dyn Ledger>,
    contract: AccountContract,
    submit_attempts: u32,
}

impl AccountService {
    pub fn new(ledger: Arc<dyn Ledger>, contract: AccountContract, submit_attempts: u32) -> Self {
        Self {
            ledger,
            contract,
            submit_attempts,
        }
    }

    pub fn ledger(&self) -> &dyn Ledger {
        self.ledger.as_ref()
    }

    fn read_account(&self, account_id: &str) -> ContractResult<Account> {
        ledger::evaluate(self.ledger(), |tx| self.contract.read_account(tx, account_id))
    }

    /// Signed balance lookup.
    pub fn get_balance(&self, query: &BalanceQuery) -> ApiResponse {
        tracing::info!(id = query.id, account_id = %query.account_id, "Balance query");

        let account = match self.read_account(&query.account_id) {
            Ok(account) => account,
            Err(ContractError::NotFound(_)) => return ApiResponse::account_not_exist(),
            Err(e) => {
                tracing::error!(error = %e, error_code = e.error_code(), "Failed to read account");
                return ApiResponse::err(e.to_string());
            }
        };

        if !query.verify(&account.public_key) {
            tracing::warn!(id = query.id, account_id = %query.account_id, "Rejected balance query");
            return ApiResponse::invalid_sig();
        }

        ApiResponse::balance(query.id, account.balance)
    }

    /// Unauthenticated account creation.
    pub fn create_account(&self, request: &CreateAccountRequest) -> ApiResponse {
        tracing::info!(account_id = %request.account_id, balance = %request.balance, "Create account");

        let result = ledger::submit(self.ledger(), self.submit_attempts, |tx| {
            self.contract.create_account(
                tx,
                &request.account_id,
                request.balance,
                &request.public_key,
            )
        });

        match result {
            Ok(_) => ApiResponse::ok(),
            Err(e) => {
                tracing::warn!(error = %e, error_code = e.error_code(), "Create account failed");
                ApiResponse::err(e.to_string())
            }
        }
    }

    /// Signed transfer from `from_id` to `to_id`.
    pub fn send(&self, request: &SendRequest) -> ApiResponse {
        tracing::info!(
            id = request.id,
            from_id = %request.from_id,
            to_id = %request.to_id,
            amount = %request.amount,
            "Send"
        );

        let sender = match self.read_account(&request.from_id) {
            Ok(account) => account,
            Err(e) => {
                tracing::warn!(error = %e, error_code = e.error_code(), "Sender lookup failed");
                return ApiResponse::err(e.to_string());
            }
        };

        if !request.verify(&sender.public_key) {
            tracing::warn!(id = request.id, from_id = %request.from_id, "Rejected transfer");
            return ApiResponse::invalid_sig();
        }

        let result = ledger::submit(self.ledger(), self.submit_attempts, |tx| {
            self.contract
                .send(tx, &request.from_id, &request.to_id, request.amount)
        });

        match result {
            Ok(()) => ApiResponse::ok_with_id(request.id),
            Err(e) => {
                tracing::warn!(error = %e, error_code = e.error_code(), "Transfer failed");
                ApiResponse::err(e.to_string())
            }
        }
    }

    /// All accounts in key order.
    pub fn list_accounts(&self) -> ContractResult<Vec<Account>> {
        ledger::evaluate(self.ledger(), |tx| self.contract.get_all_accounts(tx))
    }
}
