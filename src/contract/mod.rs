// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Account Contract
//!
//! Business rules for accounts held on the ledger:
//!
//! | Operation | Intent | Fails with |
//! |-----------|--------|------------|
//! | `create_account` | submit | `AlreadyExists` |
//! | `read_account` | evaluate | `NotFound` |
//! | `account_exists` | evaluate | – |
//! | `send` | submit | `NotFound`, `InsufficientBalance` |
//! | `get_all_accounts` | evaluate | `Codec` on any bad record |
//!
//! Every operation takes the ledger transaction it runs in. The contract
//! keeps no state between invocations and re-reads everything it needs, so
//! an invocation can be re-executed from scratch after a commit conflict.

pub mod account;
pub mod error;

pub use account::{Account, AccountRecordV1};
pub use error::{ContractError, ContractResult};

use crate::amount::Amount;
use crate::ledger::LedgerAccessor;

/// What the contract does with negative amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmountPolicy {
    /// No sign checks on initial balances or transfer amounts.
    #[default]
    PassThrough,
    /// Reject negative initial balances and negative transfer amounts.
    RejectNegative,
}

/// Account create/read/transfer rules over a [`LedgerAccessor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountContract {
    policy: AmountPolicy,
}

impl AccountContract {
    pub fn new(policy: AmountPolicy) -> Self {
        Self { policy }
    }

    fn check_amount(&self, amount: Amount) -> ContractResult<()> {
        if self.policy == AmountPolicy::RejectNegative && amount.is_negative() {
            return Err(ContractError::NegativeAmount(amount));
        }
        Ok(())
    }

    /// Create an account with an initial balance.
    pub fn create_account<L: LedgerAccessor + ?Sized>(
        &self,
        ledger: &mut L,
        account_id: &str,
        balance: Amount,
        public_key: &str,
    ) -> ContractResult<Account> {
        if account_id.is_empty() {
            return Err(ContractError::InvalidAccountId);
        }
        self.check_amount(balance)?;

        if self.account_exists(ledger, account_id)? {
            tracing::info!(account_id, "Account already exists");
            return Err(ContractError::AlreadyExists(account_id.to_string()));
        }

        let account = Account::new(account_id, balance, public_key);
        ledger.put(account_id, &account::encode(&account)?)?;

        tracing::info!(account_id, balance = %balance, "Account created");
        Ok(account)
    }

    /// Load an account by ID.
    pub fn read_account<L: LedgerAccessor + ?Sized>(
        &self,
        ledger: &mut L,
        account_id: &str,
    ) -> ContractResult<Account> {
        match ledger.get(account_id)? {
            Some(bytes) if !bytes.is_empty() => account::decode(account_id, &bytes),
            _ => {
                tracing::info!(account_id, "Account does not exist");
                Err(ContractError::NotFound(account_id.to_string()))
            }
        }
    }

    /// True iff a non-empty record is stored under `account_id`.
    pub fn account_exists<L: LedgerAccessor + ?Sized>(
        &self,
        ledger: &mut L,
        account_id: &str,
    ) -> ContractResult<bool> {
        Ok(ledger
            .get(account_id)?
            .is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Move `amount` from one account to another.
    ///
    /// Both records are written in the caller's transaction, so they become
    /// visible together at commit or not at all.
    pub fn send<L: LedgerAccessor + ?Sized>(
        &self,
        ledger: &mut L,
        from_id: &str,
        to_id: &str,
        amount: Amount,
    ) -> ContractResult<()> {
        self.check_amount(amount)?;

        let from = self.read_account(ledger, from_id)?;
        let to = self.read_account(ledger, to_id)?;

        if from.balance < amount {
            tracing::info!(from_id, balance = %from.balance, amount = %amount, "Insufficient balance");
            return Err(ContractError::InsufficientBalance(from_id.to_string()));
        }

        if from_id == to_id {
            // Debit and credit cancel out; rewrite the record unchanged.
            ledger.put(from_id, &account::encode(&from)?)?;
            tracing::info!(account_id = from_id, amount = %amount, "Self-transfer recorded");
            return Ok(());
        }

        let from_balance = from
            .balance
            .checked_sub(amount)
            .ok_or_else(|| ContractError::AmountOverflow(from_id.to_string()))?;
        let to_balance = to
            .balance
            .checked_add(amount)
            .ok_or_else(|| ContractError::AmountOverflow(to_id.to_string()))?;

        ledger.put(from_id, &account::encode(&from.with_balance(from_balance))?)?;
        ledger.put(to_id, &account::encode(&to.with_balance(to_balance))?)?;

        tracing::info!(from_id, to_id, amount = %amount, "Transfer applied");
        Ok(())
    }

    /// Every account on the ledger, in ascending key order.
    ///
    /// A record that fails to decode fails the whole call.
    pub fn get_all_accounts<L: LedgerAccessor + ?Sized>(
        &self,
        ledger: &mut L,
    ) -> ContractResult<Vec<Account>> {
        let mut accounts = Vec::new();
        for entry in ledger.scan_range("", "")? {
            let (key, bytes) = entry?;
            let account = account::decode(&key, &bytes)?;
            tracing::debug!(account_id = %account.account_id, balance = %account.balance, "Scanned account");
            accounts.push(account);
        }
        Ok(accounts)
    }
}
