// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::contract::AccountContract;
use crate::ledger::{Ledger, MemoryLedger};
use crate::service::AccountService;

/// Shared handler state. The ledger handle is created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AccountService>,
}

impl AppState {
    pub fn new(ledger: Arc<dyn Ledger>, contract: AccountContract, submit_attempts: u32) -> Self {
        Self {
            service: Arc::new(AccountService::new(ledger, contract, submit_attempts)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(MemoryLedger::new()),
            AccountContract::default(),
            crate::config::DEFAULT_SUBMIT_ATTEMPTS,
        )
    }
}
