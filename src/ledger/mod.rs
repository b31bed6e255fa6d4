// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Ledger Access Layer
//!
//! The contract reads and writes accounts through a small transactional
//! key-value interface. Every contract invocation runs inside exactly one
//! ledger transaction:
//!
//! - **Evaluate**: read-only, sees one consistent snapshot, never commits.
//! - **Submit**: all writes become visible together at commit, or not at all.
//!
//! ## Backends
//!
//! - [`MemoryLedger`]: in-process MVCC store. Commits validate the versions
//!   of every key (and range) the transaction read; a concurrent writer that
//!   changed any of them makes the commit fail with [`LedgerError::Conflict`].
//! - [`RedbLedger`]: durable store on redb. Writers are serialized by redb,
//!   readers run on snapshots and never block writers.
//!
//! ## Range Scans
//!
//! `scan_range(start, end)` yields keys in ascending byte order, `start`
//! inclusive and `end` exclusive. An empty `end` means "no upper bound", so
//! `scan_range("", "")` visits the whole keyspace.

pub mod memory;
pub mod redb_ledger;

pub use memory::MemoryLedger;
pub use redb_ledger::RedbLedger;

use std::ops::Bound;

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Another transaction committed a write to data this one read.
    #[error("transaction conflict on key {key:?}, retry the transaction")]
    Conflict { key: String },

    #[error("write attempted in a read-only (evaluate) transaction")]
    ReadOnly,

    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),
}

impl LedgerError {
    /// Conflicts are the only failures a fresh re-execution can fix.
    pub fn is_conflict(&self) -> bool {
        matches!(self, LedgerError::Conflict { .. })
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;

// =============================================================================
// Traits
// =============================================================================

/// Ordered `(key, value)` pairs produced by a range scan.
pub type StateIter<'a> = Box<dyn Iterator<Item = LedgerResult<(String, Vec<u8>)>> + 'a>;

/// Transaction intent, mirroring how the facade invokes the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxIntent {
    Evaluate,
    Submit,
}

/// Point reads, point writes and ordered range scans inside one transaction.
pub trait LedgerAccessor {
    fn get(&mut self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()>;

    fn scan_range(&mut self, start_key: &str, end_key: &str) -> LedgerResult<StateIter<'_>>;
}

/// An open transaction. Dropping it without `commit` discards every write.
pub trait LedgerTransaction: LedgerAccessor {
    fn commit(self: Box<Self>) -> LedgerResult<()>;
}

/// A ledger the service holds for its whole lifetime.
pub trait Ledger: Send + Sync {
    fn begin(&self, intent: TxIntent) -> LedgerResult<Box<dyn LedgerTransaction + '_>>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}

/// Translate the scan convention into key bounds.
pub(crate) fn scan_bounds<'k>(start_key: &'k str, end_key: &'k str) -> (Bound<&'k str>, Bound<&'k str>) {
    let upper = if end_key.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end_key)
    };
    (Bound::Included(start_key), upper)
}

// =============================================================================
// Invocation Helpers
// =============================================================================

/// Run `op` in a read-only transaction.
pub fn evaluate<T, E, F>(ledger: &dyn Ledger, op: F) -> Result<T, E>
where
    E: From<LedgerError>,
    F: FnOnce(&mut dyn LedgerTransaction) -> Result<T, E>,
{
    let mut tx = ledger.begin(TxIntent::Evaluate)?;
    op(tx.as_mut())
}

/// Run `op` in a submit transaction and commit its writes.
///
/// A commit that fails with [`LedgerError::Conflict`] re-runs `op` from
/// scratch against fresh state, up to `max_attempts` executions in total.
/// Errors returned by `op` itself abort the transaction and are never retried.
pub fn submit<T, E, F>(ledger: &dyn Ledger, max_attempts: u32, mut op: F) -> Result<T, E>
where
    E: From<LedgerError>,
    F: FnMut(&mut dyn LedgerTransaction) -> Result<T, E>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        let mut tx = ledger.begin(TxIntent::Submit)?;
        let output = op(tx.as_mut())?;
        match tx.commit() {
            Ok(()) => return Ok(output),
            Err(e) if e.is_conflict() && attempt < max_attempts => {
                tracing::warn!(attempt, max_attempts, error = %e, "Ledger commit conflict, retrying");
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
