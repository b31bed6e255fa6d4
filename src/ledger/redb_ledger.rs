// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Durable ledger backed by redb (pure Rust, ACID).
//!
//! ## Table Layout
//!
//! - `world_state`: ledger key → record bytes
//!
//! redb admits one write transaction at a time, so submit transactions never
//! observe a commit-time conflict here; evaluate transactions read a snapshot
//! and do not block writers.

use std::path::Path;

use redb::{
    Database, ReadOnlyTable, ReadTransaction, ReadableDatabase, ReadableTable, Table,
    TableDefinition, WriteTransaction,
};

use super::{
    scan_bounds, Ledger, LedgerAccessor, LedgerError, LedgerResult, LedgerTransaction, StateIter,
    TxIntent,
};

// =============================================================================
// Table Definitions
// =============================================================================

/// World state: ledger key → serialized record (JSON bytes).
const WORLD_STATE: TableDefinition<&str, &[u8]> = TableDefinition::new("world_state");

// =============================================================================
// RedbLedger
// =============================================================================

/// Embedded ACID ledger.
pub struct RedbLedger {
    db: Database,
}

impl RedbLedger {
    /// Open (or create) the ledger at the given path.
    pub fn open(path: &Path) -> LedgerResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Unavailable(format!("cannot create {}: {e}", parent.display()))
            })?;
        }
        let db = Database::create(path)?;

        // Pre-create the table so later read transactions don't fail
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(WORLD_STATE)?;
        }
        write_txn.commit()?;

        tracing::info!(path = %path.display(), "Opened redb ledger");
        Ok(Self { db })
    }
}

impl Ledger for RedbLedger {
    fn begin(&self, intent: TxIntent) -> LedgerResult<Box<dyn LedgerTransaction + '_>> {
        let txn = match intent {
            TxIntent::Evaluate => RedbTxn::Read(self.db.begin_read()?),
            TxIntent::Submit => RedbTxn::Write(Some(self.db.begin_write()?)),
        };
        Ok(Box::new(RedbTransaction { txn }))
    }

    fn backend(&self) -> &'static str {
        "redb"
    }
}

enum RedbTxn {
    Read(ReadTransaction),
    /// `None` once committed.
    Write(Option<WriteTransaction>),
}

struct RedbTransaction {
    txn: RedbTxn,
}

/// Either flavour of opened table; both support reads.
enum OpenTable<'t> {
    Read(ReadOnlyTable<&'static str, &'static [u8]>),
    Write(Table<'t, &'static str, &'static [u8]>),
}

impl RedbTransaction {
    fn open(&self) -> LedgerResult<OpenTable<'_>> {
        match &self.txn {
            RedbTxn::Read(txn) => Ok(OpenTable::Read(txn.open_table(WORLD_STATE)?)),
            RedbTxn::Write(Some(txn)) => Ok(OpenTable::Write(txn.open_table(WORLD_STATE)?)),
            RedbTxn::Write(None) => Err(LedgerError::Unavailable(
                "transaction already committed".to_string(),
            )),
        }
    }
}

fn read_value<T: ReadableTable<&'static str, &'static [u8]>>(
    table: &T,
    key: &str,
) -> LedgerResult<Option<Vec<u8>>> {
    Ok(table.get(key)?.map(|value| value.value().to_vec()))
}

fn read_range<T: ReadableTable<&'static str, &'static [u8]>>(
    table: &T,
    start_key: &str,
    end_key: &str,
) -> LedgerResult<Vec<(String, Vec<u8>)>> {
    let mut entries = Vec::new();
    for entry in table.range::<&str>(scan_bounds(start_key, end_key))? {
        let (key, value) = entry?;
        entries.push((key.value().to_string(), value.value().to_vec()));
    }
    Ok(entries)
}

impl LedgerAccessor for RedbTransaction {
    fn get(&mut self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        match self.open()? {
            OpenTable::Read(table) => read_value(&table, key),
            OpenTable::Write(table) => read_value(&table, key),
        }
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        match self.open()? {
            OpenTable::Read(_) => Err(LedgerError::ReadOnly),
            OpenTable::Write(mut table) => {
                table.insert(key, value)?;
                Ok(())
            }
        }
    }

    fn scan_range(&mut self, start_key: &str, end_key: &str) -> LedgerResult<StateIter<'_>> {
        let entries = match self.open()? {
            OpenTable::Read(table) => read_range(&table, start_key, end_key)?,
            OpenTable::Write(table) => read_range(&table, start_key, end_key)?,
        };
        Ok(Box::new(entries.into_iter().map(Ok)))
    }
}

impl LedgerTransaction for RedbTransaction {
    fn commit(mut self: Box<Self>) -> LedgerResult<()> {
        match &mut self.txn {
            RedbTxn::Read(_) => Ok(()),
            RedbTxn::Write(slot) => match slot.take() {
                Some(txn) => Ok(txn.commit()?),
                None => Ok(()),
            },
        }
    }
}

impl Drop for RedbTransaction {
    fn drop(&mut self) {
        if let RedbTxn::Write(slot) = &mut self.txn {
            if let Some(txn) = slot.take() {
                if let Err(e) = txn.abort() {
                    tracing::warn!(error = %e, "Failed to abort ledger transaction");
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_ledger() -> (RedbLedger, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let ledger = RedbLedger::open(&dir.path().join("ledger.redb")).unwrap();
        (ledger, dir)
    }

    #[test]
    fn put_commit_and_get() {
        let (ledger, _dir) = temp_ledger();
        let mut tx = ledger.begin(TxIntent::Submit).unwrap();
        tx.put("alice", b"{}").unwrap();
        tx.commit().unwrap();

        let mut reader = ledger.begin(TxIntent::Evaluate).unwrap();
        assert_eq!(reader.get("alice").unwrap().as_deref(), Some(b"{}".as_slice()));
        assert!(reader.get("bob").unwrap().is_none());
    }

    #[test]
    fn evaluate_is_read_only() {
        let (ledger, _dir) = temp_ledger();
        let mut reader = ledger.begin(TxIntent::Evaluate).unwrap();
        assert!(matches!(reader.put("k", b"v"), Err(LedgerError::ReadOnly)));
    }

    #[test]
    fn uncommitted_writes_are_discarded() {
        let (ledger, _dir) = temp_ledger();
        {
            let mut tx = ledger.begin(TxIntent::Submit).unwrap();
            tx.put("ghost", b"1").unwrap();
        }
        let mut reader = ledger.begin(TxIntent::Evaluate).unwrap();
        assert!(reader.get("ghost").unwrap().is_none());
    }

    #[test]
    fn write_transaction_reads_own_writes() {
        let (ledger, _dir) = temp_ledger();
        let mut tx = ledger.begin(TxIntent::Submit).unwrap();
        tx.put("k", b"v").unwrap();
        assert_eq!(tx.get("k").unwrap().as_deref(), Some(b"v".as_slice()));
    }

    #[test]
    fn scan_range_orders_keys() {
        let (ledger, _dir) = temp_ledger();
        let mut tx = ledger.begin(TxIntent::Submit).unwrap();
        for key in ["m", "a", "z", "b"] {
            tx.put(key, key.as_bytes()).unwrap();
        }
        tx.commit().unwrap();

        let mut reader = ledger.begin(TxIntent::Evaluate).unwrap();
        let keys: Vec<String> = reader
            .scan_range("", "")
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(keys, vec!["a", "b", "m", "z"]);

        let bounded: Vec<String> = reader
            .scan_range("b", "z")
            .unwrap()
            .map(|entry| entry.unwrap().0)
            .collect();
        assert_eq!(bounded, vec!["b", "m"]);
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ledger.redb");
        {
            let ledger = RedbLedger::open(&path).unwrap();
            let mut tx = ledger.begin(TxIntent::Submit).unwrap();
            tx.put("persist", b"yes").unwrap();
            tx.commit().unwrap();
        }
        let ledger = RedbLedger::open(&path).unwrap();
        let mut reader = ledger.begin(TxIntent::Evaluate).unwrap();
        assert_eq!(reader.get("persist").unwrap().as_deref(), Some(b"yes".as_slice()));
    }

    mod contract {
        use super::*;
        use crate::amount::Amount;
        use crate::contract::{AccountContract, ContractError};
        use crate::ledger::{evaluate, submit};

        fn units(n: i64) -> Amount {
            Amount::from_units(n).unwrap()
        }

        fn balance_of(ledger: &RedbLedger, id: &str) -> Amount {
            evaluate(ledger, |tx| AccountContract::default().read_account(tx, id))
                .unwrap()
                .balance
        }

        #[test]
        fn send_commits_both_records() {
            let (ledger, _dir) = temp_ledger();
            let contract = AccountContract::default();
            submit(&ledger, 1, |tx| {
                contract.create_account(tx, "A", units(100), "key-A")?;
                contract.create_account(tx, "B", Amount::ZERO, "key-B")
            })
            .unwrap();

            submit(&ledger, 1, |tx| contract.send(tx, "A", "B", units(40))).unwrap();

            assert_eq!(balance_of(&ledger, "A"), units(60));
            assert_eq!(balance_of(&ledger, "B"), units(40));
            let accounts = evaluate(&ledger, |tx| contract.get_all_accounts(tx)).unwrap();
            let ids: Vec<&str> = accounts.iter().map(|a| a.account_id.as_str()).collect();
            assert_eq!(ids, vec!["A", "B"]);
        }

        #[test]
        fn failed_send_leaves_both_records_untouched() {
            let (ledger, _dir) = temp_ledger();
            let contract = AccountContract::default();
            submit(&ledger, 1, |tx| {
                contract.create_account(tx, "A", units(10), "key-A")?;
                contract.create_account(tx, "B", units(5), "key-B")
            })
            .unwrap();

            let result = submit(&ledger, 1, |tx| contract.send(tx, "A", "B", units(11)));
            assert!(matches!(result, Err(ContractError::InsufficientBalance(_))));

            let missing = submit(&ledger, 1, |tx| contract.send(tx, "A", "nobody", units(1)));
            assert!(matches!(missing, Err(ContractError::NotFound(_))));

            assert_eq!(balance_of(&ledger, "A"), units(10));
            assert_eq!(balance_of(&ledger, "B"), units(5));
        }
    }
}
