// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory MVCC ledger.
//!
//! Transactions read from an immutable snapshot taken at `begin`. Each key
//! carries the commit height that last wrote it. At commit the transaction
//! re-checks every version it observed (point reads and range scans) against
//! the current state; any difference fails the commit with
//! [`LedgerError::Conflict`] and nothing is applied.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::{
    scan_bounds, Ledger, LedgerAccessor, LedgerError, LedgerResult, LedgerTransaction, StateIter,
    TxIntent,
};

#[derive(Debug, Clone)]
struct Versioned {
    value: Vec<u8>,
    version: u64,
}

#[derive(Debug, Clone, Default)]
struct Snapshot {
    entries: BTreeMap<String, Versioned>,
    height: u64,
}

impl Snapshot {
    fn version_of(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|v| v.version)
    }

    fn range_versions(&self, start_key: &str, end_key: &str) -> Vec<(String, u64)> {
        self.entries
            .range::<str, _>(scan_bounds(start_key, end_key))
            .map(|(k, v)| (k.clone(), v.version))
            .collect()
    }
}

/// Process-local ledger with optimistic concurrency control.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: RwLock<Arc<Snapshot>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed submit transactions.
    pub fn height(&self) -> LedgerResult<u64> {
        Ok(self.snapshot()?.height)
    }

    fn snapshot(&self) -> LedgerResult<Arc<Snapshot>> {
        let guard = self
            .state
            .read()
            .map_err(|_| LedgerError::Unavailable("memory ledger lock poisoned".to_string()))?;
        Ok(Arc::clone(&guard))
    }
}

impl Ledger for MemoryLedger {
    fn begin(&self, intent: TxIntent) -> LedgerResult<Box<dyn LedgerTransaction + '_>> {
        Ok(Box::new(MemoryTransaction {
            ledger: self,
            intent,
            snapshot: self.snapshot()?,
            reads: HashMap::new(),
            ranges: Vec::new(),
            writes: BTreeMap::new(),
        }))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

struct RangeRead {
    start_key: String,
    end_key: String,
    observed: Vec<(String, u64)>,
}

struct MemoryTransaction<'a> {
    ledger: &'a MemoryLedger,
    intent: TxIntent,
    snapshot: Arc<Snapshot>,
    reads: HashMap<String, Option<u64>>,
    ranges: Vec<RangeRead>,
    writes: BTreeMap<String, Vec<u8>>,
}

impl MemoryTransaction<'_> {
    fn validate(&self, current: &Snapshot) -> LedgerResult<()> {
        for (key, observed) in &self.reads {
            if current.version_of(key) != *observed {
                return Err(LedgerError::Conflict { key: key.clone() });
            }
        }
        for range in &self.ranges {
            if current.range_versions(&range.start_key, &range.end_key) != range.observed {
                return Err(LedgerError::Conflict {
                    key: format!("[{}, {})", range.start_key, range.end_key),
                });
            }
        }
        Ok(())
    }
}

impl LedgerAccessor for MemoryTransaction<'_> {
    fn get(&mut self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        if let Some(pending) = self.writes.get(key) {
            return Ok(Some(pending.clone()));
        }
        let entry = self.snapshot.entries.get(key);
        self.reads
            .entry(key.to_string())
            .or_insert_with(|| entry.map(|v| v.version));
        Ok(entry.map(|v| v.value.clone()))
    }

    fn put(&mut self, key: &str, value: &[u8]) -> LedgerResult<()> {
        if self.intent == TxIntent::Evaluate {
            return Err(LedgerError::ReadOnly);
        }
        self.writes.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn scan_range(&mut self, start_key: &str, end_key: &str) -> LedgerResult<StateIter<'_>> {
        let bounds = scan_bounds(start_key, end_key);

        let mut merged: BTreeMap<String, Vec<u8>> = self
            .snapshot
            .entries
            .range::<str, _>(bounds)
            .map(|(k, v)| (k.clone(), v.value.clone()))
            .collect();
        for (key, value) in self.writes.range::<str, _>(bounds) {
            merged.insert(key.clone(), value.clone());
        }

        self.ranges.push(RangeRead {
            start_key: start_key.to_string(),
            end_key: end_key.to_string(),
            observed: self.snapshot.range_versions(start_key, end_key),
        });

        Ok(Box::new(merged.into_iter().map(Ok)))
    }
}

impl LedgerTransaction for MemoryTransaction<'_> {
    fn commit(self: Box<Self>) -> LedgerResult<()> {
        if self.writes.is_empty() {
            return Ok(());
        }

        let mut guard = self
            .ledger
            .state
            .write()
            .map_err(|_| LedgerError::Unavailable("memory ledger lock poisoned".to_string()))?;
        self.validate(&guard)?;

        let state = Arc::make_mut(&mut guard);
        state.height += 1;
        let version = state.height;
        for (key, value) in self.writes {
            state.entries.insert(key, Versioned { value, version });
        }
        Ok(())
    }
}
