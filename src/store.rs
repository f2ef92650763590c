// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

use crate::models::{Transaction, TxKind};
use crate::utils::{now_millis, today_taipei};

/// Sole owner of the transaction records: an in-memory collection
/// mirrored to one JSON file (a flat array of transaction objects).
/// Consumers get read-only slices and must not assume any ordering.
pub struct Store {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Store {
    pub fn data_path() -> Result<PathBuf> {
        let proj = crate::config::project_dirs()?;
        let dir = proj.data_dir();
        fs::create_dir_all(dir).context("Failed to create data dir")?;
        Ok(dir.join("ledger.json"))
    }

    pub fn open_or_init() -> Result<Store> {
        Ok(Store::load(Store::data_path()?))
    }

    /// Load the local cache. A missing, unreadable, or corrupt file
    /// yields an empty store rather than failing the caller; bad
    /// individual records are sanitized per policy.
    pub fn load(path: impl Into<PathBuf>) -> Store {
        let path = path.into();
        let transactions = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Vec<Value>>(&raw).ok())
            .map(|values| sanitize_records(values, today_taipei()))
            .unwrap_or_default();
        Store { path, transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.transactions)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Write ledger at {}", self.path.display()))?;
        Ok(())
    }

    pub fn add(
        &mut self,
        date: NaiveDate,
        kind: TxKind,
        category: &str,
        amount: i64,
        note: Option<String>,
    ) -> Result<Transaction> {
        let category = category.trim();
        if category.is_empty() {
            anyhow::bail!("Category must not be empty");
        }
        if amount <= 0 {
            anyhow::bail!("Amount must be positive, got {}", amount);
        }
        let tx = Transaction {
            id: self.next_id(),
            date,
            kind,
            category: category.to_string(),
            amount,
            note,
        };
        self.transactions.push(tx.clone());
        Ok(tx)
    }

    /// Remove by id. Returns the removed record so the caller can push
    /// a deletion marker to the remote.
    pub fn delete(&mut self, id: i64) -> Option<Transaction> {
        let idx = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(idx))
    }

    /// Swap in a freshly fetched collection (sync pull).
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    // Ids are creation timestamps in milliseconds; bump on the rare
    // collision so uniqueness holds within the store.
    fn next_id(&self) -> i64 {
        let mut id = now_millis();
        while self.transactions.iter().any(|t| t.id == id) {
            id += 1;
        }
        id
    }
}

/// Per-record ingestion sanitization, shared by the local cache and
/// the remote fetch path:
/// - unparsable dates are coerced to `fallback_date`, never rejected;
/// - non-numeric or non-positive amounts drop the record;
/// - records missing id, kind, or a non-empty category are dropped.
pub fn sanitize_records(values: Vec<Value>, fallback_date: NaiveDate) -> Vec<Transaction> {
    values
        .into_iter()
        .filter_map(|v| sanitize_record(v, fallback_date))
        .collect()
}

fn sanitize_record(value: Value, fallback_date: NaiveDate) -> Option<Transaction> {
    let obj = value.as_object()?;
    let id = obj.get("id")?.as_i64()?;
    let kind: TxKind = serde_json::from_value(obj.get("kind")?.clone()).ok()?;
    let category = obj.get("category")?.as_str()?.trim().to_string();
    if category.is_empty() {
        return None;
    }
    let amount = obj.get("amount").and_then(Value::as_i64)?;
    if amount <= 0 {
        return None;
    }
    let date = obj
        .get("date")
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .unwrap_or(fallback_date);
    let note = obj
        .get("note")
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|s| !s.is_empty());
    Some(Transaction {
        id,
        date,
        kind,
        category,
        amount,
        note,
    })
}
