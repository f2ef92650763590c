// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single ledger entry. `id` is unique but carries no ordering
/// semantics; all temporal ordering derives from `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Canonical calendar date, normalized to Asia/Taipei at ingestion.
    pub date: NaiveDate,
    pub kind: TxKind,
    pub category: String,
    /// Non-negative, in the currency's smallest unit.
    pub amount: i64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    /// Display label used in the CSV export (spreadsheet locale).
    pub fn csv_label(self) -> &'static str {
        match self {
            TxKind::Income => "收入",
            TxKind::Expense => "支出",
        }
    }
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxKind::Income => write!(f, "income"),
            TxKind::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for TxKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid type '{}', expected income|expense",
                other
            )),
        }
    }
}

/// Income/expense/net totals over one period subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodStats {
    pub income: i64,
    pub expense: i64,
    pub net: i64,
}

/// One aggregated bucket of a trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub income: i64,
    pub expense: i64,
    pub net: i64,
}

/// One row of a category breakdown, sorted descending by `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub value: i64,
}

/// Bucket width for the trend series; every variant produces a
/// fixed-length output so charts render consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Month,
    Week,
    Day,
}

impl std::str::FromStr for Granularity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month" | "monthly" => Ok(Granularity::Month),
            "week" | "weekly" => Ok(Granularity::Week),
            "day" | "daily" => Ok(Granularity::Day),
            other => Err(anyhow::anyhow!(
                "Invalid granularity '{}', expected month|week|day",
                other
            )),
        }
    }
}
