// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{PeriodStats, Transaction, TxKind};

/// Single-pass income/expense/net totals over an arbitrary subset.
pub fn aggregate(transactions: &[Transaction]) -> PeriodStats {
    let mut stats = PeriodStats::default();
    for t in transactions {
        match t.kind {
            TxKind::Income => stats.income += t.amount,
            TxKind::Expense => stats.expense += t.amount,
        }
    }
    stats.net = stats.income - stats.expense;
    stats
}
