// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use crate::config::ReportConfig;
use crate::models::{CategoryBreakdown, Transaction, TxKind};

/// Group one transaction type by category, folding labels through the
/// configured merge rules, sorted descending by total. Works for both
/// income-source and cost-structure breakdowns.
pub fn breakdown_by_category(
    transactions: &[Transaction],
    kind: TxKind,
    config: &ReportConfig,
) -> Vec<CategoryBreakdown> {
    let mut agg: HashMap<String, i64> = HashMap::new();
    for t in transactions.iter().filter(|t| t.kind == kind) {
        *agg.entry(config.display_label(&t.category)).or_insert(0) += t.amount;
    }
    let mut items: Vec<CategoryBreakdown> = agg
        .into_iter()
        .map(|(category, value)| CategoryBreakdown { category, value })
        .collect();
    items.sort_by(|a, b| b.value.cmp(&a.value));
    items
}
