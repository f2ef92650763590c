// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;

use crate::models::Transaction;

/// Every transaction dated in the given calendar year.
pub fn filter_by_year(all: &[Transaction], year: i32) -> Vec<Transaction> {
    all.iter()
        .filter(|t| t.date.year() == year)
        .cloned()
        .collect()
}

/// Restrict a subset to one calendar month (1-12).
pub fn filter_by_month(subset: &[Transaction], month: u32) -> Vec<Transaction> {
    subset
        .iter()
        .filter(|t| t.date.month() == month)
        .cloned()
        .collect()
}
