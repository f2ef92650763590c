// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Transaction;

/// Pretty-printed full-fidelity dump of the complete store.
pub fn to_json(transactions: &[Transaction]) -> Result<String> {
    Ok(serde_json::to_string_pretty(transactions)?)
}

/// CSV text for spreadsheet tools: BOM-prefixed so encoding detection
/// works, quoted fields with embedded quotes doubled.
pub fn to_csv(transactions: &[Transaction]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["ID", "日期", "類型", "類別", "金額", "備註"])?;
    for t in transactions {
        wtr.write_record([
            t.id.to_string(),
            t.date.format("%Y-%m-%d").to_string(),
            t.kind.csv_label().to_string(),
            t.category.clone(),
            t.amount.to_string(),
            t.note.clone().unwrap_or_default(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Flush CSV buffer: {}", e))?;
    let mut out = String::from("\u{feff}");
    out.push_str(&String::from_utf8(bytes)?);
    Ok(out)
}
