// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use std::collections::HashMap;

use tallybook::config::{MergeRule, ReportConfig};
use tallybook::models::{Transaction, TxKind};
use tallybook::report::breakdown_by_category;

fn tx(id: i64, kind: TxKind, category: &str, amount: i64) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
        kind,
        category: category.to_string(),
        amount,
        note: None,
    }
}

fn config(merge_rules: Vec<MergeRule>) -> ReportConfig {
    ReportConfig {
        smart_distribution: true,
        distribution: HashMap::new(),
        merge_rules,
    }
}

#[test]
fn breakdown_is_sorted_descending_by_value() {
    let data = vec![
        tx(1, TxKind::Expense, "食材", 300),
        tx(2, TxKind::Expense, "租金", 900),
        tx(3, TxKind::Expense, "包材", 120),
        tx(4, TxKind::Expense, "食材", 80),
    ];
    let items = breakdown_by_category(&data, TxKind::Expense, &config(Vec::new()));
    assert_eq!(items.len(), 3);
    for pair in items.windows(2) {
        assert!(pair[0].value >= pair[1].value);
    }
    assert_eq!(items[0].category, "租金");
    assert_eq!(items[0].value, 900);
    assert_eq!(items[1].category, "食材");
    assert_eq!(items[1].value, 380);
}

#[test]
fn breakdown_filters_by_transaction_type() {
    let data = vec![
        tx(1, TxKind::Income, "現金", 500),
        tx(2, TxKind::Expense, "食材", 300),
        tx(3, TxKind::Income, "刷卡", 250),
    ];
    let cfg = config(Vec::new());
    let income = breakdown_by_category(&data, TxKind::Income, &cfg);
    assert_eq!(income.len(), 2);
    assert_eq!(income[0].category, "現金");
    let expense = breakdown_by_category(&data, TxKind::Expense, &cfg);
    assert_eq!(expense.len(), 1);
    assert_eq!(expense[0].value, 300);
}

#[test]
fn merge_rules_fold_salary_variants_into_one_bucket() {
    let data = vec![
        tx(1, TxKind::Expense, "薪資", 2000),
        tx(2, TxKind::Expense, "臨時工薪水", 800),
        tx(3, TxKind::Expense, "食材", 300),
    ];
    let cfg = config(vec![MergeRule {
        pattern: "薪".to_string(),
        label: "薪資".to_string(),
    }]);
    let items = breakdown_by_category(&data, TxKind::Expense, &cfg);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].category, "薪資");
    assert_eq!(items[0].value, 2800);
    assert_eq!(items[1].category, "食材");
}

#[test]
fn first_matching_merge_rule_wins_and_misses_pass_through() {
    let data = vec![
        tx(1, TxKind::Expense, "文具", 40),
        tx(2, TxKind::Expense, "清潔", 60),
        tx(3, TxKind::Expense, "租金", 900),
    ];
    let cfg = config(vec![
        MergeRule {
            pattern: "^(雜支|文具|清潔|修繕)$".to_string(),
            label: "雜項".to_string(),
        },
        MergeRule {
            pattern: "文具".to_string(),
            label: "辦公".to_string(),
        },
    ]);
    let items = breakdown_by_category(&data, TxKind::Expense, &cfg);
    let sundry = items.iter().find(|b| b.category == "雜項").unwrap();
    assert_eq!(sundry.value, 100);
    assert!(items.iter().any(|b| b.category == "租金"));
    assert!(!items.iter().any(|b| b.category == "辦公"));
}

#[test]
fn unparsable_merge_pattern_is_skipped() {
    let data = vec![tx(1, TxKind::Expense, "食材", 300)];
    let cfg = config(vec![MergeRule {
        pattern: "(".to_string(),
        label: "broken".to_string(),
    }]);
    let items = breakdown_by_category(&data, TxKind::Expense, &cfg);
    assert_eq!(items[0].category, "食材");
}

#[test]
fn empty_input_gives_empty_breakdown() {
    let items = breakdown_by_category(&[], TxKind::Expense, &config(Vec::new()));
    assert!(items.is_empty());
}
