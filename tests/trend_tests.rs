// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use std::collections::HashMap;

use tallybook::config::{DistributionClass, ReportConfig};
use tallybook::models::{Granularity, Transaction, TxKind};
use tallybook::report::{aggregate, build_trend};

fn tx(id: i64, date: &str, kind: TxKind, category: &str, amount: i64) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        kind,
        category: category.to_string(),
        amount,
        note: None,
    }
}

fn config_with(classes: &[(&str, DistributionClass)]) -> ReportConfig {
    let mut distribution = HashMap::new();
    for (cat, class) in classes {
        distribution.insert(cat.to_string(), *class);
    }
    ReportConfig {
        smart_distribution: true,
        distribution,
        merge_rules: Vec::new(),
    }
}

#[test]
fn month_trend_has_twelve_buckets_and_conserves_net() {
    let data = vec![
        tx(1, "2024-01-05", TxKind::Income, "現金", 1000),
        tx(2, "2024-03-20", TxKind::Income, "刷卡", 700),
        tx(3, "2024-03-21", TxKind::Expense, "食材", 450),
        tx(4, "2024-12-31", TxKind::Expense, "雜支", 50),
    ];
    let cfg = config_with(&[]);
    let points = build_trend(&data, Granularity::Month, 2024, &cfg);
    assert_eq!(points.len(), 12);
    assert_eq!(points[0].label, "1");
    assert_eq!(points[11].label, "12");
    assert_eq!(points[2].income, 700);
    assert_eq!(points[2].expense, 450);
    assert_eq!(points[2].net, 250);

    // Conservation: the monthly nets partition the year aggregate.
    let monthly_net: i64 = points.iter().map(|p| p.net).sum();
    assert_eq!(monthly_net, aggregate(&data).net);
}

#[test]
fn week_trend_has_fiftythree_buckets_and_clamps() {
    let data = vec![
        tx(1, "2024-01-01", TxKind::Income, "現金", 100),
        tx(2, "2024-12-31", TxKind::Income, "現金", 200),
        // A stray date before Jan 1 clamps to the first bucket.
        tx(3, "2023-12-30", TxKind::Expense, "雜支", 40),
    ];
    let cfg = config_with(&[]);
    let points = build_trend(&data, Granularity::Week, 2024, &cfg);
    assert_eq!(points.len(), 53);
    assert_eq!(points[0].label, "W1");
    assert_eq!(points[0].income, 100);
    assert_eq!(points[0].expense, 40);
    // Dec 31 2024 is day offset 365, week index 52.
    assert_eq!(points[52].label, "W53");
    assert_eq!(points[52].income, 200);
}

#[test]
fn day_trend_length_follows_leap_years() {
    let cfg = config_with(&[]);
    assert_eq!(build_trend(&[], Granularity::Day, 2024, &cfg).len(), 366);
    assert_eq!(build_trend(&[], Granularity::Day, 2023, &cfg).len(), 365);
    // Century rule: 2000 was a leap year, 1900 was not.
    assert_eq!(build_trend(&[], Granularity::Day, 2000, &cfg).len(), 366);
    assert_eq!(build_trend(&[], Granularity::Day, 1900, &cfg).len(), 365);
}

#[test]
fn empty_input_yields_zeroed_buckets_in_every_mode() {
    let cfg = config_with(&[]);
    for granularity in [Granularity::Month, Granularity::Week, Granularity::Day] {
        let points = build_trend(&[], granularity, 2024, &cfg);
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.income == 0 && p.expense == 0 && p.net == 0));
    }
}

#[test]
fn fixed_rent_spreads_evenly_across_january() {
    let data = vec![
        tx(1, "2024-01-05", TxKind::Income, "現金", 1000),
        tx(2, "2024-01-05", TxKind::Expense, "租金", 3100),
    ];
    let cfg = config_with(&[("租金", DistributionClass::Fixed)]);
    let points = build_trend(&data, Granularity::Day, 2024, &cfg);

    // round(3100 / 31) = 100 on every January day.
    let jan5 = &points[4];
    assert_eq!(jan5.label, "2024-01-05");
    assert_eq!(jan5.income, 1000);
    assert_eq!(jan5.expense, 100);
    assert_eq!(jan5.net, 900);
    for (d, p) in points.iter().take(31).enumerate() {
        if d == 4 {
            continue;
        }
        assert_eq!(p.income, 0, "day {}", d);
        assert_eq!(p.expense, 100, "day {}", d);
        assert_eq!(p.net, -100, "day {}", d);
    }
    // February carries none of January's rent.
    assert_eq!(points[31].expense, 0);
}

#[test]
fn fixed_share_sum_stays_within_rounding_drift() {
    // 1000 over 31 days rounds to 32/day; the sum may drift from the
    // pool total by at most one rounding unit per day.
    let data = vec![tx(1, "2024-01-10", TxKind::Expense, "租金", 1000)];
    let cfg = config_with(&[("租金", DistributionClass::Fixed)]);
    let points = build_trend(&data, Granularity::Day, 2024, &cfg);
    let january: i64 = points.iter().take(31).map(|p| p.expense).sum();
    assert!((january - 1000).abs() <= 31, "drift {}", january - 1000);
}

#[test]
fn weighted_cost_follows_daily_revenue() {
    let data = vec![
        tx(1, "2024-01-10", TxKind::Income, "現金", 300),
        tx(2, "2024-01-20", TxKind::Income, "現金", 100),
        tx(3, "2024-01-02", TxKind::Expense, "食材", 900),
    ];
    let cfg = config_with(&[("食材", DistributionClass::Weighted)]);
    let points = build_trend(&data, Granularity::Day, 2024, &cfg);

    // 900 * 300/400 = 675 and 900 * 100/400 = 225.
    assert_eq!(points[9].expense, 675);
    assert_eq!(points[19].expense, 225);
    // Days without revenue carry none of the weighted cost, including
    // the expense's own booking date.
    assert_eq!(points[1].expense, 0);
    assert_eq!(points[0].expense, 0);
}

#[test]
fn weighted_share_is_zero_for_income_free_month() {
    // A month with weighted expense but no income distributes nothing
    // rather than dividing by zero.
    let data = vec![tx(1, "2024-02-15", TxKind::Expense, "食材", 500)];
    let cfg = config_with(&[("食材", DistributionClass::Weighted)]);
    let points = build_trend(&data, Granularity::Day, 2024, &cfg);
    assert!(points.iter().all(|p| p.expense == 0));
}

#[test]
fn direct_expenses_stay_on_their_own_date() {
    let data = vec![
        tx(1, "2024-06-07", TxKind::Income, "現金", 2000),
        tx(2, "2024-06-07", TxKind::Expense, "雜支", 150),
    ];
    // 雜支 is in neither class, so it is direct by default.
    let cfg = config_with(&[("租金", DistributionClass::Fixed)]);
    let points = build_trend(&data, Granularity::Day, 2024, &cfg);
    let jun7 = points.iter().find(|p| p.label == "2024-06-07").unwrap();
    assert_eq!(jun7.expense, 150);
    assert_eq!(jun7.net, 1850);
    let jun8 = points.iter().find(|p| p.label == "2024-06-08").unwrap();
    assert_eq!(jun8.expense, 0);
}

#[test]
fn distribution_toggle_off_books_everything_direct() {
    let data = vec![
        tx(1, "2024-01-05", TxKind::Income, "現金", 1000),
        tx(2, "2024-01-05", TxKind::Expense, "租金", 3100),
    ];
    let mut cfg = config_with(&[("租金", DistributionClass::Fixed)]);
    cfg.smart_distribution = false;
    let points = build_trend(&data, Granularity::Day, 2024, &cfg);
    assert_eq!(points[4].expense, 3100);
    assert_eq!(points[4].net, -2100);
    assert_eq!(points[5].expense, 0);
}

#[test]
fn identical_snapshot_gives_identical_output() {
    let data = vec![
        tx(1, "2024-01-05", TxKind::Income, "現金", 1000),
        tx(2, "2024-01-31", TxKind::Expense, "租金", 3100),
        tx(3, "2024-07-14", TxKind::Expense, "食材", 620),
    ];
    let cfg = config_with(&[
        ("租金", DistributionClass::Fixed),
        ("食材", DistributionClass::Weighted),
    ]);
    for granularity in [Granularity::Month, Granularity::Week, Granularity::Day] {
        let first = build_trend(&data, granularity, 2024, &cfg);
        let second = build_trend(&data, granularity, 2024, &cfg);
        assert_eq!(first, second);
    }
}
