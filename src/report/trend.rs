// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};

use crate::config::{DistributionClass, ReportConfig};
use crate::models::{Granularity, Transaction, TrendPoint, TxKind};
use crate::utils::{days_in_month, days_in_year};

/// Bucket one year of transactions into a fixed-length trend series:
/// 12 points in month mode, 53 in week mode, 365/366 in day mode.
/// Day mode applies the smart cost distribution when enabled in
/// `config` (fixed costs split evenly over the month, weighted costs
/// follow each day's share of the month's income).
pub fn build_trend(
    year_data: &[Transaction],
    granularity: Granularity,
    year: i32,
    config: &ReportConfig,
) -> Vec<TrendPoint> {
    match granularity {
        Granularity::Month => month_trend(year_data),
        Granularity::Week => week_trend(year_data, year),
        Granularity::Day => day_trend(year_data, year, config),
    }
}

fn month_trend(year_data: &[Transaction]) -> Vec<TrendPoint> {
    let mut income = [0i64; 12];
    let mut expense = [0i64; 12];
    for t in year_data {
        let m = t.date.month0() as usize;
        match t.kind {
            TxKind::Income => income[m] += t.amount,
            TxKind::Expense => expense[m] += t.amount,
        }
    }
    (0..12)
        .map(|m| TrendPoint {
            label: (m + 1).to_string(),
            income: income[m],
            expense: expense[m],
            net: income[m] - expense[m],
        })
        .collect()
}

fn week_trend(year_data: &[Transaction], year: i32) -> Vec<TrendPoint> {
    const WEEKS: usize = 53;
    let mut income = [0i64; WEEKS];
    let mut expense = [0i64; WEEKS];
    if let Some(jan1) = NaiveDate::from_ymd_opt(year, 1, 1) {
        for t in year_data {
            // Negative offsets (dates before Jan 1) clamp to week 0.
            let w = ((t.date - jan1).num_days() / 7).clamp(0, WEEKS as i64 - 1) as usize;
            match t.kind {
                TxKind::Income => income[w] += t.amount,
                TxKind::Expense => expense[w] += t.amount,
            }
        }
    }
    (0..WEEKS)
        .map(|w| TrendPoint {
            label: format!("W{}", w + 1),
            income: income[w],
            expense: expense[w],
            net: income[w] - expense[w],
        })
        .collect()
}

#[derive(Clone, Copy, Default)]
struct MonthPool {
    total_income: i64,
    fixed_expense: i64,
    weighted_expense: i64,
}

fn day_trend(year_data: &[Transaction], year: i32, config: &ReportConfig) -> Vec<TrendPoint> {
    let days = days_in_year(year) as usize;
    let mut day_income = vec![0i64; days];
    let mut direct_expense = vec![0i64; days];
    let mut pools = [MonthPool::default(); 12];

    for t in year_data {
        if t.date.year() != year {
            continue;
        }
        let d = t.date.ordinal0() as usize;
        let m = t.date.month0() as usize;
        match t.kind {
            TxKind::Income => {
                day_income[d] += t.amount;
                pools[m].total_income += t.amount;
            }
            TxKind::Expense => {
                let class = if config.smart_distribution {
                    config.class_of(&t.category)
                } else {
                    DistributionClass::Direct
                };
                match class {
                    DistributionClass::Fixed => pools[m].fixed_expense += t.amount,
                    DistributionClass::Weighted => pools[m].weighted_expense += t.amount,
                    DistributionClass::Direct => direct_expense[d] += t.amount,
                }
            }
        }
    }

    let mut points = Vec::with_capacity(days);
    let Some(jan1) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return points;
    };
    for (d, date) in jan1.iter_days().take(days).enumerate() {
        let m = date.month0() as usize;
        let pool = &pools[m];
        let month_days = days_in_month(year, date.month()) as f64;
        // Per-day rounding, no drift correction across the month.
        let fixed_share = (pool.fixed_expense as f64 / month_days).round() as i64;
        // Cost follows revenue: a day with no income carries none of
        // the weighted cost, and an income-free month distributes none.
        let weighted_share = if pool.total_income > 0 {
            (pool.weighted_expense as f64 * day_income[d] as f64 / pool.total_income as f64)
                .round() as i64
        } else {
            0
        };
        let expense = direct_expense[d] + fixed_share + weighted_share;
        points.push(TrendPoint {
            label: date.format("%Y-%m-%d").to_string(),
            income: day_income[d],
            expense,
            net: day_income[d] - expense,
        });
    }
    points
}
