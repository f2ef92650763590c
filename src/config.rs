// Copyright (c) Tallybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.tallybook", "Tallybook", "tallybook"));

pub(crate) fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP.0, APP.1, APP.2).context("Could not determine platform-specific app dirs")
}

/// How an expense category is allocated across the days of its month
/// in day-granularity trend reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionClass {
    /// Spread evenly across every day of the month (rent, payroll).
    Fixed,
    /// Spread proportional to each day's share of the month's income.
    Weighted,
    /// Attributed wholly to the actual transaction date.
    Direct,
}

/// One label-folding rule: categories matching `pattern` report under
/// `label` in breakdowns. First matching rule wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRule {
    pub pattern: String,
    pub label: String,
}

/// Policy knobs for the reporting engine. Observed bookkeeping
/// revisions disagreed on these, so they are configuration rather
/// than code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// When false, day-mode trends book every expense on its actual
    /// date instead of distributing fixed/weighted costs.
    pub smart_distribution: bool,
    pub distribution: HashMap<String, DistributionClass>,
    pub merge_rules: Vec<MergeRule>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        let mut distribution = HashMap::new();
        for cat in ["租金", "薪資", "保險"] {
            distribution.insert(cat.to_string(), DistributionClass::Fixed);
        }
        for cat in ["食材", "水電瓦斯", "包材"] {
            distribution.insert(cat.to_string(), DistributionClass::Weighted);
        }
        ReportConfig {
            smart_distribution: true,
            distribution,
            merge_rules: vec![
                MergeRule {
                    pattern: "薪".to_string(),
                    label: "薪資".to_string(),
                },
                MergeRule {
                    pattern: "^(雜支|文具|清潔|修繕)$".to_string(),
                    label: "雜項".to_string(),
                },
            ],
        }
    }
}

impl ReportConfig {
    /// Categories absent from the table are `Direct`.
    pub fn class_of(&self, category: &str) -> DistributionClass {
        self.distribution
            .get(category)
            .copied()
            .unwrap_or(DistributionClass::Direct)
    }

    /// Fold a raw category label into its display bucket. Unmatched
    /// labels pass through unchanged; unparsable patterns are skipped.
    pub fn display_label(&self, category: &str) -> String {
        for rule in &self.merge_rules {
            if let Ok(re) = Regex::new(&rule.pattern) {
                if re.is_match(category) {
                    return rule.label.clone();
                }
            }
        }
        category.to_string()
    }
}

/// Full application settings, one JSON file in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sheet-backed sync endpoint; sync is disabled when unset.
    pub remote_url: Option<String>,
    /// Recognized income categories (advisory; free-form labels are
    /// still accepted everywhere).
    pub income_categories: Vec<String>,
    /// Recognized expense categories, advisory like the income list.
    pub expense_categories: Vec<String>,
    pub report: ReportConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            remote_url: None,
            income_categories: ["現金", "刷卡", "外送", "其他收入"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            expense_categories: [
                "食材", "包材", "水電瓦斯", "租金", "薪資", "保險", "雜支", "文具", "清潔", "修繕",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            report: ReportConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = project_dirs()?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir).context("Failed to create config dir")?;
    Ok(dir.join("settings.json"))
}

/// Load settings from disk, falling back to the compiled-in defaults
/// when no file exists yet.
pub fn load() -> Result<Settings> {
    let path = config_path()?;
    load_from(&path)
}

pub fn load_from(path: &std::path::Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read settings at {}", path.display()))?;
    let s: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parse settings at {}", path.display()))?;
    Ok(s)
}

pub fn save(settings: &Settings) -> Result<()> {
    let path = config_path()?;
    save_to(settings, &path)
}

pub fn save_to(settings: &Settings, path: &std::path::Path) -> Result<()> {
    let raw = serde_json::to_string_pretty(settings)?;
    fs::write(path, raw).with_context(|| format!("Write settings at {}", path.display()))?;
    Ok(())
}
