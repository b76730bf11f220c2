//! Persisted per-command invocation counts.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounts {
    #[serde(default)]
    pub counts: BTreeMap<String, u64>,
}

impl UsageCounts {
    pub fn get(&self, command: &str) -> u64 {
        self.counts.get(command).copied().unwrap_or(0)
    }

    pub fn bump(&mut self, command: &str) -> u64 {
        let n = self.counts.entry(command.to_string()).or_insert(0);
        *n += 1;
        *n
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// The counter file.
#[derive(Debug, Clone)]
pub struct UsageLog {
    path: PathBuf,
}

impl UsageLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the counts; a missing file is empty.
    pub fn load(&self) -> Result<UsageCounts> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(UsageCounts::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        serde_json::from_str(&text).with_context(|| format!("parsing {}", self.path.display()))
    }

    pub fn save(&self, counts: &UsageCounts) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let text = serde_json::to_string_pretty(counts)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }

    /// Increment `command` and persist. An unreadable file starts over.
    pub fn record(&self, command: &str) -> Result<u64> {
        let mut counts = self.load().unwrap_or_else(|e| {
            warn!("usage counts reset: {e:#}");
            UsageCounts::default()
        });
        let n = counts.bump(command);
        self.save(&counts)?;
        Ok(n)
    }
}

/// Lines printed by `order usage`.
pub fn report_lines(counts: &UsageCounts) -> Vec<String> {
    if counts.counts.is_empty() {
        return vec!["No commands recorded yet.".to_string()];
    }
    let width = counts
        .counts
        .keys()
        .map(|k| k.len())
        .max()
        .unwrap_or(0)
        .max("total".len());
    let mut lines: Vec<String> = counts
        .counts
        .iter()
        .map(|(name, n)| format!("{name:<width$}  {n}"))
        .collect();
    lines.push(format!("{:<width$}  {}", "total", counts.total()));
    lines
}
