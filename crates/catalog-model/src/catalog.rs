//! Ordered collections of catalog records and state bookkeeping.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields;
use crate::record::Record;

/// Build states that carry meaning in rendered documents.
///
/// Matching is exact: `"ready to go"` or `" Ready to go"` is not a known state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SetState {
    ReadyToGo,
    PartiallyComplete,
    InTheAether,
}

impl SetState {
    pub const ALL: [SetState; 3] = [
        SetState::ReadyToGo,
        SetState::PartiallyComplete,
        SetState::InTheAether,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SetState::ReadyToGo => "Ready to go",
            SetState::PartiallyComplete => "Partially complete",
            SetState::InTheAether => "In the aether",
        }
    }

    pub fn from_exact(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.label() == value)
    }
}

impl fmt::Display for SetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counters over an unfiltered catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    pub total: usize,
    pub ready: usize,
    pub partial: usize,
    pub aether: usize,
}

impl StateSummary {
    /// Records whose state is absent or not one of the known states.
    pub fn other(&self) -> usize {
        self.total - self.ready - self.partial - self.aether
    }
}

/// Ordered sequence of records for a single run. Source order is kept and
/// duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Known state of a record, compared against the raw untrimmed value.
    pub fn record_state(record: &Record) -> Option<SetState> {
        record
            .text(fields::STATE)
            .and_then(|value| SetState::from_exact(&value))
    }

    pub fn state_summary(&self) -> StateSummary {
        let mut summary = StateSummary {
            total: self.records.len(),
            ..StateSummary::default()
        };
        for record in &self.records {
            match Self::record_state(record) {
                Some(SetState::ReadyToGo) => summary.ready += 1,
                Some(SetState::PartiallyComplete) => summary.partial += 1,
                Some(SetState::InTheAether) => summary.aether += 1,
                None => {}
            }
        }
        summary
    }

    /// Record count per raw state value; `None` collects records without a state.
    pub fn state_counts(&self) -> BTreeMap<Option<String>, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            let key = record.text(fields::STATE).map(Cow::into_owned);
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<Record>> for Catalog {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Catalog {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
