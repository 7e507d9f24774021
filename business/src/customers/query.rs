//! Query state of the customers view and its wire payload.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::columns::ColumnKey;

/// Status tab of the customers view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Active,
    Inactive,
    All,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::All];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::All => "All",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record type queried by this view. Only customers exist here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    #[default]
    Customer,
}

/// Parameters driving the next fetch.
///
/// `Default` is the zero value restored by "Clear". Values are owned, so every
/// transition yields an independent state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub filter: BTreeMap<ColumnKey, String>,
    pub search_text: String,
    /// `None` renders and queries as [`Tab::Active`].
    pub tab: Option<Tab>,
    /// Pagination offset; `None` is the first page.
    pub skip: Option<u64>,
    pub record_type: RecordType,
}

impl QueryState {
    pub fn effective_tab(&self) -> Tab {
        self.tab.unwrap_or_default()
    }

    /// Current filter text for `key`, empty when unset.
    pub fn filter_value(&self, key: ColumnKey) -> &str {
        self.filter.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Request payload sent to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPayload {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub status: Tab,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default)]
    pub filter: BTreeMap<ColumnKey, String>,
    pub skip: u64,
    pub limit: u64,
}

/// Builds the search payload for `state`.
///
/// Trims filter values and search text and drops the empty ones, so an
/// untouched filter input never narrows the query.
pub fn build_query(state: &QueryState, page_size: u64) -> QueryPayload {
    let filter = state
        .filter
        .iter()
        .filter_map(|(key, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (*key, value.to_owned()))
        })
        .collect();

    QueryPayload {
        record_type: state.record_type,
        status: state.effective_tab(),
        search: state.search_text.trim().to_owned(),
        filter,
        skip: state.skip.unwrap_or(0),
        limit: page_size,
    }
}
