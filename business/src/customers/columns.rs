//! Static column configuration for the customers table.
//!
//! The same list drives the header filter inputs and the per-cell rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{CellText, format_date, format_email, format_phone};

/// Key of a customer column, serialized with its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    FirstName,
    LastName,
    Phone,
    Email,
    City,
    Created,
    Updated,
}

impl ColumnKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::City => "city",
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }

    /// The configured column for this key.
    pub fn config(self) -> &'static ColumnConfig {
        match self {
            Self::FirstName => &FIRST_NAME,
            Self::LastName => &LAST_NAME,
            Self::Phone => &PHONE,
            Self::Email => &EMAIL,
            Self::City => &CITY,
            Self::Created => &CREATED,
            Self::Updated => &UPDATED,
        }
    }

    pub fn is_filterable(self) -> bool {
        self.config().filter_box
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a cell value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    Phone,
    Email,
    Date,
}

impl Formatter {
    pub fn apply(self, value: &str) -> CellText {
        match self {
            Self::Phone => format_phone(value),
            Self::Email => format_email(value),
            Self::Date => format_date(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnConfig {
    pub heading: &'static str,
    pub formatter: Option<Formatter>,
    /// Column width in points.
    pub width: f32,
    /// Whether the header shows a filter input for this column.
    pub filter_box: bool,
    pub key: ColumnKey,
}

impl ColumnConfig {
    /// Renders a cell: formatter output if configured, else the raw value.
    pub fn render(&self, value: Option<&str>) -> CellText {
        let Some(value) = value else {
            return CellText::plain("");
        };
        match self.formatter {
            Some(formatter) => formatter.apply(value),
            None => CellText::plain(value),
        }
    }
}

const FIRST_NAME: ColumnConfig = ColumnConfig {
    heading: "First Name",
    formatter: None,
    width: 150.0,
    filter_box: true,
    key: ColumnKey::FirstName,
};

const LAST_NAME: ColumnConfig = ColumnConfig {
    heading: "Last Name",
    formatter: None,
    width: 150.0,
    filter_box: true,
    key: ColumnKey::LastName,
};

const PHONE: ColumnConfig = ColumnConfig {
    heading: "Phone",
    formatter: Some(Formatter::Phone),
    width: 180.0,
    filter_box: true,
    key: ColumnKey::Phone,
};

const EMAIL: ColumnConfig = ColumnConfig {
    heading: "Email",
    formatter: Some(Formatter::Email),
    width: 200.0,
    filter_box: true,
    key: ColumnKey::Email,
};

const CITY: ColumnConfig = ColumnConfig {
    heading: "City",
    formatter: None,
    width: 120.0,
    filter_box: true,
    key: ColumnKey::City,
};

const CREATED: ColumnConfig = ColumnConfig {
    heading: "Created",
    formatter: Some(Formatter::Date),
    width: 100.0,
    filter_box: false,
    key: ColumnKey::Created,
};

const UPDATED: ColumnConfig = ColumnConfig {
    heading: "Updated",
    formatter: Some(Formatter::Date),
    width: 100.0,
    filter_box: false,
    key: ColumnKey::Updated,
};

/// Columns in display order.
pub static CUSTOMER_COLUMNS: [ColumnConfig; 7] = [
    FIRST_NAME,
    LAST_NAME,
    PHONE,
    EMAIL,
    CITY,
    CREATED,
    UPDATED,
];
