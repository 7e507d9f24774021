//! Customer records and the paged result returned by a search.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use ustr::Ustr;

use super::columns::ColumnKey;

/// Identifier of a customer record (`_id` on the wire).
///
/// Interned because ids are cloned into every action, route and request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(Ustr);

impl CustomerId {
    pub fn new(id: &str) -> Self {
        Self(Ustr::from(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for CustomerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

/// A customer record as returned by the search endpoint.
///
/// Fields the console does not know about are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRow {
    #[serde(rename = "_id")]
    pub id: CustomerId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created: Option<String>,
    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomerRow {
    /// Creates a row with only the id set. Mostly useful for tests and fixtures.
    pub fn new(id: &str) -> Self {
        Self {
            id: CustomerId::new(id),
            first_name: None,
            last_name: None,
            phone: None,
            email: None,
            city: None,
            created: None,
            updated: None,
            extra: Map::new(),
        }
    }

    /// Raw value of the given column, if present.
    pub fn value(&self, key: ColumnKey) -> Option<&str> {
        let value = match key {
            ColumnKey::FirstName => &self.first_name,
            ColumnKey::LastName => &self.last_name,
            ColumnKey::Phone => &self.phone,
            ColumnKey::Email => &self.email,
            ColumnKey::City => &self.city,
            ColumnKey::Created => &self.created,
            ColumnKey::Updated => &self.updated,
        };
        value.as_deref()
    }

    /// "First Last", skipping missing parts.
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One page of search results, replaced wholesale after every accepted fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSnapshot {
    /// Rows on this page.
    #[serde(default)]
    pub data: Vec<CustomerRow>,
    /// Total number of matching records.
    #[serde(default)]
    pub count: u64,
    /// Number of rows on this page.
    #[serde(default)]
    pub size: u64,
    /// Page size used by the server.
    #[serde(default)]
    pub limit: u64,
    /// Offset of the first row on this page.
    #[serde(default)]
    pub skip: u64,
}

impl ResultSnapshot {
    pub fn row(&self, id: CustomerId) -> Option<&CustomerRow> {
        self.data.iter().find(|row| row.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_row_deserializes_wire_names() {
        let row: CustomerRow = serde_json::from_value(serde_json::json!({
            "_id": "c-1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": "5551234567",
            "email": "ada@example.com",
            "city": "London",
            "created": "2024-01-02T03:04:05Z",
            "updated": "2024-02-03T04:05:06Z",
            "status": "active"
        }))
        .expect("valid customer json");

        assert_eq!(row.id, CustomerId::new("c-1"));
        assert_eq!(row.value(ColumnKey::FirstName), Some("Ada"));
        assert_eq!(row.value(ColumnKey::City), Some("London"));
        assert_eq!(row.value(ColumnKey::Created), Some("2024-01-02T03:04:05Z"));
        assert_eq!(row.extra.get("status"), Some(&Value::from("active")));
    }

    #[test]
    fn test_customer_row_missing_fields_are_none() {
        let row: CustomerRow =
            serde_json::from_value(serde_json::json!({ "_id": "c-2" })).expect("minimal json");

        assert_eq!(row.value(ColumnKey::Email), None);
        assert_eq!(row.display_name(), "");
    }

    #[test]
    fn test_customer_row_serializes_id_as_underscore_id() {
        let json = serde_json::to_value(CustomerRow::new("c-3")).expect("serializable");

        assert_eq!(json["_id"], "c-3");
    }

    #[test]
    fn test_display_name_joins_parts() {
        let mut row = CustomerRow::new("c-4");
        row.first_name = Some("Grace".to_owned());
        row.last_name = Some("Hopper".to_owned());

        assert_eq!(row.display_name(), "Grace Hopper");
    }

    #[test]
    fn test_result_snapshot_defaults_missing_counts() {
        let snapshot: ResultSnapshot = serde_json::from_value(serde_json::json!({
            "data": [{ "_id": "a" }, { "_id": "b" }],
            "count": 2
        }))
        .expect("snapshot json");

        assert_eq!(snapshot.data.len(), 2);
        assert_eq!(snapshot.count, 2);
        assert_eq!(snapshot.limit, 0);
        assert!(snapshot.row(CustomerId::new("b")).is_some());
    }
}
