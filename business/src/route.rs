//! Routes of the console.
//!
//! Paths are relative (`customers`, `customers/{id}`) so they can be joined
//! onto whatever prefix the host shell uses.

use serde::{Deserialize, Serialize};

use crate::customers::CustomerId;

/// Represents the current page of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Customers table
    #[default]
    Customers,
    /// Detail page of a single customer
    CustomerDetail(CustomerId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Customers => "customers".to_owned(),
            Self::CustomerDetail(id) => format!("customers/{id}"),
        }
    }

    /// Parses a relative path; leading and trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let mut segments = path.trim_matches('/').split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("customers"), None, None) => Some(Self::Customers),
            (Some("customers"), Some(id), None) if !id.is_empty() => {
                Some(Self::CustomerDetail(CustomerId::new(id)))
            }
            _ => None,
        }
    }
}
