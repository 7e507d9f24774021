//! The signed-in operator's capabilities.

use std::collections::BTreeSet;

/// Capability that allows deleting customers.
pub const MANAGES_CUSTOMERS: &str = "manages customers";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authorizations: BTreeSet<String>,
}

impl Session {
    pub fn new<I, S>(authorizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            authorizations: authorizations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn authorizations(&self) -> impl Iterator<Item = &str> {
        self.authorizations.iter().map(String::as_str)
    }

    pub fn has(&self, capability: &str) -> bool {
        self.authorizations.contains(capability)
    }

    pub fn can_manage_customers(&self) -> bool {
        self.has(MANAGES_CUSTOMERS)
    }
}
