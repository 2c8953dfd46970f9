//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a product in the catalog.
///
/// Upstream systems assign these, so no format is imposed beyond
/// "present and non-empty". Guaranteed non-blank by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an identifier from a raw string.
    ///
    /// Rejects empty and whitespace-only input with [`DomainError::MissingId`].
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::MissingId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifier() {
        let id = ProductId::new("7").unwrap();
        assert_eq!(id.as_str(), "7");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn rejects_empty_identifier() {
        assert_eq!(ProductId::new("").unwrap_err(), DomainError::MissingId);
    }

    #[test]
    fn rejects_whitespace_only_identifier() {
        assert_eq!(ProductId::new("   ").unwrap_err(), DomainError::MissingId);
        assert_eq!(ProductId::new("\t\n").unwrap_err(), DomainError::MissingId);
    }

    #[test]
    fn serializes_transparently() {
        let id = ProductId::new("SKU-001").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SKU-001\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any non-blank string is accepted verbatim.
            #[test]
            fn non_blank_input_is_accepted_verbatim(raw in "[A-Za-z0-9_-]{1,32}") {
                let id = ProductId::new(raw.clone()).unwrap();
                prop_assert_eq!(id.as_str(), raw.as_str());
            }

            /// Property: Display output parses back to an equal identifier.
            #[test]
            fn display_round_trips_through_from_str(raw in "[A-Za-z0-9_-]{1,32}") {
                let id = ProductId::new(raw).unwrap();
                let parsed: ProductId = id.to_string().parse().unwrap();
                prop_assert_eq!(parsed, id);
            }
        }
    }
}
