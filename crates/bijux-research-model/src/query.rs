// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Heading shown by the results page when no query travels with the navigation.
pub const DEFAULT_RESULTS_HEADING: &str = "AI startup funding trends";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Free-text research query.
///
/// The only rule is that the text is not blank once trimmed. The text itself
/// is kept exactly as typed: surrounding whitespace is part of what travels to
/// the results page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query(String);

impl Query {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError("query must not be blank".to_string()));
        }
        Ok(Self(input.to_string()))
    }

    /// True when `input` would be accepted by [`Query::parse`].
    #[must_use]
    pub fn is_submittable(input: &str) -> bool {
        !input.trim().is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Query {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(ValidationError("query must not be blank".to_string()));
        }
        Ok(Self(value))
    }
}

impl From<Query> for String {
    fn from(value: Query) -> Self {
        value.0
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
