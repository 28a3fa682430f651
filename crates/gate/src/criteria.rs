//! Reputation criteria schemas.
//!
//! Criteria arrive as untyped JSON from whatever hosts the validator (a
//! dashboard form, a stored rule). Each validator declares a fixed schema —
//! field name to primitive type — and the object is checked against it
//! before anything is fetched. Only after the check passes is the object
//! deserialised into its typed form.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::CriteriaError;
use crate::identifiers::RepositoryName;
use crate::types::CommitCount;

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Primitive type a criteria field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// A JSON string.
    String,
    /// A JSON number (integers only in practice; fractions fail typed
    /// deserialisation downstream).
    Number,
}

impl PrimitiveType {
    fn name(self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            PrimitiveType::String => value.is_string(),
            PrimitiveType::Number => value.is_number(),
        }
    }
}

/// Fixed field-name → type table a criteria object must match exactly.
pub type CriteriaSchema = [(&'static str, PrimitiveType)];

/// Checks `criteria` against `schema`.
///
/// Strict in both directions: a missing or mistyped field fails, and so does
/// a field the schema does not declare. Field order in the object is
/// irrelevant.
pub fn check_criteria(criteria: &Value, schema: &CriteriaSchema) -> Result<(), CriteriaError> {
    let object = match criteria.as_object() {
        Some(object) => object,
        None => {
            return Err(CriteriaError::NotAnObject {
                found: json_type_name(criteria),
            })
        }
    };

    for (field, expected) in schema {
        match object.get(*field) {
            None => {
                return Err(CriteriaError::MissingField {
                    field: (*field).to_string(),
                })
            }
            Some(value) if !expected.matches(value) => {
                return Err(CriteriaError::TypeMismatch {
                    field: (*field).to_string(),
                    expected: expected.name(),
                    found: json_type_name(value),
                })
            }
            Some(_) => {}
        }
    }

    for field in object.keys() {
        if !schema.iter().any(|(name, _)| *name == field.as_str()) {
            return Err(CriteriaError::UnknownField {
                field: field.clone(),
            });
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Typed criteria
// ---------------------------------------------------------------------------

/// Typed form of the repository-commits criteria, parsed only after
/// [`check_criteria`] has accepted the raw object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitCriteria {
    /// Repository the commits must land in, owned by the authenticated user.
    pub repository: RepositoryName,
    /// Minimum number of commits required to pass.
    pub min_commits: CommitCount,
}

impl CommitCriteria {
    /// Schema the raw criteria object must satisfy.
    pub const SCHEMA: &'static CriteriaSchema = &[
        ("repository", PrimitiveType::String),
        ("minCommits", PrimitiveType::Number),
    ];

    /// Checks `criteria` against [`Self::SCHEMA`] and deserialises it.
    pub fn parse(criteria: &Value) -> Result<Self, CriteriaError> {
        check_criteria(criteria, Self::SCHEMA)?;

        // The schema check already guarantees both fields and their JSON
        // types; the only way deserialisation can still fail is a fractional
        // or negative minCommits.
        let wire = Wire::deserialize(criteria).map_err(|_| CriteriaError::TypeMismatch {
            field: "minCommits".to_string(),
            expected: "non-negative integer",
            found: "fractional or negative number",
        })?;

        let repository =
            RepositoryName::new(wire.repository).ok_or(CriteriaError::TypeMismatch {
                field: "repository".to_string(),
                expected: "non-empty string",
                found: "empty string",
            })?;

        Ok(Self {
            repository,
            min_commits: CommitCount::new(wire.min_commits),
        })
    }
}

#[derive(Deserialize)]
struct Wire {
    repository: String,
    #[serde(rename = "minCommits")]
    min_commits: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_criteria_parse() {
        let criteria = CommitCriteria::parse(&json!({
            "repository": "website",
            "minCommits": 100,
        }))
        .unwrap();

        assert_eq!(criteria.repository.as_str(), "website");
        assert_eq!(criteria.min_commits, CommitCount::new(100));
    }

    #[test]
    fn missing_min_commits_is_a_mismatch() {
        let err = CommitCriteria::parse(&json!({ "repository": "website" })).unwrap_err();
        assert!(matches!(err, CriteriaError::MissingField { field } if field == "minCommits"));
    }

    #[test]
    fn mistyped_min_commits_is_a_mismatch() {
        let err = CommitCriteria::parse(&json!({
            "repository": "website",
            "minCommits": "100",
        }))
        .unwrap_err();

        assert!(matches!(
            err,
            CriteriaError::TypeMismatch { field, expected: "number", found: "string" }
                if field == "minCommits"
        ));
    }

    #[test]
    fn mistyped_repository_is_a_mismatch() {
        let err = CommitCriteria::parse(&json!({
            "repository": 7,
            "minCommits": 100,
        }))
        .unwrap_err();

        assert!(matches!(err, CriteriaError::TypeMismatch { field, .. } if field == "repository"));
    }

    #[test]
    fn undeclared_fields_are_rejected() {
        let err = CommitCriteria::parse(&json!({
            "repository": "website",
            "minCommits": 100,
            "maxCommits": 500,
        }))
        .unwrap_err();

        assert!(matches!(err, CriteriaError::UnknownField { field } if field == "maxCommits"));
    }

    #[test]
    fn fractional_minimum_is_a_mismatch() {
        let err = CommitCriteria::parse(&json!({
            "repository": "website",
            "minCommits": 1.5,
        }))
        .unwrap_err();

        assert!(matches!(err, CriteriaError::TypeMismatch { field, .. } if field == "minCommits"));
    }

    #[test]
    fn non_object_criteria_are_rejected() {
        let err = check_criteria(&json!([1, 2]), CommitCriteria::SCHEMA).unwrap_err();
        assert!(matches!(err, CriteriaError::NotAnObject { found: "array" }));
    }

    #[test]
    fn zero_minimum_is_valid() {
        let criteria = CommitCriteria::parse(&json!({
            "repository": "website",
            "minCommits": 0,
        }))
        .unwrap();

        assert!(criteria.min_commits.is_zero());
    }
}
