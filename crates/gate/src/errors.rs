//! Error taxonomy for the gating domain.
//!
//! Port-level errors ([`IndexError`], [`HostError`]) are defined here so that
//! infrastructure adapters construct them directly; service-level errors
//! ([`LookupError`], [`ValidationError`]) wrap them for callers.
//!
//! The taxonomy deliberately distinguishes not-found, transport, service, and
//! malformed-input conditions instead of collapsing every failure into a
//! single null-like case. Callers that only care about pass/fail can still
//! treat the whole tree as opaque.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Port errors — indexing service
// ---------------------------------------------------------------------------

/// Failure reported by a [`crate::ports::GroupIndex`] implementation.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The query never produced a response (connect failure, timeout, TLS).
    #[error("indexing service unreachable: {0}")]
    Network(String),

    /// The service answered, but with a non-success status or an explicit
    /// query-level error.
    #[error("indexing service error (status {status}): {body}")]
    Service {
        /// HTTP status code, or 200 for query-level errors carried in an
        /// otherwise successful response.
        status: u16,
        /// Response body or error message, verbatim.
        body: String,
    },

    /// The response arrived but could not be interpreted as group records.
    #[error("malformed indexing response: {0}")]
    Malformed(String),
}

// ---------------------------------------------------------------------------
// Port errors — hosting API
// ---------------------------------------------------------------------------

/// Failure reported by a [`crate::ports::CommitHost`] implementation.
#[derive(Debug, Error)]
pub enum HostError {
    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("hosting API unreachable: {0}")]
    Network(String),

    /// Non-success response from the API. Authentication failures, rate
    /// limits, and missing repositories all surface here; the validator does
    /// not retry any of them.
    #[error("hosting API error (status {status}): {body}")]
    Api {
        /// HTTP status code of the failed call.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response arrived but did not have the expected shape.
    #[error("malformed hosting API response: {0}")]
    Malformed(String),
}

// ---------------------------------------------------------------------------
// Group lookup
// ---------------------------------------------------------------------------

/// Outcome of a failed group lookup.
///
/// Distinguishes "the group does not exist" from "the query itself failed";
/// an admin with zero groups is neither — that is an `Ok` empty list.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No group with the requested identifier exists in the index.
    #[error("group not found")]
    NotFound,

    /// The underlying index query failed. No retry, no partial results.
    #[error("group query failed: {0}")]
    Query(#[from] IndexError),
}

// ---------------------------------------------------------------------------
// Criteria validation
// ---------------------------------------------------------------------------

/// A reputation criteria object did not match its validator's schema.
///
/// Raised before any network call is made.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// A field required by the schema is absent.
    #[error("criteria mismatch: missing field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// A field is present but has the wrong primitive type.
    #[error("criteria mismatch: field '{field}' expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the mistyped field.
        field: String,
        /// Type the schema requires.
        expected: &'static str,
        /// JSON type actually supplied.
        found: &'static str,
    },

    /// A field is present that the schema does not declare.
    #[error("criteria mismatch: unknown field '{field}'")]
    UnknownField {
        /// Name of the undeclared field.
        field: String,
    },

    /// The criteria value is not a JSON object at all.
    #[error("criteria mismatch: expected an object, found {found}")]
    NotAnObject {
        /// JSON type actually supplied.
        found: &'static str,
    },
}

/// Failure of a reputation validation run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The criteria object failed its schema check; nothing was fetched.
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    /// A hosting-API call failed mid-run. Propagated unmodified — no retry,
    /// no backoff, no partial-count fallback.
    #[error(transparent)]
    Host(#[from] HostError),
}
