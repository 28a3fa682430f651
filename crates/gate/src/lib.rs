//! Core gating domain: membership group lookup and reputation validation.
//!
//! This crate contains every domain concept, newtype identifier, shared value
//! type, and cross-cutting error type used throughout the workspace, plus the
//! two services built on them. Infrastructure crates implement the port
//! traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; the `subgraph` and `github` crates define
//! *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype domain identifiers (`GroupId`, `Login`, etc.) |
//! | [`types`] | Shared value types (`Group`, `CommitCount`, `TreeDepth`) |
//! | [`errors`] | Port and service error types |
//! | [`label`] | Best-effort group label decoding |
//! | [`ports`] | `GroupIndex` and `CommitHost` adapter traits |
//! | [`criteria`] | Criteria schemas and typed criteria parsing |
//! | [`directory`] | Group lookup service over a `GroupIndex` |
//! | [`validator`] | Reputation validators over a `CommitHost` |

pub mod criteria;
pub mod directory;
pub mod errors;
pub mod identifiers;
pub mod label;
pub mod ports;
pub mod types;
pub mod validator;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use criteria::{check_criteria, CommitCriteria, CriteriaSchema, PrimitiveType};
pub use directory::GroupDirectory;
pub use errors::{CriteriaError, HostError, IndexError, LookupError, ValidationError};
pub use identifiers::{AdminId, GroupId, Login, MemberId, RepositoryName};
pub use label::decode_group_label;
pub use ports::{CommitHost, GroupIndex};
pub use types::{CommitCount, Group, GroupRecord, TreeDepth};
pub use validator::{ReputationValidator, RepositoryCommitsValidator, COMMITS_PER_PAGE};
