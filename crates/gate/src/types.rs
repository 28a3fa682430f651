//! Shared value types for the gating domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! meaningful values with invariants (a commit count participates in
//! accumulation, a group's `name` is never empty) and participate in domain
//! computations.

use serde::{Deserialize, Serialize};

use crate::{AdminId, GroupId, MemberId};

// ---------------------------------------------------------------------------
// Commit counting
// ---------------------------------------------------------------------------

/// Number of commits counted across one or more pages of a commit listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CommitCount(u64);

impl CommitCount {
    /// Creates a [`CommitCount`] from a raw integer.
    pub fn new(count: u64) -> Self {
        Self(count)
    }

    /// Creates a [`CommitCount`] of exactly zero.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Returns the underlying integer value.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns `true` if this count is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for CommitCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for CommitCount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for CommitCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

// ---------------------------------------------------------------------------
// Merkle tree depth
// ---------------------------------------------------------------------------

/// Depth of the cryptographic set-membership tree associated with a group.
///
/// Describes the group's member capacity (`2^depth` leaves); the tree itself
/// lives on chain and is never materialised here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TreeDepth(u32);

impl TreeDepth {
    /// Creates a [`TreeDepth`] from a raw integer.
    pub fn new(depth: u32) -> Self {
        Self(depth)
    }

    /// Returns the underlying integer value.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TreeDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Group records
// ---------------------------------------------------------------------------

/// Raw group record as returned by the indexing service, before name
/// resolution.
///
/// Produced by [`crate::ports::GroupIndex`] implementations; consumed by
/// [`crate::directory::GroupDirectory`], which shapes it into a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    /// Opaque on-chain identifier.
    pub id: GroupId,
    /// Identity administering the group.
    pub admin: AdminId,
    /// Depth of the group's membership tree.
    pub tree_depth: TreeDepth,
    /// Member identity commitments, in on-chain insertion order.
    pub members: Vec<MemberId>,
}

/// A normalised membership group.
///
/// Immutable once constructed; records are created per query response and
/// never persisted.
///
/// Invariant: `name` is never empty — it is either the successfully decoded
/// label of `id` or the raw identifier verbatim
/// (see [`crate::label::decode_group_label`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Opaque on-chain identifier.
    pub id: GroupId,
    /// Human-readable label decoded from `id`, or `id` verbatim when the
    /// identifier does not decode.
    pub name: String,
    /// Always empty — the indexing service does not source descriptions.
    pub description: String,
    /// Depth of the group's membership tree.
    pub tree_depth: TreeDepth,
    /// Member identity commitments, in on-chain insertion order.
    pub members: Vec<MemberId>,
    /// Identity administering the group.
    pub admin: AdminId,
}
