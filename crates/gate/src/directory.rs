//! Group lookup over a [`GroupIndex`] port.
//!
//! Shapes the index's raw records into [`Group`]s, resolving each group's
//! display name from its on-chain identifier. Stateless; one directory can
//! serve any number of concurrent lookups.

use tracing::{debug, error};

use crate::errors::LookupError;
use crate::identifiers::{AdminId, GroupId};
use crate::label::decode_group_label;
use crate::ports::GroupIndex;
use crate::types::{Group, GroupRecord};

/// Read-side service for membership groups.
pub struct GroupDirectory<I> {
    index: I,
}

impl<I: GroupIndex> GroupDirectory<I> {
    /// Creates a directory over the given index adapter.
    pub fn new(index: I) -> Self {
        Self { index }
    }

    /// Returns all groups administered by `admin`, member lists included.
    ///
    /// An admin with zero groups yields an empty vector. A failed query is
    /// logged and returned as [`LookupError::Query`] — no retry, no partial
    /// results.
    pub async fn groups_for_admin(&self, admin: &AdminId) -> Result<Vec<Group>, LookupError> {
        let records = self.index.groups_by_admin(admin).await.map_err(|e| {
            error!(admin = %admin, error = %e, "group query failed");
            LookupError::Query(e)
        })?;

        debug!(admin = %admin, count = records.len(), "groups fetched");
        Ok(records.into_iter().map(shape_group).collect())
    }

    /// Returns the single group with the given identifier, member list
    /// included.
    ///
    /// The group's `name` is always derived by decoding the identifier, the
    /// same policy [`Self::groups_for_admin`] applies. A missing group is
    /// [`LookupError::NotFound`]; a failed query is logged and returned as
    /// [`LookupError::Query`].
    pub async fn group(&self, id: &GroupId) -> Result<Group, LookupError> {
        let record = self.index.group_by_id(id).await.map_err(|e| {
            error!(group = %id, error = %e, "group query failed");
            LookupError::Query(e)
        })?;

        record.map(shape_group).ok_or(LookupError::NotFound)
    }
}

/// Shapes a raw index record into a normalised [`Group`].
///
/// The description is always empty: the indexing service does not source one.
fn shape_group(record: GroupRecord) -> Group {
    let name = decode_group_label(record.id.as_str());

    Group {
        id: record.id,
        name,
        description: String::new(),
        tree_depth: record.tree_depth,
        members: record.members,
        admin: record.admin,
    }
}
