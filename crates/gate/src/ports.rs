//! Port traits implemented by infrastructure adapters.
//!
//! This crate defines *what* data is needed; the `subgraph` and `github`
//! crates define *how* to fetch it. Both traits are object safe so services
//! can hold `Arc<dyn ...>` when composition requires it.

use async_trait::async_trait;

use crate::errors::{HostError, IndexError};
use crate::identifiers::{AdminId, GroupId, Login, RepositoryName};
use crate::types::GroupRecord;

/// Read-only access to the blockchain indexing service's group entities.
#[async_trait]
pub trait GroupIndex: Send + Sync {
    /// Returns all groups administered by `admin`, member lists included.
    ///
    /// An admin with no groups yields an empty vector, not an error.
    async fn groups_by_admin(&self, admin: &AdminId) -> Result<Vec<GroupRecord>, IndexError>;

    /// Returns the single group with the given on-chain identifier, member
    /// list included, or `None` if no such group is indexed.
    async fn group_by_id(&self, id: &GroupId) -> Result<Option<GroupRecord>, IndexError>;
}

/// Read-only access to the version-control hosting API.
///
/// Credentials are supplied when the implementation is constructed; there is
/// no ambient authentication state.
#[async_trait]
pub trait CommitHost: Send + Sync {
    /// Resolves the login of the identity the client was constructed with.
    async fn authenticated_login(&self) -> Result<Login, HostError>;

    /// Returns the number of commits authored by `login` on the given
    /// zero-based `page` of the repository's commit listing.
    ///
    /// Commit contents are opaque to this workspace; only the page length
    /// matters. A page index past the end of the listing yields `0`.
    async fn commits_page(
        &self,
        login: &Login,
        repository: &RepositoryName,
        page: u32,
        per_page: u32,
    ) -> Result<usize, HostError>;
}
