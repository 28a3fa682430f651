//! Indexing-service infrastructure adapter.
//!
//! Implements the [`gate::GroupIndex`] port over the subgraph's GraphQL HTTP
//! endpoint.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. Query
//! construction, transport, and response shaping are handled here; the
//! [`gate`] crate never sees them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use gate::{AdminId, GroupId, GroupIndex, GroupRecord, IndexError, MemberId, TreeDepth};

/// Fields requested for every group entity. Member lists are always inline.
const GROUP_FIELDS: &str = "id admin merkleTree { depth } members { id }";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for [`SubgraphClient`].
#[derive(Debug, Clone)]
pub struct SubgraphConfig {
    /// GraphQL endpoint the queries are posted to.
    pub endpoint: String,
    /// Timeout applied to every request (default: 30 seconds).
    pub request_timeout: Duration,
}

impl SubgraphConfig {
    /// Configuration for the hosted subgraph of a known network
    /// (e.g. `"sepolia"`, `"goerli"`, `"arbitrum"`).
    pub fn for_network(network: &str) -> Self {
        Self {
            endpoint: format!("https://api.thegraph.com/subgraphs/name/semaphore-protocol/{network}"),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Configuration for an explicit endpoint, for self-hosted indexes.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// GraphQL client for the group subgraph.
pub struct SubgraphClient {
    config: SubgraphConfig,
    http: Client,
}

impl SubgraphClient {
    /// Creates a client for the given configuration.
    pub fn new(config: SubgraphConfig) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_default();

        Self { config, http }
    }

    /// Convenience constructor for a known network's hosted subgraph.
    pub fn for_network(network: &str) -> Self {
        Self::new(SubgraphConfig::for_network(network))
    }

    /// Posts a GraphQL query and returns the `data` payload.
    async fn query<T: for<'de> Deserialize<'de>>(&self, query: String) -> Result<T, IndexError> {
        debug!(endpoint = %self.config.endpoint, "posting subgraph query");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&GraphqlRequest { query })
            .send()
            .await
            .map_err(|e| IndexError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IndexError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| IndexError::Malformed(e.to_string()))?;

        if let Some(errors) = envelope.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(IndexError::Service {
                status: status.as_u16(),
                body: messages.join("; "),
            });
        }

        envelope
            .data
            .ok_or_else(|| IndexError::Malformed("response carries neither data nor errors".to_string()))
    }
}

#[async_trait]
impl GroupIndex for SubgraphClient {
    async fn groups_by_admin(&self, admin: &AdminId) -> Result<Vec<GroupRecord>, IndexError> {
        let query = format!(
            r#"{{ groups(where: {{ admin: "{}" }}) {{ {GROUP_FIELDS} }} }}"#,
            admin.as_str(),
        );

        let data: GroupsData = self.query(query).await?;
        data.groups.into_iter().map(shape_record).collect()
    }

    async fn group_by_id(&self, id: &GroupId) -> Result<Option<GroupRecord>, IndexError> {
        let query = format!(
            r#"{{ group(id: "{}") {{ {GROUP_FIELDS} }} }}"#,
            id.as_str(),
        );

        let data: GroupData = self.query(query).await?;
        data.group.map(shape_record).transpose()
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GraphqlRequest {
    query: String,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct GroupsData {
    groups: Vec<WireGroup>,
}

#[derive(Deserialize)]
struct GroupData {
    group: Option<WireGroup>,
}

#[derive(Deserialize)]
struct WireGroup {
    id: String,
    admin: String,
    #[serde(rename = "merkleTree")]
    merkle_tree: WireMerkleTree,
    #[serde(default)]
    members: Vec<WireMember>,
}

#[derive(Deserialize)]
struct WireMerkleTree {
    depth: u32,
}

#[derive(Deserialize)]
struct WireMember {
    id: String,
}

/// Maps a wire group into a port-level record, flattening members to their
/// identity commitments.
fn shape_record(wire: WireGroup) -> Result<GroupRecord, IndexError> {
    let id = GroupId::new(wire.id)
        .ok_or_else(|| IndexError::Malformed("group with empty id".to_string()))?;
    let admin = AdminId::new(wire.admin)
        .ok_or_else(|| IndexError::Malformed("group with empty admin".to_string()))?;
    let members = wire
        .members
        .into_iter()
        .map(|m| {
            MemberId::new(m.id)
                .ok_or_else(|| IndexError::Malformed("member with empty id".to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GroupRecord {
        id,
        admin,
        tree_depth: TreeDepth::new(wire.merkle_tree.depth),
        members,
    })
}
