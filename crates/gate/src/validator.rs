//! Reputation validators.
//!
//! A validator is a named, schema-carrying rule that gates an action on a
//! minimum-activity threshold. The only validator shipped today counts a
//! user's commits in one of their repositories; further validators implement
//! [`ReputationValidator`] alongside it.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::criteria::{CommitCriteria, CriteriaSchema};
use crate::errors::ValidationError;
use crate::ports::CommitHost;
use crate::types::CommitCount;

/// Commits requested per page when walking a commit listing.
pub const COMMITS_PER_PAGE: u32 = 100;

/// A named reputation rule evaluating an untyped criteria object.
#[async_trait]
pub trait ReputationValidator: Send + Sync {
    /// Unique validator name, upper snake case.
    fn name(&self) -> &'static str;

    /// Schema the criteria object must satisfy.
    fn criteria_schema(&self) -> &'static CriteriaSchema;

    /// Returns `true` if the authenticated user meets the criteria.
    ///
    /// Fails with [`ValidationError::Criteria`] before any network call when
    /// the criteria object does not match the schema; hosting-API failures
    /// propagate unmodified as [`ValidationError::Host`].
    async fn validate(&self, criteria: &Value) -> Result<bool, ValidationError>;
}

/// Checks that the authenticated user has at least `minCommits` commits in
/// their repository named by `repository`.
pub struct RepositoryCommitsValidator<H> {
    host: H,
}

impl<H: CommitHost> RepositoryCommitsValidator<H> {
    /// Creates the validator over the given hosting-API adapter. The
    /// adapter carries the credential; nothing here is ambient.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Walks the commit listing page by page and accumulates the total.
    ///
    /// Strictly sequential: each request is issued only after the previous
    /// page's length is known. The walk ends when a page returns fewer than
    /// [`COMMITS_PER_PAGE`] results — the unambiguous end-of-data signal. A
    /// listing whose last non-empty page is exactly full therefore costs one
    /// extra, empty probe; that is inherent to probing without response
    /// metadata.
    async fn count_commits(
        &self,
        criteria: &CommitCriteria,
    ) -> Result<CommitCount, ValidationError> {
        let login = self.host.authenticated_login().await?;

        let mut total = CommitCount::zero();
        let mut page = 0;

        loop {
            let fetched = self
                .host
                .commits_page(&login, &criteria.repository, page, COMMITS_PER_PAGE)
                .await?;

            total += CommitCount::new(fetched as u64);

            if fetched < COMMITS_PER_PAGE as usize {
                break;
            }
            page += 1;
        }

        debug!(
            login = %login,
            repository = %criteria.repository,
            total = %total,
            pages = page + 1,
            "commit listing walked"
        );

        Ok(total)
    }
}

#[async_trait]
impl<H: CommitHost> ReputationValidator for RepositoryCommitsValidator<H> {
    fn name(&self) -> &'static str {
        "GITHUB_REPOSITORY_COMMITS"
    }

    fn criteria_schema(&self) -> &'static CriteriaSchema {
        CommitCriteria::SCHEMA
    }

    async fn validate(&self, criteria: &Value) -> Result<bool, ValidationError> {
        let criteria = CommitCriteria::parse(criteria)?;
        let total = self.count_commits(&criteria).await?;

        Ok(total >= criteria.min_commits)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use serde_json::json;

    use super::*;
    use crate::errors::HostError;
    use crate::identifiers::{Login, RepositoryName};

    /// Hosting-API stand-in serving a fixed number of commits, with call
    /// counters for asserting request sequencing.
    struct MockHost {
        total_commits: usize,
        fail_pages: bool,
        login_calls: AtomicU32,
        page_calls: AtomicU32,
    }

    impl MockHost {
        fn with_commits(total_commits: usize) -> Self {
            Self {
                total_commits,
                fail_pages: false,
                login_calls: AtomicU32::new(0),
                page_calls: AtomicU32::new(0),
            }
        }

        fn failing_pages() -> Self {
            Self {
                total_commits: 0,
                fail_pages: true,
                login_calls: AtomicU32::new(0),
                page_calls: AtomicU32::new(0),
            }
        }

        fn page_calls(&self) -> u32 {
            self.page_calls.load(Ordering::SeqCst)
        }

        fn login_calls(&self) -> u32 {
            self.login_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CommitHost for &MockHost {
        async fn authenticated_login(&self) -> Result<Login, HostError> {
            self.login_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Login::new("octocat").unwrap())
        }

        async fn commits_page(
            &self,
            _login: &Login,
            _repository: &RepositoryName,
            page: u32,
            per_page: u32,
        ) -> Result<usize, HostError> {
            self.page_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_pages {
                return Err(HostError::Api {
                    status: 403,
                    body: "rate limit exceeded".to_string(),
                });
            }

            let served = (page as usize) * (per_page as usize);
            Ok(self
                .total_commits
                .saturating_sub(served)
                .min(per_page as usize))
        }
    }

    fn criteria(min_commits: u64) -> Value {
        json!({ "repository": "website", "minCommits": min_commits })
    }

    #[tokio::test]
    async fn two_and_a_half_pages_count_in_three_calls() {
        let host = MockHost::with_commits(250);
        let validator = RepositoryCommitsValidator::new(&host);

        assert!(validator.validate(&criteria(250)).await.unwrap());
        assert_eq!(host.page_calls(), 3); // 100, 100, 50
    }

    #[tokio::test]
    async fn threshold_above_the_total_fails() {
        let host = MockHost::with_commits(250);
        let validator = RepositoryCommitsValidator::new(&host);

        assert!(!validator.validate(&criteria(251)).await.unwrap());
    }

    #[tokio::test]
    async fn exactly_full_last_page_costs_one_empty_probe() {
        // 200 commits fill two pages exactly; a third request comes back
        // empty before the walk can terminate.
        let host = MockHost::with_commits(200);
        let validator = RepositoryCommitsValidator::new(&host);

        assert!(validator.validate(&criteria(200)).await.unwrap());
        assert_eq!(host.page_calls(), 3); // 100, 100, 0
    }

    #[tokio::test]
    async fn empty_repository_needs_a_single_call() {
        let host = MockHost::with_commits(0);
        let validator = RepositoryCommitsValidator::new(&host);

        assert!(validator.validate(&criteria(0)).await.unwrap());
        assert!(!validator.validate(&criteria(1)).await.unwrap());
        assert_eq!(host.page_calls(), 2); // one per validate run
    }

    #[tokio::test]
    async fn schema_mismatch_fails_before_any_network_call() {
        let host = MockHost::with_commits(250);
        let validator = RepositoryCommitsValidator::new(&host);

        let err = validator
            .validate(&json!({ "repository": "website" }))
            .await
            .unwrap_err();

        assert!(matches!(err, ValidationError::Criteria(_)));
        assert_eq!(host.login_calls(), 0);
        assert_eq!(host.page_calls(), 0);
    }

    #[tokio::test]
    async fn host_failure_propagates_unmodified() {
        let host = MockHost::failing_pages();
        let validator = RepositoryCommitsValidator::new(&host);

        let err = validator.validate(&criteria(1)).await.unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Host(HostError::Api { status: 403, .. })
        ));
        assert_eq!(host.page_calls(), 1); // no retry
    }

    #[tokio::test]
    async fn validator_is_named_and_carries_its_schema() {
        let host = MockHost::with_commits(0);
        let validator = RepositoryCommitsValidator::new(&host);

        assert_eq!(validator.name(), "GITHUB_REPOSITORY_COMMITS");
        assert_eq!(validator.criteria_schema().len(), 2);
    }
}
