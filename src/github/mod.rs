pub mod client;
pub mod link;

pub use client::GitHubClient;
pub use link::next_page_from_link;

use crate::error::Result;
use crate::model::{Repository, RepositoryCommit};
use crate::paginate::{ListOptions, Page};
use chrono::{DateTime, Utc};

pub trait CommitSource {
    fn list_org_repositories(&self, org: &str, opts: &ListOptions) -> Result<Page<Repository>>;

    fn list_commits(
        &self,
        repo: &Repository,
        since: DateTime<Utc>,
        opts: &ListOptions,
    ) -> Result<Page<RepositoryCommit>>;
}
