use crate::config::{COMMIT_PAGE_SIZE, REPO_PAGE_SIZE};
use crate::error::Result;
use crate::github::CommitSource;
use crate::model::{Repository, RepositoryCommit};
use crate::paginate::fetch_all_pages_with_progress;
use chrono::{DateTime, Utc};

pub fn filter_repositories(repos: Vec<Repository>, filter: &str) -> Vec<Repository> {
    repos
        .into_iter()
        .filter(|r| r.name.contains(filter))
        .collect()
}

pub fn collect_org_repositories<S: CommitSource + ?Sized>(
    source: &S,
    org: &str,
    filter: &str,
    show_progress: bool,
) -> Result<Vec<Repository>> {
    let all = fetch_all_pages_with_progress(REPO_PAGE_SIZE, "repositories", show_progress, |opts| {
        source.list_org_repositories(org, opts)
    })?;
    let total = all.len();
    let selected = filter_repositories(all, filter);
    tracing::info!(org, total, selected = selected.len(), filter, "listed repositories");
    Ok(selected)
}

pub fn collect_commits<S: CommitSource + ?Sized>(
    source: &S,
    repo: &Repository,
    since: DateTime<Utc>,
    show_progress: bool,
) -> Result<Vec<RepositoryCommit>> {
    let label = format!("commits of {}", repo.full_name());
    let commits = fetch_all_pages_with_progress(COMMIT_PAGE_SIZE, &label, show_progress, |opts| {
        source.list_commits(repo, since, opts)
    })?;
    tracing::info!(repo = %repo.full_name(), commits = commits.len(), "collected commits");
    Ok(commits)
}

pub fn collect_all_commits<S: CommitSource + ?Sized>(
    source: &S,
    repos: &[Repository],
    since: DateTime<Utc>,
    show_progress: bool,
) -> Result<Vec<RepositoryCommit>> {
    let mut commits = Vec::new();
    for repo in repos {
        commits.extend(collect_commits(source, repo, since, show_progress)?);
    }
    Ok(commits)
}
