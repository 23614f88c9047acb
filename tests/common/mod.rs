#![allow(dead_code)]

use chrono::{DateTime, Utc};
use orghist::error::{OrghistError, Result};
use orghist::github::CommitSource;
use orghist::model::{Repository, RepositoryCommit};
use orghist::paginate::{ListOptions, Page};
use orghist::report::{render_histogram, Bar, ChartLayout};
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// In-memory listing source. Page `n` of a listing is `pages[n - 1]`.
#[derive(Default)]
pub struct FakeSource {
    pub repo_pages: Vec<Vec<Repository>>,
    pub commit_pages: HashMap<String, Vec<Vec<RepositoryCommit>>>,
    pub failing_repo: Option<String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn with_repos(repo_pages: Vec<Vec<Repository>>) -> Self {
        Self {
            repo_pages,
            ..Default::default()
        }
    }

    pub fn commits_for(mut self, repo: &str, pages: Vec<Vec<RepositoryCommit>>) -> Self {
        self.commit_pages.insert(repo.to_string(), pages);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn page_of<T: Clone>(pages: &[Vec<T>], opts: &ListOptions) -> Page<T> {
    let idx = opts.page.unwrap_or(1) as usize - 1;
    let items = pages.get(idx).cloned().unwrap_or_default();
    if idx + 1 < pages.len() {
        Page::with_next(items, idx as u32 + 2)
    } else {
        Page::last(items)
    }
}

impl CommitSource for FakeSource {
    fn list_org_repositories(&self, org: &str, opts: &ListOptions) -> Result<Page<Repository>> {
        self.calls.borrow_mut().push(format!(
            "repos {org} page={} per_page={}",
            opts.page.unwrap_or(1),
            opts.per_page
        ));
        Ok(page_of(&self.repo_pages, opts))
    }

    fn list_commits(
        &self,
        repo: &Repository,
        _since: DateTime<Utc>,
        opts: &ListOptions,
    ) -> Result<Page<RepositoryCommit>> {
        self.calls.borrow_mut().push(format!(
            "commits {} page={} per_page={}",
            repo.name,
            opts.page.unwrap_or(1),
            opts.per_page
        ));
        if self.failing_repo.as_deref() == Some(repo.name.as_str()) {
            return Err(OrghistError::Api {
                status: 500,
                url: format!("/repos/{}/commits", repo.full_name()),
                body: "boom".to_string(),
            });
        }
        let pages = self.commit_pages.get(&repo.name).cloned().unwrap_or_default();
        Ok(page_of(&pages, opts))
    }
}

pub fn repo(name: &str) -> Repository {
    Repository::new("acme", name)
}

/// A commit shaped like the GitHub commits endpoint output.
pub fn commit(sha: &str, author: &str, date: &str) -> RepositoryCommit {
    serde_json::from_value(json!({
        "sha": sha,
        "node_id": format!("C_{sha}"),
        "html_url": format!("https://github.com/acme/foo-svc/commit/{sha}"),
        "commit": {
            "author": { "name": author, "email": format!("{}@example.com", author.to_lowercase()), "date": date },
            "committer": { "name": "GitHub", "email": "noreply@github.com", "date": date },
            "message": format!("change {sha}"),
            "comment_count": 0
        },
        "parents": []
    }))
    .unwrap()
}

/// Chart text needs a system font; skip rendering tests on hosts without one.
pub fn can_render(dir: &Path) -> bool {
    let bars = vec![Bar {
        label: "0:0".to_string(),
        count: 1,
    }];
    render_histogram(&bars, &dir.join("font-check.png"), &ChartLayout::default()).is_ok()
}
