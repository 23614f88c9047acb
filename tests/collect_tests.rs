mod common;

use chrono::{TimeZone, Utc};
use common::{commit, repo, FakeSource};
use orghist::collect::{
    collect_all_commits, collect_commits, collect_org_repositories, filter_repositories,
};
use orghist::error::OrghistError;

fn names(repos: &[orghist::model::Repository]) -> Vec<&str> {
    repos.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn empty_filter_keeps_every_repository_in_order() {
    let repos = vec![repo("zeta"), repo("alpha"), repo("foo-svc")];
    let kept = filter_repositories(repos.clone(), "");
    assert_eq!(kept, repos);
}

#[test]
fn filter_matching_nothing_is_empty() {
    let repos = vec![repo("zeta"), repo("alpha")];
    assert!(filter_repositories(repos, "foo").is_empty());
}

#[test]
fn filter_is_case_sensitive_substring() {
    let repos = vec![repo("foo-svc"), repo("Foo-api"), repo("my-foo"), repo("bar")];
    let kept = filter_repositories(repos, "foo");
    assert_eq!(names(&kept), ["foo-svc", "my-foo"]);
}

#[test]
fn repository_listing_walks_all_pages_with_page_size_ten() {
    let source = FakeSource::with_repos(vec![
        vec![repo("foo-a"), repo("bar")],
        vec![repo("foo-b")],
    ]);

    let repos = collect_org_repositories(&source, "acme", "foo", false).unwrap();

    assert_eq!(names(&repos), ["foo-a", "foo-b"]);
    assert_eq!(
        source.calls(),
        ["repos acme page=1 per_page=10", "repos acme page=2 per_page=10"]
    );
}

#[test]
fn end_to_end_collection_of_filtered_repository() {
    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let source = FakeSource::with_repos(vec![vec![repo("foo-svc"), repo("bar")]])
        .commits_for(
            "foo-svc",
            vec![
                vec![
                    commit("a1", "Ada", "2024-01-02T09:05:00Z"),
                    commit("a2", "Ada", "2024-01-02T09:20:00Z"),
                ],
                vec![commit("a3", "Linus", "2024-01-03T17:40:00Z")],
            ],
        )
        .commits_for("bar", vec![vec![commit("b1", "Grace", "2024-01-02T10:00:00Z")]]);

    let repos = collect_org_repositories(&source, "acme", "foo", false).unwrap();
    assert_eq!(names(&repos), ["foo-svc"]);

    let commits = collect_all_commits(&source, &repos, since, false).unwrap();
    let shas: Vec<_> = commits.iter().map(|c| c.sha.as_str()).collect();
    assert_eq!(shas, ["a1", "a2", "a3"]);

    let calls = source.calls();
    assert!(calls.contains(&"commits foo-svc page=1 per_page=100".to_string()));
    assert!(calls.contains(&"commits foo-svc page=2 per_page=100".to_string()));
    assert!(!calls.iter().any(|c| c.starts_with("commits bar")));
}

#[test]
fn commits_are_concatenated_in_repository_order() {
    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let source = FakeSource::with_repos(vec![])
        .commits_for("one", vec![vec![commit("1a", "Ada", "2024-01-02T09:05:00Z")]])
        .commits_for("two", vec![vec![commit("2a", "Ada", "2024-01-02T08:05:00Z")]]);

    let commits = collect_all_commits(&source, &[repo("one"), repo("two")], since, false).unwrap();
    let shas: Vec<_> = commits.iter().map(|c| c.sha.as_str()).collect();
    assert_eq!(shas, ["1a", "2a"]);
}

#[test]
fn repository_without_commits_collects_nothing() {
    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let source = FakeSource::default();
    let commits = collect_commits(&source, &repo("quiet"), since, false).unwrap();
    assert!(commits.is_empty());
}

#[test]
fn commit_fetch_failure_aborts_collection() {
    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut source = FakeSource::default()
        .commits_for("one", vec![vec![commit("1a", "Ada", "2024-01-02T09:05:00Z")]]);
    source.failing_repo = Some("two".to_string());

    let result = collect_all_commits(
        &source,
        &[repo("one"), repo("two"), repo("three")],
        since,
        false,
    );

    assert!(matches!(result, Err(OrghistError::Api { status: 500, .. })));
    assert!(!source.calls().iter().any(|c| c.starts_with("commits three")));
}
