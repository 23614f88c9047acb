use super::{next_page_from_link, CommitSource};
use crate::config::Config;
use crate::error::{OrghistError, Result};
use crate::model::{Repository, RepositoryCommit};
use crate::paginate::{ListOptions, Page};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use serde::de::DeserializeOwned;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("orghist/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        if config.token.is_none() {
            tracing::warn!("ACCESS_TOKEN is not set, requests will be unauthenticated");
        }
        Self::new(config.api_url.clone(), config.token.clone())
    }

    fn get(&self, path: &str, opts: &ListOptions) -> RequestBuilder {
        let mut req = self
            .http
            .get(format!("{}{}", self.api_url, path))
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .query(&[("per_page", opts.per_page)]);
        if let Some(page) = opts.page {
            req = req.query(&[("page", page)]);
        }
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        req
    }

    fn fetch_page<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<Page<T>> {
        let resp = req.send()?;
        let status = resp.status();
        let url = resp.url().to_string();

        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(OrghistError::Api {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let next_page = resp
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_page_from_link);
        let items: Vec<T> = resp.json()?;

        Ok(Page { items, next_page })
    }
}

impl CommitSource for GitHubClient {
    fn list_org_repositories(&self, org: &str, opts: &ListOptions) -> Result<Page<Repository>> {
        let req = self.get(&format!("/orgs/{org}/repos"), opts);
        self.fetch_page(req)
    }

    fn list_commits(
        &self,
        repo: &Repository,
        since: DateTime<Utc>,
        opts: &ListOptions,
    ) -> Result<Page<RepositoryCommit>> {
        let req = self
            .get(
                &format!("/repos/{}/{}/commits", repo.owner.login, repo.name),
                opts,
            )
            .query(&[("since", since.to_rfc3339_opts(SecondsFormat::Secs, true))]);
        self.fetch_page(req)
    }
}
