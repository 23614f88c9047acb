use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: Owner,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: Owner { login: owner.into() },
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub author: Option<Signature>,
    #[serde(default)]
    pub committer: Option<Signature>,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a repository's commit listing. Fields the tool does not
/// interpret are kept in `extra` so the raw dump mirrors the API record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryCommit {
    pub sha: String,
    pub commit: CommitDetail,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RepositoryCommit {
    pub fn author_name(&self) -> Option<&str> {
        self.commit
            .author
            .as_ref()
            .and_then(|a| a.name.as_deref())
    }

    pub fn author_date(&self) -> Option<DateTime<Utc>> {
        self.commit.author.as_ref().and_then(|a| a.date)
    }
}
