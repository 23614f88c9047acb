use crate::bucket::{bucket_for, Bucket};
use crate::model::RepositoryCommit;
use chrono::TimeZone;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histograms {
    pub by_bucket: HashMap<Bucket, u32>,
    pub by_author: HashMap<String, u32>,
    /// Commits left out because the author name or date was missing.
    pub skipped: usize,
}

impl Histograms {
    pub fn bucket_total(&self) -> u32 {
        self.by_bucket.values().sum()
    }

    pub fn author_total(&self) -> u32 {
        self.by_author.values().sum()
    }

    pub fn top_authors(&self, limit: usize) -> Vec<(&str, u32)> {
        let mut authors: Vec<_> = self
            .by_author
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        authors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        authors.truncate(limit);
        authors
    }
}

pub fn aggregate<Tz: TimeZone>(commits: &[RepositoryCommit], tz: &Tz) -> Histograms {
    let mut histograms = Histograms::default();

    for commit in commits {
        let (author, date) = match (commit.author_name(), commit.author_date()) {
            (Some(author), Some(date)) => (author, date),
            _ => {
                tracing::warn!(sha = %commit.sha, "skipping commit without author name or date");
                histograms.skipped += 1;
                continue;
            }
        };

        *histograms.by_bucket.entry(bucket_for(&date, tz)).or_insert(0) += 1;
        *histograms.by_author.entry(author.to_string()).or_insert(0) += 1;
    }

    histograms
}
