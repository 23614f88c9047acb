use crate::aggregate::{aggregate, Histograms};
use crate::collect::{collect_all_commits, collect_org_repositories};
use crate::config::Config;
use crate::github::{CommitSource, GitHubClient};
use crate::model::{Repository, RepositoryCommit};
use crate::report::{
    ordered_bars, output_summary, render_histogram, write_commits_json, Bar, ChartLayout,
};
use anyhow::Context;

#[derive(Debug)]
pub struct RunReport {
    pub repositories: Vec<Repository>,
    pub commits: Vec<RepositoryCommit>,
    pub histograms: Histograms,
    pub bars: Vec<Bar>,
    pub dump_written: bool,
}

/// Collect, dump, aggregate and render. Fetch and render failures end the
/// run; a failed dump is logged and the run carries on.
pub fn run<S: CommitSource + ?Sized>(source: &S, config: &Config) -> anyhow::Result<RunReport> {
    let repositories = collect_org_repositories(
        source,
        &config.org,
        &config.repo_filter,
        config.show_progress,
    )
    .with_context(|| format!("Failed to list repositories of '{}'", config.org))?;

    let commits = collect_all_commits(source, &repositories, config.since, config.show_progress)
        .context("Failed to collect commits")?;

    let dump_written = match write_commits_json(&commits, &config.commits_path) {
        Ok(()) => {
            tracing::info!(path = %config.commits_path.display(), commits = commits.len(), "wrote commits");
            true
        }
        Err(e) => {
            tracing::warn!(path = %config.commits_path.display(), error = %e, "failed to write commits");
            false
        }
    };

    let histograms = aggregate(&commits, &config.timezone);
    let bars = ordered_bars(&histograms.by_bucket, config.label_order);
    tracing::info!(
        buckets = bars.len(),
        authors = histograms.by_author.len(),
        skipped = histograms.skipped,
        "aggregated commits"
    );
    tracing::debug!(histogram = ?bars, "date histogram");

    render_histogram(&bars, &config.chart_path, &ChartLayout::default())
        .context("Failed to render histogram chart")?;

    Ok(RunReport {
        repositories,
        commits,
        histograms,
        bars,
        dump_written,
    })
}

pub fn exec(config: Config) -> anyhow::Result<()> {
    let client = GitHubClient::from_config(&config).context("Failed to build GitHub client")?;
    let report = run(&client, &config)?;

    output_summary(
        report.repositories.len(),
        report.commits.len(),
        &report.histograms,
        &report.bars,
    );
    Ok(())
}
