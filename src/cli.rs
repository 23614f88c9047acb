use crate::config::{Config, DEFAULT_API_URL, DEFAULT_TIMEZONE};
use crate::report::LabelOrder;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "orghist")]
#[command(about = "Time-of-day histogram of commits across a GitHub organization's repositories")]
#[command(version)]
pub struct Cli {
    #[arg(long = "orgName", alias = "org-name", default_value = "", help = "GitHub organization name")]
    pub org_name: String,

    #[arg(
        long = "repoPrefix",
        alias = "repo-prefix",
        default_value = "",
        help = "Only repositories whose name contains this text"
    )]
    pub repo_prefix: String,

    #[arg(
        long = "sinceTime",
        alias = "since-time",
        default_value = "",
        help = "Only commits authored after this time, e.g. 2018-03-01T09:00 PST"
    )]
    pub since_time: String,

    #[arg(long, default_value = DEFAULT_TIMEZONE, help = "IANA timezone used to bucket commit times")]
    pub timezone: String,

    #[arg(long, env = "ACCESS_TOKEN", hide_env_values = true, help = "GitHub access token")]
    pub access_token: Option<String>,

    #[arg(long, default_value = DEFAULT_API_URL, help = "GitHub API base URL")]
    pub api_url: String,

    #[arg(long, default_value = "commits.json", help = "Where to write the raw commits")]
    pub commits_out: PathBuf,

    #[arg(long, default_value = "bar.png", help = "Where to write the histogram chart")]
    pub chart_out: PathBuf,

    #[arg(long, value_enum, default_value_t = LabelOrder::Chronological, help = "Order of the chart bars")]
    pub label_order: LabelOrder,

    #[arg(long, help = "Disable progress spinners")]
    pub no_progress: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let config = Config::from_cli(&self).context("Invalid configuration")?;
        crate::exec::exec(config)
    }
}
