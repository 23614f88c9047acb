use crate::cli::Cli;
use crate::error::{OrghistError, Result};
use crate::report::LabelOrder;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEZONE: &str = "US/Pacific";
pub const REPO_PAGE_SIZE: u32 = 10;
pub const COMMIT_PAGE_SIZE: u32 = 100;

const SINCE_LAYOUT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone)]
pub struct Config {
    pub org: String,
    pub repo_filter: String,
    pub since: DateTime<Utc>,
    pub timezone: Tz,
    pub token: Option<String>,
    pub api_url: String,
    pub commits_path: PathBuf,
    pub chart_path: PathBuf,
    pub label_order: LabelOrder,
    pub show_progress: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let since = parse_since_time(&cli.since_time)?;
        let timezone = parse_timezone(&cli.timezone)?;

        if cli.org_name.trim().is_empty() {
            tracing::warn!("no organization given, the repository listing will fail");
        }

        Ok(Self {
            org: cli.org_name.clone(),
            repo_filter: cli.repo_prefix.clone(),
            since,
            timezone,
            token: cli.access_token.clone().filter(|t| !t.is_empty()),
            api_url: cli.api_url.trim_end_matches('/').to_string(),
            commits_path: cli.commits_out.clone(),
            chart_path: cli.chart_out.clone(),
            label_order: cli.label_order,
            show_progress: !cli.no_progress,
        })
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| OrghistError::Config(format!("Unknown timezone '{name}'")))
}

/// Parses `YYYY-MM-DDTHH:MM ZONE`, where ZONE is an abbreviation such as
/// `PST` or a numeric offset such as `+0530`.
pub fn parse_since_time(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    let (local, zone) = input.rsplit_once(' ').ok_or_else(|| {
        OrghistError::InvalidDate(format!(
            "'{input}' does not match YYYY-MM-DDTHH:MM ZONE"
        ))
    })?;

    if !matches_layout_widths(local) {
        return Err(OrghistError::InvalidDate(format!(
            "'{input}' does not match YYYY-MM-DDTHH:MM ZONE"
        )));
    }

    let naive = NaiveDateTime::parse_from_str(local, SINCE_LAYOUT)
        .map_err(|e| OrghistError::InvalidDate(format!("'{input}': {e}")))?;

    let offset = zone_offset(zone)
        .ok_or_else(|| OrghistError::InvalidDate(format!("Unknown zone '{zone}' in '{input}'")))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| OrghistError::InvalidDate(format!("'{input}' is not a valid instant")))
}

// chrono accepts unpadded fields; the layout does not.
fn matches_layout_widths(local: &str) -> bool {
    let bytes = local.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b'T',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

fn zone_offset(zone: &str) -> Option<FixedOffset> {
    if let Some(offset) = numeric_offset(zone) {
        return Some(offset);
    }

    let hours: f32 = match zone {
        "UTC" | "GMT" | "Z" | "UT" => 0.0,
        "WET" => 0.0,
        "BST" | "CET" | "WEST" => 1.0,
        "CEST" | "EET" => 2.0,
        "EEST" | "MSK" => 3.0,
        "IST" => 5.5,
        "HKT" | "SGT" | "AWST" => 8.0,
        "JST" | "KST" => 9.0,
        "ACST" => 9.5,
        "AEST" => 10.0,
        "AEDT" => 11.0,
        "NZST" => 12.0,
        "NZDT" => 13.0,
        "AST" | "EDT" => -4.0,
        "EST" | "CDT" => -5.0,
        "CST" | "MDT" => -6.0,
        "MST" | "PDT" => -7.0,
        "PST" | "AKDT" => -8.0,
        "AKST" => -9.0,
        "HST" => -10.0,
        _ => return None,
    };
    FixedOffset::east_opt((hours * 3600.0) as i32)
}

fn numeric_offset(zone: &str) -> Option<FixedOffset> {
    let (sign, rest) = match zone.as_bytes().first()? {
        b'+' => (1, &zone[1..]),
        b'-' => (-1, &zone[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (h, m) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if m >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (h * 3600 + m * 60))
}
