use crate::error::{OrghistError, Result};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub per_page: u32,
}

impl ListOptions {
    pub fn new(per_page: u32) -> Self {
        Self { page: None, per_page }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page: Option<u32>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self { items, next_page: None }
    }

    pub fn with_next(items: Vec<T>, next_page: u32) -> Self {
        Self {
            items,
            next_page: Some(next_page),
        }
    }
}

pub fn fetch_all_pages<T, F>(per_page: u32, fetch: F) -> Result<Vec<T>>
where
    F: FnMut(&ListOptions) -> Result<Page<T>>,
{
    fetch_all_pages_with_progress(per_page, "", false, fetch)
}

/// Calls `fetch` from the first page onwards, following `next_page` until a
/// page reports none, and returns every item in source order. The first
/// error aborts the walk.
pub fn fetch_all_pages_with_progress<T, F>(
    per_page: u32,
    label: &str,
    show_progress: bool,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(&ListOptions) -> Result<Page<T>>,
{
    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} ({pos} fetched)")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Fetching {label}..."));
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut opts = ListOptions::new(per_page);
    let mut all = Vec::new();

    loop {
        let page = match fetch(&opts) {
            Ok(page) => page,
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        };
        tracing::debug!(
            page = opts.page.unwrap_or(1),
            items = page.items.len(),
            next = ?page.next_page,
            "fetched page"
        );
        pb.inc(page.items.len() as u64);
        all.extend(page.items);

        match page.next_page {
            None => break,
            Some(next) => {
                let current = opts.page.unwrap_or(1);
                if next <= current {
                    pb.abandon();
                    return Err(OrghistError::Pagination(format!(
                        "next page {next} does not advance past page {current}"
                    )));
                }
                opts.page = Some(next);
            }
        }
    }

    pb.finish_and_clear();
    Ok(all)
}
