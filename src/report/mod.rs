pub mod chart;
pub mod dump;
pub mod summary;

pub use chart::{render_histogram, ChartLayout, CHART_SIZE};
pub use dump::write_commits_json;
pub use summary::output_summary;

use crate::bucket::Bucket;
use clap::ValueEnum;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LabelOrder {
    #[default]
    Chronological,
    Lexical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub count: u32,
}

pub fn ordered_bars(histogram: &HashMap<Bucket, u32>, order: LabelOrder) -> Vec<Bar> {
    let mut buckets: Vec<(&Bucket, &u32)> = histogram.iter().collect();
    match order {
        LabelOrder::Chronological => buckets.sort_by(|a, b| a.0.cmp(b.0)),
        LabelOrder::Lexical => buckets.sort_by_key(|(bucket, _)| bucket.label()),
    }

    buckets
        .into_iter()
        .map(|(bucket, count)| Bar {
            label: bucket.label(),
            count: *count,
        })
        .collect()
}
