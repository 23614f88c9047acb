use super::Bar;
use crate::aggregate::Histograms;
use console::style;

const TOP_AUTHORS: usize = 10;

pub fn output_summary(repos: usize, commits: usize, histograms: &Histograms, bars: &[Bar]) {
    println!("{}", style("Commit Time Summary").bold());
    println!("{}", "─".repeat(50));
    println!("Repositories: {}", style(repos).cyan());
    println!("Commits collected: {}", style(commits).cyan());
    if histograms.skipped > 0 {
        println!(
            "Skipped (missing author or date): {}",
            style(histograms.skipped).red()
        );
    }
    println!("Unique authors: {}", style(histograms.by_author.len()).yellow());

    if bars.is_empty() {
        println!("No data to display");
        return;
    }

    let max = bars.iter().map(|b| b.count).max().unwrap_or(1).max(1);
    println!("\n{}", style("Commits by time of day").bold());
    for bar in bars {
        let width = ((bar.count as f64 / max as f64) * 30.0).ceil() as usize;
        println!(
            "{:>5} {} {}",
            bar.label,
            style("█".repeat(width)).green(),
            bar.count
        );
    }

    println!("\n{}", style("Top authors").bold());
    for (name, count) in histograms.top_authors(TOP_AUTHORS) {
        println!("  {:<30} {:>6}", name, style(count).cyan());
    }
}
