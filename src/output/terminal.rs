// Colored terminal output for comparative reports.

use colored::Colorize;

use crate::analysis::report::ComparativeReport;

/// Display a comparative report, with the verdict line when one is known.
pub fn display_report(report: &ComparativeReport, verdict: Option<&str>) {
    println!("\n{}", "=== Comparative Analysis ===".bold());

    display_sentiment(report);

    let count = report.difference_count();
    println!(
        "\n  {}",
        format!("Coverage differences ({count})").bold()
    );
    for (i, diff) in report.coverage_differences.iter().enumerate() {
        if diff.is_no_differences() {
            println!("    {} {}", diff.comparison.green(), diff.impact.dimmed());
        } else {
            println!("    {}. {}", i + 1, diff.comparison);
            println!("       {}", diff.impact.dimmed());
        }
    }

    let overlap = &report.topic_overlap;
    println!("\n  {}", "Topic overlap".bold());
    println!("    Common: {}", join(&overlap.common_topics).cyan());
    println!("    Unique: {}", join(&overlap.unique_topics).yellow());

    if let Some(verdict) = verdict {
        println!("\n  {}", verdict.bold());
    }
    println!();
}

fn display_sentiment(report: &ComparativeReport) {
    println!("\n  {}", "Sentiment distribution".bold());

    let total: usize = report.sentiment_distribution.values().sum();
    if total == 0 {
        println!("    {}", "No scored articles".dimmed());
        return;
    }

    let bar_width: usize = 20;
    for (label, count) in &report.sentiment_distribution {
        let filled = (*count as f64 / total as f64 * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );
        println!("    {:<10} {} {}", label, colorize_label(label, &bar), count);
    }
}

/// Color a bar by the sentiment it represents.
fn colorize_label(label: &str, text: &str) -> colored::ColoredString {
    match label {
        "positive" => text.green(),
        "negative" => text.red(),
        "neutral" => text.normal(),
        _ => text.dimmed(),
    }
}

fn join<'a>(topics: impl IntoIterator<Item = &'a String>) -> String {
    topics
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
