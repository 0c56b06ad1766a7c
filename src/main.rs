use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use newsdiff::analysis::report::CompanyReport;
use newsdiff::analysis::{self, similarity};
use newsdiff::articles::{ingest, models::ArticleBatch};
use newsdiff::config::Config;
use newsdiff::topics::{self, tfidf::TfIdfExtractor};

/// newsdiff: compare how news articles cover a company.
///
/// Reads processed articles (title, summary, sentiment, topics) and reports
/// the sentiment split, where coverage diverges, and which topics overlap.
#[derive(Parser)]
#[command(name = "newsdiff", version, about)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the comparative report for a JSON file of articles
    Compare {
        /// Articles: a JSON array, or an object with an "Articles" array
        input: PathBuf,

        /// Report destination (default: NEWSDIFF_OUTPUT or data/comparative_analysis.json)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Company the articles are about (overrides "Company" in the input)
        #[arg(short, long)]
        company: Option<String>,

        /// Fill empty topic sets with TF-IDF keywords before comparing
        #[arg(long)]
        extract_topics: bool,

        /// Write the full company report (articles, comparison, verdict)
        #[arg(long)]
        envelope: bool,
    },

    /// Turn raw "Title: description" lines into article records
    Ingest {
        /// Text file with one article per line
        input: PathBuf,

        /// Where to write the article JSON (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the similarity ratio of two summaries
    Similarity {
        first: String,
        second: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_filter = if cli.quiet { "newsdiff=warn" } else { "newsdiff=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Compare {
            input,
            output,
            company,
            extract_topics,
            envelope,
        } => {
            let config = Config::load()?;
            let batch = ArticleBatch::load(&input)?;
            let company = company.or(batch.company);
            let mut articles = batch.articles;
            info!(articles = articles.len(), input = %input.display(), "Loaded articles");

            if extract_topics {
                let extractor = TfIdfExtractor {
                    max_topics_per_article: config.max_topics,
                    ..Default::default()
                };
                topics::fill_missing_topics(&mut articles, &extractor)?;
            }

            let options = config.compare_options();
            let output = output.unwrap_or_else(|| config.output_path.clone());

            let (report, verdict) = if envelope {
                let company = company.context(
                    "--envelope needs a company name: pass --company or include \"Company\" in the input",
                )?;
                let full = CompanyReport::build(&company, articles, &options);
                newsdiff::output::json::write_report(&full, &output)?;
                (full.comparative, Some(full.final_sentiment))
            } else {
                let report = analysis::compare(&articles, &options);
                newsdiff::output::json::write_report(&report, &output)?;
                let verdict = company
                    .as_deref()
                    .map(|c| newsdiff::sentiment::verdict(c, &report.sentiment_distribution));
                (report, verdict)
            };

            newsdiff::output::terminal::display_report(&report, verdict.as_deref());
            println!(
                "{}",
                format!("Report saved to: {}", output.display()).bold()
            );
        }

        Commands::Ingest { input, output } => {
            let config = Config::load()?;
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let mut articles = ingest::parse_lines(&text);
            if articles.is_empty() {
                println!("No articles found in {}.", input.display());
                return Ok(());
            }

            let extractor = TfIdfExtractor {
                max_topics_per_article: config.max_topics,
                ..Default::default()
            };
            topics::fill_missing_topics(&mut articles, &extractor)?;

            match output {
                Some(path) => {
                    newsdiff::output::json::write_report(&articles, &path)?;
                    println!("Wrote {} articles to {}", articles.len(), path.display());
                }
                None => println!("{}", newsdiff::output::json::to_pretty_json(&articles)?),
            }
        }

        Commands::Similarity { first, second } => {
            let threshold = Config::load()?.similarity_threshold;
            let ratio = similarity::ratio(&first, &second);

            let verdict = if first.is_empty() || second.is_empty() {
                "missing summary (reported as a difference)".yellow()
            } else if ratio < threshold {
                format!("below {threshold} (reported as a difference)").red()
            } else {
                format!("at or above {threshold} (not reported)").green()
            };
            println!("Similarity: {ratio:.4}  {verdict}");
        }
    }

    Ok(())
}
