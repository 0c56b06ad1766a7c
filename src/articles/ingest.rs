// Raw article ingestion.
//
// The news search collaborator hands back one "Title: description" string per
// article. The title is everything before the first colon (the whole line if
// there is none) and the full line doubles as the summary until a summarizer
// replaces it.

use super::models::ArticleRecord;

/// The title portion of a raw "Title: description" line.
pub fn title_from_line(line: &str) -> &str {
    line.split(':').next().unwrap_or(line)
}

/// Turn one raw line into an unscored article with no topics yet.
pub fn parse_line(line: &str) -> ArticleRecord {
    ArticleRecord {
        title: title_from_line(line).to_string(),
        summary: line.to_string(),
        sentiment: String::new(),
        topics: Default::default(),
    }
}

/// Parse every non-blank line of `text` into an article, in order.
pub fn parse_lines(text: &str) -> Vec<ArticleRecord> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}
