//! Result formatting for terminal, Markdown and JSON output

use crate::search::{QueryState, ScaledResult};
use serde::Serialize;

/// Output format for rendered results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per match
    #[default]
    Plain,
    /// Bulleted Markdown list
    Markdown,
    /// JSON array
    Json,
}

/// Flat JSON row for one match
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    symbol: &'a str,
    name: &'a str,
    word: &'a str,
    distance: f64,
    ratio: f64,
    bucket: u32,
}

impl<'a> From<&'a ScaledResult<'a>> for ResultRow<'a> {
    fn from(scaled: &'a ScaledResult<'a>) -> Self {
        Self {
            symbol: &scaled.result.entry.symbol,
            name: &scaled.result.entry.name,
            word: &scaled.result.word,
            distance: scaled.result.distance,
            ratio: scaled.ratio,
            bucket: scaled.bucket,
        }
    }
}

/// Render scaled results, keeping at most `limit` of them
pub fn render_results(
    results: &[ScaledResult<'_>],
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<String, serde_json::Error> {
    let shown = &results[..limit.map_or(results.len(), |l| l.min(results.len()))];

    match format {
        OutputFormat::Json => {
            let rows: Vec<ResultRow> = shown.iter().map(ResultRow::from).collect();
            serde_json::to_string_pretty(&rows)
        }
        OutputFormat::Plain => Ok(shown
            .iter()
            .map(|s| {
                format!(
                    "{}  {}  ({}, {:.3}, {:.1}%)",
                    s.result.entry.symbol,
                    display_name(&s.result.entry.name),
                    s.result.word,
                    s.result.distance,
                    s.ratio
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Markdown => {
            let mut output = format!("# Matches ({})\n\n", shown.len());
            for s in shown {
                output.push_str(&format!(
                    "- {} **{}** matched `{}` (score {:.3}, {:.1}%, rank {})\n",
                    s.result.entry.symbol,
                    display_name(&s.result.entry.name),
                    s.result.word,
                    s.result.distance,
                    s.ratio,
                    s.bucket
                ));
            }
            Ok(output)
        }
    }
}

/// Message for searches that produced no results
pub fn render_empty_state(state: QueryState, query: &str, format: OutputFormat) -> String {
    if format == OutputFormat::Json {
        return "[]".to_string();
    }

    match state {
        QueryState::Intro => {
            "Type at least two characters to search, or paste an emoji to find similar ones."
                .to_string()
        }
        QueryState::NoResults => format!("No emoji found for \"{}\"", query),
        QueryState::Results(_) => String::new(),
    }
}

fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Entry;
    use crate::search::SearchResult;

    fn scaled(entries: &[Entry]) -> Vec<ScaledResult<'_>> {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| ScaledResult {
                result: SearchResult {
                    entry,
                    distance: i as f64 * 0.5,
                    word: entry.descriptions[0].clone(),
                },
                ratio: 100.0 - i as f64 * 50.0,
                bucket: i as u32 * 3,
            })
            .collect()
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("🎉", "party_popper", ["party"]),
            Entry::new("🥳", "partying_face", ["partying"]),
        ]
    }

    #[test]
    fn test_render_plain() {
        let entries = entries();
        let output = render_results(&scaled(&entries), OutputFormat::Plain, None).unwrap();
        assert_eq!(
            output,
            "🎉  party popper  (party, 0.000, 100.0%)\n🥳  partying face  (partying, 0.500, 50.0%)"
        );
    }

    #[test]
    fn test_render_markdown_with_limit() {
        let entries = entries();
        let output = render_results(&scaled(&entries), OutputFormat::Markdown, Some(1)).unwrap();
        assert!(output.starts_with("# Matches (1)"));
        assert!(output.contains("- 🎉 **party popper** matched `party`"));
        assert!(!output.contains("partying face"));
    }

    #[test]
    fn test_render_json() {
        let entries = entries();
        let output = render_results(&scaled(&entries), OutputFormat::Json, Some(5)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["symbol"], "🎉");
        assert_eq!(value[1]["word"], "partying");
        assert_eq!(value[1]["bucket"], 3);
    }

    #[test]
    fn test_render_empty_state() {
        assert!(render_empty_state(QueryState::Intro, "p", OutputFormat::Plain).contains("two characters"));
        assert_eq!(
            render_empty_state(QueryState::NoResults, "xyz", OutputFormat::Markdown),
            "No emoji found for \"xyz\""
        );
        assert_eq!(render_empty_state(QueryState::NoResults, "xyz", OutputFormat::Json), "[]");
    }
}
