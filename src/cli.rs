//! CLI mode implementation
//!
//! Provides the command-line interface for searching an emoji dataset

use clap::{Parser, Subcommand, ValueEnum};
use emojifind::format::OutputFormat;
use emojifind::search::{CostPreset, ScalePolicy, SearchOptions, ThresholdPolicy, Tokenizer, DEFAULT_THRESHOLD};
use std::path::PathBuf;

/// Emojifind CLI
#[derive(Parser)]
#[command(name = "emojifind")]
#[command(about = "Fuzzy as-you-type emoji lookup", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the dataset for emoji matching a query
    Search(SearchArgs),
    /// Print the weighted distance between two strings
    Distance(DistanceArgs),
}

/// How distances are turned into display ratios
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScaleMode {
    /// Relative to the closest and farthest match
    #[default]
    Minmax,
    /// Relative to the distance threshold
    Fixed,
}

/// Search command arguments
#[derive(Parser, Clone, Debug)]
pub struct SearchArgs {
    /// Query text or an emoji
    pub query: String,

    /// Path to the reshaped emoji JSON dataset
    #[arg(short = 'd', long = "data", env = "EMOJIFIND_DATA")]
    pub data: PathBuf,

    /// Maximum distance for a word to count as a match
    #[arg(short = 't', long, env = "EMOJIFIND_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Edit cost preset
    #[arg(short = 'c', long, env = "EMOJIFIND_COST", value_enum, default_value_t = CostPreset::Completion)]
    pub cost: CostPreset,

    /// Require distances strictly below the threshold
    #[arg(long)]
    pub exclusive: bool,

    /// Drop words shorter than three characters and skip whole-name phrases
    #[arg(long)]
    pub strict_tokens: bool,

    /// Ratio scaling mode
    #[arg(long, value_enum, default_value_t = ScaleMode::Minmax)]
    pub scale: ScaleMode,

    /// Hide matches whose min-max ratio falls below this percentage
    #[arg(long, default_value_t = 0.0)]
    pub ratio_floor: f64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Maximum number of results to print
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,
}

impl SearchArgs {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            threshold: self.threshold,
            threshold_policy: if self.exclusive {
                ThresholdPolicy::Exclusive
            } else {
                ThresholdPolicy::Inclusive
            },
            tokenizer: if self.strict_tokens {
                Tokenizer::strict()
            } else {
                Tokenizer::default()
            },
        }
    }

    pub fn scale_policy(&self) -> ScalePolicy {
        match self.scale {
            ScaleMode::Minmax => ScalePolicy::MinMax {
                ratio_floor: self.ratio_floor,
            },
            ScaleMode::Fixed => ScalePolicy::FixedThreshold {
                threshold: self.threshold,
            },
        }
    }
}

/// Distance command arguments
#[derive(Parser, Clone, Debug)]
pub struct DistanceArgs {
    /// Query (source) string
    pub source: String,

    /// Candidate (target) string
    pub target: String,

    /// Edit cost preset
    #[arg(short = 'c', long, env = "EMOJIFIND_COST", value_enum, default_value_t = CostPreset::Completion)]
    pub cost: CostPreset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_args_defaults() {
        let cli = Cli::try_parse_from(["emojifind", "search", "party", "--data", "emoji.json"]).unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search command");
        };

        assert_eq!(args.query, "party");
        assert_eq!(args.threshold, DEFAULT_THRESHOLD);
        assert_eq!(args.cost, CostPreset::Completion);
        assert_eq!(args.search_options(), SearchOptions::default());
        assert_eq!(args.scale_policy(), ScalePolicy::MinMax { ratio_floor: 0.0 });
    }

    #[test]
    fn test_search_args_overrides() {
        let cli = Cli::try_parse_from([
            "emojifind", "search", "tada", "-d", "emoji.json", "-t", "1", "--cost", "generic",
            "--exclusive", "--strict-tokens", "--scale", "fixed", "-f", "json", "-l", "10",
        ])
        .unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search command");
        };

        let options = args.search_options();
        assert_eq!(options.threshold, 1.0);
        assert_eq!(options.threshold_policy, ThresholdPolicy::Exclusive);
        assert_eq!(options.tokenizer, Tokenizer::strict());
        assert_eq!(args.cost, CostPreset::Generic);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.limit, Some(10));
        assert_eq!(args.scale_policy(), ScalePolicy::FixedThreshold { threshold: 1.0 });
    }

    #[test]
    fn test_distance_args() {
        let cli = Cli::try_parse_from(["emojifind", "distance", "ab", "abc", "-c", "unit"]).unwrap();
        let Commands::Distance(args) = cli.command else {
            panic!("expected distance command");
        };
        assert_eq!(args.source, "ab");
        assert_eq!(args.target, "abc");
        assert_eq!(args.cost, CostPreset::Unit);
    }

    #[test]
    fn test_search_requires_data() {
        // Guard against an inherited EMOJIFIND_DATA satisfying the requirement
        if std::env::var_os("EMOJIFIND_DATA").is_none() {
            assert!(Cli::try_parse_from(["emojifind", "search", "party"]).is_err());
        }
    }
}
