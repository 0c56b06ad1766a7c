use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::CompareOptions;

/// Where reports go when neither the CLI nor the environment says otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "data/comparative_analysis.json";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; CLI flags override
/// whatever is set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Report destination (NEWSDIFF_OUTPUT)
    pub output_path: PathBuf,
    /// Coverage difference threshold (NEWSDIFF_SIMILARITY_THRESHOLD, default 0.7)
    pub similarity_threshold: f64,
    /// Topics per article when extracting (NEWSDIFF_MAX_TOPICS, default 5)
    pub max_topics: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            similarity_threshold: CompareOptions::default().similarity_threshold,
            max_topics: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; set but malformed ones are errors
    /// naming the variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("NEWSDIFF_OUTPUT").filter(|p| !p.is_empty()) {
            config.output_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup("NEWSDIFF_SIMILARITY_THRESHOLD") {
            let threshold: f64 = raw.trim().parse().with_context(|| {
                format!("NEWSDIFF_SIMILARITY_THRESHOLD must be a number, got {raw:?}")
            })?;
            if !(0.0..=1.0).contains(&threshold) {
                anyhow::bail!(
                    "NEWSDIFF_SIMILARITY_THRESHOLD must be between 0 and 1, got {threshold}"
                );
            }
            config.similarity_threshold = threshold;
        }

        if let Some(raw) = lookup("NEWSDIFF_MAX_TOPICS") {
            let max: usize = raw.trim().parse().with_context(|| {
                format!("NEWSDIFF_MAX_TOPICS must be a whole number, got {raw:?}")
            })?;
            if max == 0 {
                anyhow::bail!("NEWSDIFF_MAX_TOPICS must be at least 1");
            }
            config.max_topics = max;
        }

        Ok(config)
    }

    /// Comparison options derived from this configuration.
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            similarity_threshold: self.similarity_threshold,
            ..Default::default()
        }
    }
}
