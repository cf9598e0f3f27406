//! Optional `dijkstra.toml` settings.
//!
//! Every key is optional; command-line flags take precedence.
//!
//! ```toml
//! [parse]
//! lenient = false
//!
//! [engine]
//! frontier = "ordered-set"   # or "binary-heap"
//! threads = 4                # omit to run sources one after another
//!
//! [output]
//! format = "table"           # "plain", "json"
//! art_file = "graph_output.dat"
//! draw_art = true
//! ```

use std::path::Path;
use std::path::PathBuf;

use clap::ValueEnum;
use dijkstra::Frontier;
use serde::Deserialize;

use crate::output::OutputFormat;

pub const DEFAULT_CONFIG_FILE: &str = "dijkstra.toml";

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseSection,

    #[serde(default)]
    pub engine: EngineSection,

    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ParseSection {
    /// Drop a trailing target without weight instead of failing.
    #[serde(default)]
    pub lenient: bool,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct EngineSection {
    #[serde(default)]
    pub frontier: Option<FrontierChoice>,

    /// Worker threads for running sources in parallel; 0 means one per core.
    #[serde(default)]
    pub threads: Option<usize>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputSection {
    #[serde(default)]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub art_file: Option<PathBuf>,

    #[serde(default)]
    pub draw_art: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrontierChoice {
    #[default]
    OrderedSet,
    BinaryHeap,
}

impl From<FrontierChoice> for Frontier {
    fn from(choice: FrontierChoice) -> Self {
        match choice {
            FrontierChoice::OrderedSet => Frontier::OrderedSet,
            FrontierChoice::BinaryHeap => Frontier::BinaryHeap,
        }
    }
}

impl Config {
    /// Loads `explicit`, or `dijkstra.toml` in the working directory.
    ///
    /// A missing default file is silent. Unreadable or invalid files are logged
    /// and replaced by defaults.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = explicit.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        if explicit.is_none() && !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
            }
        }
        Self::default()
    }
}
