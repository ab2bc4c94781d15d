// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_DEBOUNCE_MS: u64 = 50;
pub const DEFAULT_TREE_INDENT: u16 = 2;

/// Query engine selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Built-in path expressions (`a.b[0]`, `items[*].name`)
    #[default]
    Path,
    /// External jq binary
    Jq,
}

/// Query configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub engine: Engine,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            engine: Engine::Path,
        }
    }
}

/// Tree view configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TreeConfig {
    #[serde(default = "default_tree_indent")]
    pub indent: u16,
}

fn default_tree_indent() -> u16 {
    DEFAULT_TREE_INDENT
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            indent: DEFAULT_TREE_INDENT,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub tree: TreeConfig,
}
