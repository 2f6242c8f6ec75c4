//! Per-run settings: config file and environment, overridden by CLI flags.

use anyhow::{Context, Result};
use graphql_erd::LabelOptions;
use graphql_erd_config::ErdConfig;
use graphql_erd_render::{DotOptions, Graphviz, RankDir, DEFAULT_GRAPHVIZ};
use graphql_introspect::{IntrospectionClient, DEFAULT_TIMEOUT_SECS};
use std::path::PathBuf;
use std::time::Duration;

/// Flags that tune a run. Each one overrides the matching config value.
#[derive(Debug, Default, clap::Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunArgs {
    /// Show field arguments on edge labels instead of "..."
    #[arg(long)]
    pub expand_args: bool,

    /// Show argument types when field arguments are shown
    #[arg(long)]
    pub expand_arg_types: bool,

    /// Path to a config file (default: nearest .graphql-erd.{yml,yaml,json,toml})
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// HTTP headers to include in the introspection request (can be specified multiple times)
    /// Format: "Header-Name: Header-Value"
    /// These are merged with headers from the config file (CLI takes precedence)
    #[arg(long = "header", short = 'H', value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Number of retry attempts on failure (overrides config file)
    #[arg(long)]
    pub retry: Option<u32>,

    /// Graphviz program used to render the SVG (overrides config file)
    #[arg(long, value_name = "PROGRAM")]
    pub graphviz: Option<String>,

    /// Rank direction: LR, TB, RL or BT (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub rank_dir: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub labels: LabelOptions,
    pub headers: Vec<(String, String)>,
    pub timeout: u64,
    pub retry: u32,
    pub graphviz: String,
    pub dot: DotOptions,
}

impl RunSettings {
    #[must_use]
    pub fn client(&self) -> IntrospectionClient {
        IntrospectionClient::new()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_retries(self.retry)
            .with_headers(self.headers.iter().cloned())
    }

    #[must_use]
    pub fn graphviz(&self) -> Graphviz {
        Graphviz::new(&self.graphviz)
    }
}

/// Parses a header string in "Name: Value" format.
pub fn parse_header(header: &str) -> Result<(String, String)> {
    let Some((name, value)) = header.split_once(':') else {
        anyhow::bail!("Invalid header format: '{header}'. Expected 'Header-Name: Header-Value'");
    };
    let name = name.trim().to_string();
    let value = value.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("Header name cannot be empty");
    }
    Ok((name, value))
}

/// Layers CLI flags over the loaded configuration.
pub fn resolve_settings(args: &RunArgs, config: ErdConfig) -> Result<RunSettings> {
    // Start with headers from config
    let mut headers: Vec<(String, String)> = config.introspection.headers.into_iter().collect();

    // Parse and merge CLI headers (CLI takes precedence)
    let cli_parsed = args
        .headers
        .iter()
        .map(|h| parse_header(h))
        .collect::<Result<Vec<_>>>()
        .context("Failed to parse headers")?;

    for (name, value) in cli_parsed {
        // Remove existing header with same name (case-insensitive)
        headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        headers.push((name, value));
    }

    let rank_dir = match args.rank_dir.as_deref().or(config.render.rank_dir.as_deref()) {
        Some(dir) => dir.parse::<RankDir>().map_err(anyhow::Error::msg)?,
        None => RankDir::default(),
    };

    Ok(RunSettings {
        labels: LabelOptions {
            expand_args: args.expand_args || config.labels.expand_args,
            expand_arg_types: args.expand_arg_types || config.labels.expand_arg_types,
        },
        headers,
        // CLI overrides config values
        timeout: args
            .timeout
            .or(config.introspection.timeout)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
        retry: args.retry.or(config.introspection.retry).unwrap_or(0),
        graphviz: args
            .graphviz
            .clone()
            .or(config.render.graphviz)
            .unwrap_or_else(|| DEFAULT_GRAPHVIZ.to_string()),
        dot: DotOptions { rank_dir },
    })
}
