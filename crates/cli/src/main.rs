mod color;
mod exit_code;
mod output;
mod pipeline;
mod progress;
mod settings;

use clap::Parser;
use colored::Colorize;
use exit_code::ExitCode;
use graphql_introspect::SchemaSource;
use output::OutputPaths;
use settings::{resolve_settings, RunArgs};
use std::path::Path;

const USAGE: &str = "Usage: graphql-erd <url-or-file> <output-name>";

#[derive(Parser)]
#[command(name = "graphql-erd")]
#[command(about = "Draw an entity-relationship diagram of a GraphQL schema", long_about = None)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// GraphQL endpoint (http...) or introspection JSON file, then the output name.
    /// Writes <output-name>.json, <output-name>.dot and <output-name>.svg
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    #[command(flatten)]
    run: RunArgs,

    /// Force colored output even when not a TTY
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,

    /// Suppress progress indicators (spinners)
    #[arg(long)]
    no_progress: bool,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show progress indicators (spinners)
    pub show_progress: bool,
    /// Whether to show informational output (success messages, summaries)
    pub show_info: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing();
    color::configure_colors(cli.color, cli.no_color);

    let code = match run(&cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from_error(&err)
        }
    };
    code.exit();
}

async fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let [locator, output_name] = cli.args.as_slice() else {
        println!("{USAGE}");
        return Ok(ExitCode::Success);
    };

    let output_opts = OutputOptions {
        show_progress: !cli.quiet && !cli.no_progress,
        show_info: !cli.quiet,
    };

    let current_dir = std::env::current_dir()?;
    let config = graphql_erd_config::resolve_config(cli.run.config.as_deref(), &current_dir)?;
    let settings = resolve_settings(&cli.run, config)?;
    tracing::debug!(?settings, "Resolved settings");

    let source = SchemaSource::parse(locator);
    let paths = OutputPaths::from_base(Path::new(output_name));
    pipeline::run(&source, &paths, &settings, output_opts).await?;

    Ok(ExitCode::Success)
}

/// Initialize tracing on stderr, filtered by `RUST_LOG` (off by default)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}
