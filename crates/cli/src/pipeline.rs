//! The fetch, build and render sequence behind a single invocation.

use crate::output::{write_atomic, OutputPaths};
use crate::settings::RunSettings;
use crate::OutputOptions;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_erd::descriptor;
use graphql_erd_render::render_dot;
use graphql_introspect::{load_introspection, SchemaSource};
use std::path::Path;
use std::time::Instant;

/// Runs every stage in order. Each stage finishes before the next begins and
/// the first failure ends the run.
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn run(
    source: &SchemaSource,
    paths: &OutputPaths,
    settings: &RunSettings,
    output: OutputOptions,
) -> Result<()> {
    let start_time = Instant::now();

    let message = if source.is_remote() {
        format!("Fetching schema from {source}...")
    } else {
        format!("Reading schema from {source}...")
    };
    let spinner = crate::progress::spinner(&message, output.show_progress);
    let document = settings.client().fetch_document(source).await;
    spinner.finish_and_clear();
    let document = document.with_context(|| format!("Failed to load schema from {source}"))?;

    write_output(&paths.json, document.as_bytes())?;
    report(output, "Schema saved to", &paths.json);

    let response = load_introspection(&paths.json)
        .with_context(|| format!("Failed to read schema from {}", paths.json.display()))?;
    let graph = graphql_erd::build(&response.data.schema.types, &settings.labels)
        .context("Failed to build the schema graph")?;
    tracing::info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "Built schema graph"
    );

    let dot = render_dot(
        &graph.nodes,
        &graph.edges,
        |ty| ty.name().to_string(),
        |ty| descriptor(ty),
        &settings.dot,
    )
    .context("Failed to describe the diagram")?;
    write_output(&paths.dot, dot.as_bytes())?;
    report(output, "Diagram source written to", &paths.dot);

    let graphviz = settings.graphviz();
    let svg = graphviz.render_svg(&dot).with_context(|| {
        format!(
            "Failed to render {} with {}",
            paths.dot.display(),
            graphviz.program().display()
        )
    })?;
    write_output(&paths.svg, &svg)?;
    report(output, "Diagram rendered to", &paths.svg);

    if output.show_info {
        let duration = start_time.elapsed();
        println!("  {} {:.2}s", "⏱".dimmed(), duration.as_secs_f64());
    }

    Ok(())
}

fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    write_atomic(path, contents).with_context(|| format!("Failed to write to {}", path.display()))
}

fn report(output: OutputOptions, action: &str, path: &Path) {
    if output.show_info {
        println!(
            "{} {action} {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{resolve_settings, RunArgs};
    use graphql_erd_config::ErdConfig;
    use httpmock::MockServer;

    const SCHEMA: &str = r#"{"data":{"__schema":{"types":[
        {"kind":"OBJECT","name":"Book","fields":[
            {"name":"title","args":[],"type":{"kind":"SCALAR","name":"String","ofType":null}},
            {"name":"author","args":[],"type":{"kind":"OBJECT","name":"Author","ofType":null}}
        ]},
        {"kind":"OBJECT","name":"Author","fields":[]},
        {"kind":"SCALAR","name":"String"}
    ]}}}"#;

    const QUIET: OutputOptions = OutputOptions {
        show_progress: false,
        show_info: false,
    };

    fn settings(graphviz: &str) -> RunSettings {
        let args = RunArgs {
            graphviz: Some(graphviz.to_string()),
            ..RunArgs::default()
        };
        resolve_settings(&args, ErdConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::from_base(&dir.path().join("out"));
        let source = SchemaSource::File(dir.path().join("missing.json"));

        let result = run(&source, &paths, &settings("dot"), QUIET).await;

        assert!(result.is_err());
        assert!(!paths.json.exists());
        assert!(!paths.dot.exists());
    }

    #[tokio::test]
    async fn test_malformed_input_stops_after_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("schema.json");
        std::fs::write(&input, r#"{"data": {}}"#).unwrap();
        let paths = OutputPaths::from_base(&dir.path().join("out"));

        let result = run(&SchemaSource::File(input), &paths, &settings("dot"), QUIET).await;

        let err = result.unwrap_err();
        assert_eq!(
            crate::exit_code::ExitCode::from_error(&err),
            crate::exit_code::ExitCode::ParseError
        );
        assert_eq!(std::fs::read_to_string(&paths.json).unwrap(), r#"{"data": {}}"#);
        assert!(!paths.dot.exists());
    }

    #[tokio::test]
    async fn test_failed_fetch_writes_no_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST).path("/graphql");
                then.status(500).body("upstream down");
            })
            .await;
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::from_base(&dir.path().join("remote"));
        let source = SchemaSource::parse(&server.url("/graphql"));

        let err = run(&source, &paths, &settings("dot"), QUIET)
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            crate::exit_code::ExitCode::from_error(&err),
            crate::exit_code::ExitCode::SchemaError
        );
        assert!(!paths.json.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_remote_schema_is_saved_pretty_printed() {
        let body: serde_json::Value = serde_json::from_str(SCHEMA).unwrap();
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(httpmock::Method::POST)
                    .path("/graphql")
                    .header("content-type", "application/json")
                    .json_body(serde_json::json!({
                        "query": graphql_introspect::INTROSPECTION_QUERY
                    }));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(body.clone());
            })
            .await;
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::from_base(&dir.path().join("remote"));
        let source = SchemaSource::parse(&server.url("/graphql"));

        // Graphviz is swapped for `false`, so the run stops after the .dot file.
        let result = run(&source, &paths, &settings("false"), QUIET).await;

        assert!(result.is_err());
        mock.assert_async().await;
        assert_eq!(
            std::fs::read_to_string(&paths.json).unwrap(),
            serde_json::to_string_pretty(&body).unwrap()
        );
        assert!(paths.dot.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_render_failure_keeps_earlier_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("schema.json");
        std::fs::write(&input, SCHEMA).unwrap();
        let paths = OutputPaths::from_base(&dir.path().join("library"));

        let result = run(
            &SchemaSource::File(input),
            &paths,
            &settings("false"),
            QUIET,
        )
        .await;

        let err = result.unwrap_err();
        assert_eq!(
            crate::exit_code::ExitCode::from_error(&err),
            crate::exit_code::ExitCode::RenderError
        );
        assert_eq!(std::fs::read_to_string(&paths.json).unwrap(), SCHEMA);
        let dot = std::fs::read_to_string(&paths.dot).unwrap();
        assert!(dot.contains("\"Book\" -> \"Author\" [label=\"author: Author\""));
        assert!(!paths.svg.exists());
    }
}
