//! Rendering of GraphQL entity-relationship graphs.
//!
//! [`render_dot`] lays the graph out as Graphviz DOT text, with every node
//! drawn as a borderless table built from its [`Descriptor`]. [`Graphviz`]
//! turns that text into an SVG document.

mod dot;
mod error;
mod graphviz;

pub use dot::{escape_html, escape_quoted, DotBuilder};
pub use error::{RenderError, Result};
pub use graphviz::{Graphviz, DEFAULT_GRAPHVIZ};

use graphql_erd::{Descriptor, Edge};
use std::fmt::Write;
use std::str::FromStr;

/// Direction in which graph ranks are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankDir {
    #[default]
    LeftRight,
    TopBottom,
    RightLeft,
    BottomTop,
}

impl RankDir {
    #[must_use]
    pub const fn as_dot(self) -> &'static str {
        match self {
            Self::LeftRight => "LR",
            Self::TopBottom => "TB",
            Self::RightLeft => "RL",
            Self::BottomTop => "BT",
        }
    }
}

impl FromStr for RankDir {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LR" => Ok(Self::LeftRight),
            "TB" => Ok(Self::TopBottom),
            "RL" => Ok(Self::RightLeft),
            "BT" => Ok(Self::BottomTop),
            _ => Err(format!("unknown rank direction '{s}', expected LR, TB, RL or BT")),
        }
    }
}

/// Layout options for [`render_dot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotOptions {
    pub rank_dir: RankDir,
}

/// Renders nodes and edges as a DOT digraph.
///
/// `node_id` names each node (edges refer to nodes by that name) and
/// `node_descriptor` provides the table drawn inside it. Nodes and edges are
/// written in the order given.
#[tracing::instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn render_dot<N, I, D>(
    nodes: &[N],
    edges: &[Edge],
    node_id: I,
    node_descriptor: D,
    options: &DotOptions,
) -> Result<String>
where
    I: Fn(&N) -> String,
    D: Fn(&N) -> graphql_erd::Result<Descriptor>,
{
    let mut dot = DotBuilder::new("schema");
    dot.attr("rankdir", options.rank_dir.as_dot())
        .node_defaults(&[("shape", "plain")])
        .blank();

    for node in nodes {
        let descriptor = node_descriptor(node)?;
        dot.html_node(&node_id(node), &table_label(&descriptor));
    }

    if !edges.is_empty() {
        dot.blank();
    }
    for edge in edges {
        dot.edge_with_attrs(
            &edge.source,
            &edge.target,
            &[
                ("label", edge.label.as_str()),
                ("tooltip", edge.tooltip.as_str()),
            ],
        );
    }

    Ok(dot.build())
}

/// HTML-like table for a node: a header cell with the name in bold and the
/// stereotype below it, then one left-aligned cell per row.
#[must_use]
pub fn table_label(descriptor: &Descriptor) -> String {
    let mut html = String::from(
        r#"<table border="0" cellborder="1" cellspacing="0" cellpadding="4">"#,
    );
    let _ = write!(
        html,
        "<tr><td><b>{}</b><br/>{}</td></tr>",
        escape_html(&descriptor.name),
        escape_html(descriptor.stereotype_label())
    );
    for row in &descriptor.rows {
        let _ = write!(html, r#"<tr><td align="left">{}</td></tr>"#, escape_html(row));
    }
    html.push_str("</table>");
    html
}
