//! Nodes and edges of the entity-relationship graph.

use crate::classify::{is_internal, is_internal_name, is_relational_field, is_scalar};
use crate::label::{field_label, LabelOptions};
use crate::resolve::unwrap_type;
use crate::Result;
use graphql_introspect::IntrospectionType;

/// One relational field, drawn from its owning type to the field's terminal type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub label: String,
    /// The field's description, or empty.
    pub tooltip: String,
}

/// Nodes and edges in schema declaration order.
#[derive(Debug, Clone)]
pub struct SchemaGraph<'a> {
    pub nodes: Vec<&'a IntrospectionType>,
    pub edges: Vec<Edge>,
}

/// Scalars and the introspection system's own types are not drawn.
#[must_use]
pub fn is_node(ty: &IntrospectionType) -> bool {
    !is_internal(ty) && !is_scalar(ty)
}

/// Builds the graph for a schema's type list.
///
/// Every relational field yields its own edge, so two fields pointing at the
/// same type are drawn as parallel edges.
#[tracing::instrument(skip_all, fields(types = types.len()))]
pub fn build<'a>(types: &'a [IntrospectionType], options: &LabelOptions) -> Result<SchemaGraph<'a>> {
    let nodes: Vec<&IntrospectionType> = types.iter().filter(|ty| is_node(ty)).collect();
    let mut edges = Vec::new();

    for ty in &nodes {
        for field in ty.fields() {
            if !is_relational_field(field)? {
                continue;
            }
            let target = unwrap_type(&field.type_ref)?.name()?.to_string();
            if is_internal_name(&target) {
                tracing::trace!(source = ty.name(), field = %field.name, "Skipping edge to internal type");
                continue;
            }
            edges.push(Edge {
                source: ty.name().to_string(),
                target,
                label: field_label(field, options)?,
                tooltip: field.description.clone().unwrap_or_default(),
            });
        }
    }

    tracing::debug!(nodes = nodes.len(), edges = edges.len(), "Built schema graph");
    Ok(SchemaGraph { nodes, edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_introspect::{
        IntrospectionField, IntrospectionObjectType, IntrospectionScalarType,
        IntrospectionTypeRefFull, TypeKind,
    };

    fn object(name: &str, fields: Vec<IntrospectionField>) -> IntrospectionType {
        IntrospectionType::Object(IntrospectionObjectType {
            name: name.to_string(),
            description: None,
            fields,
            interfaces: Vec::new(),
        })
    }

    fn field(name: &str, type_ref: IntrospectionTypeRefFull) -> IntrospectionField {
        IntrospectionField {
            name: name.to_string(),
            description: None,
            args: Vec::new(),
            type_ref,
        }
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let author = || IntrospectionTypeRefFull::named(TypeKind::Object, "Author");
        let types = vec![
            object(
                "Book",
                vec![field("author", author()), field("editor", author())],
            ),
            object("Author", Vec::new()),
        ];

        let graph = build(&types, &LabelOptions::default()).unwrap();
        let labels: Vec<_> = graph.edges.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["author: Author", "editor: Author"]);
        assert!(graph
            .edges
            .iter()
            .all(|e| e.source == "Book" && e.target == "Author"));
    }

    #[test]
    fn test_edges_to_internal_types_are_skipped() {
        let types = vec![
            object(
                "Query",
                vec![field(
                    "schema",
                    IntrospectionTypeRefFull::named(TypeKind::Object, "__Schema"),
                )],
            ),
            object("__Schema", Vec::new()),
        ];

        let graph = build(&types, &LabelOptions::default()).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_scalars_are_not_nodes() {
        let string = IntrospectionType::Scalar(IntrospectionScalarType {
            name: "String".to_string(),
            description: None,
        });
        assert!(!is_node(&string));
        assert!(is_node(&object("Book", Vec::new())));
    }

    #[test]
    fn test_malformed_field_type_fails_the_build() {
        let dangling = IntrospectionTypeRefFull {
            kind: TypeKind::NonNull,
            name: None,
            of_type: None,
        };
        let types = vec![object("Book", vec![field("broken", dangling)])];
        assert!(build(&types, &LabelOptions::default()).is_err());
    }
}
