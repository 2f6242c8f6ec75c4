//! Entity-relationship graphs for GraphQL schemas.
//!
//! Given the type list of an introspection result, [`build`] produces one
//! node per drawable type (everything except scalars and `__`-prefixed
//! introspection types) and one edge per relational field. [`descriptor`]
//! summarizes a node as a small table of its scalar fields and enum values.
//!
//! ```
//! use graphql_erd::{build, descriptor, LabelOptions};
//! use graphql_introspect::parse_introspection;
//!
//! let json = r#"{"data": {"__schema": {"types": [
//!     {"kind": "OBJECT", "name": "Book", "fields": [
//!         {"name": "title", "args": [], "type": {"kind": "SCALAR", "name": "String"}},
//!         {"name": "author", "args": [], "type": {"kind": "OBJECT", "name": "Author"}}
//!     ]},
//!     {"kind": "OBJECT", "name": "Author", "fields": []},
//!     {"kind": "SCALAR", "name": "String"}
//! ]}}}"#;
//!
//! let introspection = parse_introspection(json).unwrap();
//! let graph = build(&introspection.data.schema.types, &LabelOptions::default()).unwrap();
//!
//! assert_eq!(graph.nodes.len(), 2);
//! assert_eq!(graph.edges[0].label, "author: Author");
//! assert_eq!(descriptor(graph.nodes[0]).unwrap().rows, vec!["title: String"]);
//! ```

mod classify;
mod descriptor;
mod error;
mod graph;
mod label;
mod resolve;

pub use classify::{
    is_enum, is_internal, is_internal_name, is_relational_field, is_scalar, INTERNAL_PREFIX,
};
pub use descriptor::{descriptor, Descriptor, Stereotype};
pub use error::{ErdError, Result};
pub use graph::{build, is_node, Edge, SchemaGraph};
pub use label::{arg_to_string, field_label, format_args, LabelOptions, COLLAPSED_ARGS};
pub use resolve::{
    describe_type, terminal_type, unwrap_type, Unwrapped, Wrapper, MAX_WRAPPER_DEPTH,
};
