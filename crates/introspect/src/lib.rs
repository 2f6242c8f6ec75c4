//! GraphQL introspection: the typed schema model, the introspection query,
//! and loading an introspection document from an endpoint or a file.
//!
//! # Examples
//!
//! ```no_run
//! use graphql_introspect::{parse_introspection, IntrospectionClient, SchemaSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = SchemaSource::parse("https://api.example.com/graphql");
//!     let document = IntrospectionClient::new().fetch_document(&source).await?;
//!     let introspection = parse_introspection(&document)?;
//!     println!("{} types", introspection.data.schema.types.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod query;
mod source;
mod types;

pub use client::{IntrospectionClient, DEFAULT_TIMEOUT_SECS};
pub use error::{IntrospectionError, Result};
pub use query::{load_introspection, parse_introspection, INTROSPECTION_QUERY};
pub use source::SchemaSource;
pub use types::*;
