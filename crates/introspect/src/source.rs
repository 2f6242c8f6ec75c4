//! Where an introspection document comes from.

use std::fmt;
use std::path::PathBuf;

/// A schema locator: a GraphQL endpoint or a local introspection JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// Endpoint to send the introspection query to.
    Remote(String),
    /// Previously saved introspection result.
    File(PathBuf),
}

impl SchemaSource {
    /// Classifies a locator. Anything starting with `http` is fetched over the
    /// network; everything else is read from disk.
    #[must_use]
    pub fn parse(locator: &str) -> Self {
        if locator.starts_with("http") {
            Self::Remote(locator.to_string())
        } else {
            Self::File(PathBuf::from(locator))
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
