//! The introspection query and parsing of introspection documents.

use crate::{IntrospectionError, IntrospectionResponse, Result};
use std::path::Path;

/// Standard GraphQL introspection query.
///
/// Fetches every type with its fields, arguments, input fields and enum
/// values. Type references are nested up to 7 levels deep to handle complex
/// wrappers like `[[[String!]!]!]`.
pub const INTROSPECTION_QUERY: &str = r"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type {
    ...TypeRef
  }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
";

/// Parses an introspection document of the shape `{"data": {"__schema": {"types": [...]}}}`.
///
/// A GraphQL error response (an `errors` array without `data`) is reported
/// as [`IntrospectionError::Invalid`] carrying the server's messages.
#[tracing::instrument(skip(json), fields(size = json.len()))]
pub fn parse_introspection(json: &str) -> Result<IntrospectionResponse> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| IntrospectionError::Parse(e.to_string()))?;

    check_graphql_errors(&value)?;

    let response: IntrospectionResponse =
        serde_json::from_value(value).map_err(|e| IntrospectionError::Parse(e.to_string()))?;

    tracing::debug!(
        types = response.data.schema.types.len(),
        "Parsed introspection document"
    );
    Ok(response)
}

/// Reads and parses an introspection document from disk.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_introspection(path: &Path) -> Result<IntrospectionResponse> {
    let contents = std::fs::read_to_string(path).map_err(|source| IntrospectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_introspection(&contents)
}

/// Rejects a response that carries GraphQL errors and no data.
pub(crate) fn check_graphql_errors(value: &serde_json::Value) -> Result<()> {
    let has_data = value.get("data").is_some_and(|data| !data.is_null());
    let Some(errors) = value.get("errors").and_then(serde_json::Value::as_array) else {
        return Ok(());
    };
    if has_data {
        return Ok(());
    }

    let messages: Vec<&str> = errors
        .iter()
        .filter_map(|e| e.get("message").and_then(serde_json::Value::as_str))
        .collect();
    Err(IntrospectionError::Invalid(if messages.is_empty() {
        "server returned errors without data".to_string()
    } else {
        messages.join("; ")
    }))
}
