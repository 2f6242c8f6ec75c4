//! Type definitions for GraphQL introspection responses.
//!
//! These types mirror the structure of GraphQL introspection query responses
//! and can be deserialized from JSON using serde. Deserialization is strict:
//! a document missing `__schema` or `types`, or a type with an unknown
//! `kind`, is rejected instead of being read as an empty schema.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level introspection response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    pub data: IntrospectionData,
}

/// Data field of the introspection response containing the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// Complete GraphQL schema information from introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub query_type: Option<IntrospectionTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<IntrospectionTypeRef>,
    #[serde(default)]
    pub subscription_type: Option<IntrospectionTypeRef>,
    pub types: Vec<IntrospectionType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionTypeRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum IntrospectionType {
    #[serde(rename = "SCALAR")]
    Scalar(IntrospectionScalarType),
    #[serde(rename = "OBJECT")]
    Object(IntrospectionObjectType),
    #[serde(rename = "INTERFACE")]
    Interface(IntrospectionInterfaceType),
    #[serde(rename = "UNION")]
    Union(IntrospectionUnionType),
    #[serde(rename = "ENUM")]
    Enum(IntrospectionEnumType),
    #[serde(rename = "INPUT_OBJECT")]
    InputObject(IntrospectionInputObjectType),
}

impl IntrospectionType {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(t) => &t.name,
            Self::Object(t) => &t.name,
            Self::Interface(t) => &t.name,
            Self::Union(t) => &t.name,
            Self::Enum(t) => &t.name,
            Self::InputObject(t) => &t.name,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
            Self::Union(_) => TypeKind::Union,
            Self::Enum(_) => TypeKind::Enum,
            Self::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Output fields of an object or interface; empty for every other kind.
    #[must_use]
    pub fn fields(&self) -> &[IntrospectionField] {
        match self {
            Self::Object(t) => &t.fields,
            Self::Interface(t) => &t.fields,
            _ => &[],
        }
    }

    /// Values of an enum; empty for every other kind.
    #[must_use]
    pub fn enum_values(&self) -> &[IntrospectionEnumValue] {
        match self {
            Self::Enum(t) => &t.enum_values,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionScalarType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionObjectType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub fields: Vec<IntrospectionField>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub interfaces: Vec<IntrospectionTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInterfaceType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub fields: Vec<IntrospectionField>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub interfaces: Vec<IntrospectionTypeRef>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub possible_types: Vec<IntrospectionTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionUnionType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub possible_types: Vec<IntrospectionTypeRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub enum_values: Vec<IntrospectionEnumValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputObjectType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub input_fields: Vec<IntrospectionInputValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionField {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRefFull,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionInputValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_ref: IntrospectionTypeRefFull,
    #[serde(default)]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionEnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A possibly wrapped type reference.
///
/// `LIST` and `NON_NULL` references carry no name and point at the wrapped
/// reference through `of_type`; every other kind is a named reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRefFull {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<IntrospectionTypeRefFull>>,
}

impl IntrospectionTypeRefFull {
    /// A named, unwrapped reference.
    #[must_use]
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// `[inner]`
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// `inner!`
    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// Whether this kind only ever appears as a modifier around another reference.
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }
}

/// Servers emit `null` rather than `[]` for list-valued keys that do not
/// apply to a type's kind.
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_object_with_null_args() {
        let json = r#"{
            "kind": "OBJECT",
            "name": "Book",
            "description": null,
            "fields": [
                {
                    "name": "title",
                    "description": null,
                    "args": null,
                    "type": { "kind": "SCALAR", "name": "String", "ofType": null }
                }
            ],
            "interfaces": null,
            "enumValues": null
        }"#;

        let ty: IntrospectionType = serde_json::from_str(json).unwrap();
        assert_eq!(ty.kind(), TypeKind::Object);
        assert_eq!(ty.name(), "Book");
        assert_eq!(ty.fields().len(), 1);
        assert!(ty.fields()[0].args.is_empty());
        assert!(ty.enum_values().is_empty());
    }

    #[test]
    fn test_deserialize_enum_values() {
        let json = r#"{
            "kind": "ENUM",
            "name": "Genre",
            "fields": null,
            "enumValues": [{ "name": "FICTION" }, { "name": "NONFICTION" }]
        }"#;

        let ty: IntrospectionType = serde_json::from_str(json).unwrap();
        assert_eq!(ty.kind(), TypeKind::Enum);
        assert!(ty.fields().is_empty());
        let names: Vec<_> = ty.enum_values().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["FICTION", "NONFICTION"]);
    }

    #[test]
    fn test_wrapper_kind_is_not_a_schema_type() {
        let json = r#"{ "kind": "LIST", "name": null }"#;
        assert!(serde_json::from_str::<IntrospectionType>(json).is_err());
    }

    #[test]
    fn test_missing_types_is_rejected() {
        let json = r#"{ "data": { "__schema": { "queryType": { "name": "Query" } } } }"#;
        assert!(serde_json::from_str::<IntrospectionResponse>(json).is_err());
    }

    #[test]
    fn test_type_ref_constructors() {
        let type_ref = IntrospectionTypeRefFull::non_null(IntrospectionTypeRefFull::list(
            IntrospectionTypeRefFull::named(TypeKind::Object, "User"),
        ));
        assert_eq!(type_ref.kind, TypeKind::NonNull);
        let list = type_ref.of_type.as_deref().unwrap();
        assert_eq!(list.kind, TypeKind::List);
        assert!(list.kind.is_wrapper());
        let user = list.of_type.as_deref().unwrap();
        assert_eq!(user.name.as_deref(), Some("User"));
        assert!(!user.kind.is_wrapper());
    }
}
