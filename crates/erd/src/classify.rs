//! Predicates over schema types and fields.

use crate::resolve::terminal_type;
use crate::Result;
use graphql_introspect::{IntrospectionField, IntrospectionType, TypeKind};

/// Prefix reserved for the introspection system's own types (`__Schema`, `__Type`, ...).
pub const INTERNAL_PREFIX: &str = "__";

#[must_use]
pub fn is_internal_name(name: &str) -> bool {
    name.starts_with(INTERNAL_PREFIX)
}

#[must_use]
pub fn is_internal(ty: &IntrospectionType) -> bool {
    is_internal_name(ty.name())
}

#[must_use]
pub fn is_scalar(ty: &IntrospectionType) -> bool {
    ty.kind() == TypeKind::Scalar
}

#[must_use]
pub fn is_enum(ty: &IntrospectionType) -> bool {
    ty.kind() == TypeKind::Enum
}

/// A field is relational when its terminal type is anything but a scalar.
///
/// Enum-typed fields count as relational: they become edges to the enum's
/// node rather than rows in the owner's table.
pub fn is_relational_field(field: &IntrospectionField) -> Result<bool> {
    Ok(terminal_type(&field.type_ref)?.kind != TypeKind::Scalar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_introspect::{IntrospectionScalarType, IntrospectionTypeRefFull};

    fn scalar(name: &str) -> IntrospectionType {
        IntrospectionType::Scalar(IntrospectionScalarType {
            name: name.to_string(),
            description: None,
        })
    }

    fn field(type_ref: IntrospectionTypeRefFull) -> IntrospectionField {
        IntrospectionField {
            name: "field".to_string(),
            description: None,
            args: Vec::new(),
            type_ref,
        }
    }

    #[test]
    fn test_internal_prefix() {
        assert!(is_internal(&scalar("__TypeKind")));
        assert!(!is_internal(&scalar("_Any")));
        assert!(!is_internal(&scalar("String")));
    }

    #[test]
    fn test_kind_predicates() {
        let string = scalar("String");
        assert!(is_scalar(&string));
        assert!(!is_enum(&string));
    }

    #[test]
    fn test_scalar_fields_are_not_relational() {
        let f = field(IntrospectionTypeRefFull::non_null(
            IntrospectionTypeRefFull::named(TypeKind::Scalar, "String"),
        ));
        assert!(!is_relational_field(&f).unwrap());
    }

    #[test]
    fn test_object_and_enum_fields_are_relational() {
        let object = field(IntrospectionTypeRefFull::list(
            IntrospectionTypeRefFull::named(TypeKind::Object, "Author"),
        ));
        assert!(is_relational_field(&object).unwrap());

        let enumeration = field(IntrospectionTypeRefFull::named(TypeKind::Enum, "Genre"));
        assert!(is_relational_field(&enumeration).unwrap());
    }
}
