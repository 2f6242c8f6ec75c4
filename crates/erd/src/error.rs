use graphql_introspect::TypeKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErdError>;

/// A malformed type reference found while walking the schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErdError {
    #[error("type reference is wrapped more than {limit} levels deep")]
    WrapperTooDeep { limit: usize },

    #[error("{kind:?} wrapper has no ofType")]
    DanglingWrapper { kind: TypeKind },

    #[error("named type reference of kind {kind:?} has no name")]
    UnnamedType { kind: TypeKind },
}
