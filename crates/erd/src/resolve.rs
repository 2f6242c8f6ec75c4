//! Unwrapping `LIST` / `NON_NULL` modifiers from type references.
//!
//! Both operations walk the `ofType` chain with an explicit loop, so stack
//! usage does not depend on how deeply a reference is wrapped.

use crate::{ErdError, Result};
use graphql_introspect::{IntrospectionTypeRefFull, TypeKind};

/// Longest modifier chain accepted before the reference is considered malformed.
pub const MAX_WRAPPER_DEPTH: usize = 64;

/// A type modifier around an inner reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper {
    List,
    NonNull,
}

/// A type reference split into its modifiers (outermost first) and the
/// named reference they wrap.
#[derive(Debug, Clone)]
pub struct Unwrapped<'a> {
    pub wrappers: Vec<Wrapper>,
    pub terminal: &'a IntrospectionTypeRefFull,
}

impl Unwrapped<'_> {
    /// Name of the terminal type.
    pub fn name(&self) -> Result<&str> {
        self.terminal
            .name
            .as_deref()
            .ok_or(ErdError::UnnamedType {
                kind: self.terminal.kind,
            })
    }
}

pub fn unwrap_type(type_ref: &IntrospectionTypeRefFull) -> Result<Unwrapped<'_>> {
    let mut wrappers = Vec::new();
    let mut current = type_ref;

    while current.kind.is_wrapper() {
        if wrappers.len() == MAX_WRAPPER_DEPTH {
            return Err(ErdError::WrapperTooDeep {
                limit: MAX_WRAPPER_DEPTH,
            });
        }
        wrappers.push(if current.kind == TypeKind::List {
            Wrapper::List
        } else {
            Wrapper::NonNull
        });
        current = current
            .of_type
            .as_deref()
            .ok_or(ErdError::DanglingWrapper { kind: current.kind })?;
    }

    Ok(Unwrapped {
        wrappers,
        terminal: current,
    })
}

/// The innermost named reference, e.g. `User` for `[User!]!`.
pub fn terminal_type(type_ref: &IntrospectionTypeRefFull) -> Result<&IntrospectionTypeRefFull> {
    unwrap_type(type_ref).map(|unwrapped| unwrapped.terminal)
}

/// Renders a reference in SDL notation, keeping its modifiers: `[User!]!`.
pub fn describe_type(type_ref: &IntrospectionTypeRefFull) -> Result<String> {
    let unwrapped = unwrap_type(type_ref)?;
    let mut signature = unwrapped.name()?.to_string();

    for wrapper in unwrapped.wrappers.iter().rev() {
        match wrapper {
            Wrapper::List => signature = format!("[{signature}]"),
            Wrapper::NonNull => signature.push('!'),
        }
    }

    Ok(signature)
}
