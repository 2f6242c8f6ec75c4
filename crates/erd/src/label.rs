//! Edge label text for relational fields.

use crate::resolve::describe_type;
use crate::Result;
use graphql_introspect::{IntrospectionField, IntrospectionInputValue};

/// Placeholder shown instead of the argument list when arguments are collapsed.
pub const COLLAPSED_ARGS: &str = "...";

/// How much of a field's arguments end up in its label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelOptions {
    /// List argument names instead of [`COLLAPSED_ARGS`].
    pub expand_args: bool,
    /// Append each argument's type; only has an effect with `expand_args`.
    pub expand_arg_types: bool,
}

pub fn format_args(args: &[IntrospectionInputValue], options: &LabelOptions) -> Result<String> {
    if !options.expand_args {
        return Ok(COLLAPSED_ARGS.to_string());
    }

    let rendered = args
        .iter()
        .map(|arg| arg_to_string(arg, options))
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join(", "))
}

pub fn arg_to_string(arg: &IntrospectionInputValue, options: &LabelOptions) -> Result<String> {
    if options.expand_arg_types {
        Ok(format!("{}: {}", arg.name, describe_type(&arg.type_ref)?))
    } else {
        Ok(arg.name.clone())
    }
}

/// `name(args): Type`, with the parenthesized group only when the field takes arguments.
pub fn field_label(field: &IntrospectionField, options: &LabelOptions) -> Result<String> {
    let mut label = field.name.clone();
    if !field.args.is_empty() {
        label.push('(');
        label.push_str(&format_args(&field.args, options)?);
        label.push(')');
    }
    label.push_str(": ");
    label.push_str(&describe_type(&field.type_ref)?);
    Ok(label)
}
