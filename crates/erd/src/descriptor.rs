//! The table drawn inside each node.

use crate::classify::{is_enum, is_relational_field};
use crate::resolve::describe_type;
use crate::Result;
use graphql_introspect::IntrospectionType;
use std::fmt;

/// Marker shown under a type's name in its header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stereotype {
    Enum,
}

impl Stereotype {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enum => "«enum»",
        }
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Header (name and stereotype) plus one row per scalar field and enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    pub stereotype: Option<Stereotype>,
    pub rows: Vec<String>,
}

impl Descriptor {
    /// Stereotype text for the header, empty when the type has none.
    #[must_use]
    pub fn stereotype_label(&self) -> &'static str {
        self.stereotype.map_or("", Stereotype::label)
    }
}

/// Relational fields are left out: they are drawn as edges instead.
pub fn descriptor(ty: &IntrospectionType) -> Result<Descriptor> {
    let mut rows = Vec::new();

    for field in ty.fields() {
        if !is_relational_field(field)? {
            rows.push(format!("{}: {}", field.name, describe_type(&field.type_ref)?));
        }
    }
    rows.extend(ty.enum_values().iter().map(|value| value.name.clone()));

    Ok(Descriptor {
        name: ty.name().to_string(),
        stereotype: is_enum(ty).then_some(Stereotype::Enum),
        rows,
    })
}
