//! Exit codes for the graphql-erd CLI.
//!
//! This module defines distinct exit codes for different error types,
//! allowing scripts and CI systems to distinguish between different
//! failure modes.

use graphql_erd::ErdError;
use graphql_erd_config::ConfigError;
use graphql_erd_render::RenderError;
use graphql_introspect::IntrospectionError;

/// Exit codes used by the CLI.
///
/// These follow standard Unix conventions where 0 indicates success
/// and non-zero values indicate different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, or nothing to do
    Success = 0,
    /// Any failure not covered below
    Failure = 1,
    /// Configuration error (invalid config file, environment or flags)
    ConfigError = 2,
    /// Schema load error (introspection failed, file not found)
    SchemaError = 3,
    /// I/O error (file write failure)
    IoError = 4,
    /// Parse error (invalid JSON or malformed schema)
    ParseError = 5,
    /// Graphviz could not render the diagram
    RenderError = 6,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Classifies an error by the first typed cause found in its chain.
    #[must_use]
    pub fn from_error(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if let Some(e) = cause.downcast_ref::<IntrospectionError>() {
                return match e {
                    IntrospectionError::Network(_)
                    | IntrospectionError::Http(..)
                    | IntrospectionError::Io { .. } => Self::SchemaError,
                    IntrospectionError::Parse(_) | IntrospectionError::Invalid(_) => {
                        Self::ParseError
                    }
                };
            }
            if cause.downcast_ref::<ErdError>().is_some() {
                return Self::ParseError;
            }
            if let Some(e) = cause.downcast_ref::<RenderError>() {
                return match e {
                    RenderError::Schema(_) => Self::ParseError,
                    _ => Self::RenderError,
                };
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return Self::ConfigError;
            }
            if cause.downcast_ref::<std::io::Error>().is_some() {
                return Self::IoError;
            }
        }
        Self::Failure
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema load error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
            Self::RenderError => write!(f, "render error"),
        }
    }
}
