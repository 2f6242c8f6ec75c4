use graphql_erd::ErdError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Schema(#[from] ErdError),

    #[error("Failed to start Graphviz ({}): {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Graphviz exited with {status}: {stderr}")]
    Graphviz { status: ExitStatus, stderr: String },

    #[error("I/O error while running Graphviz: {0}")]
    Io(#[from] std::io::Error),
}
