//! Converting DOT text to SVG with the Graphviz `dot` program.

use crate::{RenderError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Program used when none is configured; resolved through `PATH`.
pub const DEFAULT_GRAPHVIZ: &str = "dot";

/// A Graphviz layout program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graphviz {
    program: PathBuf,
}

impl Default for Graphviz {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPHVIZ)
    }
}

impl Graphviz {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Pipes `dot` through `<program> -Tsvg` and returns the SVG document.
    #[tracing::instrument(skip(self, dot), fields(program = %self.program.display(), size = dot.len()))]
    pub fn render_svg(&self, dot: &str) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .arg("-Tsvg")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RenderError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Feed stdin from its own thread so a large graph cannot deadlock
        // against a full stdout pipe.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other("Graphviz stdin was not captured"))?;
        let input = dot.as_bytes().to_vec();
        let writer = std::thread::spawn(move || stdin.write_all(&input));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| std::io::Error::other("Graphviz stdin writer panicked"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!(status = %output.status, %stderr, "Graphviz failed");
            return Err(RenderError::Graphviz {
                status: output.status,
                stderr,
            });
        }
        written?;

        tracing::debug!(bytes = output.stdout.len(), "Rendered SVG");
        Ok(output.stdout)
    }
}
