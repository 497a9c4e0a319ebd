//! Graph rendering delegation
//!
//! Rasterization is delegated entirely to an external Graphviz-style layout
//! engine. The [`GraphRenderer`] trait keeps graph construction testable
//! without a real engine installed; [`GraphvizRenderer`] is the production
//! implementation that pipes DOT text into the engine process.

use crate::error::{Result, VizError};
use crate::graph::{to_dot, InstructionGraph};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Default output path for rendered instruction graphs
pub const DEFAULT_GRAPH_PATH: &str = "kernel_graph.png";

/// Renders an instruction graph to an image file
pub trait GraphRenderer {
    /// Rasterize `graph` to `output_path`. Engine and I/O failures propagate
    /// unmodified; no retry.
    fn render(&self, graph: &InstructionGraph, output_path: &Path) -> Result<()>;
}

/// Renders via an external Graphviz layout engine (`dot` by default)
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    /// Layout engine executable, e.g. `dot` or `neato`
    pub engine: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self {
            engine: "dot".to_string(),
        }
    }
}

impl GraphvizRenderer {
    /// Create a renderer using the default hierarchical `dot` engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer using a specific layout engine executable
    #[must_use]
    pub fn with_engine(engine: &str) -> Self {
        Self {
            engine: engine.to_string(),
        }
    }
}

/// Pick the Graphviz output format from the file extension, defaulting to PNG
fn image_format(output_path: &Path) -> &str {
    match output_path.extension().and_then(|e| e.to_str()) {
        Some("svg") => "svg",
        Some("pdf") => "pdf",
        _ => "png",
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, graph: &InstructionGraph, output_path: &Path) -> Result<()> {
        let dot_text = to_dot(graph);
        let format = image_format(output_path);

        let mut child = Command::new(&self.engine)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // stdin handle is dropped at the end of this scope so the engine sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(dot_text.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(VizError::Render(format!(
                "{} exited with {}: {}",
                self.engine,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}
