//! ptxdiff: PTX Kernel Diff Visualization
//!
//! Renders a diff between two versions of a GPU kernel's PTX instruction
//! listing: builds per-kernel instruction chain graphs for Graphviz layout,
//! and formats precomputed diff reports as HTML-fragment markup.
//!
//! Diff computation and raw PTX parsing happen upstream; this crate consumes
//! their typed output read-only.
//!
//! # Example
//!
//! ```rust
//! use ptxdiff::ptx::{Instruction, KernelData, PtxData};
//! use ptxdiff::graph::create_instruction_graph;
//!
//! let mut data = PtxData::new();
//! data.insert(
//!     "vec_add".to_string(),
//!     KernelData {
//!         instructions: vec![
//!             Instruction { opcode: "mov.u32".into(), operands: vec!["%r1".into(), "%tid.x".into()] },
//!             Instruction { opcode: "ret".into(), operands: vec![] },
//!         ],
//!     },
//! );
//!
//! let graph = create_instruction_graph(&data, "vec_add").unwrap();
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

#![allow(clippy::format_push_string)] // Performance not critical for report assembly

pub mod error;
pub mod graph;
pub mod output;
pub mod ptx;
pub mod render;
pub mod report;

pub use error::{Result, VizError};
pub use graph::{create_instruction_graph, to_dot, InstructionGraph};
pub use output::{format_html, format_json, format_text, write_report, OutputFormat};
pub use ptx::{load_ptx_data, Instruction, KernelData, PtxData};
pub use render::{GraphRenderer, GraphvizRenderer, DEFAULT_GRAPH_PATH};
pub use report::{load_diff_report, text_report, DiffReport, KernelChange};
