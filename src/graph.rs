//! Instruction graph construction
//!
//! Builds a directed chain graph over one kernel's instruction listing: one
//! node per instruction, labeled `"{index}: {opcode} {operands}"`, with an
//! edge from each instruction to its successor. The chain carries no data or
//! control dependency analysis; it is a presentation aid for the layout
//! engine, always a simple path.

use crate::error::{Result, VizError};
use crate::ptx::PtxData;
use petgraph::graph::DiGraph;

/// Directed instruction chain: node weights are display labels
pub type InstructionGraph = DiGraph<String, ()>;

/// Build the instruction chain graph for `kernel_name`.
///
/// Produces exactly n nodes and max(0, n-1) edges for n instructions. An
/// empty instruction list yields an empty graph. A kernel name absent from
/// `data` is an error, not a panic.
pub fn create_instruction_graph(data: &PtxData, kernel_name: &str) -> Result<InstructionGraph> {
    let kernel = data
        .get(kernel_name)
        .ok_or_else(|| VizError::KernelNotFound(kernel_name.to_string()))?;

    let mut graph = InstructionGraph::new();

    let nodes: Vec<_> = kernel
        .instructions
        .iter()
        .enumerate()
        .map(|(idx, ins)| graph.add_node(ins.label(idx)))
        .collect();

    for pair in nodes.windows(2) {
        graph.add_edge(pair[0], pair[1], ());
    }

    Ok(graph)
}

/// Serialize the graph to Graphviz DOT text.
///
/// Top-to-bottom rank direction so the chain reads like the listing.
#[must_use]
pub fn to_dot(graph: &InstructionGraph) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "digraph {{").unwrap();
    writeln!(output, "    rankdir=TB;").unwrap();
    writeln!(output, "    node [shape=box];").unwrap();

    for idx in graph.node_indices() {
        let label = graph[idx].replace('\\', "\\\\").replace('"', "\\\"");
        writeln!(output, "    {} [ label=\"{}\" ];", idx.index(), label).unwrap();
    }

    for edge in graph.edge_indices() {
        let (from, to) = graph.edge_endpoints(edge).unwrap();
        writeln!(output, "    {} -> {};", from.index(), to.index()).unwrap();
    }

    writeln!(output, "}}").unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ptx::{Instruction, KernelData};
    use std::collections::HashMap;

    fn sample_data(n: usize) -> PtxData {
        let instructions = (0..n)
            .map(|i| Instruction {
                opcode: format!("op{i}"),
                operands: vec![format!("%r{i}")],
            })
            .collect();
        let mut data = HashMap::new();
        data.insert("k".to_string(), KernelData { instructions });
        data
    }

    #[test]
    fn test_chain_topology() {
        let data = sample_data(5);
        let graph = create_instruction_graph(&data, "k").unwrap();

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);

        let mut edges: Vec<(usize, usize)> = graph
            .edge_indices()
            .map(|e| {
                let (a, b) = graph.edge_endpoints(e).unwrap();
                (a.index(), b.index())
            })
            .collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn test_node_labels() {
        let data = sample_data(2);
        let graph = create_instruction_graph(&data, "k").unwrap();

        let labels: Vec<&String> = graph.node_weights().collect();
        assert_eq!(labels[0], "0: op0 %r0");
        assert_eq!(labels[1], "1: op1 %r1");
    }

    #[test]
    fn test_empty_kernel() {
        let data = sample_data(0);
        let graph = create_instruction_graph(&data, "k").unwrap();

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_single_instruction() {
        let data = sample_data(1);
        let graph = create_instruction_graph(&data, "k").unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_missing_kernel() {
        let data = sample_data(3);
        let err = create_instruction_graph(&data, "absent").unwrap_err();
        assert!(matches!(err, VizError::KernelNotFound(ref name) if name == "absent"));
    }

    #[test]
    fn test_input_not_mutated() {
        let data = sample_data(3);
        let before = data.clone();
        let _ = create_instruction_graph(&data, "k").unwrap();
        assert_eq!(data, before);
    }

    #[test]
    fn test_dot_output_contains_labels_and_edges() {
        let data = sample_data(2);
        let graph = create_instruction_graph(&data, "k").unwrap();
        let dot = to_dot(&graph);

        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("0: op0 %r0"));
        assert!(dot.contains("1: op1 %r1"));
        assert!(dot.contains("0 -> 1"));
    }
}
