/// Reading results out of the graph.
///
/// Once no matchups remain, every node has at most one child, so the
/// whole structure is a single chain hanging off the root. Following
/// first children yields the final order. On a graph that still has
/// pending matchups this walks only the current leading chain — useful
/// for progress display, not a final ranking.
use std::fmt::Write;

use crate::graph::PreferenceGraph;
use crate::types::NodeId;

/// Nodes visited by following each node's first (oldest) child from the
/// root down to a childless node, in visit order.
pub fn ordered_sequence(graph: &PreferenceGraph) -> Vec<NodeId> {
    let mut ordered = Vec::with_capacity(graph.len());
    let mut node = graph.root();
    while let Some(&first) = graph.children(node).first() {
        ordered.push(first);
        node = first;
    }
    ordered
}

/// Graphviz dump of the current preference edges, for diagnostics.
///
/// Root edges are rendered as bare node declarations so the synthetic
/// root never shows up in the picture.
pub fn to_dot(graph: &PreferenceGraph) -> String {
    let mut out = String::from("digraph {\n");
    for n in graph.node_ids() {
        let children = graph.children(n);
        if children.is_empty() {
            continue;
        }
        for &c in children {
            if n == graph.root() {
                let _ = writeln!(out, "  \"{}\"", dot_escape(graph.label(c).unwrap_or("")));
            } else {
                let _ = writeln!(
                    out,
                    "  \"{}\" -> \"{}\"",
                    dot_escape(graph.label(n).unwrap_or("")),
                    dot_escape(graph.label(c).unwrap_or("")),
                );
            }
        }
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

fn dot_escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
