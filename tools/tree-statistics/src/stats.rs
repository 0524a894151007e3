//! Edge-list parsing and tree statistics computation
//!
//! Parses Graphviz-style edge lines (`<from> -> <to> ;`) and computes each
//! node's depth and subtree size by traversal from node 0.

use std::io::BufRead;

/// A directed parent → child edge between 0-based node ids
pub type Edge = (usize, usize);

/// Per-node results, index-aligned with node ids
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TreeStatistics {
    /// Distance from node 0, in edges
    pub depths: Vec<u32>,
    /// Node count of the subtree rooted at each node, the node itself included
    pub subtree_sizes: Vec<u32>,
}

/// Parses edges out of a Graphviz-style line stream
///
/// A line whose whitespace split yields exactly 4 tokens is an edge
/// (`<from> -> <to> ;`); the first and third tokens are the node ids. Every
/// other line (graph header, closing brace, attribute lines) is skipped.
/// A node id that fails to parse on an edge line is fatal.
pub fn parse_edges(reader: impl BufRead) -> Result<Vec<Edge>, Box<dyn std::error::Error>> {
    let mut edges = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 4 {
            continue;
        }

        let from = parse_node_id(tokens[0])?;
        let to = parse_node_id(tokens[2])?;
        edges.push((from, to));
    }

    Ok(edges)
}

fn parse_node_id(token: &str) -> Result<usize, Box<dyn std::error::Error>> {
    token
        .parse()
        .map_err(|_| format!("Invalid node id '{}'", token).into())
}

/// Computes depth and subtree size for every node reachable from node 0
///
/// The node count is `max(node id) + 1`; nodes never reached from node 0
/// keep depth 0 and subtree size 0. The traversal is an explicit two-phase
/// stack walk: sizes are folded on the way back up once a node's whole
/// subtree has been entered.
pub fn compute_tree_statistics(edges: &[Edge]) -> TreeStatistics {
    let node_count = edges
        .iter()
        .map(|&(from, to)| from.max(to) + 1)
        .max()
        .unwrap_or(0);

    let mut children = vec![Vec::new(); node_count];
    for &(from, to) in edges {
        children[from].push(to);
    }

    let mut depths = vec![0u32; node_count];
    let mut subtree_sizes = vec![0u32; node_count];

    if node_count == 0 {
        return TreeStatistics {
            depths,
            subtree_sizes,
        };
    }

    enum Visit {
        Enter(usize, u32),
        Exit(usize),
    }

    let mut stack = vec![Visit::Enter(0, 0)];
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(node, depth) => {
                depths[node] = depth;
                subtree_sizes[node] = 1;
                stack.push(Visit::Exit(node));
                for &child in &children[node] {
                    stack.push(Visit::Enter(child, depth + 1));
                }
            }
            Visit::Exit(node) => {
                let child_total: u32 = children[node]
                    .iter()
                    .map(|&child| subtree_sizes[child])
                    .sum();
                subtree_sizes[node] += child_total;
            }
        }
    }

    TreeStatistics {
        depths,
        subtree_sizes,
    }
}
