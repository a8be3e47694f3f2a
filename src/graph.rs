//! Turn a record store into a directed edge list with rate labels.
//!
//! A position in a host's rate sequence is itself a node identifier: index i
//! holds the delivery rate towards the node whose identifier is i. Resolving
//! an index back to a host name scans the store entries in iteration order.

use crate::log::RecordStore;
use serde::Serialize;

/// A directed edge between host names. The target stays unresolved when no
/// host claims the node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: Option<String>,
}

/// One store entry flattened for identifier resolution.
struct NodeTriple<'a> {
    rate: &'a [Option<f64>],
    host: &'a str,
    node_id: u32,
}

/// First triple in iteration order whose identifier matches wins.
fn lookup<'a>(triples: &[NodeTriple<'a>], id: u32) -> Option<&'a str> {
    triples.iter().find(|t| t.node_id == id).map(|t| t.host)
}

/// Build the edge sequence and its parallel label sequence.
///
/// For every host and every rate position holding a value, one edge
/// (host, resolved target) is emitted together with the rate formatted to
/// two decimals at the same index. Absent rates emit nothing.
pub fn build_edges(store: &RecordStore) -> (Vec<Edge>, Vec<String>) {
    let triples: Vec<NodeTriple> = store
        .iter()
        .map(|(host, rec)| NodeTriple {
            rate: &rec.rate,
            host,
            node_id: rec.node_id,
        })
        .collect();

    let mut edges = Vec::new();
    let mut labels = Vec::new();
    for triple in &triples {
        for (idx, val) in triple.rate.iter().enumerate() {
            let Some(val) = val else { continue };
            let target = lookup(&triples, idx as u32).map(str::to_string);
            edges.push(Edge {
                source: triple.host.to_string(),
                target,
            });
            labels.push(format!("{val:.2}"));
        }
    }
    (edges, labels)
}
