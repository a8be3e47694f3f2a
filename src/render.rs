//! Output rendering for the edge list.

use crate::Result;
use crate::graph::Edge;
use serde::Serialize;

/// Plain mode: the edge sequence and the label sequence, one line each,
/// in the debug rendering of (source, target) pairs.
pub fn render_plain(edges: &[Edge], labels: &[String]) -> String {
    let pairs: Vec<(&str, Option<&str>)> = edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_deref()))
        .collect();
    format!("{pairs:?}\n{labels:?}")
}

#[derive(Serialize)]
struct Report<'a> {
    edges: &'a [Edge],
    labels: &'a [String],
}

/// JSON mode: one well-formed object, no external pretty-printer needed.
pub fn render_json(edges: &[Edge], labels: &[String]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report { edges, labels })?)
}
