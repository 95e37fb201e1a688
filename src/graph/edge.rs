/// A directed connection between two nodes.
///
/// `source_handle` names the output port the edge leaves from; decision
/// nodes use distinct handles to tell their branches apart, and edges
/// leaving a start node always carry the canonical `"right"` handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub label: Option<String>,
}
