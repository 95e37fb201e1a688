use crate::error::GraphError;
use crate::graph::GraphStore;

/// The single active element of an editing session.
///
/// Node and edge selection are mutually exclusive by construction, so the
/// rendering surface never has to reconcile two nullable fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(String),
    Edge(String),
}

/// An editing session: a graph store plus the selection state, driven by
/// the rendering surface's gesture callbacks (node click, edge click,
/// pane click, Delete keypress).
#[derive(Debug, Clone, Default)]
pub struct Editor {
    store: GraphStore,
    selection: Selection,
}

impl Editor {
    /// Starts a session over an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session over an existing graph, e.g. one rebuilt from a
    /// persisted canvas document.
    pub fn with_store(store: GraphStore) -> Self {
        Self {
            store,
            selection: Selection::None,
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Node click: selects the node, deselecting any edge.
    pub fn select_node(&mut self, id: &str) -> Result<(), GraphError> {
        if self.store.node(id).is_none() {
            return Err(GraphError::UnknownNode(id.to_string()));
        }
        self.selection = Selection::Node(id.to_string());
        Ok(())
    }

    /// Edge click: selects the edge, deselecting any node.
    pub fn select_edge(&mut self, id: &str) -> Result<(), GraphError> {
        if self.store.edge(id).is_none() {
            return Err(GraphError::UnknownEdge(id.to_string()));
        }
        self.selection = Selection::Edge(id.to_string());
        Ok(())
    }

    /// Pane click: clears any selection.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    /// Delete keypress: removes the selected element (cascading for nodes)
    /// and clears the selection. Returns whether anything was removed.
    pub fn delete_selected(&mut self) -> Result<bool, GraphError> {
        let removed = match std::mem::take(&mut self.selection) {
            Selection::None => false,
            Selection::Node(id) => {
                self.store.delete_node(&id)?;
                true
            }
            Selection::Edge(id) => {
                self.store.delete_edge(&id)?;
                true
            }
        };
        Ok(removed)
    }
}
