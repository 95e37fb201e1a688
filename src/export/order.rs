/// Order in which steps are emitted by the export transform.
///
/// `Insertion` reproduces the editor's historical behavior of walking the
/// node array as-is. `BreadthFirst` walks outward from the start node and
/// appends any unreached nodes afterwards in insertion order, so the
/// emitted document reads in execution order without dropping dangling
/// steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportOrder {
    #[default]
    Insertion,
    BreadthFirst,
}
