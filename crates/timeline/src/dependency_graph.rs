//! Dependency graph construction from `edge/2` facts.
//!
//! Nodes live in an arena indexed by insertion order; edges are arena
//! index pairs. The registry maps node names to arena slots, so a name
//! appearing as both source and destination resolves to one node. The
//! graph is built once per answer set and never patched incrementally;
//! a new answer set means a new graph.

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use parser::{AnswerSet, Fact};
use serde::Serialize;
use std::fmt;

use crate::error::GraphError;

/// Signature of the distinguished relation the graph is built from.
pub const EDGE_SIGNATURE: &str = "edge/2";

/// Conventional root node of timeline answer sets.
pub const DEFAULT_START_NODE: &str = "start";

/// A named vertex with insertion-ordered outgoing edges (arena indices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    name: String,
    outgoing: IndexSet<usize>,
}

impl GraphNode {
    /// Create a node with no outgoing edges.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            outgoing: IndexSet::new(),
        }
    }

    /// Node name (its identity in the registry).
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing neighbors as arena indices, in first-insertion order.
    #[must_use]
    #[inline]
    pub fn outgoing(&self) -> &IndexSet<usize> {
        &self.outgoing
    }

    /// Record an edge to `target`. A repeated target is ignored.
    pub fn add_outgoing(&mut self, target: usize) {
        self.outgoing.insert(target);
    }

    /// Remove the edge to `target`, keeping the order of the rest.
    pub fn delete_outgoing(&mut self, target: usize) {
        self.outgoing.shift_remove(&target);
    }
}

/// Directed graph over the `edge/2` facts of one answer set.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    nodes: Vec<GraphNode>,
    registry: IndexMap<String, usize>,
    source_facts: Vec<Fact>,
}

impl DependencyGraph {
    /// Build the graph from an answer set's `edge/2` facts.
    ///
    /// `args[0]` is the source name, `args[1]` the destination; a node is
    /// interned on first sight. Self-loops and repeated edges collapse
    /// via set semantics. Cyclic edge data is accepted here and only
    /// rejected by [`Self::to_nested_notation`].
    #[must_use]
    pub fn from_answer_set(answer_set: &AnswerSet) -> Self {
        let mut graph = Self {
            nodes: Vec::new(),
            registry: IndexMap::new(),
            source_facts: Vec::new(),
        };

        for fact in answer_set.facts() {
            if fact.signature() != EDGE_SIGNATURE {
                continue;
            }
            let source = graph.intern(&fact.arguments()[0]);
            let target = graph.intern(&fact.arguments()[1]);
            graph.nodes[source].add_outgoing(target);
            graph.source_facts.push(fact.clone());
        }

        graph
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&index) = self.registry.get(name) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(GraphNode::new(name));
        self.registry.insert(name.to_string(), index);
        index
    }

    /// All nodes in first-seen order.
    #[must_use]
    #[inline]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// The `edge/2` facts the graph was built from.
    #[must_use]
    #[inline]
    pub fn source_facts(&self) -> &[Fact] {
        &self.source_facts
    }

    /// Arena index of the node named `name`.
    #[must_use]
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.registry.get(name).copied()
    }

    /// Render the subtree under `start` as `(child1,child2,...)name`.
    ///
    /// A leaf renders as its bare name; child order is the outgoing
    /// set's first-insertion order. A node reachable along several
    /// paths is expanded once per path.
    ///
    /// # Errors
    /// [`GraphError::UnknownNode`] when `start` is not registered.
    /// [`GraphError::CycleDetected`] when a node repeats along the
    /// current path, instead of recursing without bound.
    pub fn to_nested_notation(&self, start: &str) -> Result<String, GraphError> {
        let start_index = self
            .node_index(start)
            .ok_or_else(|| GraphError::UnknownNode(start.to_string()))?;

        let mut on_path = vec![false; self.nodes.len()];
        self.render_subtree(start_index, &mut on_path)
    }

    fn render_subtree(&self, index: usize, on_path: &mut [bool]) -> Result<String, GraphError> {
        let node = &self.nodes[index];
        if on_path[index] {
            return Err(GraphError::CycleDetected(node.name().to_string()));
        }
        on_path[index] = true;

        let mut notation = String::new();
        if !node.outgoing().is_empty() {
            let mut children = Vec::with_capacity(node.outgoing().len());
            for &child in node.outgoing() {
                children.push(self.render_subtree(child, on_path)?);
            }
            notation.push('(');
            notation.push_str(&children.join(","));
            notation.push(')');
        }
        notation.push_str(node.name());

        on_path[index] = false;
        Ok(notation)
    }

    /// Invert the outgoing relation into flat `{id, parentIds}` records.
    ///
    /// Every node gets exactly one record, including sinks and nodes
    /// without incoming edges. Records come out in first-discovery
    /// order: destinations as the source scan reaches them, each source
    /// itself right after its destinations.
    #[must_use]
    pub fn to_parent_list(&self) -> Vec<ParentListEntry> {
        let mut incoming: IndexMap<&str, Vec<&str>> = IndexMap::new();

        for node in &self.nodes {
            for &child in node.outgoing() {
                incoming
                    .entry(self.nodes[child].name())
                    .or_default()
                    .push(node.name());
            }
            // A record must exist even with no incoming references.
            incoming.entry(node.name()).or_default();
        }

        incoming
            .into_iter()
            .map(|(id, parents)| ParentListEntry {
                id: id.to_string(),
                parent_ids: parents.iter().map(|parent| (*parent).to_string()).collect(),
            })
            .collect()
    }
}

impl fmt::Display for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nTimeline Graph:")?;
        writeln!(f, "{}", "-".repeat(45))?;

        for node in &self.nodes {
            if node.outgoing().is_empty() {
                writeln!(f, "{}: []", node.name())?;
            } else {
                let targets = node
                    .outgoing()
                    .iter()
                    .map(|&index| self.nodes[index].name())
                    .join(", ");
                writeln!(f, "{}: [{}]", node.name(), targets)?;
            }
        }
        Ok(())
    }
}

/// One record of the flat parent-list export: a node id plus the ids of
/// nodes with an edge into it. Serializes to the `{id, parentIds}` shape
/// layered-DAG layout engines take as input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentListEntry {
    pub id: String,
    #[serde(rename = "parentIds")]
    pub parent_ids: Vec<String>,
}
