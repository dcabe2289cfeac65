use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// Returns the node-map key for a cell-space id.
///
/// Keys carry a leading `#` so that `xlink:href="#C1"` references resolve with a plain lookup.
pub fn node_key(id: &str) -> String {
    format!("#{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Handle to a node inside a [`Graph`]: its insertion index in the node map.
///
/// Nodes are never removed, so a handle stays valid for the lifetime of the graph it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One IndoorGML cell space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    /// Unset until a layout pass runs.
    #[serde(default)]
    pub position: Option<Point>,
}

impl Node {
    /// Creates an unpositioned node. An absent or empty `name` falls back to `id` as the label.
    pub fn new(id: impl Into<String>, name: Option<&str>) -> Self {
        let id = id.into();
        let label = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => id.clone(),
        };
        Self {
            id,
            label,
            position: None,
        }
    }

    pub fn key(&self) -> String {
        node_key(&self.id)
    }
}

/// A transition between two cell spaces. Endpoints are handles into the owning graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeIndex,
    pub to: NodeIndex,
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Cell-space graph: an insertion-ordered node map plus transitions in document order.
///
/// Node order is load-bearing: the circular layout assigns angles by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphRepr")]
pub struct Graph {
    nodes: IndexMap<String, Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Registers `node` under `"#" + id`.
    ///
    /// Returns the node's handle and whether it was inserted. When the key is already taken the
    /// existing node is kept untouched and its handle is returned with `false`.
    pub fn insert_node(&mut self, node: Node) -> (NodeIndex, bool) {
        match self.nodes.entry(node.key()) {
            Entry::Occupied(entry) => (NodeIndex(entry.index()), false),
            Entry::Vacant(entry) => {
                let index = NodeIndex(entry.index());
                entry.insert(node);
                (index, true)
            }
        }
    }

    /// Appends an edge between two node keys (`"#id"` form).
    ///
    /// Returns `false` and leaves the graph unchanged if either key is unknown.
    pub fn connect(&mut self, from_key: &str, to_key: &str) -> bool {
        let (Some(from), Some(to)) = (self.index_of(from_key), self.index_of(to_key)) else {
            return false;
        };
        self.edges.push(Edge { from, to });
        true
    }

    pub fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.nodes.get_index_of(key).map(NodeIndex)
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get_index(index.0).map(|(_, node)| node)
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_index_mut(index.0).map(|(_, node)| node)
    }

    pub fn node_by_key(&self, key: &str) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl ExactSizeIterator<Item = &mut Node> + '_ {
        self.nodes.values_mut()
    }

    /// Node keys (`"#id"`) in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Resolves both endpoints of `edge`. `None` only for an edge taken from another graph.
    pub fn endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
        Some((self.node(edge.from)?, self.node(edge.to)?))
    }

    /// True when every node carries a position. Vacuously true for an empty graph.
    pub fn is_positioned(&self) -> bool {
        self.nodes.values().all(|node| node.position.is_some())
    }
}

#[derive(Deserialize)]
struct GraphRepr {
    nodes: IndexMap<String, Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl TryFrom<GraphRepr> for Graph {
    type Error = String;

    fn try_from(repr: GraphRepr) -> std::result::Result<Self, Self::Error> {
        let len = repr.nodes.len();
        if let Some(edge) = repr
            .edges
            .iter()
            .find(|e| e.from.0 >= len || e.to.0 >= len)
        {
            return Err(format!(
                "edge {} -> {} references a node outside 0..{len}",
                edge.from.0, edge.to.0
            ));
        }
        if let Some((key, node)) = repr.nodes.iter().find(|(key, node)| **key != node.key()) {
            return Err(format!(
                "node {key:?} must be keyed by {:?}",
                node.key()
            ));
        }
        Ok(Self {
            nodes: repr.nodes,
            edges: repr.edges,
        })
    }
}
