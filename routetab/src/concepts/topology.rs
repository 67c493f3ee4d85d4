#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::feedback::TopologyError;

/// Zero-based node index in `[0, num_nodes)`
pub type NodeIndex = usize;
/// Position of an edge in its topology's edge list
pub type EdgeIndex = usize;

/// Largest accepted weight magnitude. Route costs stay exact integers up to about 9e15.
pub const MAX_WEIGHT: f64 = 1e12;

/// An undirected, weighted edge. Parallel edges are kept as distinct edges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub u: NodeIndex,
    pub v: NodeIndex,
    pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Topology {
    pub num_nodes: usize,
    pub edges: Vec<Edge>,
}

impl Topology {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::new(),
        }
    }

    pub fn from_edges(num_nodes: usize, edges: impl IntoIterator<Item = (NodeIndex, NodeIndex, f64)>) -> Self {
        let mut topology = Self::new(num_nodes);
        for (u, v, weight) in edges {
            topology.add_edge(u, v, weight);
        }
        topology
    }

    /// appends an edge, returning its index
    pub fn add_edge(&mut self, u: NodeIndex, v: NodeIndex, weight: f64) -> EdgeIndex {
        self.edges.push(Edge { u, v, weight });
        self.edges.len() - 1
    }

    /// Checks that every endpoint is a valid node index and every weight is a real number within
    /// [`MAX_WEIGHT`].
    pub fn validate(&self) -> Result<(), TopologyError> {
        for (edge, e) in self.edges.iter().enumerate() {
            check_edge(edge, e, self.num_nodes)?;
        }
        Ok(())
    }

    /// The first edge with a negative weight, if any
    pub fn has_negative_weight(&self) -> Option<(EdgeIndex, f64)> {
        self.edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.weight < 0.0)
            .map(|(idx, e)| (idx, e.weight))
    }

    /// Parses a plain edge list, one `u v weight` triple per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Without an explicit `num_nodes`, the
    /// topology has one more node than the largest endpoint mentioned.
    pub fn parse_edge_list(input: &str, num_nodes: Option<usize>) -> Result<Topology, TopologyError> {
        let mut topology = Topology::new(0);
        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            // generated edge lists are written as yaml sequences
            let line = line.strip_prefix("- ").unwrap_or(line);
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = |reason: String| TopologyError::Malformed { line: idx + 1, reason };

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(malformed(format!("expected `u v weight`, found {} fields", fields.len())));
            }
            let u = fields[0]
                .parse::<NodeIndex>()
                .map_err(|e| malformed(format!("bad endpoint '{}': {e}", fields[0])))?;
            let v = fields[1]
                .parse::<NodeIndex>()
                .map_err(|e| malformed(format!("bad endpoint '{}': {e}", fields[1])))?;
            let weight = fields[2]
                .parse::<f64>()
                .map_err(|e| malformed(format!("bad weight '{}': {e}", fields[2])))?;

            let needed = u
                .max(v)
                .checked_add(1)
                .ok_or_else(|| malformed(format!("endpoint {} is not a usable node index", u.max(v))))?;
            topology.num_nodes = topology.num_nodes.max(needed);
            topology.add_edge(u, v, weight);
        }
        if let Some(n) = num_nodes {
            topology.num_nodes = n;
        }
        topology.validate()?;
        Ok(topology)
    }
}

/// One traversable direction of an edge, as seen from the node that owns the list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub neighbour: NodeIndex,
    pub weight: f64,
    /// the edge this link traverses
    pub edge: EdgeIndex,
}

/// Adjacency view over a topology, shared read-only by every engine run.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    links: Vec<Vec<Link>>,
}

impl Adjacency {
    pub fn build(topology: &Topology) -> Result<Adjacency, TopologyError> {
        build_adjacency(topology.num_nodes, &topology.edges)
    }

    pub fn num_nodes(&self) -> usize {
        self.links.len()
    }

    pub fn neighbours(&self, node: NodeIndex) -> &[Link] {
        &self.links[node]
    }
}

/// Builds the undirected adjacency view: each edge `(u, v, w)` becomes a link `u -> v` and a link
/// `v -> u`, both with weight `w`.
pub fn build_adjacency(num_nodes: usize, edges: &[Edge]) -> Result<Adjacency, TopologyError> {
    let mut links = vec![Vec::new(); num_nodes];
    for (edge, e) in edges.iter().enumerate() {
        check_edge(edge, e, num_nodes)?;
        links[e.u].push(Link {
            neighbour: e.v,
            weight: e.weight,
            edge,
        });
        links[e.v].push(Link {
            neighbour: e.u,
            weight: e.weight,
            edge,
        });
    }
    Ok(Adjacency { links })
}

fn check_edge(edge: EdgeIndex, e: &Edge, num_nodes: usize) -> Result<(), TopologyError> {
    for endpoint in [e.u, e.v] {
        if endpoint >= num_nodes {
            return Err(TopologyError::EndpointOutOfRange { edge, endpoint, num_nodes });
        }
    }
    if !e.weight.is_finite() {
        return Err(TopologyError::NonFiniteWeight { edge, weight: e.weight });
    }
    if e.weight.abs() > MAX_WEIGHT {
        return Err(TopologyError::WeightOutOfRange { edge, weight: e.weight });
    }
    Ok(())
}

/// A node in a topology request. Only its position matters; any other attributes are opaque.
#[cfg(feature = "serde")]
pub type NodeDescription = serde_json::Value;

#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub weight: f64,
}

/// Topology as submitted by a client: a node list and an edge list referring to node positions.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyRequest {
    pub nodes: Vec<NodeDescription>,
    pub edges: Vec<EdgeDescription>,
}

#[cfg(feature = "serde")]
impl TopologyRequest {
    pub fn from_json(input: &str) -> Result<TopologyRequest, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Converts the request into a validated topology with one node per entry in `nodes`.
    pub fn into_topology(self) -> Result<Topology, TopologyError> {
        for (position, node) in self.nodes.iter().enumerate() {
            if let Some(id) = node.get("id").and_then(|id| id.as_u64()) {
                if id != position as u64 {
                    return Err(TopologyError::NodeIdMismatch { position, id });
                }
            }
        }
        let topology = Topology::from_edges(
            self.nodes.len(),
            self.edges.into_iter().map(|e| (e.from, e.to, e.weight)),
        );
        topology.validate()?;
        Ok(topology)
    }
}
