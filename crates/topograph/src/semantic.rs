//! Semantic topology model.
//!
//! This module holds the fully resolved diagram structure before it is
//! exported to DOT and handed to the rendering engine:
//!
//! ```text
//! Declarations (add_node / add_cluster / connect)
//!     ↓ validated here
//! Diagram (these types)
//!     ↓ export
//! DOT graph
//!     ↓ engine
//! Image file
//! ```
//!
//! All invariants are checked at construction time: edge endpoints and
//! cluster members must name nodes that exist in the same diagram, node
//! labels are unique, and a node belongs to at most one cluster. A `Diagram`
//! that exists is well-formed.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{TopographError, identifier::Id};

/// Kind of infrastructure element a node represents.
///
/// Controls how the node is styled in the rendered diagram; the model itself
/// attaches no behavior to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A compute deployment (e.g. a Kubernetes workload).
    Deployment,
    /// A generic server.
    Server,
    /// An internet-facing endpoint.
    Internet,
    /// A message queue.
    Queue,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Deployment => "deployment",
            NodeKind::Server => "server",
            NodeKind::Internet => "internet",
            NodeKind::Queue => "queue",
        };
        write!(f, "{name}")
    }
}

/// A single labeled, typed element of the topology.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    kind: NodeKind,
}

impl Node {
    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the node kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.kind)
    }
}

/// A named grouping of nodes, rendered as a visual boundary.
#[derive(Debug, Clone)]
pub struct Cluster {
    label: String,
    members: Vec<Id>,
}

impl Cluster {
    /// Get the cluster label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Member node ids in declaration order.
    pub fn members(&self) -> &[Id] {
        &self.members
    }

    /// Whether `id` is a member of this cluster.
    pub fn contains(&self, id: Id) -> bool {
        self.members.contains(&id)
    }
}

/// A directed "sends to" relation between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: Id,
    target: Id,
}

impl Edge {
    /// Get the source node id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node id.
    pub fn target(&self) -> Id {
        self.target
    }
}

/// Direction of rank progression in the rendered diagram.
///
/// Maps onto Graphviz `rankdir`. Accepted from configuration files in
/// kebab-case (`top-to-bottom`) and from the command line in either that
/// form or the short Graphviz form (`tb`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    TopToBottom,
    LeftToRight,
    BottomToTop,
    RightToLeft,
}

impl Orientation {
    /// The Graphviz `rankdir` value for this orientation.
    pub fn rankdir(&self) -> &'static str {
        match self {
            Orientation::TopToBottom => "TB",
            Orientation::LeftToRight => "LR",
            Orientation::BottomToTop => "BT",
            Orientation::RightToLeft => "RL",
        }
    }
}

impl FromStr for Orientation {
    type Err = TopographError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tb" | "top-to-bottom" => Ok(Orientation::TopToBottom),
            "lr" | "left-to-right" => Ok(Orientation::LeftToRight),
            "bt" | "bottom-to-top" => Ok(Orientation::BottomToTop),
            "rl" | "right-to-left" => Ok(Orientation::RightToLeft),
            other => Err(TopographError::Config(format!(
                "unknown orientation '{other}' (expected tb, lr, bt or rl)"
            ))),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rankdir())
    }
}

/// The root container: title, orientation, and the declared topology.
///
/// Owns every [`Node`], [`Cluster`] and [`Edge`] for its lifetime. Nodes are
/// kept in insertion order so repeated exports of the same declarations are
/// byte-identical.
///
/// # Examples
///
/// ```
/// use topograph::semantic::{Diagram, NodeKind, Orientation};
///
/// let mut diagram = Diagram::new("mailer", Orientation::TopToBottom);
/// let web = diagram.add_node("web", NodeKind::Internet)?;
/// let api = diagram.add_node("api", NodeKind::Deployment)?;
/// diagram.connect(&[web], &[api])?;
/// # Ok::<(), topograph::TopographError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    orientation: Orientation,
    nodes: IndexMap<Id, Node>,
    clusters: Vec<Cluster>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram with the given title and orientation.
    pub fn new(title: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            title: title.into(),
            orientation,
            nodes: IndexMap::new(),
            clusters: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Get the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the diagram orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Declares a node and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`TopographError::Graph`] if a node with the same label was
    /// already declared.
    pub fn add_node(
        &mut self,
        label: impl Into<String>,
        kind: NodeKind,
    ) -> Result<Id, TopographError> {
        let label = label.into();
        let id = Id::new(&label);
        if self.nodes.contains_key(&id) {
            return Err(TopographError::Graph(format!(
                "duplicate node label '{label}'"
            )));
        }
        self.nodes.insert(id, Node { id, label, kind });
        Ok(id)
    }

    /// Declares a cluster grouping the given member nodes.
    ///
    /// # Errors
    ///
    /// Returns [`TopographError::Graph`] if a member does not exist in this
    /// diagram or already belongs to another cluster.
    pub fn add_cluster(
        &mut self,
        label: impl Into<String>,
        members: &[Id],
    ) -> Result<(), TopographError> {
        for &member in members {
            self.check_known(member)?;
            if let Some(owner) = self.clusters.iter().find(|c| c.contains(member)) {
                return Err(TopographError::Graph(format!(
                    "node '{member}' already belongs to cluster '{}'",
                    owner.label()
                )));
            }
        }
        self.clusters.push(Cluster {
            label: label.into(),
            members: members.to_vec(),
        });
        Ok(())
    }

    /// Declares directed edges from every source to every target.
    ///
    /// A group connection like `[http, amqp] >> mailer` in the topology
    /// source is one call with two sources and one target; the cross product
    /// is materialized as individual edges in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`TopographError::Graph`] if any endpoint does not name a
    /// node declared in this diagram.
    pub fn connect(&mut self, sources: &[Id], targets: &[Id]) -> Result<(), TopographError> {
        for &source in sources {
            self.check_known(source)?;
        }
        for &target in targets {
            self.check_known(target)?;
        }
        for &source in sources {
            for &target in targets {
                self.edges.push(Edge { source, target });
            }
        }
        Ok(())
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a node by id.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Declared clusters.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Declared edges, cross products expanded.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether `id` belongs to any cluster.
    pub fn is_clustered(&self, id: Id) -> bool {
        self.clusters.iter().any(|c| c.contains(id))
    }

    fn check_known(&self, id: Id) -> Result<(), TopographError> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(TopographError::Graph(format!(
                "unknown node '{id}' referenced in diagram '{}'",
                self.title
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagram {
        let mut diagram = Diagram::new("sample", Orientation::TopToBottom);
        let http = diagram.add_node("HTTP", NodeKind::Internet).unwrap();
        let amqp = diagram.add_node("AMQP", NodeKind::Queue).unwrap();
        let app = diagram.add_node("app", NodeKind::Deployment).unwrap();
        let smtp = diagram.add_node("SMTP", NodeKind::Server).unwrap();
        diagram.add_cluster("backend", &[app]).unwrap();
        diagram.connect(&[http, amqp], &[app]).unwrap();
        diagram.connect(&[app], &[smtp]).unwrap();
        diagram
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let mut diagram = Diagram::new("d", Orientation::TopToBottom);
        diagram.add_node("app", NodeKind::Deployment).unwrap();
        let err = diagram.add_node("app", NodeKind::Server).unwrap_err();
        assert!(matches!(err, TopographError::Graph(_)));
    }

    #[test]
    fn edges_must_reference_declared_nodes() {
        let mut diagram = Diagram::new("d", Orientation::TopToBottom);
        let app = diagram.add_node("app", NodeKind::Deployment).unwrap();
        let ghost = Id::new("ghost");
        assert!(diagram.connect(&[ghost], &[app]).is_err());
        assert!(diagram.connect(&[app], &[ghost]).is_err());
        // Failed connects must not leave partial edges behind.
        assert!(diagram.edges().is_empty());
    }

    #[test]
    fn cluster_members_must_exist_and_be_unclaimed() {
        let mut diagram = Diagram::new("d", Orientation::TopToBottom);
        let app = diagram.add_node("app", NodeKind::Deployment).unwrap();
        assert!(diagram.add_cluster("c1", &[Id::new("ghost")]).is_err());
        diagram.add_cluster("c1", &[app]).unwrap();
        assert!(diagram.add_cluster("c2", &[app]).is_err());
    }

    #[test]
    fn connect_expands_cross_product_in_order() {
        let diagram = sample();
        let edges: Vec<(String, String)> = diagram
            .edges()
            .iter()
            .map(|e| (e.source().to_string(), e.target().to_string()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("HTTP".into(), "app".into()),
                ("AMQP".into(), "app".into()),
                ("app".into(), "SMTP".into()),
            ]
        );
    }

    #[test]
    fn cluster_membership_is_tracked() {
        let diagram = sample();
        assert!(diagram.is_clustered(Id::new("app")));
        assert!(!diagram.is_clustered(Id::new("SMTP")));
    }

    #[test]
    fn orientation_parses_short_and_long_forms() {
        assert_eq!(
            "tb".parse::<Orientation>().unwrap(),
            Orientation::TopToBottom
        );
        assert_eq!(
            "left-to-right".parse::<Orientation>().unwrap(),
            Orientation::LeftToRight
        );
        assert!("diagonal".parse::<Orientation>().is_err());
    }
}
