//! DOT rendering of the semantic topology model.
//!
//! [`DotExporter`] translates a [`Diagram`] into a `dot-structures` graph:
//! one directed graph, one `subgraph cluster_N` per declared cluster, one
//! statement per node and edge. Nodes get synthetic ids (`n0`, `n1`, ...)
//! assigned in declaration order, so identical declarations always produce
//! identical DOT text; the human-readable labels travel as `label`
//! attributes.

use std::collections::HashMap;

use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id as DotId, Node as DotNode,
    NodeId, Stmt, Subgraph, Vertex,
};
use log::debug;

use crate::{
    config::AppConfig,
    identifier::Id,
    semantic::{Diagram, Node, NodeKind},
};

/// Converts a [`Diagram`] into a Graphviz graph description.
pub struct DotExporter<'a> {
    config: &'a AppConfig,
}

impl<'a> DotExporter<'a> {
    /// Creates an exporter using the given configuration for styling.
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Builds the DOT graph for `diagram`.
    pub fn export(&self, diagram: &Diagram) -> Graph {
        debug!(
            title = diagram.title(),
            nodes = diagram.node_count();
            "Exporting diagram to DOT"
        );

        // Stable synthetic ids in declaration order.
        let dot_ids: HashMap<Id, String> = diagram
            .nodes()
            .enumerate()
            .map(|(index, node)| (node.id(), format!("n{index}")))
            .collect();

        let mut stmts = self.graph_attributes(diagram);

        for (index, cluster) in diagram.clusters().iter().enumerate() {
            let mut cluster_stmts = vec![
                attr_stmt("label", quoted(cluster.label())),
                attr_stmt("style", quoted("rounded")),
                attr_stmt("color", quoted("#aeb6be")),
            ];
            for &member in cluster.members() {
                if let Some(node) = diagram.node(member) {
                    cluster_stmts.push(Stmt::Node(self.node_stmt(node, &dot_ids)));
                }
            }
            stmts.push(Stmt::Subgraph(Subgraph {
                id: DotId::Plain(format!("cluster_{index}")),
                stmts: cluster_stmts,
            }));
        }

        for node in diagram.nodes().filter(|n| !diagram.is_clustered(n.id())) {
            stmts.push(Stmt::Node(self.node_stmt(node, &dot_ids)));
        }

        for edge in diagram.edges() {
            stmts.push(Stmt::Edge(DotEdge {
                ty: EdgeTy::Pair(
                    vertex(&dot_ids[&edge.source()]),
                    vertex(&dot_ids[&edge.target()]),
                ),
                attributes: vec![],
            }));
        }

        Graph::DiGraph {
            id: DotId::Plain("topology".to_string()),
            strict: false,
            stmts,
        }
    }

    /// Graph-level attributes: title, orientation, and the configured
    /// styling and spacing hints.
    fn graph_attributes(&self, diagram: &Diagram) -> Vec<Stmt> {
        let mut stmts = vec![
            attr_stmt("label", quoted(diagram.title())),
            attr_stmt("labelloc", DotId::Plain("t".to_string())),
            attr_stmt(
                "rankdir",
                DotId::Plain(diagram.orientation().rankdir().to_string()),
            ),
        ];

        let style = self.config.style();
        if let Some(color) = style.background_color() {
            stmts.push(attr_stmt("bgcolor", quoted(color)));
        }

        let layout = self.config.layout();
        if let Some(nodesep) = layout.nodesep() {
            stmts.push(attr_stmt("nodesep", DotId::Plain(format!("{nodesep}"))));
        }
        if let Some(ranksep) = layout.ranksep() {
            stmts.push(attr_stmt("ranksep", DotId::Plain(format!("{ranksep}"))));
        }

        // fontname on the graph does not inherit to nodes; set a node
        // default as well when one is configured.
        if let Some(font) = style.font_name() {
            stmts.push(attr_stmt("fontname", quoted(font)));
            stmts.push(Stmt::GAttribute(GraphAttributes::Node(vec![Attribute(
                DotId::Plain("fontname".to_string()),
                quoted(font),
            )])));
        }

        stmts
    }

    fn node_stmt(&self, node: &Node, dot_ids: &HashMap<Id, String>) -> DotNode {
        let mut attributes = vec![Attribute(
            DotId::Plain("label".to_string()),
            quoted(node.label()),
        )];
        attributes.extend(kind_attributes(node.kind()));

        DotNode {
            id: NodeId(DotId::Plain(dot_ids[&node.id()].clone()), None),
            attributes,
        }
    }
}

/// Shape and fill standing in for per-kind provider icons.
fn kind_attributes(kind: NodeKind) -> Vec<Attribute> {
    let (shape, style, fill) = match kind {
        NodeKind::Deployment => ("box", "rounded,filled", "#e3f2fd"),
        NodeKind::Server => ("box3d", "filled", "#eceff1"),
        NodeKind::Internet => ("ellipse", "filled", "#e8f5e9"),
        NodeKind::Queue => ("cylinder", "filled", "#fff3e0"),
    };
    vec![
        Attribute(DotId::Plain("shape".to_string()), quoted(shape)),
        Attribute(DotId::Plain("style".to_string()), quoted(style)),
        Attribute(DotId::Plain("fillcolor".to_string()), quoted(fill)),
    ]
}

fn attr_stmt(key: &str, value: DotId) -> Stmt {
    Stmt::Attribute(Attribute(DotId::Plain(key.to_string()), value))
}

fn vertex(dot_id: &str) -> Vertex {
    Vertex::N(NodeId(DotId::Plain(dot_id.to_string()), None))
}

/// Quotes and escapes a string for use as a DOT attribute value.
fn quoted(value: &str) -> DotId {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped.push('"');
    DotId::Escaped(escaped)
}
