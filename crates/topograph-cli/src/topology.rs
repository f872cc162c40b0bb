//! The built-in mailer topology.
//!
//! The tool exists to draw one fixed diagram: an HTTP/AMQP-fronted mailer
//! deployment that talks to an MJML rendering service and an SMTP server.
//! The whole topology is literal and hand-authored; nothing here is
//! computed from runtime state.

use topograph::{
    TopographError,
    semantic::{Diagram, NodeKind, Orientation},
};

/// Declares the mailer service topology.
///
/// One cluster (`github.com/ViBiOh`) holds the `mailer` and `mjml-api`
/// deployments. Outside it sit the two traffic sources (`HTTP`, `AMQP`) and
/// the `SMTP` sink. Traffic flows `[HTTP, AMQP] >> mailer >> [mjml-api,
/// SMTP]`.
pub fn mailer(title: &str, orientation: Orientation) -> Result<Diagram, TopographError> {
    let mut diagram = Diagram::new(title, orientation);

    let mailer = diagram.add_node("mailer", NodeKind::Deployment)?;
    let mjml = diagram.add_node("mjml-api", NodeKind::Deployment)?;
    diagram.add_cluster("github.com/ViBiOh", &[mailer, mjml])?;

    let http = diagram.add_node("HTTP", NodeKind::Internet)?;
    let amqp = diagram.add_node("AMQP", NodeKind::Queue)?;
    let smtp = diagram.add_node("SMTP", NodeKind::Server)?;

    diagram.connect(&[http, amqp], &[mailer])?;
    diagram.connect(&[mailer], &[mjml, smtp])?;

    Ok(diagram)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_matches_the_fixed_shape() {
        let diagram = mailer("mailer", Orientation::TopToBottom).expect("build topology");

        // One cluster, two nodes inside it, three outside.
        assert_eq!(diagram.clusters().len(), 1);
        let cluster = &diagram.clusters()[0];
        assert_eq!(cluster.label(), "github.com/ViBiOh");
        assert_eq!(cluster.members().len(), 2);
        assert_eq!(diagram.node_count(), 5);
        let outside = diagram
            .nodes()
            .filter(|n| !diagram.is_clustered(n.id()))
            .count();
        assert_eq!(outside, 3);

        // Two sources into mailer, mailer out to two sinks.
        assert_eq!(diagram.edges().len(), 4);
        let into_mailer = diagram
            .edges()
            .iter()
            .filter(|e| e.target() == "mailer")
            .count();
        let out_of_mailer = diagram
            .edges()
            .iter()
            .filter(|e| e.source() == "mailer")
            .count();
        assert_eq!(into_mailer, 2);
        assert_eq!(out_of_mailer, 2);
    }

    #[test]
    fn every_edge_endpoint_is_a_declared_node() {
        let diagram = mailer("mailer", Orientation::TopToBottom).expect("build topology");
        for edge in diagram.edges() {
            assert!(diagram.node(edge.source()).is_some());
            assert!(diagram.node(edge.target()).is_some());
        }
    }

    #[test]
    fn rebuilding_yields_an_identical_structure() {
        let first = mailer("mailer", Orientation::TopToBottom).expect("build topology");
        let second = mailer("mailer", Orientation::TopToBottom).expect("build topology");

        let labels = |d: &Diagram| d.nodes().map(|n| n.label().to_string()).collect::<Vec<_>>();
        assert_eq!(labels(&first), labels(&second));
        assert_eq!(first.edges(), second.edges());
    }
}
