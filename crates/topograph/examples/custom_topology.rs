//! Example: Declaring a custom topology
//!
//! This example builds a small web-service topology with the semantic model
//! and exports it to DOT text, without touching the rendering engine.

use topograph::{
    DiagramBuilder, RenderFormat,
    semantic::{Diagram, NodeKind, Orientation},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Declaring topology...\n");

    let mut diagram = Diagram::new("webshop", Orientation::LeftToRight);

    // Two deployments grouped behind one boundary
    let api = diagram.add_node("api", NodeKind::Deployment)?;
    let worker = diagram.add_node("worker", NodeKind::Deployment)?;
    diagram.add_cluster("backend", &[api, worker])?;

    // External endpoints
    let web = diagram.add_node("Web", NodeKind::Internet)?;
    let jobs = diagram.add_node("Jobs", NodeKind::Queue)?;
    let db = diagram.add_node("PostgreSQL", NodeKind::Server)?;

    // Traffic: [Web] >> api, [Jobs] >> worker, and both into the database
    diagram.connect(&[web], &[api])?;
    diagram.connect(&[jobs], &[worker])?;
    diagram.connect(&[api, worker], &[db])?;

    println!("Created diagram:");
    println!("  Title: {}", diagram.title());
    println!("  Nodes: {}", diagram.node_count());
    println!("  Edges: {}", diagram.edges().len());
    println!();

    // Export to DOT text (engine-free)
    let builder = DiagramBuilder::default();
    let dot = builder.render_dot(&diagram);
    println!("{dot}");

    // Render to an image if Graphviz is installed
    match builder.render_to_file(&diagram, RenderFormat::Png, None) {
        Ok(path) => println!("Rendered to: {}", path.display()),
        Err(err) => println!("Skipping image render: {err}"),
    }

    Ok(())
}
