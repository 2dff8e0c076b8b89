mod component;
mod decompose;
mod highlight;
mod outline;
mod render;
mod simulation;
mod state;
mod transform;
mod types;

pub use outline::HierarchyExplorer;
pub use types::OntologyNode;
