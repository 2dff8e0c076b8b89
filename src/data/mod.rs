pub mod datasets;
mod ontology;
pub mod stats;

pub use ontology::porcelain_ontology;
