pub mod about;
pub mod home;
pub mod not_found;
pub mod ontology;
pub mod research;
pub mod visualization;
