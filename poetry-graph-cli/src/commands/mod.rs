pub mod fmt;
pub mod graph;
pub mod triples;
