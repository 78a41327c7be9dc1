pub mod constraint;
pub mod edges;
pub mod frontier;
pub mod undirected;
pub mod vertices;
