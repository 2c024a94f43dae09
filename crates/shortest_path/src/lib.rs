mod dijkstra;
pub mod graph;

pub use dijkstra::Dijkstra;
pub use graph::DirectedGraph;
pub use graph::Edge;

pub const INF: u64 = u64::MAX / 4;
