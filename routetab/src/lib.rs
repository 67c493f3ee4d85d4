pub mod builder;
pub mod concepts;
pub mod engine;
pub mod feedback;
pub mod framework;
pub mod resolver;
pub mod util;

pub use builder::{compute, compute_with};
pub use concepts::topology::Topology;
pub use framework::{ComputeParams, Protocol, Strategy};
