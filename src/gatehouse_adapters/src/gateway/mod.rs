pub mod placeholder_gateway;

pub use placeholder_gateway::PlaceholderGateway;
