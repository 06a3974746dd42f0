// Domain layer: value types and the ports the adapters implement.

pub mod model;
pub mod ports;
