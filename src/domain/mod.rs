// Domain layer: address model and ports (provider / config interfaces).

pub mod model;
pub mod ports;
