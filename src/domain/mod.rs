// Domain layer: contest result models and the store/config ports.

pub mod model;
pub mod ports;
