// Domain layer: rover models and the ports the outer binary plugs into.

pub mod model;
pub mod ports;
