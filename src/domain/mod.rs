// Domain layer: data model and ports (interfaces to the remote generator and resume host).

pub mod model;
pub mod ports;
