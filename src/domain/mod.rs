// Domain layer: entities, commands and the ports the rest of the crate plugs into.

pub mod commands;
pub mod model;
pub mod ports;
