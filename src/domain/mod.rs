// Domain layer: records, edit results and the ports the editor talks through.

pub mod model;
pub mod ports;
