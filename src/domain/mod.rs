// Domain layer: plain models, built-in catalogues and ports (interfaces).
// No external dependencies beyond std/serde/chrono.

pub mod catalog;
pub mod model;
pub mod ports;
