// Domain layer: response model and the configuration port. No dependencies beyond serde.

pub mod model;
pub mod ports;
