// Domain layer: roster models and the store port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
