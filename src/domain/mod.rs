// Domain layer: receipt models and ports (interfaces). No framework dependencies beyond serde.

pub mod model;
pub mod ports;
