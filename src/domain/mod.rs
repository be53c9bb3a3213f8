// Domain layer: models, fixed schemas and ports (interfaces).

pub mod model;
pub mod ports;
pub mod schema;
