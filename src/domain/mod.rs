// Domain layer: record model, sort-key rules, ports
pub mod model;
pub mod traits;
