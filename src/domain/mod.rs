// Domain layer: request/response models and the scorer port. No HTTP or runtime types here.

pub mod model;
pub mod ports;
